use serde::Serialize;

/// Full decomposition of one scored stroke.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct StrokeDetails {
    pub point_count: usize,

    // Centroid of the captured samples
    pub centroid_x: f32,
    pub centroid_y: f32,

    // Radius statistics (raw caller units)
    pub mean_radius: f32,
    pub radius_std_dev: f32,

    // Scoring terms
    pub consistency: f32,
    pub closing_distance: f32,
    pub closing_penalty: f32,

    pub score: u8,
}
