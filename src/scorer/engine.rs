use crate::config::ScoringWeights;
use crate::geometry::Stroke;
use crate::scorer::types::StrokeDetails;

pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Population standard deviation (divide by n, not n-1).
pub fn std_dev(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / values.len() as f32;
    variance.sqrt()
}

/// `100 - slope * std_dev`, floored at 0. A perfectly uniform sample
/// set yields 100; spread lowers the score linearly.
pub fn consistency(values: &[f32], slope: f32) -> f32 {
    (100.0 - slope * std_dev(values)).max(0.0)
}

/// Scores one stroke against a perfect circle. Total over all strokes:
/// anything shorter than `min_points` is a degenerate attempt worth 0,
/// never an error.
pub fn score_debug(weights: &ScoringWeights, stroke: &Stroke) -> StrokeDetails {
    let mut details = StrokeDetails {
        point_count: stroke.len(),
        ..Default::default()
    };

    if stroke.len() < weights.min_points {
        return details;
    }

    // Centroid exists: min_points guarantees a non-empty stroke.
    let centroid = match stroke.centroid() {
        Some(c) => c,
        None => return details,
    };
    details.centroid_x = centroid.x;
    details.centroid_y = centroid.y;

    let radii: Vec<f32> = stroke.points().iter().map(|p| p.dist(&centroid)).collect();
    details.mean_radius = mean(&radii);
    details.radius_std_dev = std_dev(&radii);
    details.consistency = consistency(&radii, weights.deviation_slope);

    // A loop whose end returns near its start loses little; the cap keeps
    // a wide-open stroke from being crushed on the consistency it earned.
    details.closing_distance = stroke.closing_distance();
    details.closing_penalty = weights
        .closing_cap
        .min(details.closing_distance / weights.closing_divisor);

    details.score = (details.consistency - details.closing_penalty)
        .max(0.0)
        .round() as u8;
    details
}
