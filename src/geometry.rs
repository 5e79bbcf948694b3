use serde::{Deserialize, Serialize};

/// One capture sample in the caller's local coordinate frame.
/// Units are whatever the capture surface produced; the core never
/// normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn dist(&self, other: &Point) -> f32 {
        euclidean_dist(self.x, self.y, other.x, other.y)
    }
}

#[inline(always)]
pub fn euclidean_dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

/// A finished drawing gesture: the ordered point sequence from one
/// continuous stroke, handed over by the capture collaborator as an
/// immutable value. Insertion order is chronological. Coincident
/// consecutive points are legal and are never filtered here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Arithmetic mean of the sample coordinates. None for an empty stroke.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f32;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }

    /// Straight-line distance between the first and last captured point.
    /// Zero for strokes with fewer than two points.
    pub fn closing_distance(&self) -> f32 {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a.dist(b),
            _ => 0.0,
        }
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(f32, f32)>> for Stroke {
    fn from(raw: Vec<(f32, f32)>) -> Self {
        raw.into_iter().map(|(x, y)| Point::new(x, y)).collect()
    }
}
