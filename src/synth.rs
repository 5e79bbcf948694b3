//! Synthetic stroke generators for calibration, benches and tests.
//! Deterministic for a given seed.

use crate::geometry::{Point, Stroke};
use std::f32::consts::TAU;

/// An exact closed circle: `samples` points evenly spaced, then the
/// first point repeated so the stroke closes back on its start.
pub fn circle(center: Point, radius: f32, samples: usize) -> Stroke {
    let mut points = Vec::with_capacity(samples + 1);
    for i in 0..samples {
        let theta = TAU * i as f32 / samples as f32;
        points.push(Point::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
        ));
    }
    if let Some(&first) = points.first() {
        points.push(first);
    }
    Stroke::new(points)
}

/// A closed circle with per-point radial noise in `[-jitter, +jitter]`,
/// the shape a human hand actually produces.
pub fn jittered_circle(
    rng: &mut fastrand::Rng,
    center: Point,
    radius: f32,
    samples: usize,
    jitter: f32,
) -> Stroke {
    let mut points = Vec::with_capacity(samples + 1);
    for i in 0..samples {
        let theta = TAU * i as f32 / samples as f32;
        let r = radius + (rng.f32() * 2.0 - 1.0) * jitter;
        points.push(Point::new(
            center.x + r * theta.cos(),
            center.y + r * theta.sin(),
        ));
    }
    if let Some(&first) = points.first() {
        points.push(first);
    }
    Stroke::new(points)
}

/// A circular arc that stops `gap_degrees` short of closing, for
/// exercising the closing penalty in isolation.
pub fn open_arc(center: Point, radius: f32, samples: usize, gap_degrees: f32) -> Stroke {
    let sweep = TAU * (1.0 - gap_degrees / 360.0);
    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let theta = sweep * i as f32 / (samples.saturating_sub(1).max(1)) as f32;
        points.push(Point::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
        ));
    }
    Stroke::new(points)
}
