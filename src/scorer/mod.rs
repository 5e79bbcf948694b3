pub mod engine;
pub mod loader;
pub mod types;

pub use self::types::StrokeDetails;
use crate::config::ScoringWeights;
use crate::geometry::Stroke;

/// Stateless circularity scorer. Holds only its tunables; every call
/// consumes a finished, immutable stroke and leaves nothing behind.
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Fast path: stroke in, integer score in [0,100] out.
    pub fn score(&self, stroke: &Stroke) -> u8 {
        engine::score_debug(&self.weights, stroke).score
    }

    /// Rich path: same score plus every intermediate term, for the
    /// validation report.
    pub fn score_debug(&self, stroke: &Stroke) -> StrokeDetails {
        engine::score_debug(&self.weights, stroke)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}
