use crate::error::CResult;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    #[serde(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    #[serde(flatten)]
    pub round: RoundWeights,
}

/// Tunables for the per-stroke circularity scorer.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // Strokes shorter than this are worthless (score 0), not invalid.
    #[arg(long, default_value_t = 10)]
    pub min_points: usize,

    // consistency = 100 - slope * std_dev(radii)
    #[arg(long, default_value_t = 2.0)]
    pub deviation_slope: f32,

    // closing_penalty = min(cap, closing_distance / divisor)
    #[arg(long, default_value_t = 20.0)]
    pub closing_cap: f32,
    #[arg(long, default_value_t = 2.0)]
    pub closing_divisor: f32,
}

/// Tunables for combining a round of attempt scores into one final score.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundWeights {
    #[arg(long, default_value_t = 0.4)]
    pub weight_highest: f32,
    #[arg(long, default_value_t = 0.3)]
    pub weight_average: f32,
    #[arg(long, default_value_t = 0.2)]
    pub weight_consistency: f32,

    // Same shape as the stroke scorer: 100 - slope * std_dev(scores)
    #[arg(long, default_value_t = 2.0)]
    pub consistency_slope: f32,

    // Reward for peaking in fewer tries within the fixed-size round.
    #[arg(long, default_value_t = 20.0)]
    pub bonus_single: f32,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_double: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            min_points: 10,
            deviation_slope: 2.0,
            closing_cap: 20.0,
            closing_divisor: 2.0,
        }
    }
}

impl Default for RoundWeights {
    fn default() -> Self {
        Self {
            weight_highest: 0.4,
            weight_average: 0.3,
            weight_consistency: 0.2,
            consistency_slope: 2.0,
            bonus_single: 20.0,
            bonus_double: 10.0,
        }
    }
}

impl Config {
    /// Loads a JSON weight profile. Missing fields fall back to the
    /// embedded defaults, so a profile only has to name what it changes.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
