use crate::config::RoundWeights;
use crate::error::{CResult, CircletError};
use crate::scorer::engine;
use serde::{Deserialize, Serialize};

/// One scored stroke within a round. `attempt` is 1-based and the
/// caller-owned list is ordered by ascending attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptScore {
    pub attempt: u32,
    pub score: u8,
}

impl AttemptScore {
    pub fn new(attempt: u32, score: u8) -> Self {
        Self { attempt, score }
    }
}

/// Diagnostic decomposition of a final score. Each term is rounded
/// independently for display; recombining them with the configured
/// weights will not always reproduce `final_score`, which is computed
/// from the unrounded terms. That drift is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub highest: u8,
    pub average: u8,
    pub consistency: u8,
    pub bonus: u8,
    pub attempts: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoundResult {
    pub final_score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Combines one completed round of attempt scores into the final score.
///
/// A round always records at least one attempt before finalizing;
/// an empty list is a caller bug and is rejected explicitly.
pub fn finalize(attempts: &[AttemptScore], weights: &RoundWeights) -> CResult<RoundResult> {
    if attempts.is_empty() {
        return Err(CircletError::EmptyRound);
    }

    let scores: Vec<f32> = attempts.iter().map(|a| f32::from(a.score)).collect();

    let highest = attempts.iter().map(|a| a.score).max().unwrap_or(0);
    let average = engine::mean(&scores);
    let consistency = engine::consistency(&scores, weights.consistency_slope);

    let bonus = match attempts.len() {
        1 => weights.bonus_single,
        2 => weights.bonus_double,
        _ => 0.0,
    };

    let weighted = f32::from(highest) * weights.weight_highest
        + average * weights.weight_average
        + consistency * weights.weight_consistency
        + bonus;
    let final_score = weighted.min(100.0).max(0.0).round() as u8;

    Ok(RoundResult {
        final_score,
        breakdown: ScoreBreakdown {
            highest,
            average: average.round() as u8,
            consistency: consistency.round() as u8,
            bonus: bonus.round() as u8,
            attempts: attempts.len(),
        },
    })
}
