use circlet::config::RoundWeights;
use circlet::error::CircletError;
use circlet::round::{finalize, AttemptScore};

fn attempts(scores: &[u8]) -> Vec<AttemptScore> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &s)| AttemptScore::new(i as u32 + 1, s))
        .collect()
}

// --- REFERENCE SCENARIOS ---

#[test]
fn test_single_attempt_reference() {
    // round(80*0.4 + 80*0.3 + 100*0.2 + 20) = 96
    let result = finalize(&attempts(&[80]), &RoundWeights::default()).unwrap();

    assert_eq!(result.final_score, 96);
    assert_eq!(result.breakdown.highest, 80);
    assert_eq!(result.breakdown.average, 80);
    assert_eq!(result.breakdown.consistency, 100);
    assert_eq!(result.breakdown.bonus, 20);
    assert_eq!(result.breakdown.attempts, 1);
}

#[test]
fn test_full_round_reference() {
    // Same stats as the single attempt but the bonus drops to 0
    let result = finalize(&attempts(&[80, 80, 80]), &RoundWeights::default()).unwrap();

    assert_eq!(result.final_score, 76);
    assert_eq!(result.breakdown.bonus, 0);
    assert_eq!(result.breakdown.attempts, 3);
}

#[test]
fn test_two_attempt_bonus() {
    // highest 90, average 75, std_dev 15 -> consistency 70, bonus 10
    // 36 + 22.5 + 14 + 10 = 82.5 -> 83
    let result = finalize(&attempts(&[60, 90]), &RoundWeights::default()).unwrap();

    assert_eq!(result.final_score, 83);
    assert_eq!(result.breakdown.highest, 90);
    assert_eq!(result.breakdown.average, 75);
    assert_eq!(result.breakdown.consistency, 70);
    assert_eq!(result.breakdown.bonus, 10);
}

#[test]
fn test_final_score_capped_at_100() {
    // 40 + 30 + 20 + 20 = 110, clamped
    let result = finalize(&attempts(&[100]), &RoundWeights::default()).unwrap();
    assert_eq!(result.final_score, 100);
}

#[test]
fn test_more_than_three_attempts_accepted() {
    // The reference round size is 3 but any count >= 1 aggregates
    let result = finalize(&attempts(&[50, 60, 70, 80, 90]), &RoundWeights::default()).unwrap();
    assert_eq!(result.breakdown.attempts, 5);
    assert_eq!(result.breakdown.bonus, 0);
    assert!(result.final_score <= 100);
}

// --- EDGE CASES ---

#[test]
fn test_empty_round_is_rejected() {
    let err = finalize(&[], &RoundWeights::default()).unwrap_err();
    assert!(matches!(err, CircletError::EmptyRound));
}

#[test]
fn test_breakdown_rounds_terms_independently() {
    // average 81.5 displays as 82 while the final score is computed
    // from the unrounded 81.5; the two need not recombine exactly.
    let result = finalize(&attempts(&[81, 82]), &RoundWeights::default()).unwrap();
    assert_eq!(result.breakdown.average, 82);
    assert_eq!(result.final_score, 87);
}

#[test]
fn test_all_zero_round() {
    let result = finalize(&attempts(&[0, 0, 0]), &RoundWeights::default()).unwrap();
    // consistency of identical zeros is 100, so the floor is 20
    assert_eq!(result.final_score, 20);
    assert_eq!(result.breakdown.consistency, 100);
}

#[test]
fn test_finalize_is_deterministic() {
    let list = attempts(&[33, 87, 64]);
    let a = finalize(&list, &RoundWeights::default()).unwrap();
    let b = finalize(&list, &RoundWeights::default()).unwrap();
    assert_eq!(a.final_score, b.final_score);
    assert_eq!(a.breakdown, b.breakdown);
}

#[test]
fn test_custom_bonus_weights() {
    let weights = RoundWeights {
        bonus_single: 0.0,
        ..Default::default()
    };
    let result = finalize(&attempts(&[80]), &weights).unwrap();
    // 32 + 24 + 20 + 0 = 76
    assert_eq!(result.final_score, 76);
    assert_eq!(result.breakdown.bonus, 0);
}
