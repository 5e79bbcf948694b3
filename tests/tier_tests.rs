use circlet::tiers::Tier;
use rstest::rstest;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[rstest]
#[case(100, Tier::Perfect)]
#[case(95, Tier::Perfect)] // lower bound inclusive
#[case(94, Tier::Excellent)]
#[case(90, Tier::Excellent)]
#[case(89, Tier::Great)]
#[case(75, Tier::Great)]
#[case(74, Tier::Good)]
#[case(50, Tier::Good)]
#[case(49, Tier::Practice)]
#[case(0, Tier::Practice)]
fn test_tier_boundaries(#[case] score: u8, #[case] expected: Tier) {
    assert_eq!(
        Tier::for_score(score),
        expected,
        "score {} mapped to the wrong tier",
        score
    );
}

#[test]
fn test_every_score_has_a_tier() {
    for score in 0..=100u8 {
        let tier = Tier::for_score(score);
        assert!(score >= tier.floor());
    }
}

#[test]
fn test_tier_names_round_trip() {
    // Display and FromStr agree on the snake_case names, so tier
    // labels in reports and profiles parse back to the same tier.
    for tier in Tier::iter() {
        let parsed = Tier::from_str(&tier.to_string()).unwrap();
        assert_eq!(parsed, tier);
    }
    assert!(Tier::from_str("legendary").is_err());
}

#[test]
fn test_messages_are_distinct() {
    let messages: Vec<&str> = Tier::iter().map(|t| t.message()).collect();
    let mut deduped = messages.clone();
    deduped.dedup();
    assert_eq!(messages.len(), deduped.len());
}
