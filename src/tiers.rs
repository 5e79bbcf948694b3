use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Canonical score tiers. Every surface that labels a score goes
/// through this table; the thresholds and messages live nowhere else.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
    Perfect,
    Excellent,
    Great,
    Good,
    Practice,
}

impl Tier {
    /// Lower score bound of the tier (upper bounds are exclusive,
    /// except Perfect which includes 100).
    pub fn floor(&self) -> u8 {
        match self {
            Self::Perfect => 95,
            Self::Excellent => 90,
            Self::Great => 75,
            Self::Good => 50,
            Self::Practice => 0,
        }
    }

    pub fn for_score(score: u8) -> Tier {
        // Tiers are ordered best-first, so the first floor we clear wins.
        Tier::iter()
            .find(|t| score >= t.floor())
            .unwrap_or(Tier::Practice)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "PERFECT!",
            Self::Excellent => "EXCELLENT!",
            Self::Great => "GREAT!",
            Self::Good => "GOOD!",
            Self::Practice => "KEEP TRYING!",
        }
    }
}
