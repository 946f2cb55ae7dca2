//! Risk score computation and banding.

use crate::rating::RiskRating;
use serde::{Deserialize, Serialize};

/// Lowest possible score (very_low x very_low).
pub const MIN_SCORE: u8 = 1;
/// Highest possible score (very_high x very_high).
pub const MAX_SCORE: u8 = 25;

/// Band thresholds: a score at or below the constant falls in the band.
/// Anything above [`HIGH_MAX`] is critical. The source application never
/// standardized a banding table, so these are fixed here and exported for
/// UI color-coding to reference.
pub const LOW_MAX: u8 = 4;
pub const MEDIUM_MAX: u8 = 9;
pub const HIGH_MAX: u8 = 16;

/// Compute the priority score for a probability/impact pair.
///
/// The score is the exact product of the two rating weights: no
/// rounding, no normalization. Always in `[1, 25]`, commutative, and
/// free of hidden state.
pub fn score(probability: RiskRating, impact: RiskRating) -> u8 {
    probability.weight() * impact.weight()
}

/// Qualitative band for a score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
            RiskBand::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a score into its qualitative band.
pub fn classify(score: u8) -> RiskBand {
    match score {
        0..=LOW_MAX => RiskBand::Low,
        ..=MEDIUM_MAX => RiskBand::Medium,
        ..=HIGH_MAX => RiskBand::High,
        _ => RiskBand::Critical,
    }
}
