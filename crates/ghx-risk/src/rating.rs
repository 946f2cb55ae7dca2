//! Categorical risk ratings.

use crate::error::RiskError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Five-point probability/impact rating, ordered lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskRating {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskRating {
    /// All ratings, lowest first.
    pub const ALL: [RiskRating; 5] = [
        RiskRating::VeryLow,
        RiskRating::Low,
        RiskRating::Medium,
        RiskRating::High,
        RiskRating::VeryHigh,
    ];

    /// Integer weight used by the scoring product, 1 through 5.
    pub fn weight(&self) -> u8 {
        match self {
            RiskRating::VeryLow => 1,
            RiskRating::Low => 2,
            RiskRating::Medium => 3,
            RiskRating::High => 4,
            RiskRating::VeryHigh => 5,
        }
    }

    /// Wire token for this rating.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskRating::VeryLow => "very_low",
            RiskRating::Low => "low",
            RiskRating::Medium => "medium",
            RiskRating::High => "high",
            RiskRating::VeryHigh => "very_high",
        }
    }
}

impl FromStr for RiskRating {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very_low" => Ok(RiskRating::VeryLow),
            "low" => Ok(RiskRating::Low),
            "medium" => Ok(RiskRating::Medium),
            "high" => Ok(RiskRating::High),
            "very_high" => Ok(RiskRating::VeryHigh),
            other => Err(RiskError::InvalidRating(other.to_string())),
        }
    }
}

impl std::fmt::Display for RiskRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business category a risk is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Technical,
    Financial,
    Operational,
    Legal,
    Environmental,
    Safety,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Technical => "technical",
            RiskCategory::Financial => "financial",
            RiskCategory::Operational => "operational",
            RiskCategory::Legal => "legal",
            RiskCategory::Environmental => "environmental",
            RiskCategory::Safety => "safety",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
