//! Risk status lifecycle.
//!
//! The lifecycle is strictly forward: identified → assessed → mitigated →
//! closed. Skipping a stage is allowed; moving backward never is.

use chrono::{DateTime, Utc};
use ghx_types::ActorId;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a risk, ordered by progression.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Identified,
    Assessed,
    Mitigated,
    Closed,
}

impl RiskStatus {
    /// All stages in lifecycle order.
    pub const ALL: [RiskStatus; 4] = [
        RiskStatus::Identified,
        RiskStatus::Assessed,
        RiskStatus::Mitigated,
        RiskStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Identified => "identified",
            RiskStatus::Assessed => "assessed",
            RiskStatus::Mitigated => "mitigated",
            RiskStatus::Closed => "closed",
        }
    }

    /// Whether the lifecycle permits moving from `self` to `to`.
    pub fn can_transition_to(&self, to: RiskStatus) -> bool {
        to > *self
    }

    /// Whether this is the terminal stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RiskStatus::Closed)
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusTransition {
    /// Stage transitioned from.
    pub from: RiskStatus,
    /// Stage transitioned to.
    pub to: RiskStatus,
    /// When the transition occurred.
    pub at: DateTime<Utc>,
    /// Who triggered the transition.
    pub by: Option<ActorId>,
    /// Optional reason for the transition.
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_moves_allowed() {
        assert!(RiskStatus::Identified.can_transition_to(RiskStatus::Assessed));
        assert!(RiskStatus::Assessed.can_transition_to(RiskStatus::Mitigated));
        assert!(RiskStatus::Mitigated.can_transition_to(RiskStatus::Closed));
        // Skipping stages is forward too
        assert!(RiskStatus::Identified.can_transition_to(RiskStatus::Closed));
    }

    #[test]
    fn backward_and_self_moves_rejected() {
        for (i, from) in RiskStatus::ALL.iter().enumerate() {
            for to in &RiskStatus::ALL[..=i] {
                assert!(!from.can_transition_to(*to), "{from} -> {to} must be rejected");
            }
        }
    }

    #[test]
    fn closed_is_terminal() {
        assert!(RiskStatus::Closed.is_terminal());
        assert!(!RiskStatus::Mitigated.is_terminal());
        for to in RiskStatus::ALL {
            assert!(!RiskStatus::Closed.can_transition_to(to));
        }
    }
}
