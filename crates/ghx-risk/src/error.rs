//! Risk domain errors.

use crate::status::RiskStatus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskError {
    /// A rating string did not match any of the five defined ratings.
    #[error("invalid risk rating: {0:?}")]
    InvalidRating(String),

    /// Attempted lifecycle move that is not strictly forward.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: RiskStatus, to: RiskStatus },
}
