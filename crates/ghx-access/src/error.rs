//! Errors raised when a permission check cannot be evaluated.
//!
//! These are caller bugs or data corruption, never ordinary deny
//! outcomes; a deny is a [`crate::Decision`], not an error.

use ghx_types::UnknownRole;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Context carried a nil organization id.
    #[error("missing organization id")]
    MissingOrganization,

    /// A stored role string did not match any known role.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A stored entitlement string was not of the form "resource:action".
    #[error("malformed entitlement: {0:?}")]
    MalformedEntitlement(String),

    /// Action verb was empty after normalization.
    #[error("empty action verb")]
    EmptyAction,
}

impl AccessError {
    /// Coarse status mapping for the HTTP layer. Evaluation failures are
    /// server-side faults, not authorization denials.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MissingOrganization => 500,
            Self::UnknownRole(_) => 500,
            Self::MalformedEntitlement(_) => 500,
            Self::EmptyAction => 400,
        }
    }
}

impl From<UnknownRole> for AccessError {
    fn from(err: UnknownRole) -> Self {
        AccessError::UnknownRole(err.0)
    }
}
