//! Authorization decisions.
//!
//! A deny is an ordinary outcome callers branch on, never an error;
//! errors are reserved for contexts the resolver could not evaluate.

use serde::{Deserialize, Serialize};

/// Why a check allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowReason {
    /// Admin-tier role bypasses entitlement and resource rules.
    AdminOverride,
    /// Coarse entitlement passed and no resource rule objected.
    Entitled,
}

/// Why a check denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// Organization holds no grant for the resource/action pair.
    MissingEntitlement,
    /// Actor attempted to approve or reject their own submission.
    SelfApproval,
    /// Only the submitter may modify the document.
    NotSubmitter,
    /// Document has left its editable state.
    ResourceLocked,
    /// Actor is not a member of the owning project.
    NotProjectMember,
    /// Issued document may only be modified by its creator.
    CreatorOnly,
    /// No rule produced a verdict; fail closed.
    DefaultDeny,
}

impl DenyReason {
    /// Stable token for logs and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::MissingEntitlement => "missing_entitlement",
            DenyReason::SelfApproval => "self_approval",
            DenyReason::NotSubmitter => "not_submitter",
            DenyReason::ResourceLocked => "resource_locked",
            DenyReason::NotProjectMember => "not_project_member",
            DenyReason::CreatorOnly => "creator_only",
            DenyReason::DefaultDeny => "default_deny",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Decision {
    Allow { reason: AllowReason },
    Deny { reason: DenyReason },
}

impl Decision {
    pub fn allow(reason: AllowReason) -> Self {
        Decision::Allow { reason }
    }

    pub fn deny(reason: DenyReason) -> Self {
        Decision::Deny { reason }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    /// Deny reason, if this is a deny.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Deny { reason } => Some(*reason),
            Decision::Allow { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_and_deny_accessors() {
        let allow = Decision::allow(AllowReason::Entitled);
        assert!(allow.is_allow());
        assert_eq!(allow.deny_reason(), None);

        let deny = Decision::deny(DenyReason::SelfApproval);
        assert!(!deny.is_allow());
        assert_eq!(deny.deny_reason(), Some(DenyReason::SelfApproval));
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(Decision::deny(DenyReason::MissingEntitlement)).unwrap();
        assert_eq!(json["effect"], "deny");
        assert_eq!(json["reason"], "missing_entitlement");

        let json = serde_json::to_value(Decision::allow(AllowReason::AdminOverride)).unwrap();
        assert_eq!(json["effect"], "allow");
        assert_eq!(json["reason"], "admin_override");
    }

    #[test]
    fn deny_reason_tokens() {
        assert_eq!(DenyReason::DefaultDeny.as_str(), "default_deny");
        assert_eq!(DenyReason::CreatorOnly.to_string(), "creator_only");
    }
}
