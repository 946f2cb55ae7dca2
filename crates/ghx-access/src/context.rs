//! Per-call evaluation context.

use crate::error::AccessError;
use ghx_types::{ActorId, OrganizationId, ResourceId, ResourceKind, Role};
use serde::{Deserialize, Serialize};

/// A normalized action verb ("read", "update", "approve", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action(String);

impl Action {
    /// Normalize and validate an action verb.
    ///
    /// Verbs are trimmed and lowercased; an empty verb is a caller bug.
    pub fn new(verb: impl AsRef<str>) -> Result<Self, AccessError> {
        let verb = verb.as_ref().trim().to_ascii_lowercase();
        if verb.is_empty() {
            return Err(AccessError::EmptyAction);
        }
        Ok(Self(verb))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Action {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::new(s)
    }
}

/// Everything the resolver needs to know about one permission check.
///
/// Constructed per call and never stored. Data fetching happens before
/// construction; the context carries plain values only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionContext {
    /// Acting user.
    pub actor_id: ActorId,
    /// Tenant boundary the check is scoped to.
    pub organization_id: OrganizationId,
    /// Actor's membership role.
    pub role: Role,
    /// Kind of resource being acted on.
    pub resource: ResourceKind,
    /// Specific resource instance, when the action targets one.
    pub resource_id: Option<ResourceId>,
    /// Action verb.
    pub action: Action,
    /// Custom metadata.
    pub metadata: Option<serde_json::Value>,
}

impl PermissionContext {
    /// Create a context for one actor/resource/action triple.
    pub fn new(
        actor_id: ActorId,
        organization_id: OrganizationId,
        role: Role,
        resource: ResourceKind,
        action: Action,
    ) -> Self {
        Self {
            actor_id,
            organization_id,
            role,
            resource,
            resource_id: None,
            action,
            metadata: None,
        }
    }

    /// Target a specific resource instance.
    pub fn with_resource_id(mut self, id: ResourceId) -> Self {
        self.resource_id = Some(id);
        self
    }

    /// Attach custom metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Structural validation. A nil organization means the caller never
    /// resolved the membership row; evaluation must not proceed.
    pub fn validate(&self) -> Result<(), AccessError> {
        if self.organization_id.is_nil() {
            return Err(AccessError::MissingOrganization);
        }
        Ok(())
    }
}
