//! Enumerated permission matrix.
//!
//! A kind-level map from (resource, action) to decision, built once per
//! actor by running the resolver over the role's capability vocabulary.
//! UIs render affordances from it; the resolver itself never consults it.

use crate::capability::Capability;
use crate::context::{Action, PermissionContext};
use crate::decision::Decision;
use crate::entitlement::EntitlementSet;
use crate::error::AccessError;
use crate::resolver::PermissionResolver;
use ghx_types::{ActorId, OrganizationId, ResourceKind, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fully enumerated (resource, action) → decision map for one actor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionMatrix {
    entries: HashMap<ResourceKind, HashMap<String, Decision>>,
}

impl PermissionMatrix {
    /// Build the matrix for an actor over a resource vocabulary.
    ///
    /// Actions are enumerated from the role's capability set, so a
    /// viewer's matrix only carries "read" cells. Decisions are the
    /// coarse tier only, since instance-level rules need facts that do not
    /// exist at matrix-build time.
    pub fn build(
        resolver: &PermissionResolver,
        actor_id: ActorId,
        organization_id: OrganizationId,
        role: Role,
        resources: &[ResourceKind],
        entitlements: &EntitlementSet,
    ) -> Result<Self, AccessError> {
        let verbs = Capability::for_role(role).action_tokens();
        let mut entries: HashMap<ResourceKind, HashMap<String, Decision>> = HashMap::new();

        for resource in resources {
            let row = entries.entry(resource.clone()).or_default();
            for verb in &verbs {
                let ctx = PermissionContext::new(
                    actor_id,
                    organization_id,
                    role,
                    resource.clone(),
                    Action::new(verb)?,
                );
                let decision = resolver.resolve_coarse(&ctx, entitlements)?;
                row.insert((*verb).to_string(), decision);
            }
        }

        Ok(Self { entries })
    }

    /// Decision for a cell, if the vocabulary covers it.
    pub fn get(&self, resource: &ResourceKind, action: &str) -> Option<&Decision> {
        self.entries.get(resource).and_then(|row| row.get(action))
    }

    /// Whether a cell allows. Missing cells deny: the matrix fails
    /// closed like the resolver.
    pub fn allows(&self, resource: &ResourceKind, action: &str) -> bool {
        self.get(resource, action).is_some_and(Decision::is_allow)
    }

    /// Iterate every cell.
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceKind, &str, &Decision)> {
        self.entries.iter().flat_map(|(resource, row)| {
            row.iter()
                .map(move |(action, decision)| (resource, action.as_str(), decision))
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}
