//! Resource ownership and state facts injected by the caller.
//!
//! The resolver never performs I/O. Whatever the fine-grained rules need
//! to know about a specific resource instance arrives here, fetched in
//! advance or through a [`FactSource`] lookup the caller supplies.

use ghx_types::{ActorId, ProjectId, ResourceId, ResourceKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Document lifecycle state of a resource instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceState {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Sent,
    Paid,
}

impl ResourceState {
    /// Whether the submitter may still rework the document.
    ///
    /// A rejected document returns to its submitter for rework.
    pub fn is_draft_editable(&self) -> bool {
        matches!(self, ResourceState::Draft | ResourceState::Rejected)
    }

    /// Whether the document has been issued to an external party.
    pub fn is_issued(&self) -> bool {
        matches!(self, ResourceState::Sent | ResourceState::Paid)
    }
}

/// Ownership and state facts about one resource instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceFacts {
    /// Who submitted the document.
    pub submitted_by: Option<ActorId>,
    /// Who created the document.
    pub created_by: Option<ActorId>,
    /// Current lifecycle state.
    pub state: Option<ResourceState>,
    /// Project the resource belongs to.
    pub project_id: Option<ProjectId>,
    /// Members of the owning project.
    pub project_members: HashSet<ActorId>,
}

impl ResourceFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the submitter.
    pub fn submitted_by(mut self, actor: ActorId) -> Self {
        self.submitted_by = Some(actor);
        self
    }

    /// Record the creator.
    pub fn created_by(mut self, actor: ActorId) -> Self {
        self.created_by = Some(actor);
        self
    }

    /// Record the lifecycle state.
    pub fn in_state(mut self, state: ResourceState) -> Self {
        self.state = Some(state);
        self
    }

    /// Record the owning project.
    pub fn owned_by_project(mut self, project: ProjectId) -> Self {
        self.project_id = Some(project);
        self
    }

    /// Record a member of the owning project.
    pub fn with_project_member(mut self, actor: ActorId) -> Self {
        self.project_members.insert(actor);
        self
    }

    /// Whether the actor belongs to the owning project.
    pub fn is_project_member(&self, actor: ActorId) -> bool {
        self.project_members.contains(&actor)
    }
}

/// Injected lookup capability for resource facts.
///
/// Implemented for plain maps and closures so tests and callers can
/// supply facts without a store abstraction.
pub trait FactSource {
    fn facts(&self, resource: &ResourceKind, id: ResourceId) -> Option<ResourceFacts>;
}

impl FactSource for HashMap<ResourceId, ResourceFacts> {
    fn facts(&self, _resource: &ResourceKind, id: ResourceId) -> Option<ResourceFacts> {
        self.get(&id).cloned()
    }
}

/// Adapter turning a closure into a [`FactSource`].
pub struct FactFn<F>(pub F);

impl<F> FactSource for FactFn<F>
where
    F: Fn(&ResourceKind, ResourceId) -> Option<ResourceFacts>,
{
    fn facts(&self, resource: &ResourceKind, id: ResourceId) -> Option<ResourceFacts> {
        (self.0)(resource, id)
    }
}

/// A source with no facts at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFacts;

impl FactSource for NoFacts {
    fn facts(&self, _resource: &ResourceKind, _id: ResourceId) -> Option<ResourceFacts> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_editable_states() {
        assert!(ResourceState::Draft.is_draft_editable());
        assert!(ResourceState::Rejected.is_draft_editable());
        assert!(!ResourceState::Submitted.is_draft_editable());
        assert!(!ResourceState::Sent.is_draft_editable());
    }

    #[test]
    fn issued_states() {
        assert!(ResourceState::Sent.is_issued());
        assert!(ResourceState::Paid.is_issued());
        assert!(!ResourceState::Approved.is_issued());
    }

    #[test]
    fn project_membership() {
        let actor = ActorId::new();
        let facts = ResourceFacts::new()
            .owned_by_project(ProjectId::new())
            .with_project_member(actor);
        assert!(facts.is_project_member(actor));
        assert!(!facts.is_project_member(ActorId::new()));
    }

    #[test]
    fn map_fact_source() {
        let id = ResourceId::new();
        let mut map = HashMap::new();
        map.insert(id, ResourceFacts::new().in_state(ResourceState::Draft));

        let found = map.facts(&ResourceKind::Expenses, id);
        assert_eq!(found.unwrap().state, Some(ResourceState::Draft));
        assert!(map.facts(&ResourceKind::Expenses, ResourceId::new()).is_none());
    }

    #[test]
    fn closure_fact_source() {
        let source = FactFn(|_: &ResourceKind, _: ResourceId| Some(ResourceFacts::new()));
        assert!(source.facts(&ResourceKind::Budgets, ResourceId::new()).is_some());
        assert!(NoFacts.facts(&ResourceKind::Budgets, ResourceId::new()).is_none());
    }
}
