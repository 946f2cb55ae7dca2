//! Organization-wide entitlement grants.
//!
//! An entitlement is a coarse `"resource:action"` grant recorded per
//! organization, independent of any individual role. The resolver checks
//! the coarse gate before any fine-grained resource logic runs.

use crate::context::Action;
use crate::error::AccessError;
use ghx_types::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Action token granting every verb on a resource.
pub const WILDCARD_ACTION: &str = "*";

/// A single parsed `"resource:action"` grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entitlement {
    pub resource: ResourceKind,
    /// Action token, or `"*"` for any action on the resource.
    pub action: String,
}

impl Entitlement {
    /// Grant a single action on a resource.
    pub fn new(resource: ResourceKind, action: impl Into<String>) -> Self {
        Self {
            resource,
            action: action.into(),
        }
    }

    /// Grant every action on a resource.
    pub fn any_action(resource: ResourceKind) -> Self {
        Self::new(resource, WILDCARD_ACTION)
    }

    /// Wire form, `"resource:action"`.
    pub fn token(&self) -> String {
        format!("{}:{}", self.resource.as_str(), self.action)
    }
}

impl FromStr for Entitlement {
    type Err = AccessError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || AccessError::MalformedEntitlement(raw.to_string());
        let (resource, action) = raw.split_once(':').ok_or_else(malformed)?;
        if resource.is_empty() || action.is_empty() {
            return Err(malformed());
        }
        Ok(Self {
            resource: ResourceKind::from(resource),
            action: action.to_string(),
        })
    }
}

impl std::fmt::Display for Entitlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action)
    }
}

/// The set of grants recorded for one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementSet {
    grants: HashSet<Entitlement>,
}

impl EntitlementSet {
    /// Empty set, denying every coarse check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw grant strings, failing on the first malformed one.
    pub fn parse_all<I, S>(raw: I) -> Result<Self, AccessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grants = HashSet::new();
        for token in raw {
            grants.insert(token.as_ref().parse::<Entitlement>()?);
        }
        Ok(Self { grants })
    }

    /// Add a grant.
    pub fn grant(mut self, entitlement: Entitlement) -> Self {
        self.grants.insert(entitlement);
        self
    }

    /// Whether the organization holds a grant covering this
    /// resource/action pair, either exactly or via the wildcard.
    pub fn contains(&self, resource: &ResourceKind, action: &Action) -> bool {
        self.grants
            .contains(&Entitlement::new(resource.clone(), action.as_str()))
            || self
                .grants
                .contains(&Entitlement::any_action(resource.clone()))
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entitlement> {
        self.grants.iter()
    }

    /// Grant tokens in canonical (sorted) order. Fingerprinting depends
    /// on this ordering being stable across set iteration order.
    pub fn canonical_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.grants.iter().map(Entitlement::token).collect();
        tokens.sort();
        tokens
    }
}

impl FromIterator<Entitlement> for EntitlementSet {
    fn from_iter<I: IntoIterator<Item = Entitlement>>(iter: I) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(verb: &str) -> Action {
        Action::new(verb).unwrap()
    }

    #[test]
    fn parse_valid_grant() {
        let e: Entitlement = "expenses:approve".parse().unwrap();
        assert_eq!(e.resource, ResourceKind::Expenses);
        assert_eq!(e.action, "approve");
        assert_eq!(e.token(), "expenses:approve");
    }

    #[test]
    fn parse_rejects_malformed() {
        for raw in ["", "x", ":update", "expenses:"] {
            let err = raw.parse::<Entitlement>().unwrap_err();
            assert_eq!(err, AccessError::MalformedEntitlement(raw.to_string()));
        }
    }

    #[test]
    fn contains_exact_grant() {
        let set = EntitlementSet::parse_all(["budgets:update", "expenses:read"]).unwrap();
        assert!(set.contains(&ResourceKind::Budgets, &action("update")));
        assert!(!set.contains(&ResourceKind::Budgets, &action("delete")));
        assert!(!set.contains(&ResourceKind::Invoices, &action("read")));
    }

    #[test]
    fn wildcard_grants_any_action() {
        let set = EntitlementSet::parse_all(["expenses:*"]).unwrap();
        assert!(set.contains(&ResourceKind::Expenses, &action("read")));
        assert!(set.contains(&ResourceKind::Expenses, &action("delete")));
        assert!(!set.contains(&ResourceKind::Budgets, &action("read")));
    }

    #[test]
    fn parse_all_fails_fast() {
        let err = EntitlementSet::parse_all(["expenses:read", "broken"]).unwrap_err();
        assert_eq!(err, AccessError::MalformedEntitlement("broken".to_string()));
    }

    #[test]
    fn canonical_tokens_sorted() {
        let set = EntitlementSet::parse_all(["jobs:read", "budgets:update", "expenses:*"])
            .unwrap();
        assert_eq!(
            set.canonical_tokens(),
            vec!["budgets:update", "expenses:*", "jobs:read"]
        );
    }

    #[test]
    fn unknown_resource_tokens_parse() {
        let e: Entitlement = "analytics:read".parse().unwrap();
        assert_eq!(e.resource, ResourceKind::Other("analytics".to_string()));
    }
}
