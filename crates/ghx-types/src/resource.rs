//! Resource vocabulary.

use serde::{Deserialize, Serialize};

/// Kind of resource a permission or entitlement refers to.
///
/// The known kinds cover the application's module vocabulary; anything
/// else round-trips through `Other` so new modules do not require a
/// lockstep release of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceKind {
    Expenses,
    Budgets,
    Invoices,
    Projects,
    Risks,
    Jobs,
    People,
    Programs,
    Listings,
    /// Unrecognized resource token, preserved verbatim.
    Other(String),
}

impl ResourceKind {
    /// The standard module vocabulary (excludes `Other`).
    pub const STANDARD: &'static [ResourceKind] = &[
        ResourceKind::Expenses,
        ResourceKind::Budgets,
        ResourceKind::Invoices,
        ResourceKind::Projects,
        ResourceKind::Risks,
        ResourceKind::Jobs,
        ResourceKind::People,
        ResourceKind::Programs,
        ResourceKind::Listings,
    ];

    /// Wire token used in entitlement strings.
    pub fn as_str(&self) -> &str {
        match self {
            ResourceKind::Expenses => "expenses",
            ResourceKind::Budgets => "budgets",
            ResourceKind::Invoices => "invoices",
            ResourceKind::Projects => "projects",
            ResourceKind::Risks => "risks",
            ResourceKind::Jobs => "jobs",
            ResourceKind::People => "people",
            ResourceKind::Programs => "programs",
            ResourceKind::Listings => "listings",
            ResourceKind::Other(token) => token,
        }
    }
}

impl From<&str> for ResourceKind {
    fn from(token: &str) -> Self {
        match token {
            "expenses" => ResourceKind::Expenses,
            "budgets" => ResourceKind::Budgets,
            "invoices" => ResourceKind::Invoices,
            "projects" => ResourceKind::Projects,
            "risks" => ResourceKind::Risks,
            "jobs" => ResourceKind::Jobs,
            "people" => ResourceKind::People,
            "programs" => ResourceKind::Programs,
            "listings" => ResourceKind::Listings,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ResourceKind {
    fn from(token: String) -> Self {
        ResourceKind::from(token.as_str())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_round_trip() {
        for kind in ResourceKind::STANDARD {
            assert_eq!(&ResourceKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn unknown_token_is_preserved() {
        let kind = ResourceKind::from("analytics");
        assert_eq!(kind, ResourceKind::Other("analytics".to_string()));
        assert_eq!(kind.as_str(), "analytics");
    }

    #[test]
    fn serde_round_trips_as_string() {
        let json = serde_json::to_string(&ResourceKind::Budgets).unwrap();
        assert_eq!(json, "\"budgets\"");
        let kind: ResourceKind = serde_json::from_str("\"analytics\"").unwrap();
        assert_eq!(kind, ResourceKind::Other("analytics".to_string()));
    }
}
