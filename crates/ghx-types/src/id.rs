//! Identifier newtypes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing uuid.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Check for the all-zero uuid.
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

id_newtype!(
    /// Unique identifier for an actor (a user acting within an organization).
    ActorId
);

id_newtype!(
    /// Unique identifier for an organization (the tenant boundary).
    OrganizationId
);

id_newtype!(
    /// Unique identifier for a project within an organization.
    ProjectId
);

id_newtype!(
    /// Unique identifier for an individual resource instance.
    ResourceId
);
