//! Capability flags describing what a role can do by default.

use bitflags::bitflags;
use ghx_types::Role;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Capability flags granted to a role before entitlements are applied.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Capability: u32 {
        /// View resources.
        const VIEW = 1 << 0;

        /// Create new resources.
        const CREATE = 1 << 1;

        /// Edit existing resources.
        const EDIT = 1 << 2;

        /// Delete resources.
        const DELETE = 1 << 3;

        /// Approve or reject submitted resources.
        const APPROVE = 1 << 4;

        /// Export data.
        const EXPORT = 1 << 5;

        /// Manage organization memberships.
        const MANAGE_MEMBERS = 1 << 6;

        /// Admin operations.
        const ADMIN = 1 << 7;

        /// No capabilities.
        const NONE = 0;

        /// Contributor access.
        const CONTRIBUTOR = Self::VIEW.bits() | Self::CREATE.bits() | Self::EDIT.bits();

        /// Supervisor access.
        const SUPERVISOR = Self::CONTRIBUTOR.bits()
            | Self::DELETE.bits()
            | Self::APPROVE.bits()
            | Self::EXPORT.bits();

        /// Full access.
        const FULL = Self::SUPERVISOR.bits()
            | Self::MANAGE_MEMBERS.bits()
            | Self::ADMIN.bits();
    }
}

impl Default for Capability {
    fn default() -> Self {
        Capability::VIEW
    }
}

impl Capability {
    /// Default capability set for a role.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Viewer => Capability::VIEW,
            Role::Member => Capability::CONTRIBUTOR,
            Role::Manager => Capability::SUPERVISOR,
            Role::Admin | Role::Owner => Capability::FULL,
        }
    }

    /// Check if this capability set allows viewing.
    pub fn can_view(&self) -> bool {
        self.contains(Capability::VIEW)
    }

    /// Check if this capability set allows editing.
    pub fn can_edit(&self) -> bool {
        self.contains(Capability::EDIT)
    }

    /// Check if this capability set allows approvals.
    pub fn can_approve(&self) -> bool {
        self.contains(Capability::APPROVE)
    }

    /// Check if this is an admin capability set.
    pub fn is_admin(&self) -> bool {
        self.contains(Capability::ADMIN)
    }

    /// Action verbs this capability set can ever exercise.
    ///
    /// Used to enumerate the matrix vocabulary; each flag maps to the
    /// verb tokens it unlocks.
    pub fn action_tokens(&self) -> Vec<&'static str> {
        let mut tokens = Vec::new();
        if self.contains(Capability::VIEW) {
            tokens.push("read");
        }
        if self.contains(Capability::CREATE) {
            tokens.push("create");
        }
        if self.contains(Capability::EDIT) {
            tokens.push("update");
        }
        if self.contains(Capability::DELETE) {
            tokens.push("delete");
        }
        if self.contains(Capability::APPROVE) {
            tokens.push("approve");
            tokens.push("reject");
        }
        if self.contains(Capability::EXPORT) {
            tokens.push("export");
        }
        tokens
    }
}
