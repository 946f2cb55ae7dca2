//! Permission and access control policy for GHXSTSHIP resources.
//!
//! This crate provides:
//!
//! - **PermissionResolver**: allow/deny decisions for actor/resource/action
//! - **EntitlementSet**: coarse per-organization `"resource:action"` grants
//! - **ResourceFacts**: injected ownership/state data for fine-grained rules
//! - **PermissionMatrix**: enumerated kind-level decisions for UI rendering
//!
//! # Architecture
//!
//! ```text
//! membership row ──► PermissionContext ──► PermissionResolver ──► Decision
//!                                               │
//!                         ┌─────────────────────┼─────────────────────┐
//!                         │                     │                     │
//!                         ▼                     ▼                     ▼
//!                  admin override        EntitlementSet        ResourceFacts
//!                  (role tier)          (coarse gate)       (fine-grained rules)
//! ```
//!
//! The resolver is pure: no I/O, no clock, no shared state. Callers fetch
//! entitlements and facts up front and map the returned [`Decision`] to a
//! transport response. A deny is a value; only a context the resolver
//! cannot evaluate raises [`AccessError`].
//!
//! # Example
//!
//! ```ignore
//! use ghx_access::{Action, EntitlementSet, PermissionContext, PermissionResolver};
//! use ghx_types::{ActorId, OrganizationId, ResourceKind, Role};
//!
//! let resolver = PermissionResolver::new();
//! let ctx = PermissionContext::new(
//!     actor_id,
//!     organization_id,
//!     Role::Manager,
//!     ResourceKind::Expenses,
//!     Action::new("approve")?,
//! );
//! let decision = resolver.resolve(&ctx, &entitlements, Some(&facts))?;
//! if decision.is_allow() {
//!     // Perform the action
//! }
//! ```

mod capability;
mod context;
mod decision;
mod entitlement;
mod error;
mod facts;
mod fingerprint;
mod matrix;
mod resolver;

pub use capability::Capability;
pub use context::{Action, PermissionContext};
pub use decision::{AllowReason, Decision, DenyReason};
pub use entitlement::{Entitlement, EntitlementSet, WILDCARD_ACTION};
pub use error::AccessError;
pub use facts::{FactFn, FactSource, NoFacts, ResourceFacts, ResourceState};
pub use fingerprint::EntitlementFingerprint;
pub use matrix::PermissionMatrix;
pub use resolver::PermissionResolver;
