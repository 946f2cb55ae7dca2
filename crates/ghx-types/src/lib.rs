//! Shared domain types for GHXSTSHIP core.
//!
//! This crate is the single source of truth for types that cross crate
//! boundaries: identifiers, organization roles, and the resource
//! vocabulary. Both `ghx-access` and `ghx-risk` build on it.
//!
//! ## Rules
//!
//! 1. Identifier newtypes only; raw `Uuid` values never cross a boundary
//! 2. Role and resource tokens are snake_case on the wire
//! 3. No behavior beyond construction, parsing, and display

mod id;
mod resource;
mod role;

pub use id::{ActorId, OrganizationId, ProjectId, ResourceId};
pub use resource::ResourceKind;
pub use role::{Role, UnknownRole};
