//! # Warden Core
//!
//! `warden_core` is the authorization core of Warden: it decides whether a
//! principal holding a set of granted permission strings may perform an
//! operation that requires one or more permission strings.
//!
//! ## Permission Model
//!
//! A permission is a flat string of the form `scope:resource-action`, for
//! example `tenant:user-edit`.
//!
//! 1. **Scope**: the authorization boundary (`tenant`, `scenario`, `system`).
//!    A grant in one scope never satisfies a requirement in another.
//!
//! 2. **Resource**: the protected entity class, drawn from the fixed set
//!    registered for the scope.
//!
//! 3. **Action**: an ordered access level, `none < view < edit < all`. A
//!    granted level covers every level at or below it:
//!    ```text
//!    covers(g, r) := g.scope = r.scope ∧ g.resource = r.resource ∧ r.action ∈ implied(g.action)
//!    ```
//!
//! Malformed or unknown permission strings never raise errors during a
//! check. They grant nothing and can never be satisfied.
//!
//! ## Crate Structure
//!
//! - **model**: scopes, resources, actions and the parsed permission triple
//! - **grammar**: splitting and validating permission strings
//! - **hierarchy**: the static action hierarchy table
//! - **check**: the coverage evaluator and the aggregate (ALL / ANY) API
//! - **permissions**: constants for every valid permission string
//! - **id**: strongly-typed identifiers for tenants, scenarios, roles and principals
//! - **error**: error types for boundary validation and the layers built on top

pub mod check;
pub mod error;
pub mod grammar;
pub mod hierarchy;
pub mod id;
pub mod model;
pub mod permissions;

// Re-export key types and functions for convenience
pub use check::{
    covers, has_all_permissions, has_any_permission, has_permission, CheckMode, PermissionSet,
};
pub use error::{Error, Result};
pub use grammar::parse;
pub use id::{PrincipalId, RoleId, ScenarioId, TenantId};
pub use model::{Action, ParsedPermission, Permission, Resource, Scope};
