//! # Warden Policy
//!
//! `warden_policy` is the layer that callers of the authorization core talk
//! to. It owns everything the core deliberately does not:
//!
//! 1. **Roles**: named lists of permission strings, scoped to a tenant or a
//!    scenario, validated when they are authored or loaded.
//!
//! 2. **Assignments**: which roles a principal holds in a tenant and in
//!    each of its scenarios.
//!
//! 3. **Context Resolution**: turning a principal plus an [`AccessContext`]
//!    into the effective granted-permission list. This is an injected
//!    [`PermissionSource`], never ambient state.
//!
//! 4. **Authorization**: the [`Authorizer`] resolves the granted list for
//!    each call and delegates the decision to `warden_core`.
//!
//! The core's semantics are never changed here: a malformed permission that
//! slips through lenient validation still grants nothing at check time.

pub mod catalog;
pub mod engine;
pub mod integration;
pub mod model;
pub mod store;

// Re-export key types and traits for convenience
pub use catalog::{CatalogReport, RoleCatalog};
pub use engine::{Authorizer, Decision, DecisionLog};
pub use integration::{source_fn, FnSource, PermissionSource};
pub use model::{
    AccessContext, Assignment, Role, RoleIssue, RoleReport, RoleScope, ValidationMode,
};
pub use store::{InMemoryRoleStore, RoleStore};
