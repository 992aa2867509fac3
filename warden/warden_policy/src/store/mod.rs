//! Role storage.
//!
//! This module provides storage for role definitions and role assignments.

mod in_memory;

pub use in_memory::InMemoryRoleStore;

use warden_core::error::Result;
use warden_core::{PrincipalId, RoleId, TenantId};

use crate::model::{Assignment, Role};

/// Trait for role storage.
///
/// A role store holds role definitions and the assignments that bind
/// principals to roles within a tenant.
pub trait RoleStore: Send + Sync {
    /// Add a role to the store.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the role was added.
    /// * `Err` - If a role with the same ID exists, or if the role fails
    ///   validation under the store's [`ValidationMode`](crate::ValidationMode).
    fn add_role(&self, role: Role) -> Result<()>;

    /// Get a role by ID.
    fn get_role(&self, role_id: &RoleId) -> Result<Role>;

    /// Replace an existing role, bumping its `updated_at` timestamp.
    ///
    /// The new definition is validated the same way as in [`add_role`](Self::add_role).
    fn update_role(&self, role: Role) -> Result<()>;

    /// Remove a role.
    ///
    /// Assignments referencing the role are left in place; resolving them
    /// afterwards reports the role as not found.
    fn remove_role(&self, role_id: &RoleId) -> Result<()>;

    /// List all roles.
    fn list_roles(&self) -> Result<Vec<Role>>;

    /// Set a principal's assignment for a tenant, replacing any previous one.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the assignment was stored.
    /// * `Err` - If a referenced role does not exist or is of the wrong kind
    ///   for its slot.
    fn assign(&self, assignment: Assignment) -> Result<()>;

    /// Get a principal's assignment for a tenant, if any.
    fn assignment(&self, principal: &PrincipalId, tenant: &TenantId) -> Result<Option<Assignment>>;

    /// Remove a principal's assignment for a tenant.
    ///
    /// Returns `true` if an assignment was removed.
    fn unassign(&self, principal: &PrincipalId, tenant: &TenantId) -> Result<bool>;

    /// List all assignments.
    fn list_assignments(&self) -> Result<Vec<Assignment>>;
}
