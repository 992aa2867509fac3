//! In-memory role store.

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use warden_core::error::{Result, RoleError};
use warden_core::{PrincipalId, RoleId, TenantId};

use super::RoleStore;
use crate::integration::PermissionSource;
use crate::model::{AccessContext, Assignment, Role, RoleScope, ValidationMode};

/// An in-memory role store.
///
/// Clones share the same underlying maps.
#[derive(Clone, Debug)]
pub struct InMemoryRoleStore {
    /// The roles, indexed by ID.
    roles: Arc<DashMap<RoleId, Role>>,

    /// Assignments, indexed by principal and tenant.
    assignments: Arc<DashMap<(PrincipalId, TenantId), Assignment>>,

    /// How incoming roles are validated.
    mode: ValidationMode,
}

impl InMemoryRoleStore {
    /// Create a new store with strict validation.
    pub fn new() -> Self {
        Self::with_validation(ValidationMode::Strict)
    }

    /// Create a new store with the given validation mode.
    pub fn with_validation(mode: ValidationMode) -> Self {
        Self {
            roles: Arc::new(DashMap::new()),
            assignments: Arc::new(DashMap::new()),
            mode,
        }
    }

    /// The validation mode applied to incoming roles.
    pub fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn check_role(&self, role: &Role) -> Result<()> {
        let report = role.validate();

        for issue in report.warnings() {
            warn!(role = %role.id, name = %role.name, "{}", issue);
        }

        if !report.has_errors() {
            return Ok(());
        }

        match self.mode {
            ValidationMode::Strict => {
                report.into_result()?;
                Ok(())
            }
            ValidationMode::Lenient => {
                for issue in report.errors() {
                    warn!(
                        role = %role.id,
                        name = %role.name,
                        "{}; it will grant nothing",
                        issue
                    );
                }
                Ok(())
            }
        }
    }

    fn check_slot(&self, role_id: &RoleId, expected: RoleScope) -> Result<()> {
        let role = self.get_role(role_id)?;
        if role.scope != expected {
            return Err(RoleError::WrongScope {
                role: *role_id,
                expected: expected.to_string(),
                actual: role.scope.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for InMemoryRoleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleStore for InMemoryRoleStore {
    fn add_role(&self, role: Role) -> Result<()> {
        // The entry holds the shard lock from the conflict check to the insert.
        match self.roles.entry(role.id) {
            Entry::Occupied(_) => Err(RoleError::Conflict(role.id).into()),
            Entry::Vacant(slot) => {
                self.check_role(&role)?;

                debug!(role = %role.id, name = %role.name, "Adding role");
                slot.insert(role);

                Ok(())
            }
        }
    }

    fn get_role(&self, role_id: &RoleId) -> Result<Role> {
        let role = self
            .roles
            .get(role_id)
            .ok_or(RoleError::NotFound(*role_id))?
            .clone();

        Ok(role)
    }

    fn update_role(&self, mut role: Role) -> Result<()> {
        match self.roles.entry(role.id) {
            Entry::Vacant(_) => Err(RoleError::NotFound(role.id).into()),
            Entry::Occupied(mut slot) => {
                self.check_role(&role)?;

                role.created_at = slot.get().created_at;
                role.updated_at = Utc::now();
                debug!(role = %role.id, name = %role.name, "Updating role");
                slot.insert(role);

                Ok(())
            }
        }
    }

    fn remove_role(&self, role_id: &RoleId) -> Result<()> {
        if self.roles.remove(role_id).is_none() {
            return Err(RoleError::NotFound(*role_id).into());
        }

        Ok(())
    }

    fn list_roles(&self) -> Result<Vec<Role>> {
        let roles = self.roles.iter().map(|r| r.value().clone()).collect();

        Ok(roles)
    }

    fn assign(&self, assignment: Assignment) -> Result<()> {
        if let Some(role_id) = &assignment.tenant_role {
            self.check_slot(role_id, RoleScope::Tenant)?;
        }
        for role_id in assignment.scenario_roles.values() {
            self.check_slot(role_id, RoleScope::Scenario)?;
        }

        debug!(
            principal = %assignment.principal,
            tenant = %assignment.tenant,
            scenarios = assignment.scenario_roles.len(),
            "Assigning roles"
        );
        self.assignments
            .insert((assignment.principal, assignment.tenant), assignment);

        Ok(())
    }

    fn assignment(&self, principal: &PrincipalId, tenant: &TenantId) -> Result<Option<Assignment>> {
        Ok(self
            .assignments
            .get(&(*principal, *tenant))
            .map(|a| a.value().clone()))
    }

    fn unassign(&self, principal: &PrincipalId, tenant: &TenantId) -> Result<bool> {
        Ok(self.assignments.remove(&(*principal, *tenant)).is_some())
    }

    fn list_assignments(&self) -> Result<Vec<Assignment>> {
        let assignments = self.assignments.iter().map(|a| a.value().clone()).collect();

        Ok(assignments)
    }
}

impl PermissionSource for InMemoryRoleStore {
    /// Union of the tenant role's permissions and, inside a scenario, the
    /// scenario role's permissions. Duplicates are dropped, order is kept.
    fn granted_permissions(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
    ) -> Result<Vec<String>> {
        let Some(assignment) = self.assignment(principal, &context.tenant)? else {
            debug!(principal = %principal, %context, "No assignment in tenant");
            return Ok(Vec::new());
        };

        let mut role_ids: Vec<RoleId> = assignment.tenant_role.into_iter().collect();
        if let Some(scenario) = &context.scenario {
            role_ids.extend(assignment.scenario_roles.get(scenario).copied());
        }

        let mut granted: Vec<String> = Vec::new();
        for role_id in &role_ids {
            let role = self.get_role(role_id)?;
            for permission in role.permissions {
                if !granted.contains(&permission) {
                    granted.push(permission);
                }
            }
        }

        Ok(granted)
    }
}
