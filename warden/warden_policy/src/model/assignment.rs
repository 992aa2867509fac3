//! Role assignments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use warden_core::{PrincipalId, RoleId, ScenarioId, TenantId};

/// The roles one principal holds within one tenant.
///
/// A principal has at most one tenant role per tenant, and at most one
/// scenario role per scenario of that tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The principal holding the roles.
    pub principal: PrincipalId,

    /// The tenant the assignment belongs to.
    pub tenant: TenantId,

    /// The tenant-wide role, if any.
    #[serde(default)]
    pub tenant_role: Option<RoleId>,

    /// Scenario roles, keyed by scenario.
    #[serde(default)]
    pub scenario_roles: BTreeMap<ScenarioId, RoleId>,
}

impl Assignment {
    /// Create an assignment with no roles.
    pub fn new(principal: PrincipalId, tenant: TenantId) -> Self {
        Self {
            principal,
            tenant,
            tenant_role: None,
            scenario_roles: BTreeMap::new(),
        }
    }

    /// Set the tenant-wide role.
    pub fn with_tenant_role(mut self, role: RoleId) -> Self {
        self.tenant_role = Some(role);
        self
    }

    /// Set the role for one scenario, replacing any previous one.
    pub fn with_scenario_role(mut self, scenario: ScenarioId, role: RoleId) -> Self {
        self.scenario_roles.insert(scenario, role);
        self
    }

    /// Every role referenced by this assignment.
    pub fn role_ids(&self) -> impl Iterator<Item = RoleId> + '_ {
        self.tenant_role
            .into_iter()
            .chain(self.scenario_roles.values().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let tenant_role = RoleId::new();
        let scenario = ScenarioId::new();
        let scenario_role = RoleId::new();

        let assignment = Assignment::new(PrincipalId::new(), TenantId::new())
            .with_tenant_role(tenant_role)
            .with_scenario_role(scenario, scenario_role);

        assert_eq!(assignment.tenant_role, Some(tenant_role));
        assert_eq!(assignment.scenario_roles.get(&scenario), Some(&scenario_role));
        assert_eq!(
            assignment.role_ids().collect::<Vec<_>>(),
            vec![tenant_role, scenario_role]
        );
    }

    #[test]
    fn test_scenario_roles_serialize_as_string_keys() {
        let scenario: ScenarioId = "4b1f8a5e-0c2d-4f6e-8a9b-1c2d3e4f5a6b".parse().unwrap();
        let role: RoleId = "9e8d7c6b-5a49-4382-9170-6f5e4d3c2b1a".parse().unwrap();
        let assignment =
            Assignment::new(PrincipalId::nil(), TenantId::nil()).with_scenario_role(scenario, role);

        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(
            json["scenario_roles"]["4b1f8a5e-0c2d-4f6e-8a9b-1c2d3e4f5a6b"],
            "9e8d7c6b-5a49-4382-9170-6f5e4d3c2b1a"
        );

        let back: Assignment = serde_json::from_value(json).unwrap();
        assert_eq!(back, assignment);
    }
}
