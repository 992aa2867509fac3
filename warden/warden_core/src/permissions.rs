//! Constants for every valid permission string.
//!
//! UI-gating call sites should reference these instead of string literals
//! so that a typo becomes a compile error rather than a silently denied
//! check.
//!
//! ```
//! use warden_core::{has_permission, permissions};
//!
//! let granted = [permissions::SCENARIO_DEVICE_EDIT];
//! assert!(has_permission(&granted, permissions::SCENARIO_DEVICE_VIEW));
//! ```

// =============================================================================
// Tenant scope
// =============================================================================

/// No capability over scenarios (tenant scope)
pub const TENANT_SCENARIO_NONE: &str = "tenant:scenario-none";
/// View scenarios (tenant scope)
pub const TENANT_SCENARIO_VIEW: &str = "tenant:scenario-view";
/// Create and modify scenarios (tenant scope)
pub const TENANT_SCENARIO_EDIT: &str = "tenant:scenario-edit";
/// Full control over scenarios (tenant scope)
pub const TENANT_SCENARIO_ALL: &str = "tenant:scenario-all";

/// No capability over users (tenant scope)
pub const TENANT_USER_NONE: &str = "tenant:user-none";
/// View users (tenant scope)
pub const TENANT_USER_VIEW: &str = "tenant:user-view";
/// Create and modify users (tenant scope)
pub const TENANT_USER_EDIT: &str = "tenant:user-edit";
/// Full control over users (tenant scope)
pub const TENANT_USER_ALL: &str = "tenant:user-all";

/// No capability over roles (tenant scope)
pub const TENANT_ROLE_NONE: &str = "tenant:role-none";
/// View roles (tenant scope)
pub const TENANT_ROLE_VIEW: &str = "tenant:role-view";
/// Create and modify roles (tenant scope)
pub const TENANT_ROLE_EDIT: &str = "tenant:role-edit";
/// Full control over roles (tenant scope)
pub const TENANT_ROLE_ALL: &str = "tenant:role-all";

// =============================================================================
// Scenario scope
// =============================================================================

/// No capability over devices (scenario scope)
pub const SCENARIO_DEVICE_NONE: &str = "scenario:device-none";
/// View devices (scenario scope)
pub const SCENARIO_DEVICE_VIEW: &str = "scenario:device-view";
/// Create and modify devices (scenario scope)
pub const SCENARIO_DEVICE_EDIT: &str = "scenario:device-edit";
/// Full control over devices (scenario scope)
pub const SCENARIO_DEVICE_ALL: &str = "scenario:device-all";

/// No capability over sensor rules (scenario scope)
pub const SCENARIO_SENSOR_RULE_NONE: &str = "scenario:sensor_rule-none";
/// View sensor rules (scenario scope)
pub const SCENARIO_SENSOR_RULE_VIEW: &str = "scenario:sensor_rule-view";
/// Create and modify sensor rules (scenario scope)
pub const SCENARIO_SENSOR_RULE_EDIT: &str = "scenario:sensor_rule-edit";
/// Full control over sensor rules (scenario scope)
pub const SCENARIO_SENSOR_RULE_ALL: &str = "scenario:sensor_rule-all";

/// No capability over spots (scenario scope)
pub const SCENARIO_SPOT_NONE: &str = "scenario:spot-none";
/// View spots (scenario scope)
pub const SCENARIO_SPOT_VIEW: &str = "scenario:spot-view";
/// Create and modify spots (scenario scope)
pub const SCENARIO_SPOT_EDIT: &str = "scenario:spot-edit";
/// Full control over spots (scenario scope)
pub const SCENARIO_SPOT_ALL: &str = "scenario:spot-all";

/// No capability over measurement (scenario scope)
pub const SCENARIO_MEASUREMENT_NONE: &str = "scenario:measurement-none";
/// View measurement (scenario scope)
pub const SCENARIO_MEASUREMENT_VIEW: &str = "scenario:measurement-view";
/// Create and modify measurement (scenario scope)
pub const SCENARIO_MEASUREMENT_EDIT: &str = "scenario:measurement-edit";
/// Full control over measurement (scenario scope)
pub const SCENARIO_MEASUREMENT_ALL: &str = "scenario:measurement-all";

/// No capability over image generation (scenario scope)
pub const SCENARIO_IMAGE_GENERATION_NONE: &str = "scenario:image_generation-none";
/// View image generation (scenario scope)
pub const SCENARIO_IMAGE_GENERATION_VIEW: &str = "scenario:image_generation-view";
/// Create and modify image generation (scenario scope)
pub const SCENARIO_IMAGE_GENERATION_EDIT: &str = "scenario:image_generation-edit";
/// Full control over image generation (scenario scope)
pub const SCENARIO_IMAGE_GENERATION_ALL: &str = "scenario:image_generation-all";

/// No capability over users (scenario scope)
pub const SCENARIO_USER_NONE: &str = "scenario:user-none";
/// View users (scenario scope)
pub const SCENARIO_USER_VIEW: &str = "scenario:user-view";
/// Create and modify users (scenario scope)
pub const SCENARIO_USER_EDIT: &str = "scenario:user-edit";
/// Full control over users (scenario scope)
pub const SCENARIO_USER_ALL: &str = "scenario:user-all";

/// No capability over roles (scenario scope)
pub const SCENARIO_ROLE_NONE: &str = "scenario:role-none";
/// View roles (scenario scope)
pub const SCENARIO_ROLE_VIEW: &str = "scenario:role-view";
/// Create and modify roles (scenario scope)
pub const SCENARIO_ROLE_EDIT: &str = "scenario:role-edit";
/// Full control over roles (scenario scope)
pub const SCENARIO_ROLE_ALL: &str = "scenario:role-all";

// =============================================================================
// System scope
// =============================================================================

/// No capability over admin (system scope)
pub const SYSTEM_ADMIN_NONE: &str = "system:admin-none";
/// View admin (system scope)
pub const SYSTEM_ADMIN_VIEW: &str = "system:admin-view";
/// Create and modify admin (system scope)
pub const SYSTEM_ADMIN_EDIT: &str = "system:admin-edit";
/// Full control over admin (system scope)
pub const SYSTEM_ADMIN_ALL: &str = "system:admin-all";

/// Every constant in this module, ordered by scope, resource, then action.
pub const ALL: &[&str] = &[
    TENANT_SCENARIO_NONE,
    TENANT_SCENARIO_VIEW,
    TENANT_SCENARIO_EDIT,
    TENANT_SCENARIO_ALL,
    TENANT_USER_NONE,
    TENANT_USER_VIEW,
    TENANT_USER_EDIT,
    TENANT_USER_ALL,
    TENANT_ROLE_NONE,
    TENANT_ROLE_VIEW,
    TENANT_ROLE_EDIT,
    TENANT_ROLE_ALL,
    SCENARIO_DEVICE_NONE,
    SCENARIO_DEVICE_VIEW,
    SCENARIO_DEVICE_EDIT,
    SCENARIO_DEVICE_ALL,
    SCENARIO_SENSOR_RULE_NONE,
    SCENARIO_SENSOR_RULE_VIEW,
    SCENARIO_SENSOR_RULE_EDIT,
    SCENARIO_SENSOR_RULE_ALL,
    SCENARIO_SPOT_NONE,
    SCENARIO_SPOT_VIEW,
    SCENARIO_SPOT_EDIT,
    SCENARIO_SPOT_ALL,
    SCENARIO_MEASUREMENT_NONE,
    SCENARIO_MEASUREMENT_VIEW,
    SCENARIO_MEASUREMENT_EDIT,
    SCENARIO_MEASUREMENT_ALL,
    SCENARIO_IMAGE_GENERATION_NONE,
    SCENARIO_IMAGE_GENERATION_VIEW,
    SCENARIO_IMAGE_GENERATION_EDIT,
    SCENARIO_IMAGE_GENERATION_ALL,
    SCENARIO_USER_NONE,
    SCENARIO_USER_VIEW,
    SCENARIO_USER_EDIT,
    SCENARIO_USER_ALL,
    SCENARIO_ROLE_NONE,
    SCENARIO_ROLE_VIEW,
    SCENARIO_ROLE_EDIT,
    SCENARIO_ROLE_ALL,
    SYSTEM_ADMIN_NONE,
    SYSTEM_ADMIN_VIEW,
    SYSTEM_ADMIN_EDIT,
    SYSTEM_ADMIN_ALL,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Permission;

    #[test]
    fn test_constants_cover_the_vocabulary() {
        let expected: Vec<String> = Permission::all().map(String::from).collect();
        assert_eq!(ALL, expected.as_slice());
    }
}
