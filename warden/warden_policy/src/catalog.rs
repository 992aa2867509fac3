//! Role catalogs.
//!
//! A catalog is the serialized form of a role store: role definitions plus
//! the assignments that reference them. Catalogs are read from TOML or JSON
//! files, selected by extension, and can be validated as a whole before they
//! are turned into an [`InMemoryRoleStore`].
//!
//! ```toml
//! validation = "strict"
//!
//! [[roles]]
//! id = "7d8c1c7e-2f8e-4a57-9b0b-3c4f51b5b001"
//! name = "Operator"
//! scope = "scenario"
//! permissions = ["scenario:device-edit", "scenario:spot-view"]
//!
//! [[assignments]]
//! principal = "0e4b6c1a-54d6-4c55-8d1f-6a9d3b0a0001"
//! tenant = "5f0c3f0e-8e0f-4a43-9f43-2b1f7d2c0001"
//!
//! [assignments.scenario_roles]
//! "c3a1d2b4-1111-4e2f-a7a8-9d9c7b6a0001" = "7d8c1c7e-2f8e-4a57-9b0b-3c4f51b5b001"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

use warden_core::error::{ConfigError, Result, RoleError};
use warden_core::RoleId;

use crate::model::{Assignment, Role, RoleReport, RoleScope, ValidationMode};
use crate::store::{InMemoryRoleStore, RoleStore};

/// Role definitions and assignments, as read from a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleCatalog {
    /// How role permission strings are validated when the catalog is loaded
    /// into a store.
    #[serde(default)]
    pub validation: ValidationMode,

    /// Role definitions.
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Role assignments.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl RoleCatalog {
    /// Parse a catalog from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ConfigError::ParseFailed(e.to_string()).into())
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| ConfigError::ParseFailed(e.to_string()).into())
    }

    /// Load a catalog from a `.toml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension,
    /// [`ConfigError::LoadFailed`] if the file cannot be read and
    /// [`ConfigError::ParseFailed`] if it does not deserialize.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        if !matches!(extension, "toml" | "json") {
            return Err(ConfigError::UnsupportedFormat(format!(
                "'{}' (expected .toml or .json)",
                path.display()
            ))
            .into());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))?;

        let catalog = if extension == "toml" {
            Self::from_toml_str(&contents)?
        } else {
            Self::from_json_str(&contents)?
        };

        info!(
            path = %path.display(),
            roles = catalog.roles.len(),
            assignments = catalog.assignments.len(),
            "Loaded role catalog"
        );

        Ok(catalog)
    }

    /// Override the validation mode read from the file.
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Find a role by ID.
    pub fn role(&self, role_id: &RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| &r.id == role_id)
    }

    /// Validate every role and the references between roles and assignments.
    ///
    /// Unlike [`into_store`](Self::into_store), this never stops at the first
    /// problem.
    pub fn validate(&self) -> CatalogReport {
        let roles = self.roles.iter().map(Role::validate).collect();
        let mut structural = Vec::new();

        let mut scopes: HashMap<RoleId, RoleScope> = HashMap::new();
        for role in &self.roles {
            if scopes.insert(role.id, role.scope).is_some() {
                structural.push(RoleError::Conflict(role.id));
            }
        }

        let mut check_slot = |role_id: &RoleId, expected: RoleScope| match scopes.get(role_id) {
            None => structural.push(RoleError::NotFound(*role_id)),
            Some(actual) if *actual != expected => structural.push(RoleError::WrongScope {
                role: *role_id,
                expected: expected.to_string(),
                actual: actual.to_string(),
            }),
            Some(_) => {}
        };

        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for assignment in &self.assignments {
            if !seen.insert((assignment.principal, assignment.tenant)) {
                duplicates.push(RoleError::DuplicateAssignment {
                    principal: assignment.principal,
                    tenant: assignment.tenant,
                });
            }
            if let Some(role_id) = &assignment.tenant_role {
                check_slot(role_id, RoleScope::Tenant);
            }
            for role_id in assignment.scenario_roles.values() {
                check_slot(role_id, RoleScope::Scenario);
            }
        }
        structural.extend(duplicates);

        CatalogReport { roles, structural }
    }

    /// Build a role store from this catalog.
    ///
    /// Roles are added with the catalog's validation mode, then assignments
    /// are applied. The first problem aborts the load.
    pub fn into_store(self) -> Result<InMemoryRoleStore> {
        let store = InMemoryRoleStore::with_validation(self.validation);

        for role in self.roles {
            store.add_role(role)?;
        }

        let mut seen = HashSet::new();
        for assignment in self.assignments {
            if !seen.insert((assignment.principal, assignment.tenant)) {
                return Err(RoleError::DuplicateAssignment {
                    principal: assignment.principal,
                    tenant: assignment.tenant,
                }
                .into());
            }
            store.assign(assignment)?;
        }

        info!(
            roles = store.list_roles()?.len(),
            assignments = seen.len(),
            mode = ?store.validation_mode(),
            "Built role store from catalog"
        );

        Ok(store)
    }
}

/// The result of validating a whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    /// One report per role, in catalog order.
    pub roles: Vec<RoleReport>,

    /// Problems with IDs and references between roles and assignments.
    pub structural: Vec<RoleError>,
}

impl CatalogReport {
    /// Number of error-level role issues.
    pub fn error_count(&self) -> usize {
        self.roles.iter().map(|r| r.errors().count()).sum()
    }

    /// Number of warning-level role issues.
    pub fn warning_count(&self) -> usize {
        self.roles.iter().map(|r| r.warnings().count()).sum()
    }

    /// Whether the catalog would load under `mode`.
    ///
    /// Structural problems always fail. Malformed permissions only fail
    /// under [`ValidationMode::Strict`]. Warnings never fail.
    pub fn passes(&self, mode: ValidationMode) -> bool {
        if !self.structural.is_empty() {
            return false;
        }
        match mode {
            ValidationMode::Strict => self.error_count() == 0,
            ValidationMode::Lenient => true,
        }
    }
}
