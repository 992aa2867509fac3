//! Role definitions.
//!
//! A role is a named list of permission strings. The strings are kept
//! exactly as the backend stores them so that a role round-trips without
//! loss, and are validated against the grammar separately via
//! [`Role::validate`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use warden_core::error::{PermissionError, RoleError};
use warden_core::grammar::parse_strict;
use warden_core::{RoleId, Scope};

/// Where a role can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleScope {
    /// Assigned to a principal for a whole tenant.
    Tenant,

    /// Assigned to a principal for one scenario.
    Scenario,
}

impl RoleScope {
    /// Get the name of this role scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Scenario => "scenario",
        }
    }

    /// Check whether a permission in `scope` belongs on a role of this kind.
    ///
    /// Tenant roles carry `tenant:` and `system:` permissions. Scenario roles
    /// carry `scenario:` permissions only.
    pub fn accepts(&self, scope: Scope) -> bool {
        match self {
            Self::Tenant => matches!(scope, Scope::Tenant | Scope::System),
            Self::Scenario => scope == Scope::Scenario,
        }
    }
}

impl FromStr for RoleScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tenant" => Ok(Self::Tenant),
            "scenario" => Ok(Self::Scenario),
            other => Err(format!("unknown role scope '{other}'")),
        }
    }
}

impl fmt::Display for RoleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strictly role definitions are checked when they enter a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject roles that carry malformed permission strings.
    #[default]
    Strict,

    /// Accept such roles and log the malformed strings. They still grant
    /// nothing when checked.
    Lenient,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown validation mode '{other}'")),
        }
    }
}

/// A role definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier.
    pub id: RoleId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Where this role can be assigned.
    pub scope: RoleScope,

    /// Granted permission strings, as stored.
    #[serde(default)]
    pub permissions: Vec<String>,

    /// When the role was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// When the role was last updated.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Create a new role.
    pub fn new<I, S>(id: RoleId, name: impl Into<String>, scope: RoleScope, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            description: String::new(),
            scope,
            permissions: permissions.into_iter().map(Into::into).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check every permission string against the grammar and against the
    /// role's scope.
    pub fn validate(&self) -> RoleReport {
        let mut issues = Vec::new();

        for permission in &self.permissions {
            match parse_strict(permission) {
                Ok(parsed) if !self.scope.accepts(parsed.scope) => {
                    issues.push(RoleIssue::ScopeMismatch {
                        permission: permission.clone(),
                        permission_scope: parsed.scope,
                        role_scope: self.scope,
                    });
                }
                Ok(_) => {}
                Err(reason) => issues.push(RoleIssue::Malformed {
                    permission: permission.clone(),
                    reason,
                }),
            }
        }

        RoleReport {
            role: self.id,
            role_name: self.name.clone(),
            issues,
        }
    }
}

/// A problem found while validating a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleIssue {
    /// The permission string does not parse. It will never grant anything.
    Malformed {
        /// The permission string as stored
        permission: String,

        /// Why it was rejected
        reason: PermissionError,
    },

    /// The permission parses but its scope does not fit the role.
    ///
    /// This is a warning: the permission still works at check time.
    ScopeMismatch {
        /// The permission string as stored
        permission: String,

        /// Scope of the permission
        permission_scope: Scope,

        /// Scope of the role carrying it
        role_scope: RoleScope,
    },
}

impl RoleIssue {
    /// Returns `true` for issues that strict validation rejects.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

impl fmt::Display for RoleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { permission, reason } => {
                write!(f, "error: '{permission}' is malformed: {reason}")
            }
            Self::ScopeMismatch {
                permission,
                permission_scope,
                role_scope,
            } => write!(
                f,
                "warning: '{permission}' is a {permission_scope} permission on a {role_scope} role"
            ),
        }
    }
}

/// The result of validating one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleReport {
    /// The validated role.
    pub role: RoleId,

    /// The role's display name.
    pub role_name: String,

    /// Problems found, in permission order.
    pub issues: Vec<RoleIssue>,
}

impl RoleReport {
    /// Returns `true` if no issues were found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `true` if any issue is an error.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(RoleIssue::is_error)
    }

    /// Iterates over error-level issues.
    pub fn errors(&self) -> impl Iterator<Item = &RoleIssue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    /// Iterates over warning-level issues.
    pub fn warnings(&self) -> impl Iterator<Item = &RoleIssue> {
        self.issues.iter().filter(|i| !i.is_error())
    }

    /// Convert the first error into a [`RoleError`].
    ///
    /// # Errors
    ///
    /// Returns [`RoleError::InvalidPermission`] if the report has errors.
    pub fn into_result(self) -> Result<(), RoleError> {
        let role = self.role;
        match self.issues.into_iter().find(RoleIssue::is_error) {
            Some(RoleIssue::Malformed { permission, reason }) => {
                Err(RoleError::InvalidPermission {
                    role,
                    permission,
                    source: reason,
                })
            }
            _ => Ok(()),
        }
    }
}
