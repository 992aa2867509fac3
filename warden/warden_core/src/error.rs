//! Error types for the Warden authorization system.
//!
//! The coverage checks in [`crate::check`] never return errors: a malformed
//! permission simply grants nothing. The errors here serve the boundaries
//! around those checks, such as validating role definitions when they are
//! authored or loaded, resolving a principal's roles, and reading catalogs.
//!
//! The root error type, `Error`, can wrap any of the concern-specific errors.

use crate::id::{PrincipalId, RoleId, TenantId};
use crate::model::Scope;
use thiserror::Error;

/// Root error type for Warden.
#[derive(Debug, Error)]
pub enum Error {
    /// A permission string failed boundary validation
    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),

    /// Role definition or role lookup errors
    #[error("Role error: {0}")]
    Role(#[from] RoleError),

    /// Catalog and configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The principal's granted permissions do not cover the requirement
    #[error("Access denied for principal {principal}: requires {required}")]
    AccessDenied {
        /// The principal that was checked
        principal: PrincipalId,

        /// The requirement that was not satisfied, as written by the caller
        required: String,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a permission string is malformed.
///
/// Each variant names the grammar rule that rejected the string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The string is empty
    #[error("Permission string is empty")]
    Empty,

    /// The string does not contain exactly one `-` separator
    #[error("Expected exactly one '-' in '{permission}', found {found}")]
    ActionSeparator {
        /// The offending permission string
        permission: String,

        /// Number of `-` characters found
        found: usize,
    },

    /// The part before the action does not contain exactly one `:` separator
    #[error("Expected exactly one ':' in '{permission}', found {found}")]
    ScopeSeparator {
        /// The offending permission string
        permission: String,

        /// Number of `:` characters found
        found: usize,
    },

    /// One of the three components is empty
    #[error("Empty {component} in '{permission}'")]
    EmptyComponent {
        /// The offending permission string
        permission: String,

        /// Which component is empty (`scope`, `resource` or `action`)
        component: &'static str,
    },

    /// The scope is not one of `tenant`, `scenario`, `system`
    #[error("Unknown scope: {0}")]
    UnknownScope(String),

    /// The resource is not registered for the scope
    #[error("Unknown resource '{resource}' for scope {scope}")]
    UnknownResource {
        /// The (valid) scope of the permission
        scope: Scope,

        /// The unrecognized resource name
        resource: String,
    },

    /// The action is not one of `none`, `view`, `edit`, `all`
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Errors related to role definitions and role lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// Role with the given ID was not found
    #[error("Role not found: {0}")]
    NotFound(RoleId),

    /// A role with the same ID already exists
    #[error("Role already exists: {0}")]
    Conflict(RoleId),

    /// A role carries a malformed permission string
    #[error("Role {role} has invalid permission '{permission}': {source}")]
    InvalidPermission {
        /// The role carrying the permission
        role: RoleId,

        /// The permission string as stored on the role
        permission: String,

        /// Why the string was rejected
        #[source]
        source: PermissionError,
    },

    /// A role was assigned in a context of the wrong kind
    #[error("Role {role} is a {actual} role, expected a {expected} role")]
    WrongScope {
        /// The assigned role
        role: RoleId,

        /// The kind of role the assignment slot requires
        expected: String,

        /// The kind of role that was found
        actual: String,
    },

    /// Principal already has an assignment in the tenant
    #[error("Principal {principal} already has an assignment in tenant {tenant}")]
    DuplicateAssignment {
        /// The principal
        principal: PrincipalId,

        /// The tenant
        tenant: TenantId,
    },
}

/// Errors related to loading role catalogs and configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration source
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    /// Failed to parse the configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// The file extension does not name a supported format
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// The configuration parsed but is inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type used throughout Warden.
pub type Result<T> = std::result::Result<T, Error>;
