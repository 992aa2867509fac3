//! Parsed and validated permissions.
//!
//! [`ParsedPermission`] is the transient `{scope, resource, action}` triple
//! produced while evaluating a check. [`Permission`] is a permission string
//! that has already passed the grammar, for use where role definitions are
//! authored or loaded and malformed strings should be rejected eagerly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Action, Resource, Scope};
use crate::error::PermissionError;
use crate::grammar;

/// The structured form of a permission string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedPermission {
    /// The authorization boundary.
    pub scope: Scope,

    /// The protected entity class, registered under `scope`.
    pub resource: Resource,

    /// The access level.
    pub action: Action,
}

impl ParsedPermission {
    /// Build a parsed permission from its components.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionError::UnknownResource`] if `resource` is not
    /// registered under `scope`.
    pub fn new(scope: Scope, resource: Resource, action: Action) -> Result<Self, PermissionError> {
        if !scope.allows(resource) {
            return Err(PermissionError::UnknownResource {
                scope,
                resource: resource.as_str().to_string(),
            });
        }
        Ok(Self {
            scope,
            resource,
            action,
        })
    }
}

impl FromStr for ParsedPermission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grammar::parse_strict(s)
    }
}

impl fmt::Display for ParsedPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.scope, self.resource, self.action)
    }
}

/// A permission string known to be well-formed.
///
/// Serializes as the plain string, so it is wire-compatible with the
/// permission arrays stored in role records.
///
/// # Examples
///
/// ```
/// use warden_core::{Action, Permission, Scope};
///
/// let perm = Permission::new("scenario:device-edit").unwrap();
/// assert_eq!(perm.scope(), Scope::Scenario);
/// assert_eq!(perm.action(), Action::Edit);
///
/// assert!(Permission::new("scenario:device").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    raw: String,
    parsed: ParsedPermission,
}

impl Permission {
    /// Validate a permission string.
    ///
    /// # Errors
    ///
    /// Returns the [`PermissionError`] naming the grammar rule that failed.
    pub fn new(permission: impl Into<String>) -> Result<Self, PermissionError> {
        let raw = permission.into();
        let parsed = grammar::parse_strict(&raw)?;
        Ok(Self { raw, parsed })
    }

    /// Every valid permission, ordered by scope, then resource, then action.
    pub fn all() -> impl Iterator<Item = Permission> {
        Scope::ALL.into_iter().flat_map(|scope| {
            scope.resources().iter().flat_map(move |&resource| {
                Action::ALL.into_iter().map(move |action| {
                    Permission::from(ParsedPermission {
                        scope,
                        resource,
                        action,
                    })
                })
            })
        })
    }

    /// The permission string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed triple.
    pub fn parsed(&self) -> ParsedPermission {
        self.parsed
    }

    /// The scope component.
    pub fn scope(&self) -> Scope {
        self.parsed.scope
    }

    /// The resource component.
    pub fn resource(&self) -> Resource {
        self.parsed.resource
    }

    /// The action component.
    pub fn action(&self) -> Action {
        self.parsed.action
    }
}

impl From<ParsedPermission> for Permission {
    fn from(parsed: ParsedPermission) -> Self {
        Self {
            raw: parsed.to_string(),
            parsed,
        }
    }
}

impl TryFrom<String> for Permission {
    type Error = PermissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Permission {
    type Error = PermissionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.raw
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
