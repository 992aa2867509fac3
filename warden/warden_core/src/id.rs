//! Strongly-typed identifiers for Warden.
//!
//! Tenants, scenarios, roles and principals are all identified by UUIDs
//! issued by the backend. Each identifier type is a thin wrapper around a
//! UUID with a phantom marker so that, for example, a scenario ID can never
//! be passed where a tenant ID is expected.
//!
//! # Examples
//!
//! ```
//! use warden_core::id::{TenantId, ScenarioId};
//! use std::str::FromStr;
//!
//! let tenant = TenantId::new();
//! let scenario = ScenarioId::new();
//! assert_ne!(tenant.to_string(), scenario.to_string());
//!
//! let id_str = "550e8400-e29b-41d4-a716-446655440000";
//! let tenant = TenantId::from_str(id_str).unwrap();
//! assert_eq!(tenant.to_string(), id_str);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// A type-safe identifier based on UUID.
///
/// Serializes as the bare UUID string, which is how the backend stores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    uuid: Uuid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create an identifier from a known UUID.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_core::id::RoleId;
    /// use uuid::Uuid;
    ///
    /// let uuid = Uuid::new_v4();
    /// let id = RoleId::from_uuid(uuid);
    /// assert_eq!(id.uuid(), uuid);
    /// ```
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Create a nil (all zeros) identifier.
    pub fn nil() -> Self {
        Self::from_uuid(Uuid::nil())
    }

    /// Check if this is a nil identifier.
    pub fn is_nil(&self) -> bool {
        self.uuid.is_nil()
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_uuid(Uuid::parse_str(s)?))
    }
}

/// Marker type for tenants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenantMarker;
/// Identifier for a tenant (organization).
pub type TenantId = Id<TenantMarker>;

/// Marker type for scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScenarioMarker;
/// Identifier for a scenario nested under a tenant.
pub type ScenarioId = Id<ScenarioMarker>;

/// Marker type for roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleMarker;
/// Identifier for a role.
pub type RoleId = Id<RoleMarker>;

/// Marker type for principals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrincipalMarker;
/// Identifier for an authenticated principal (user).
pub type PrincipalId = Id<PrincipalMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_new() {
        let id1 = TenantId::new();
        let id2 = TenantId::new();
        assert_ne!(id1, id2, "Generated IDs should be unique");
    }

    #[test]
    fn test_id_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = ScenarioId::from_str(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);

        assert!(ScenarioId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_id_nil() {
        let nil_id = RoleId::nil();
        assert_eq!(nil_id.to_string(), "00000000-0000-0000-0000-000000000000");
        assert!(nil_id.is_nil());
        assert!(!RoleId::new().is_nil());
    }

    #[test]
    fn test_same_uuid_different_types() {
        let uuid = Uuid::new_v4();
        let tenant = TenantId::from_uuid(uuid);
        let scenario = ScenarioId::from_uuid(uuid);

        // Same UUID, but these are distinct types and cannot be compared.
        assert_eq!(tenant.uuid(), scenario.uuid());
    }

    #[test]
    fn test_id_serializes_as_bare_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = PrincipalId::from_str(uuid_str).unwrap();

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{uuid_str}\""));

        let back: PrincipalId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
