//! Scopes and the resources registered under them.
//!
//! Scopes are never interchangeable: the same resource name under two
//! scopes (for example `user` under `tenant` and under `scenario`) names two
//! unrelated protected entity classes.
//!
//! Resource wire names must not contain `-`, since the grammar splits the
//! whole permission string on `-` to find the action. Use `_` instead, as
//! `sensor_rule` and `image_generation` do.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PermissionError;

/// Authorization boundary a permission applies within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Organization-wide within one tenant.
    Tenant,

    /// Within one scenario nested under a tenant.
    Scenario,

    /// Platform-wide administrative capability.
    System,
}

impl Scope {
    /// Every scope, in declaration order.
    pub const ALL: [Scope; 3] = [Scope::Tenant, Scope::Scenario, Scope::System];

    /// Get the wire name of this scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Scenario => "scenario",
            Self::System => "system",
        }
    }

    /// The fixed set of resources recognized within this scope.
    pub fn resources(&self) -> &'static [Resource] {
        match self {
            Self::Tenant => &[Resource::Scenario, Resource::User, Resource::Role],
            Self::Scenario => &[
                Resource::Device,
                Resource::SensorRule,
                Resource::Spot,
                Resource::Measurement,
                Resource::ImageGeneration,
                Resource::User,
                Resource::Role,
            ],
            Self::System => &[Resource::Admin],
        }
    }

    /// Check whether `resource` is registered for this scope.
    pub fn allows(&self, resource: Resource) -> bool {
        self.resources().contains(&resource)
    }
}

impl FromStr for Scope {
    type Err = PermissionError;

    /// Parse a scope from its wire name. Matching is exact (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tenant" => Ok(Self::Tenant),
            "scenario" => Ok(Self::Scenario),
            "system" => Ok(Self::System),
            _ => Err(PermissionError::UnknownScope(s.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A protected entity class.
///
/// A resource is only meaningful together with a [`Scope`] that registers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Scenarios of a tenant.
    Scenario,

    /// Users (tenant members or scenario members).
    User,

    /// Role definitions.
    Role,

    /// IoT devices.
    Device,

    /// Rules evaluated over sensor readings.
    SensorRule,

    /// Named locations within a scenario.
    Spot,

    /// Sensor measurements.
    Measurement,

    /// Generated imagery.
    ImageGeneration,

    /// Platform administration.
    Admin,
}

impl Resource {
    /// Every resource, in declaration order.
    pub const ALL: [Resource; 9] = [
        Resource::Scenario,
        Resource::User,
        Resource::Role,
        Resource::Device,
        Resource::SensorRule,
        Resource::Spot,
        Resource::Measurement,
        Resource::ImageGeneration,
        Resource::Admin,
    ];

    /// Get the wire name of this resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scenario => "scenario",
            Self::User => "user",
            Self::Role => "role",
            Self::Device => "device",
            Self::SensorRule => "sensor_rule",
            Self::Spot => "spot",
            Self::Measurement => "measurement",
            Self::ImageGeneration => "image_generation",
            Self::Admin => "admin",
        }
    }

    /// Look up a resource by wire name, regardless of scope.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
