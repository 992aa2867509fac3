//! Access contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

use warden_core::{ScenarioId, TenantId};

/// Where a check is being made: a tenant, and optionally one of its
/// scenarios.
///
/// The effective granted list depends on the context. Inside a scenario it
/// includes the principal's role for that scenario; outside, only the
/// tenant role applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessContext {
    /// The active tenant.
    pub tenant: TenantId,

    /// The active scenario, if any.
    #[serde(default)]
    pub scenario: Option<ScenarioId>,
}

impl AccessContext {
    /// A tenant-level context.
    pub fn tenant(tenant: TenantId) -> Self {
        Self {
            tenant,
            scenario: None,
        }
    }

    /// A context inside one scenario of a tenant.
    pub fn scenario(tenant: TenantId, scenario: ScenarioId) -> Self {
        Self {
            tenant,
            scenario: Some(scenario),
        }
    }
}

impl fmt::Display for AccessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scenario {
            Some(scenario) => write!(f, "tenant {} / scenario {}", self.tenant, scenario),
            None => write!(f, "tenant {}", self.tenant),
        }
    }
}
