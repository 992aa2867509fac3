use chrono::{DateTime, Utc};
use dashmap::DashMap;

use warden_core::{CheckMode, PrincipalId};

use crate::model::AccessContext;

/// A recorded authorization decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// When the decision was made.
    pub timestamp: DateTime<Utc>,

    /// The principal that was checked.
    pub principal: PrincipalId,

    /// The context of the check.
    pub context: AccessContext,

    /// The required permissions, as passed by the caller.
    pub required: Vec<String>,

    /// How `required` was combined.
    pub mode: CheckMode,

    /// Whether access was allowed.
    pub allowed: bool,
}

/// A thread-safe, bounded log of authorization decisions per principal.
pub struct DecisionLog {
    /// Decisions by principal, oldest first.
    entries: DashMap<PrincipalId, Vec<Decision>>,

    /// Maximum number of decisions kept per principal.
    max_entries_per_principal: usize,
}

impl DecisionLog {
    /// Creates a new log keeping at most `max_entries_per_principal`
    /// decisions for each principal.
    pub fn new(max_entries_per_principal: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries_per_principal,
        }
    }

    /// Records a decision, dropping the principal's oldest entries if the
    /// limit is exceeded.
    pub fn record(&self, decision: Decision) {
        let mut entries = self.entries.entry(decision.principal).or_default();
        entries.push(decision);

        if entries.len() > self.max_entries_per_principal {
            let excess = entries.len() - self.max_entries_per_principal;
            entries.drain(0..excess);
        }
    }

    /// Gets the decisions recorded for a principal, oldest first.
    pub fn entries(&self, principal: &PrincipalId) -> Vec<Decision> {
        self.entries
            .get(principal)
            .map(|e| e.value().clone())
            .unwrap_or_default()
    }

    /// Gets the denied decisions recorded for a principal.
    pub fn denials(&self, principal: &PrincipalId) -> Vec<Decision> {
        self.entries(principal)
            .into_iter()
            .filter(|d| !d.allowed)
            .collect()
    }

    /// Clears the decisions for one principal.
    pub fn clear(&self, principal: &PrincipalId) {
        self.entries.remove(principal);
    }

    /// Clears all decisions.
    pub fn clear_all(&self) {
        self.entries.clear();
    }

    /// Gets the maximum number of decisions kept per principal.
    pub fn max_entries_per_principal(&self) -> usize {
        self.max_entries_per_principal
    }
}
