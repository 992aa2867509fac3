use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use warden_core::check::{check, PermissionSet};
use warden_core::error::{Error, Result};
use warden_core::{CheckMode, PrincipalId};

use super::audit::{Decision, DecisionLog};
use crate::integration::PermissionSource;
use crate::model::AccessContext;

/// Authorizes principals against required permissions.
///
/// Each call resolves the principal's granted permissions afresh through the
/// injected [`PermissionSource`] and hands them to the core checks. Nothing
/// is cached between calls.
pub struct Authorizer<S> {
    /// Where granted permissions come from.
    source: S,

    /// Optional log of decisions.
    audit_log: Option<Arc<DecisionLog>>,
}

impl<S: PermissionSource> Authorizer<S> {
    /// Creates a new authorizer over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            audit_log: None,
        }
    }

    /// Creates a new authorizer that records every decision in `audit_log`.
    pub fn with_audit(source: S, audit_log: Arc<DecisionLog>) -> Self {
        Self {
            source,
            audit_log: Some(audit_log),
        }
    }

    /// Sets the decision log for this authorizer.
    pub fn set_audit_log(&mut self, audit_log: Option<Arc<DecisionLog>>) {
        self.audit_log = audit_log;
    }

    /// Gets a reference to the permission source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Gets a reference to the decision log, if one is configured.
    pub fn audit_log(&self) -> Option<&Arc<DecisionLog>> {
        self.audit_log.as_ref()
    }

    /// Resolves the principal's granted permissions in `context`.
    ///
    /// Useful when a caller performs many checks for the same principal in
    /// the same render or request.
    pub fn granted(&self, principal: &PrincipalId, context: &AccessContext) -> Result<PermissionSet> {
        let granted = self.source.granted_permissions(principal, context)?;
        Ok(granted.into_iter().collect())
    }

    /// Checks a single required permission.
    pub fn check(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
        required: &str,
    ) -> Result<bool> {
        self.decide(principal, context, &[required], CheckMode::All)
    }

    /// Checks that every permission in `required` is covered.
    ///
    /// An empty `required` list is allowed unconditionally.
    pub fn check_all<R: AsRef<str>>(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
        required: &[R],
    ) -> Result<bool> {
        self.decide(principal, context, required, CheckMode::All)
    }

    /// Checks that at least one permission in `required` is covered.
    ///
    /// An empty `required` list is always denied.
    pub fn check_any<R: AsRef<str>>(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
        required: &[R],
    ) -> Result<bool> {
        self.decide(principal, context, required, CheckMode::Any)
    }

    /// Checks `required` combined according to `mode`.
    pub fn check_with_mode<R: AsRef<str>>(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
        required: &[R],
        mode: CheckMode,
    ) -> Result<bool> {
        self.decide(principal, context, required, mode)
    }

    /// Like [`check`](Self::check), but turns a denial into
    /// [`Error::AccessDenied`].
    pub fn require(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
        required: &str,
    ) -> Result<()> {
        if self.check(principal, context, required)? {
            Ok(())
        } else {
            Err(Error::AccessDenied {
                principal: *principal,
                required: required.to_string(),
            })
        }
    }

    fn decide<R: AsRef<str>>(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
        required: &[R],
        mode: CheckMode,
    ) -> Result<bool> {
        let granted = self.source.granted_permissions(principal, context)?;
        let allowed = check(&granted, required, mode);

        let required: Vec<String> = required.iter().map(|r| r.as_ref().to_string()).collect();
        debug!(
            principal = %principal,
            %context,
            %mode,
            ?required,
            allowed,
            "Authorization decision"
        );

        if let Some(audit_log) = &self.audit_log {
            audit_log.record(Decision {
                timestamp: Utc::now(),
                principal: *principal,
                context: *context,
                required,
                mode,
                allowed,
            });
        }

        Ok(allowed)
    }
}
