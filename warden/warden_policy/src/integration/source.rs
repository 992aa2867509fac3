//! Granted-permission sources.

use std::sync::Arc;

use warden_core::error::Result;
use warden_core::PrincipalId;

use crate::model::AccessContext;

/// Resolves the effective granted-permission list for a principal in a
/// context.
///
/// Implementations are expected to return a fresh snapshot on every call.
/// Nothing downstream caches the result, so a role edited between two calls
/// is picked up by the second.
///
/// # Examples
///
/// ```
/// use warden_policy::{source_fn, AccessContext, Authorizer};
/// use warden_core::{PrincipalId, TenantId};
///
/// let authorizer = Authorizer::new(source_fn(|_principal, _context| {
///     Ok(vec!["tenant:user-view".to_string()])
/// }));
///
/// let context = AccessContext::tenant(TenantId::new());
/// assert!(authorizer.check(&PrincipalId::new(), &context, "tenant:user-view").unwrap());
/// ```
pub trait PermissionSource: Send + Sync {
    /// Get the permission strings granted to `principal` in `context`.
    ///
    /// A principal with no roles in the context resolves to an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails, for example because an
    /// assignment references a role that no longer exists.
    fn granted_permissions(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
    ) -> Result<Vec<String>>;
}

impl<S: PermissionSource + ?Sized> PermissionSource for &S {
    fn granted_permissions(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
    ) -> Result<Vec<String>> {
        (**self).granted_permissions(principal, context)
    }
}

impl<S: PermissionSource + ?Sized> PermissionSource for Arc<S> {
    fn granted_permissions(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
    ) -> Result<Vec<String>> {
        (**self).granted_permissions(principal, context)
    }
}

/// A [`PermissionSource`] backed by a closure.
pub struct FnSource<F>(F);

impl<F> PermissionSource for FnSource<F>
where
    F: Fn(&PrincipalId, &AccessContext) -> Result<Vec<String>> + Send + Sync,
{
    fn granted_permissions(
        &self,
        principal: &PrincipalId,
        context: &AccessContext,
    ) -> Result<Vec<String>> {
        (self.0)(principal, context)
    }
}

/// Wrap a closure as a [`PermissionSource`].
pub fn source_fn<F>(f: F) -> FnSource<F>
where
    F: Fn(&PrincipalId, &AccessContext) -> Result<Vec<String>> + Send + Sync,
{
    FnSource(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::TenantId;

    #[test]
    fn test_fn_source_sees_context() {
        let tenant = TenantId::new();
        let source = source_fn(move |_, context: &AccessContext| {
            if context.tenant == tenant {
                Ok(vec!["tenant:role-view".to_string()])
            } else {
                Ok(Vec::new())
            }
        });

        let principal = PrincipalId::new();
        let granted = source
            .granted_permissions(&principal, &AccessContext::tenant(tenant))
            .unwrap();
        assert_eq!(granted, vec!["tenant:role-view"]);

        let other = source
            .granted_permissions(&principal, &AccessContext::tenant(TenantId::new()))
            .unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn test_shared_source() {
        let source: Arc<dyn PermissionSource> =
            Arc::new(source_fn(|_, _| Ok(vec!["system:admin-view".to_string()])));
        let granted = source
            .granted_permissions(&PrincipalId::new(), &AccessContext::tenant(TenantId::new()))
            .unwrap();
        assert_eq!(granted.len(), 1);
    }
}
