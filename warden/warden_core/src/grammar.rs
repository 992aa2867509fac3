//! Permission string grammar.
//!
//! A permission string has the form `scope:resource-action`. Splitting is
//! asymmetric and must stay that way for compatibility with stored role
//! records:
//!
//! 1. Split the whole string on `-` into exactly two non-empty parts,
//!    `prefix` and `action`.
//! 2. Split `prefix` on `:` into exactly two non-empty parts, `scope` and
//!    `resource`.
//! 3. Validate `scope` against [`Scope`], `resource` against the scope's
//!    registered resources, and `action` against [`Action`].
//!
//! Because step 1 splits the whole string, resource names can never contain
//! `-`.

use crate::error::PermissionError;
use crate::model::{Action, ParsedPermission, Resource, Scope};

/// Parse a permission string, treating any malformed input as absent.
///
/// This is the form used during checks: an invalid permission confers no
/// capability and is never an error that halts evaluation.
///
/// # Examples
///
/// ```
/// use warden_core::{parse, Action, Resource, Scope};
///
/// let parsed = parse("tenant:user-edit").unwrap();
/// assert_eq!(parsed.scope, Scope::Tenant);
/// assert_eq!(parsed.resource, Resource::User);
/// assert_eq!(parsed.action, Action::Edit);
///
/// assert!(parse("tenant:device-edit").is_none());
/// assert!(parse("garbage").is_none());
/// ```
pub fn parse(permission: &str) -> Option<ParsedPermission> {
    parse_strict(permission).ok()
}

/// Parse a permission string, reporting which grammar rule rejected it.
///
/// # Errors
///
/// Returns the [`PermissionError`] for the first rule that fails.
pub fn parse_strict(permission: &str) -> Result<ParsedPermission, PermissionError> {
    if permission.is_empty() {
        return Err(PermissionError::Empty);
    }

    let (prefix, action) = split_exactly_once(permission, '-').ok_or_else(|| {
        PermissionError::ActionSeparator {
            permission: permission.to_string(),
            found: permission.matches('-').count(),
        }
    })?;
    if prefix.is_empty() {
        return Err(empty_component(permission, "scope"));
    }
    if action.is_empty() {
        return Err(empty_component(permission, "action"));
    }

    let (scope, resource) =
        split_exactly_once(prefix, ':').ok_or_else(|| PermissionError::ScopeSeparator {
            permission: permission.to_string(),
            found: prefix.matches(':').count(),
        })?;
    if scope.is_empty() {
        return Err(empty_component(permission, "scope"));
    }
    if resource.is_empty() {
        return Err(empty_component(permission, "resource"));
    }

    let scope: Scope = scope.parse()?;
    let resource = Resource::from_name(resource)
        .filter(|r| scope.allows(*r))
        .ok_or_else(|| PermissionError::UnknownResource {
            scope,
            resource: resource.to_string(),
        })?;
    let action: Action = action.parse()?;

    Ok(ParsedPermission {
        scope,
        resource,
        action,
    })
}

/// Split on `sep`, succeeding only if `sep` occurs exactly once.
fn split_exactly_once(s: &str, sep: char) -> Option<(&str, &str)> {
    let (head, tail) = s.split_once(sep)?;
    if tail.contains(sep) {
        return None;
    }
    Some((head, tail))
}

fn empty_component(permission: &str, component: &'static str) -> PermissionError {
    PermissionError::EmptyComponent {
        permission: permission.to_string(),
        component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let p = parse("scenario:image_generation-all").unwrap();
        assert_eq!(p.scope, Scope::Scenario);
        assert_eq!(p.resource, Resource::ImageGeneration);
        assert_eq!(p.action, Action::All);

        let p = parse("system:admin-none").unwrap();
        assert_eq!(p.scope, Scope::System);
        assert_eq!(p.action, Action::None);
    }

    #[test]
    fn test_separator_counts() {
        assert_eq!(
            parse_strict("tenant:user"),
            Err(PermissionError::ActionSeparator {
                permission: "tenant:user".to_string(),
                found: 0,
            })
        );
        assert_eq!(
            parse_strict("scenario:image-generation-view"),
            Err(PermissionError::ActionSeparator {
                permission: "scenario:image-generation-view".to_string(),
                found: 2,
            })
        );
        assert_eq!(
            parse_strict("tenant:user:extra-view"),
            Err(PermissionError::ScopeSeparator {
                permission: "tenant:user:extra-view".to_string(),
                found: 2,
            })
        );
        assert_eq!(
            parse_strict("tenantuser-view"),
            Err(PermissionError::ScopeSeparator {
                permission: "tenantuser-view".to_string(),
                found: 0,
            })
        );
    }

    #[test]
    fn test_empty_components() {
        assert_eq!(parse_strict(""), Err(PermissionError::Empty));

        let cases = [
            ("-view", "scope"),
            ("tenant:user-", "action"),
            (":user-view", "scope"),
            ("tenant:-view", "resource"),
            ("-", "scope"),
        ];
        for (input, component) in cases {
            assert_eq!(
                parse_strict(input),
                Err(PermissionError::EmptyComponent {
                    permission: input.to_string(),
                    component,
                }),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_unknown_components() {
        assert_eq!(
            parse_strict("notascope:x-y"),
            Err(PermissionError::UnknownScope("notascope".to_string()))
        );
        assert_eq!(
            parse_strict("tenant:device-view"),
            Err(PermissionError::UnknownResource {
                scope: Scope::Tenant,
                resource: "device".to_string(),
            })
        );
        assert_eq!(
            parse_strict("system:user-all"),
            Err(PermissionError::UnknownResource {
                scope: Scope::System,
                resource: "user".to_string(),
            })
        );
        assert_eq!(
            parse_strict("tenant:user-delete"),
            Err(PermissionError::UnknownAction("delete".to_string()))
        );
    }

    #[test]
    fn test_colon_after_dash_lands_in_action() {
        // Splitting on '-' happens first, so the ':' ends up in the action.
        assert_eq!(
            parse_strict("tenant:user-ed:it"),
            Err(PermissionError::UnknownAction("ed:it".to_string()))
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert!(parse("Tenant:user-view").is_none());
        assert!(parse("tenant:User-view").is_none());
        assert!(parse("tenant:user-View").is_none());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse("scenario:spot-edit");
        let second = parse("scenario:spot-edit");
        assert_eq!(first, second);
    }
}
