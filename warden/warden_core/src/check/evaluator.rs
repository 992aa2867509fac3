use crate::grammar::parse;
use crate::hierarchy;
use crate::model::ParsedPermission;

/// Decide whether one granted permission satisfies one required permission.
///
/// 1. Identical non-empty strings always match, even if the action is not
///    one the hierarchy knows about.
/// 2. If either side fails to parse, the answer is `false`.
/// 3. Scopes must be equal: a tenant grant never satisfies a scenario
///    requirement, even with the same resource and action names.
/// 4. Resources must be equal.
/// 5. The required action must be implied by the granted action.
///
/// This never panics and never reports errors; malformed permissions are
/// simply non-covering.
///
/// # Examples
///
/// ```
/// use warden_core::covers;
///
/// assert!(covers("tenant:user-edit", "tenant:user-view"));
/// assert!(!covers("tenant:user-view", "tenant:user-edit"));
/// assert!(!covers("tenant:user-all", "scenario:user-view"));
/// assert!(!covers("garbage", "tenant:user-view"));
/// ```
pub fn covers(granted: &str, required: &str) -> bool {
    if granted.is_empty() || required.is_empty() {
        return false;
    }
    if granted == required {
        return true;
    }

    match (parse(granted), parse(required)) {
        (Some(granted), Some(required)) => covers_parsed(&granted, &required),
        _ => false,
    }
}

/// Coverage over already-parsed permissions (steps 3 to 5 of [`covers`]).
pub(crate) fn covers_parsed(granted: &ParsedPermission, required: &ParsedPermission) -> bool {
    granted.scope == required.scope
        && granted.resource == required.resource
        && hierarchy::implies(granted.action, required.action)
}
