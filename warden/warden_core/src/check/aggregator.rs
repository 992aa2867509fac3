use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::evaluator::{covers, covers_parsed};
use crate::grammar::parse;
use crate::model::ParsedPermission;

/// How a list of required permissions is combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Every required permission must be covered. An empty requirement list
    /// is vacuously satisfied.
    #[default]
    All,

    /// At least one required permission must be covered. An empty
    /// requirement list is never satisfied.
    Any,
}

impl FromStr for CheckMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "any" => Ok(Self::Any),
            other => Err(format!("unknown check mode '{other}', expected 'all' or 'any'")),
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Any => f.write_str("any"),
        }
    }
}

/// Check whether any granted permission covers `required`.
///
/// An empty `granted` list never covers anything.
pub fn has_permission<S: AsRef<str>>(granted: &[S], required: &str) -> bool {
    granted.iter().any(|g| covers(g.as_ref(), required))
}

/// Check whether every permission in `required` is covered.
///
/// An empty `required` list returns `true` unconditionally. Callers that
/// need deny-by-default behavior must not pass an empty list.
///
/// # Examples
///
/// ```
/// use warden_core::has_all_permissions;
///
/// let granted = ["tenant:scenario-view", "tenant:user-all"];
/// assert!(has_all_permissions(&granted, &["tenant:scenario-view", "tenant:user-edit"]));
/// assert!(!has_all_permissions(&granted, &["tenant:scenario-edit"]));
/// assert!(has_all_permissions(&granted, &[] as &[&str]));
/// ```
pub fn has_all_permissions<S: AsRef<str>, R: AsRef<str>>(granted: &[S], required: &[R]) -> bool {
    required
        .iter()
        .all(|r| has_permission(granted, r.as_ref()))
}

/// Check whether at least one permission in `required` is covered.
///
/// An empty `required` list returns `false`. This is the
/// opposite of [`has_all_permissions`] for the same input.
pub fn has_any_permission<S: AsRef<str>, R: AsRef<str>>(granted: &[S], required: &[R]) -> bool {
    required
        .iter()
        .any(|r| has_permission(granted, r.as_ref()))
}

/// Combine `required` according to `mode`.
pub fn check<S: AsRef<str>, R: AsRef<str>>(granted: &[S], required: &[R], mode: CheckMode) -> bool {
    match mode {
        CheckMode::All => has_all_permissions(granted, required),
        CheckMode::Any => has_any_permission(granted, required),
    }
}

/// A principal's granted permissions, parsed once.
///
/// Answers the same questions as the free functions in this module with
/// identical results, but parses each granted string only when it is
/// inserted. Useful when one render or request performs many checks
/// against the same granted list.
#[derive(Debug, Clone, Default)]
pub struct PermissionSet {
    /// Granted strings in insertion order, with their parsed form if valid.
    entries: Vec<(String, Option<ParsedPermission>)>,

    /// The granted strings, for duplicate detection.
    seen: HashSet<String>,
}

impl PermissionSet {
    /// Creates a new empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a granted permission. Duplicates are ignored.
    pub fn insert(&mut self, permission: impl Into<String>) {
        let permission = permission.into();
        if !self.seen.insert(permission.clone()) {
            return;
        }
        let parsed = parse(&permission);
        self.entries.push((permission, parsed));
    }

    /// Gets the number of distinct granted strings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been granted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the granted strings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(raw, _)| raw.as_str())
    }

    /// Iterates over granted strings that do not parse.
    pub fn malformed(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, parsed)| parsed.is_none())
            .map(|(raw, _)| raw.as_str())
    }

    /// Same as [`has_permission`] over this set.
    pub fn has_permission(&self, required: &str) -> bool {
        if required.is_empty() {
            return false;
        }
        let parsed_required = parse(required);
        self.entries.iter().any(|(raw, parsed)| {
            if raw.is_empty() {
                return false;
            }
            if raw == required {
                return true;
            }
            match (parsed, &parsed_required) {
                (Some(granted), Some(required)) => covers_parsed(granted, required),
                _ => false,
            }
        })
    }

    /// Same as [`has_all_permissions`] over this set.
    pub fn has_all_permissions<R: AsRef<str>>(&self, required: &[R]) -> bool {
        required.iter().all(|r| self.has_permission(r.as_ref()))
    }

    /// Same as [`has_any_permission`] over this set.
    pub fn has_any_permission<R: AsRef<str>>(&self, required: &[R]) -> bool {
        required.iter().any(|r| self.has_permission(r.as_ref()))
    }

    /// Same as [`check`] over this set.
    pub fn check<R: AsRef<str>>(&self, required: &[R], mode: CheckMode) -> bool {
        match mode {
            CheckMode::All => self.has_all_permissions(required),
            CheckMode::Any => self.has_any_permission(required),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for PermissionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for permission in iter {
            self.insert(permission);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Permission;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_has_permission_empty_granted() {
        assert!(!has_permission(&NONE, "tenant:user-view"));
        assert!(!has_permission(&NONE, ""));
        assert!(!PermissionSet::new().has_permission("tenant:user-view"));
    }

    #[test]
    fn test_empty_required_asymmetry() {
        let granted = ["tenant:user-view"];
        assert!(has_all_permissions(&granted, &NONE));
        assert!(!has_any_permission(&granted, &NONE));

        // Holds even when nothing is granted.
        assert!(has_all_permissions(&NONE, &NONE));
        assert!(!has_any_permission(&NONE, &NONE));

        assert!(check(&granted, &NONE, CheckMode::All));
        assert!(!check(&granted, &NONE, CheckMode::Any));
    }

    #[test]
    fn test_union_of_roles() {
        let granted = ["tenant:scenario-view", "tenant:user-all"];
        assert!(has_all_permissions(
            &granted,
            &["tenant:scenario-view", "tenant:user-edit"]
        ));
        assert!(!has_all_permissions(&granted, &["tenant:scenario-edit"]));
        assert!(has_any_permission(
            &granted,
            &["tenant:scenario-edit", "tenant:user-edit"]
        ));
        assert!(!has_any_permission(
            &granted,
            &["tenant:scenario-edit", "tenant:role-view"]
        ));
    }

    #[test]
    fn test_malformed_grant_is_ignored() {
        let granted = ["tenant:user", "scenario:device-edit"];
        assert!(has_permission(&granted, "scenario:device-view"));
        assert!(!has_permission(&granted, "tenant:user-view"));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let granted: Vec<String> = vec!["scenario:spot-view".to_string()];
        let required: Vec<String> = vec!["scenario:spot-none".to_string()];
        assert!(has_all_permissions(&granted, &required));
    }

    #[test]
    fn test_check_mode_from_str() {
        assert_eq!("all".parse::<CheckMode>().unwrap(), CheckMode::All);
        assert_eq!("any".parse::<CheckMode>().unwrap(), CheckMode::Any);
        assert!("some".parse::<CheckMode>().is_err());
        assert_eq!(CheckMode::default(), CheckMode::All);
    }

    #[test]
    fn test_permission_set_deduplicates() {
        let set: PermissionSet = ["tenant:user-view", "tenant:user-view", "bogus"]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.malformed().collect::<Vec<_>>(), vec!["bogus"]);
    }

    #[test]
    fn test_permission_set_large_grant_list() {
        let mut set = PermissionSet::new();
        for round in 0..3 {
            set.extend(Permission::all().map(String::from));
            set.extend((0..1000).map(|i| format!("tenant:widget{i}-view")));
            assert_eq!(set.len(), 44 + 1000, "round {round}");
        }

        assert_eq!(set.iter().next(), Some("tenant:scenario-none"));
        assert_eq!(set.malformed().count(), 1000);
        assert!(set.has_all_permissions(&["system:admin-all", "scenario:spot-edit"]));
    }

    #[test]
    fn test_permission_set_matches_free_functions() {
        let granted = vec![
            "tenant:user-edit".to_string(),
            "scenario:device-all".to_string(),
            "scenario:spot-none".to_string(),
            "tenant:user-approve".to_string(),
            "garbage".to_string(),
            String::new(),
        ];
        let set: PermissionSet = granted.iter().cloned().collect();

        let mut required: Vec<String> = Permission::all().map(String::from).collect();
        required.extend(
            ["tenant:user-approve", "garbage", "", "notascope:x-y"]
                .iter()
                .map(|s| s.to_string()),
        );

        for r in &required {
            assert_eq!(
                set.has_permission(r),
                has_permission(&granted, r),
                "required: {r:?}"
            );
        }
    }
}
