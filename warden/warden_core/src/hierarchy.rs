//! The action hierarchy table.
//!
//! Access levels are strictly nested, so a single granted level satisfies
//! any required level at or below it:
//!
//! | Granted | Covers |
//! |---------|--------|
//! | `none`  | `none` |
//! | `view`  | `view`, `none` |
//! | `edit`  | `edit`, `view`, `none` |
//! | `all`   | `all`, `edit`, `view`, `none` |
//!
//! The table is a static lookup and is consulted by membership only.

use crate::model::Action;

/// The actions implied by a granted `action`, including itself.
pub fn implied_actions(action: Action) -> &'static [Action] {
    match action {
        Action::None => &[Action::None],
        Action::View => &[Action::View, Action::None],
        Action::Edit => &[Action::Edit, Action::View, Action::None],
        Action::All => &[Action::All, Action::Edit, Action::View, Action::None],
    }
}

/// Check whether a granted action covers a required action.
pub fn implies(granted: Action, required: Action) -> bool {
    implied_actions(granted).contains(&required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_exact() {
        assert_eq!(implied_actions(Action::None), &[Action::None]);
        assert_eq!(implied_actions(Action::View), &[Action::View, Action::None]);
        assert_eq!(
            implied_actions(Action::Edit),
            &[Action::Edit, Action::View, Action::None]
        );
        assert_eq!(
            implied_actions(Action::All),
            &[Action::All, Action::Edit, Action::View, Action::None]
        );
    }

    #[test]
    fn test_table_agrees_with_rank() {
        for granted in Action::ALL {
            for required in Action::ALL {
                assert_eq!(
                    implies(granted, required),
                    granted.rank() >= required.rank(),
                    "granted {granted}, required {required}"
                );
            }
        }
    }

    #[test]
    fn test_every_action_implies_itself() {
        for action in Action::ALL {
            assert!(implies(action, action));
        }
    }
}
