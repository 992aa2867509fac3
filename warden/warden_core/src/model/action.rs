//! Access levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PermissionError;

/// An ordered capability level over a resource.
///
/// The order is total and fixed: `none < view < edit < all`. There is no
/// resource-specific override of this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// No effective capability.
    None,

    /// Read access.
    View,

    /// Create and modify.
    Edit,

    /// Full control, including deletion.
    All,
}

impl Action {
    /// Every action, from lowest to highest.
    pub const ALL: [Action; 4] = [Action::None, Action::View, Action::Edit, Action::All];

    /// Get the wire name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::View => "view",
            Self::Edit => "edit",
            Self::All => "all",
        }
    }

    /// Get the rank of this action, `none` = 0 through `all` = 3.
    pub fn rank(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::View => 1,
            Self::Edit => 2,
            Self::All => 3,
        }
    }
}

impl FromStr for Action {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "all" => Ok(Self::All),
            _ => Err(PermissionError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
