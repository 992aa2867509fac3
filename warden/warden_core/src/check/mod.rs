//! Coverage checks.
//!
//! This module provides the coverage evaluator, which compares one granted
//! permission with one required permission, and the aggregate API that
//! callers use to check a principal's full granted list.

mod aggregator;
mod evaluator;

pub use aggregator::{
    check, has_all_permissions, has_any_permission, has_permission, CheckMode, PermissionSet,
};
pub use evaluator::covers;
