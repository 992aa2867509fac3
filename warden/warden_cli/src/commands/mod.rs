//! Command implementations
//!
//! Every command returns `Ok(true)` on success and `Ok(false)` when it ran
//! but the answer is negative (a denied check, a malformed permission, a
//! catalog that fails validation).

pub mod catalog;
pub mod permission;

pub use catalog::{execute_resolve, execute_validate, ResolveArgs, ValidateArgs};
pub use permission::{
    execute_check, execute_list, execute_parse, CheckArgs, ListArgs, ParseArgs,
};
