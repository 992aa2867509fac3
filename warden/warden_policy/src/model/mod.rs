//! Role and assignment models.

pub mod assignment;
pub mod context;
pub mod role;

pub use assignment::Assignment;
pub use context::AccessContext;
pub use role::{Role, RoleIssue, RoleReport, RoleScope, ValidationMode};
