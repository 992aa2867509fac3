//! Integration with the systems that know who holds which roles.
//!
//! This module provides the seam through which callers inject context
//! resolution into authorization.

mod source;

pub use source::{source_fn, FnSource, PermissionSource};
