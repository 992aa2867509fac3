//! Permission model.
//!
//! This module defines the typed components of a permission string and the
//! validated representations built from them.

pub mod action;
pub mod permission;
pub mod scope;

pub use action::Action;
pub use permission::{ParsedPermission, Permission};
pub use scope::{Resource, Scope};
