//! Authorization engine.
//!
//! This module provides the [`Authorizer`], which resolves a principal's
//! granted permissions and checks requirements against them, and an
//! optional [`DecisionLog`] for recording the outcomes.

mod audit;
mod authorizer;

pub use audit::{Decision, DecisionLog};
pub use authorizer::Authorizer;
