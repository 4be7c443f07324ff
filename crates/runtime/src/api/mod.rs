//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the decision engine itself can stay focused on scoring and selection.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{ActionProvider, DecisionRequest};
