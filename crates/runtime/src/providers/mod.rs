//! Action provider implementations.

pub mod ai;

pub use ai::{AiMemory, NpcDecisionProvider};
