//! NPC decision runtime for turn-based battles.
//!
//! This crate turns a read-only [`battle_core::BattleState`] into the one
//! [`battle_core::Action`] an NPC participant takes this turn. Consumers
//! build an [`OracleManager`] once from static content, create one
//! [`NpcDecisionProvider`] per NPC, and call it through the
//! [`ActionProvider`] trait with the battle's AI memory and random stream.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the types downstream clients interact with
//! - [`oracle`] adapts static content to the `battle-core` oracle traits
//! - [`providers`] hosts the strategies, their stages and scoring
pub mod api;
pub mod oracle;
pub mod providers;

pub use api::{ActionProvider, DecisionRequest, Result, RuntimeError};
pub use oracle::{ItemOracleImpl, MoveOracleImpl, OracleManager};
pub use providers::ai::{
    AiMemory, DecisionContext, DecisionPipeline, DecisionStage, NpcDecisionProvider, presets,
};
