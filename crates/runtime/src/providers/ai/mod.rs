//! Strategy-driven decision engine for NPC battle participants.
//!
//! A decision runs in three steps:
//!
//! 1. **Context**: bundle the battle snapshot, oracles, trainer profile, AI
//!    memory and random stream into a [`DecisionContext`]
//! 2. **Pipeline**: evaluate the strategy's [`DecisionStage`]s in precedence
//!    order; the first stage to commit produces the action
//! 3. **Scoring**: weighted stages turn candidates into weight vectors and
//!    draw one index from the battle's stream ([`scoring`])
//!
//! # Core Components
//!
//! - [`NpcDecisionProvider`]: implements [`crate::ActionProvider`]
//! - [`presets`]: one pipeline per [`battle_core::StrategyKind`]
//! - [`stages`]: the reusable building blocks of those pipelines
//! - [`AiMemory`]: per-battle counters threaded through every decision

pub mod context;
pub mod memory;
pub mod pipeline;
pub mod presets;
pub mod provider;
pub mod scoring;
pub mod stages;
pub mod switching;

pub use context::DecisionContext;
pub use memory::AiMemory;
pub use pipeline::{DecisionPipeline, DecisionStage};
pub use provider::NpcDecisionProvider;
pub use switching::next_combatant;
