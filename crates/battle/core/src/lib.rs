//! Battle vocabulary shared by the NPC decision engine and its tooling.
//!
//! `battle-core` defines the read-only view a decision needs (combatants,
//! participants, move and item descriptors), the [`Action`] value a decision
//! produces, and the oracle traits through which static game data and the
//! battle's random stream are reached. Nothing in this crate mutates a battle;
//! executing actions belongs to the turn engine that consumes them.
pub mod action;
pub mod battle;
pub mod combatant;
pub mod config;
pub mod env;
pub mod error;
pub mod items;
pub mod moves;
pub mod trainer;
pub mod types;

pub use action::{Action, FightAction, MoveSlotIndex, UseItemAction};
pub use battle::{BattleState, Participant, ParticipantId};
pub use combatant::{Combatant, MoveSlot, NonVolatileStatus, VolatileConditions};
pub use config::BattleConfig;
pub use env::{
    BattleEnv, Env, ItemOracle, MoveOracle, OracleError, PcgRng, PcgStream, RandomStream,
    SequenceStream, StandardTypeChart, TypeOracle, compute_seed,
};
pub use error::{BattleError, ErrorSeverity};
pub use items::{ItemCategory, ItemDefinition, ItemId, ItemKind, StatModifiers};
pub use moves::{MoveCategory, MoveDescriptor, MoveFlags, MoveId, StatChanges, StatusChance};
pub use trainer::{StrategyKind, TrainerProfile};
pub use types::{ElementType, TypePair};
