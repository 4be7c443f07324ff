//! Ready-made pipelines for each NPC strategy.
//!
//! Every pipeline ends in a stage that always produces an action, so a
//! decision never falls off the end of a preset.
//!
//! ```text
//! gym_leader()
//!   ├─ StruggleGuard
//!   ├─ ScriptedHeal
//!   ├─ PriorityFinisher
//!   └─ WeightedMoves(Trainer)
//! ```

use battle_core::{ItemCategory, StrategyKind};

use super::DecisionPipeline;
use super::stages::{
    PriorityFinisher, RandomItem, RandomMoves, ScriptedHeal, StruggleGuard, WeightedMoves,
};

/// Pipeline for a strategy.
pub fn for_strategy(strategy: StrategyKind) -> DecisionPipeline {
    match strategy {
        StrategyKind::WildPokemon => wild_pokemon(),
        StrategyKind::RandomAttack => random_attack(),
        StrategyKind::BasicTrainer => basic_trainer(),
        StrategyKind::GymLeader => gym_leader(),
        StrategyKind::RandomBattleItem => random_item(ItemCategory::Battle),
        StrategyKind::RandomMedicineItem => random_item(ItemCategory::Medicine),
    }
}

/// Effectiveness-weighted moves, no status decay or health bias.
pub fn wild_pokemon() -> DecisionPipeline {
    DecisionPipeline::new()
        .then(StruggleGuard)
        .then(WeightedMoves::wild())
}

pub fn random_attack() -> DecisionPipeline {
    DecisionPipeline::new()
        .then(StruggleGuard)
        .then(RandomMoves)
}

/// Priority finisher, then weighted moves.
pub fn basic_trainer() -> DecisionPipeline {
    DecisionPipeline::new()
        .then(StruggleGuard)
        .then(PriorityFinisher)
        .then(WeightedMoves::trainer())
}

/// Basic trainer with capped scripted heals ahead of the finisher.
pub fn gym_leader() -> DecisionPipeline {
    DecisionPipeline::new()
        .then(StruggleGuard)
        .then(ScriptedHeal)
        .then(PriorityFinisher)
        .then(WeightedMoves::trainer())
}

pub fn random_item(category: ItemCategory) -> DecisionPipeline {
    DecisionPipeline::new().then(RandomItem::new(category))
}
