//! Shared fixtures for runtime integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use battle_core::{
    Action, BattleConfig, BattleState, Combatant, ElementType, ItemDefinition, ItemId, ItemKind,
    MoveCategory, MoveDescriptor, MoveFlags, MoveId, MoveSlot, NonVolatileStatus, Participant,
    ParticipantId, RandomStream, StatChanges, StatModifiers, StrategyKind, TrainerProfile,
    TypePair,
};
use runtime::{
    ActionProvider, AiMemory, DecisionRequest, ItemOracleImpl, MoveOracleImpl,
    NpcDecisionProvider, OracleManager,
};

pub const TACKLE: MoveId = MoveId(1);
pub const GROWL: MoveId = MoveId(2);
pub const WATER_GUN: MoveId = MoveId(3);
pub const QUICK_ATTACK: MoveId = MoveId(4);
pub const LICK: MoveId = MoveId(5);
pub const THUNDER_WAVE: MoveId = MoveId(6);
pub const SPLASH: MoveId = MoveId(7);

pub const MAX_POTION: ItemId = ItemId(0);
pub const POTION: ItemId = ItemId(1);
pub const ANTIDOTE: ItemId = ItemId(2);
pub const HYPER_POTION: ItemId = ItemId(3);
pub const ETHER: ItemId = ItemId(4);
pub const REVIVE: ItemId = ItemId(5);

pub const X_ATTACK: ItemId = ItemId(0);
pub const X_DEFENSE: ItemId = ItemId(1);

pub fn moves() -> MoveOracleImpl {
    MoveOracleImpl::from_descriptors([
        MoveDescriptor::new(TACKLE, "Tackle", ElementType::Normal, MoveCategory::Physical, 35),
        MoveDescriptor::new(GROWL, "Growl", ElementType::Normal, MoveCategory::Status, 40)
            .with_target_stat_changes(StatChanges {
                attack: -1,
                ..StatChanges::NONE
            }),
        MoveDescriptor::new(WATER_GUN, "Water Gun", ElementType::Water, MoveCategory::Special, 25),
        MoveDescriptor::new(QUICK_ATTACK, "Quick Attack", ElementType::Normal, MoveCategory::Physical, 30)
            .with_flags(MoveFlags::PRIORITY),
        MoveDescriptor::new(LICK, "Lick", ElementType::Ghost, MoveCategory::Physical, 30),
        MoveDescriptor::new(THUNDER_WAVE, "Thunder Wave", ElementType::Electric, MoveCategory::Status, 20)
            .with_status_chance(NonVolatileStatus::Paralysed, 1.0),
        MoveDescriptor::new(SPLASH, "Splash", ElementType::Normal, MoveCategory::Status, 40),
    ])
}

pub fn items() -> ItemOracleImpl {
    let battle = [
        ItemDefinition::new(
            X_ATTACK,
            "X Attack",
            ItemKind::StatBoost(StatModifiers {
                attack: 2,
                ..StatModifiers::default()
            }),
        ),
        ItemDefinition::new(
            X_DEFENSE,
            "X Defense",
            ItemKind::StatBoost(StatModifiers {
                defense: 2,
                ..StatModifiers::default()
            }),
        ),
    ];
    let medicine = [
        ItemDefinition::new(MAX_POTION, "Max Potion", ItemKind::Health { fully_heals: true, amount: 0 }),
        ItemDefinition::new(POTION, "Potion", ItemKind::Health { fully_heals: false, amount: 20 }),
        ItemDefinition::new(
            ANTIDOTE,
            "Antidote",
            ItemKind::StatusCure {
                cures: vec![NonVolatileStatus::Poisoned, NonVolatileStatus::BadlyPoisoned],
            },
        ),
        ItemDefinition::new(HYPER_POTION, "Hyper Potion", ItemKind::Health { fully_heals: false, amount: 200 }),
        ItemDefinition::new(
            ETHER,
            "Ether",
            ItemKind::PpRestore {
                single_move: true,
                fully_restores: false,
                amount: 10,
            },
        ),
        ItemDefinition::new(REVIVE, "Revive", ItemKind::Revive { proportion: 0.5 }),
    ];
    ItemOracleImpl::from_registries(battle, medicine)
}

pub fn oracles() -> OracleManager {
    OracleManager::new(Arc::new(moves()), Arc::new(items()))
}

pub fn provider(strategy: StrategyKind) -> NpcDecisionProvider {
    NpcDecisionProvider::new(oracles(), BattleConfig::default(), TrainerProfile::new(strategy))
}

/// Water-type NPC with Tackle, Growl, Water Gun and Quick Attack at full PP.
pub fn squirtle() -> Combatant {
    Combatant::new("squirtle", TypePair::single(ElementType::Water), 100)
        .with_move(0, MoveSlot::new(TACKLE, 35))
        .with_move(1, MoveSlot::new(GROWL, 40))
        .with_move(2, MoveSlot::new(WATER_GUN, 25))
        .with_move(3, MoveSlot::new(QUICK_ATTACK, 30))
}

pub fn geodude() -> Combatant {
    Combatant::new("geodude", TypePair::dual(ElementType::Rock, ElementType::Ground), 100)
        .with_move(0, MoveSlot::new(TACKLE, 35))
}

pub fn rattata() -> Combatant {
    Combatant::new("rattata", TypePair::single(ElementType::Normal), 100)
        .with_move(0, MoveSlot::new(TACKLE, 35))
}

/// Battle with `npc` active on the opponent side and `player` on the player
/// side.
pub fn battle(npc: Combatant, player: Combatant) -> BattleState {
    BattleState::new(Participant::new("red", [player]), Participant::new("npc", [npc]))
}

pub fn decide(
    provider: &NpcDecisionProvider,
    state: &BattleState,
    memory: &mut AiMemory,
    rng: &mut dyn RandomStream,
) -> Action {
    provider
        .provide_action(DecisionRequest::new(ParticipantId::Opponent, state, memory, rng))
        .expect("decision should produce an action")
}
