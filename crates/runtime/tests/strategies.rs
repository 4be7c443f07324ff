//! Decision behavior of each strategy preset against small battle fixtures.

mod common;

use battle_core::{
    Action, BattleConfig, Combatant, ElementType, ItemCategory, MoveSlot, NonVolatileStatus,
    Participant, ParticipantId, PcgStream, SequenceStream, StrategyKind, TrainerProfile, TypePair,
    UseItemAction, VolatileConditions,
};
use runtime::providers::ai::scoring::{WeightProfile, move_weights, normalize};
use runtime::{ActionProvider, AiMemory, DecisionRequest, NpcDecisionProvider, RuntimeError};

use common::*;

const MOVE_STRATEGIES: [StrategyKind; 4] = [
    StrategyKind::WildPokemon,
    StrategyKind::RandomAttack,
    StrategyKind::BasicTrainer,
    StrategyKind::GymLeader,
];

fn used_item(action: Action) -> UseItemAction {
    match action {
        Action::UseItem(item) => item,
        Action::Fight(fight) => panic!("expected an item action, got {fight:?}"),
    }
}

// ============================================================================
// Struggle
// ============================================================================

#[test]
fn struggles_without_usable_moves_under_every_strategy() {
    let unset = Combatant::new("magikarp", TypePair::single(ElementType::Water), 50);
    let mut drained = squirtle();
    for slot in &mut drained.moves {
        slot.pp = 0;
    }

    for strategy in MOVE_STRATEGIES {
        for npc in [unset.clone(), drained.clone()] {
            let state = battle(npc, rattata());
            let mut memory = AiMemory::new();
            let mut rng = SequenceStream::default();

            let action = decide(&provider(strategy), &state, &mut memory, &mut rng);

            assert_eq!(action, Action::struggle(ParticipantId::Player), "{strategy}");
            assert_eq!(rng.consumed(), 0, "{strategy} drew for Struggle");
            assert_eq!(memory, AiMemory::new());
        }
    }
}

#[test]
fn struggles_at_low_health_before_scripted_heal() {
    let npc = Combatant::new("magikarp", TypePair::single(ElementType::Water), 50).with_health(5);
    let state = battle(npc, rattata());
    let mut memory = AiMemory::new();
    let mut rng = SequenceStream::default();

    let action = decide(&provider(StrategyKind::GymLeader), &state, &mut memory, &mut rng);

    assert!(action.is_struggle());
    assert_eq!(memory.times_healed, 0);
}

// ============================================================================
// Volatile conditions
// ============================================================================

#[test]
fn taunt_with_only_status_moves_left_struggles() {
    let npc = Combatant::new("clefairy", TypePair::single(ElementType::Normal), 70)
        .with_move(0, MoveSlot::new(TACKLE, 0))
        .with_move(1, MoveSlot::new(GROWL, 40))
        .with_move(2, MoveSlot::new(THUNDER_WAVE, 20))
        .with_volatile(VolatileConditions {
            taunt_turns: 3,
            ..VolatileConditions::default()
        });
    let state = battle(npc, rattata());
    let provider = provider(StrategyKind::BasicTrainer);
    let mut rng = PcgStream::new(11);

    for _ in 0..200 {
        let mut memory = AiMemory::new();
        let action = decide(&provider, &state, &mut memory, &mut rng);
        assert!(action.is_struggle());
        assert_eq!(memory.status_moves_used, 0);
    }
}

#[test]
fn taunt_never_selects_status_move() {
    let npc = Combatant::new("clefairy", TypePair::single(ElementType::Normal), 70)
        .with_move(0, MoveSlot::new(GROWL, 40))
        .with_move(1, MoveSlot::new(TACKLE, 3))
        .with_move(2, MoveSlot::new(THUNDER_WAVE, 20))
        .with_volatile(VolatileConditions {
            taunt_turns: 3,
            ..VolatileConditions::default()
        });
    let state = battle(npc, rattata());
    let provider = provider(StrategyKind::BasicTrainer);
    let mut rng = PcgStream::for_battle(2024, 1);

    for _ in 0..200 {
        let mut memory = AiMemory::new();
        let action = decide(&provider, &state, &mut memory, &mut rng);
        assert_eq!(action.move_slot(), Some(1));
    }
}

#[test]
fn taunted_status_move_is_kept_out_of_zero_weight_spread() {
    let gastly = Combatant::new("gastly", TypePair::single(ElementType::Ghost), 60)
        .with_move(0, MoveSlot::new(LICK, 30))
        .with_move(1, MoveSlot::new(GROWL, 40))
        .with_volatile(VolatileConditions {
            taunt_turns: 3,
            ..VolatileConditions::default()
        });
    let state = battle(gastly, rattata());
    let provider = provider(StrategyKind::BasicTrainer);
    let mut memory = AiMemory::new();
    let mut rng = PcgStream::new(3);

    for _ in 0..400 {
        let action = decide(&provider, &state, &mut memory, &mut rng);
        assert_ne!(action.move_slot(), Some(1));
    }
    assert_eq!(memory.status_moves_used, 0);
}

#[test]
fn encored_move_without_pp_struggles() {
    let npc = squirtle()
        .with_move(2, MoveSlot::new(WATER_GUN, 0))
        .with_volatile(VolatileConditions {
            encore_turns: 2,
            encore_move: WATER_GUN,
            ..VolatileConditions::default()
        });
    let state = battle(npc, geodude());
    let mut memory = AiMemory::new();
    let mut rng = SequenceStream::default();

    let action = decide(&provider(StrategyKind::BasicTrainer), &state, &mut memory, &mut rng);

    assert_eq!(action, Action::struggle(ParticipantId::Player));
    assert_eq!(rng.consumed(), 0);
}

#[test]
fn encore_locks_the_encored_slot() {
    let npc = squirtle().with_volatile(VolatileConditions {
        encore_turns: 2,
        encore_move: WATER_GUN,
        ..VolatileConditions::default()
    });

    let oracles = oracles();
    let weights = move_weights(
        &npc,
        Some(&geodude()),
        &oracles.as_battle_env(),
        0,
        WeightProfile::Trainer,
    );
    assert_eq!(weights, [0.0, 0.0, 1.0, 0.0]);

    let state = battle(npc, geodude());
    let provider = provider(StrategyKind::BasicTrainer);
    let mut rng = PcgStream::new(5);
    for _ in 0..100 {
        let mut memory = AiMemory::new();
        assert_eq!(decide(&provider, &state, &mut memory, &mut rng).move_slot(), Some(2));
    }
}

// ============================================================================
// Scripted heals
// ============================================================================

#[test]
fn gym_leader_heals_until_cap_then_attacks() {
    let state = battle(squirtle().with_health(15), rattata());
    let provider = provider(StrategyKind::GymLeader);
    let config = BattleConfig::default();
    let mut memory = AiMemory::new();
    let mut rng = SequenceStream::new([0.5; 8]);

    for healed in 1..=config.default_max_times_healed {
        let action = decide(&provider, &state, &mut memory, &mut rng);
        assert_eq!(
            action,
            Action::use_item(ItemCategory::Medicine, config.default_healing_item, 0)
        );
        assert_eq!(memory.times_healed, healed);
    }
    assert_eq!(rng.consumed(), 0);

    let action = decide(&provider, &state, &mut memory, &mut rng);
    assert!(matches!(action, Action::Fight(_)));
    assert!(!action.is_struggle());
    assert_eq!(memory.times_healed, config.default_max_times_healed);
    assert_eq!(rng.consumed(), 1);
}

#[test]
fn heal_threshold_is_inclusive() {
    let provider = provider(StrategyKind::GymLeader);

    let mut memory = AiMemory::new();
    let at_threshold = battle(squirtle().with_health(20), rattata());
    let action = decide(&provider, &at_threshold, &mut memory, &mut SequenceStream::default());
    assert_eq!(used_item(action).item, HYPER_POTION);

    let mut memory = AiMemory::new();
    let above = battle(squirtle().with_health(21), rattata());
    let action = decide(&provider, &above, &mut memory, &mut SequenceStream::default());
    assert!(matches!(action, Action::Fight(_)));
    assert_eq!(memory.times_healed, 0);
}

#[test]
fn trainer_profile_overrides_heal_item_and_cap() {
    let profile = TrainerProfile::new(StrategyKind::GymLeader).with_healing(POTION, 1);
    let provider = NpcDecisionProvider::new(oracles(), BattleConfig::default(), profile);
    let state = battle(squirtle().with_health(10), rattata());
    let mut memory = AiMemory::new();
    let mut rng = SequenceStream::default();

    let first = used_item(decide(&provider, &state, &mut memory, &mut rng));
    assert_eq!(first.item, POTION);
    assert_eq!(first.category, ItemCategory::Medicine);

    let second = decide(&provider, &state, &mut memory, &mut rng);
    assert!(matches!(second, Action::Fight(_)));
}

#[test]
fn basic_trainer_never_heals() {
    let state = battle(squirtle().with_health(1), rattata());
    let mut memory = AiMemory::new();
    let action = decide(
        &provider(StrategyKind::BasicTrainer),
        &state,
        &mut memory,
        &mut SequenceStream::default(),
    );
    assert!(matches!(action, Action::Fight(_)));
    assert_eq!(memory.times_healed, 0);
}

// ============================================================================
// Priority finisher
// ============================================================================

#[test]
fn priority_move_finishes_weak_opponent() {
    let provider = provider(StrategyKind::BasicTrainer);

    let weak = battle(squirtle(), rattata().with_health(19));
    let mut rng = SequenceStream::default();
    let action = decide(&provider, &weak, &mut AiMemory::new(), &mut rng);
    assert_eq!(action, Action::fight(ParticipantId::Player, 3));
    assert_eq!(rng.consumed(), 0);

    let at_threshold = battle(squirtle(), rattata().with_health(20));
    let mut rng = SequenceStream::default();
    decide(&provider, &at_threshold, &mut AiMemory::new(), &mut rng);
    assert_eq!(rng.consumed(), 1);
}

#[test]
fn priority_move_without_pp_is_skipped() {
    let npc = squirtle().with_move(3, MoveSlot::new(QUICK_ATTACK, 0));
    let state = battle(npc, rattata().with_health(5));
    let mut rng = SequenceStream::new([0.99]);

    let action = decide(&provider(StrategyKind::BasicTrainer), &state, &mut AiMemory::new(), &mut rng);

    assert_ne!(action.move_slot(), Some(3));
    assert_eq!(rng.consumed(), 1);
}

#[test]
fn tormented_priority_move_is_skipped() {
    let npc = squirtle().with_volatile(VolatileConditions {
        torment: true,
        last_move: QUICK_ATTACK,
        ..VolatileConditions::default()
    });
    let state = battle(npc, rattata().with_health(5));
    let mut rng = SequenceStream::new([0.99]);

    let action = decide(&provider(StrategyKind::BasicTrainer), &state, &mut AiMemory::new(), &mut rng);

    assert_ne!(action.move_slot(), Some(3));
    assert_eq!(rng.consumed(), 1);
}

#[test]
fn wild_pokemon_has_no_priority_override() {
    let state = battle(squirtle(), rattata().with_health(1));
    let mut rng = SequenceStream::new([0.0]);
    let action = decide(&provider(StrategyKind::WildPokemon), &state, &mut AiMemory::new(), &mut rng);
    assert_eq!(action.move_slot(), Some(0));
    assert_eq!(rng.consumed(), 1);
}

// ============================================================================
// Weighted selection
// ============================================================================

#[test]
fn immune_only_move_selects_uniformly_over_all_slots() {
    let npc = Combatant::new("rattata", TypePair::single(ElementType::Normal), 60)
        .with_move(0, MoveSlot::new(TACKLE, 35));
    let gastly = Combatant::new("gastly", TypePair::single(ElementType::Ghost), 60);

    let oracles = oracles();
    let weights = move_weights(
        &npc,
        Some(&gastly),
        &oracles.as_battle_env(),
        0,
        WeightProfile::Trainer,
    );
    assert_eq!(weights, [0.0; 4]);
    assert_eq!(normalize(&weights), vec![0.25; 4]);

    let state = battle(npc, gastly);
    let provider = provider(StrategyKind::BasicTrainer);
    let mut rng = SequenceStream::new([0.1, 0.3, 0.6, 0.9]);
    let mut memory = AiMemory::new();
    let slots: Vec<_> = (0..4)
        .map(|_| decide(&provider, &state, &mut memory, &mut rng).move_slot())
        .collect();

    assert_eq!(slots, vec![Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(memory.status_moves_used, 0);
}

#[test]
fn stat_changing_moves_are_counted() {
    let growler = Combatant::new("poochyena", TypePair::single(ElementType::Dark), 60)
        .with_move(0, MoveSlot::new(GROWL, 40));
    let state = battle(growler.clone(), rattata());
    let trainer = provider(StrategyKind::BasicTrainer);
    let mut memory = AiMemory::new();
    let mut rng = PcgStream::new(3);

    for _ in 0..3 {
        assert_eq!(decide(&trainer, &state, &mut memory, &mut rng).move_slot(), Some(0));
    }
    assert_eq!(memory.status_moves_used, 3);

    let wild_state = battle(growler, rattata());
    let mut wild_memory = AiMemory::new();
    decide(&provider(StrategyKind::WildPokemon), &wild_state, &mut wild_memory, &mut rng);
    assert_eq!(wild_memory.status_moves_used, 0);
}

#[test]
fn guaranteed_conditions_count_but_plain_status_moves_do_not() {
    let provider = provider(StrategyKind::BasicTrainer);

    let waver = Combatant::new("pikachu", TypePair::single(ElementType::Electric), 60)
        .with_move(0, MoveSlot::new(THUNDER_WAVE, 20));
    let mut memory = AiMemory::new();
    decide(&provider, &battle(waver, rattata()), &mut memory, &mut PcgStream::new(1));
    assert_eq!(memory.status_moves_used, 1);

    let splasher = Combatant::new("magikarp", TypePair::single(ElementType::Water), 60)
        .with_move(0, MoveSlot::new(SPLASH, 40));
    let mut memory = AiMemory::new();
    decide(&provider, &battle(splasher, rattata()), &mut memory, &mut PcgStream::new(1));
    assert_eq!(memory.status_moves_used, 0);
}

#[test]
fn missing_opponent_is_treated_as_neutral() {
    let player = Participant::new("red", [rattata()]).with_active_index(3);
    let state = battle_core::BattleState::new(player, Participant::new("npc", [squirtle()]));
    let mut rng = SequenceStream::new([0.0]);

    let action = decide(&provider(StrategyKind::BasicTrainer), &state, &mut AiMemory::new(), &mut rng);

    assert_eq!(action, Action::fight(ParticipantId::Player, 0));
}

// ============================================================================
// Random attack
// ============================================================================

#[test]
fn random_attack_redraws_until_move_has_pp() {
    let npc = squirtle()
        .with_move(0, MoveSlot::new(TACKLE, 0))
        .with_move(2, MoveSlot::EMPTY)
        .with_move(3, MoveSlot::EMPTY);
    let state = battle(npc, rattata());
    let mut rng = SequenceStream::new([0.1, 0.2, 0.7]);

    let action = decide(&provider(StrategyKind::RandomAttack), &state, &mut AiMemory::new(), &mut rng);

    assert_eq!(action.move_slot(), Some(1));
    assert_eq!(rng.consumed(), 3);
}

#[test]
fn random_attack_draws_are_bounded() {
    let npc = squirtle().with_move(0, MoveSlot::new(TACKLE, 0));
    let state = battle(npc, rattata());
    let provider = NpcDecisionProvider::new(
        oracles(),
        BattleConfig::default().with_random_attack_max_draws(2),
        TrainerProfile::new(StrategyKind::RandomAttack),
    );
    let mut rng = SequenceStream::default();

    let action = decide(&provider, &state, &mut AiMemory::new(), &mut rng);

    assert_eq!(action.move_slot(), Some(1));
    assert_eq!(rng.consumed(), 2);
}

// ============================================================================
// Item strategies
// ============================================================================

#[test]
fn medicine_item_must_be_compatible() {
    let provider = provider(StrategyKind::RandomMedicineItem);

    let poisoned = squirtle().with_status(NonVolatileStatus::Poisoned);
    let mut rng = SequenceStream::new([0.99]);
    let item = used_item(decide(&provider, &battle(poisoned, rattata()), &mut AiMemory::new(), &mut rng));
    assert_eq!(item.item, ANTIDOTE);
    assert_eq!(item.target_party_index, 0);
    assert_eq!(rng.consumed(), 1);

    let worn = squirtle()
        .with_health(40)
        .with_move(0, MoveSlot::new(TACKLE, 10));
    let mut rng = SequenceStream::new([0.99]);
    let item = used_item(decide(&provider, &battle(worn, rattata()), &mut AiMemory::new(), &mut rng));
    assert_eq!(item.item, ETHER);
    assert_eq!(item.target_move_slot, Some(0));
}

#[test]
fn no_compatible_medicine_falls_back_to_default_item() {
    let mut rng = SequenceStream::default();
    let action = decide(
        &provider(StrategyKind::RandomMedicineItem),
        &battle(squirtle(), rattata()),
        &mut AiMemory::new(),
        &mut rng,
    );

    assert_eq!(
        action,
        Action::use_item(ItemCategory::Medicine, MAX_POTION, 0)
    );
    assert_eq!(rng.consumed(), 0);
}

#[test]
fn battle_item_targets_active_member() {
    let npc_side = Participant::new("npc", [rattata(), squirtle()]).with_active_index(1);
    let state = battle_core::BattleState::new(Participant::new("red", [geodude()]), npc_side);
    let mut rng = SequenceStream::new([0.6]);

    let item = used_item(decide(
        &provider(StrategyKind::RandomBattleItem),
        &state,
        &mut AiMemory::new(),
        &mut rng,
    ));

    assert_eq!(item.category, ItemCategory::Battle);
    assert_eq!(item.item, X_DEFENSE);
    assert_eq!(item.target_party_index, 1);
}

// ============================================================================
// Switching and errors
// ============================================================================

#[test]
fn next_combatant_skips_fainted_members() {
    let npc_side = Participant::new(
        "npc",
        [squirtle().with_health(0), rattata().with_health(0), geodude()],
    );
    let state = battle_core::BattleState::new(Participant::new("red", [rattata()]), npc_side);
    let provider = provider(StrategyKind::BasicTrainer);

    assert_eq!(provider.provide_next_combatant(ParticipantId::Opponent, &state), Ok(2));
    assert_eq!(provider.provide_next_combatant(ParticipantId::Player, &state), Ok(0));
}

#[test]
fn fully_fainted_party_cannot_switch() {
    let state = battle(squirtle().with_health(0), rattata());
    assert_eq!(
        provider(StrategyKind::GymLeader).provide_next_combatant(ParticipantId::Opponent, &state),
        Err(RuntimeError::NoUsableCombatant {
            participant: ParticipantId::Opponent
        })
    );
}

#[test]
fn missing_active_combatant_is_an_error() {
    let npc_side = Participant::new("npc", [squirtle()]).with_active_index(4);
    let state = battle_core::BattleState::new(Participant::new("red", [rattata()]), npc_side);
    let mut memory = AiMemory::new();
    let mut rng = SequenceStream::default();

    let result = provider(StrategyKind::BasicTrainer).provide_action(DecisionRequest::new(
        ParticipantId::Opponent,
        &state,
        &mut memory,
        &mut rng,
    ));

    assert_eq!(
        result,
        Err(RuntimeError::NoActiveCombatant {
            participant: ParticipantId::Opponent,
            index: 4
        })
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn seeded_battles_replay_identically() {
    let state = battle(squirtle().with_health(30), geodude().with_health(50));
    let provider = provider(StrategyKind::GymLeader);

    let run = || {
        let mut memory = AiMemory::new();
        let mut rng = PcgStream::for_battle(0xC0FFEE, 12);
        let actions: Vec<Action> = (0..64)
            .map(|_| decide(&provider, &state, &mut memory, &mut rng))
            .collect();
        (actions, memory, rng.state())
    };

    assert_eq!(run(), run());
}

#[test]
fn battle_resumes_from_saved_memory_and_stream() {
    let state = battle(squirtle().with_health(30), geodude().with_health(50));
    let provider = provider(StrategyKind::GymLeader);
    let mut memory = AiMemory::new();
    let mut rng = PcgStream::for_battle(7, 3);

    for _ in 0..8 {
        decide(&provider, &state, &mut memory, &mut rng);
    }
    let saved = serde_json::to_string(&(memory, &rng)).expect("snapshot should serialize");

    let remaining: Vec<Action> = (0..8)
        .map(|_| decide(&provider, &state, &mut memory, &mut rng))
        .collect();

    let (mut restored_memory, mut restored_rng): (AiMemory, PcgStream) =
        serde_json::from_str(&saved).expect("snapshot should deserialize");
    let replayed: Vec<Action> = (0..8)
        .map(|_| decide(&provider, &state, &mut restored_memory, &mut restored_rng))
        .collect();

    assert_eq!(replayed, remaining);
    assert_eq!(restored_memory, memory);
    assert_eq!(restored_rng, rng);
}
