//! Move-slot weighting pass.
//!
//! Produces one weight per move slot, in slot order. Illegal slots (unset,
//! out of PP, or locked out by Taunt/Torment) weigh zero; Encore replaces the
//! whole vector with a one-hot lock on the encored slot.
//!
//! An all-zero vector normally reaches the selector as is and becomes
//! uniform over every slot. When some set slot was locked out, the uniform
//! spread is written here instead so that the locked slots stay at zero.

use battle_core::{BattleConfig, BattleEnv, Combatant, MoveDescriptor, MoveSlot};

use super::weights::{attack_move_weight, healing_move_weight, status_move_weight};

/// One weight per move slot.
pub type MoveWeights = [f64; BattleConfig::MAX_MOVE_SLOTS];

/// Which weighting functions a strategy combines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightProfile {
    /// Effectiveness for damaging moves, usage decay for Status moves, and
    /// the low-health multiplier on every slot.
    Trainer,
    /// Effectiveness for every move; no status or health bias.
    Wild,
}

/// Computes the weight vector over `user`'s move slots.
///
/// `opponent` supplies the defending typing; without one every matchup is
/// treated as neutral.
pub fn move_weights(
    user: &Combatant,
    opponent: Option<&Combatant>,
    env: &BattleEnv<'_>,
    status_moves_used: u32,
    profile: WeightProfile,
) -> MoveWeights {
    if user.volatile.encored() {
        return encore_weights(user);
    }

    if opponent.is_none() {
        tracing::error!(
            "No opposing combatant while weighting moves for {}; assuming neutral matchups",
            user.species
        );
    }

    let mut weights = [0.0; BattleConfig::MAX_MOVE_SLOTS];
    let mut locked = [false; BattleConfig::MAX_MOVE_SLOTS];
    for (index, slot) in user.moves.iter().enumerate() {
        if !slot.is_set() {
            continue;
        }

        let descriptor = match env.move_descriptor(slot.move_id) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                tracing::error!(
                    "Move slot {} of {} cannot be weighted: {}",
                    index,
                    user.species,
                    err
                );
                continue;
            }
        };

        if !is_legal(user, slot, &descriptor) {
            locked[index] = true;
            continue;
        }

        let effectiveness = opponent
            .map(|target| env.effectiveness(descriptor.element, target.types))
            .unwrap_or(1.0);

        weights[index] = match profile {
            WeightProfile::Trainer if descriptor.category.is_status() => {
                status_move_weight(status_moves_used)
            }
            WeightProfile::Trainer | WeightProfile::Wild => attack_move_weight(effectiveness),
        };
    }

    if profile == WeightProfile::Trainer {
        let multiplier = healing_move_weight(user.health_proportion());
        for weight in &mut weights {
            *weight *= multiplier;
        }
    }

    if weights.iter().all(|weight| *weight == 0.0) && locked.contains(&true) {
        for (weight, locked) in weights.iter_mut().zip(locked) {
            *weight = if locked { 0.0 } else { 1.0 };
        }
    }

    tracing::debug!("Move weights for {}: {:?}", user.species, weights);

    weights
}

/// True when some slot holds a move that PP, Taunt and Torment all allow.
///
/// Slots whose move cannot be resolved are not counted.
pub fn has_legal_move(user: &Combatant, env: &BattleEnv<'_>) -> bool {
    user.moves.iter().any(|slot| {
        slot.is_set()
            && env
                .move_descriptor(slot.move_id)
                .is_ok_and(|descriptor| is_legal(user, slot, &descriptor))
    })
}

/// Whether volatile conditions and PP allow using the move in `slot`.
pub fn is_legal(user: &Combatant, slot: &MoveSlot, descriptor: &MoveDescriptor) -> bool {
    if user.volatile.taunted() && descriptor.category.is_status() {
        return false;
    }
    if user.volatile.torment && slot.move_id == user.volatile.last_move {
        return false;
    }
    slot.pp > 0
}

/// One-hot lock on the encored move's slot.
///
/// If the encored move is not in the moveset the lock cannot be honoured;
/// every slot gets equal weight instead.
fn encore_weights(user: &Combatant) -> MoveWeights {
    let mut weights = [0.0; BattleConfig::MAX_MOVE_SLOTS];
    match user.slot_of(user.volatile.encore_move) {
        Some(index) => weights[index] = 1.0,
        None => {
            tracing::error!(
                "Encored move {} is not in {}'s moveset",
                user.volatile.encore_move,
                user.species
            );
            weights = [1.0; BattleConfig::MAX_MOVE_SLOTS];
        }
    }
    weights
}
