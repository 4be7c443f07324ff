//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod simulate;
mod trainers;
mod weights;

pub use simulate::Simulate;
pub use trainers::Trainers;
pub use weights::Weights;

use battle_core::{Action, BattleEnv, Combatant};

/// Human-readable label for an action taken by `actor`.
pub(crate) fn describe_action(action: &Action, actor: &Combatant, env: &BattleEnv<'_>) -> String {
    match action {
        Action::Fight(fight) if fight.struggle => "Struggle".to_string(),
        Action::Fight(fight) => {
            let slot = actor.moves.get(fight.move_slot);
            match slot.filter(|slot| slot.is_set()) {
                Some(slot) => match env.move_descriptor(slot.move_id) {
                    Ok(descriptor) => format!("[{}] {}", fight.move_slot, descriptor.name),
                    Err(_) => format!("[{}] {}", fight.move_slot, slot.move_id),
                },
                None => format!("[{}] (empty slot)", fight.move_slot),
            }
        }
        Action::UseItem(item) => {
            let name = env
                .item_definition(item.category, item.item)
                .map(|def| def.name)
                .unwrap_or_else(|_| item.item.to_string());
            match item.target_move_slot {
                Some(slot) => format!("{} ({}, move slot {})", name, item.category, slot),
                None => format!("{} ({})", name, item.category),
            }
        }
    }
}
