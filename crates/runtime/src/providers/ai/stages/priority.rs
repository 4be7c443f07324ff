use battle_core::Action;

use crate::providers::ai::scoring::is_legal;
use crate::providers::ai::{DecisionContext, DecisionStage};

/// Finishes a weakened opponent with the first usable priority move.
///
/// Fires when the opposing combatant's health proportion is strictly below
/// the priority threshold. Slots are scanned in order; a slot qualifies when
/// its move is flagged priority, has PP left, and is not locked out by Taunt
/// or Torment. Consumes no randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorityFinisher;

impl DecisionStage for PriorityFinisher {
    fn name(&self) -> &'static str {
        "priority_finisher"
    }

    fn decide(&self, ctx: &mut DecisionContext<'_>) -> Option<Action> {
        let opponent = ctx.opponent_active()?;
        if opponent.health_proportion() >= ctx.config.priority_health_threshold {
            return None;
        }

        let active = ctx.active();
        let slot = active.moves.iter().enumerate().find_map(|(index, slot)| {
            if !slot.is_set() {
                return None;
            }
            match ctx.env.move_descriptor(slot.move_id) {
                Ok(descriptor) if descriptor.is_priority() && is_legal(active, slot, &descriptor) => {
                    Some(index)
                }
                Ok(_) => None,
                Err(err) => {
                    tracing::error!("Priority scan skipped slot {}: {}", index, err);
                    None
                }
            }
        })?;

        Some(Action::fight(ctx.opponent(), slot))
    }
}
