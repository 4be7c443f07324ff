use battle_core::Action;

use crate::providers::ai::scoring::{WeightProfile, draw_index, is_legal, move_weights};
use crate::providers::ai::{DecisionContext, DecisionStage};

/// Weighted random move choice; always produces an action.
///
/// Draws exactly one uniform value. With [`WeightProfile::Trainer`], picking
/// a legal stat- or condition-affecting move counts toward the status-move
/// decay.
#[derive(Clone, Copy, Debug)]
pub struct WeightedMoves {
    pub profile: WeightProfile,
}

impl WeightedMoves {
    pub const fn trainer() -> Self {
        Self {
            profile: WeightProfile::Trainer,
        }
    }

    pub const fn wild() -> Self {
        Self {
            profile: WeightProfile::Wild,
        }
    }
}

impl DecisionStage for WeightedMoves {
    fn name(&self) -> &'static str {
        match self.profile {
            WeightProfile::Trainer => "weighted_moves",
            WeightProfile::Wild => "wild_moves",
        }
    }

    fn decide(&self, ctx: &mut DecisionContext<'_>) -> Option<Action> {
        let active = ctx.active();
        let weights = move_weights(
            active,
            ctx.opponent_active(),
            &ctx.env,
            ctx.memory.status_moves_used,
            self.profile,
        );

        let index = draw_index(&weights, ctx.rng).unwrap_or_else(|err| {
            tracing::error!("Falling back to move slot 0: {}", err);
            0
        });

        if self.profile == WeightProfile::Trainer {
            let slot = active.moves[index];
            if slot.is_set() {
                match ctx.env.move_descriptor(slot.move_id) {
                    Ok(descriptor)
                        if descriptor.affects_stats_or_condition()
                            && is_legal(active, &slot, &descriptor) =>
                    {
                        ctx.memory.record_status_move();
                    }
                    Ok(_) => {}
                    Err(err) => tracing::error!("Chosen move slot {}: {}", index, err),
                }
            }
        }

        Some(Action::fight(ctx.opponent(), index))
    }
}
