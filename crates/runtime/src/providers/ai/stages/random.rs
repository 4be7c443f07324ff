use battle_core::Action;

use crate::providers::ai::{DecisionContext, DecisionStage};

/// Uniform pick among set move slots, re-drawn until the slot has PP.
///
/// Each attempt draws one integer. Attempts are capped by
/// `random_attack_max_draws`; past the cap the first usable slot is taken,
/// or Struggle when none is.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMoves;

impl DecisionStage for RandomMoves {
    fn name(&self) -> &'static str {
        "random_moves"
    }

    fn decide(&self, ctx: &mut DecisionContext<'_>) -> Option<Action> {
        let active = ctx.active();
        let set_slots: Vec<usize> = active
            .moves
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_set())
            .map(|(index, _)| index)
            .collect();

        if set_slots.is_empty() {
            tracing::error!("{} has no move set; using Struggle", active.species);
            return Some(Action::struggle(ctx.opponent()));
        }

        for _ in 0..ctx.config.random_attack_max_draws {
            let pick = ctx.rng.next_int_range(0, set_slots.len() as u32) as usize;
            let index = set_slots[pick];
            if active.moves[index].pp > 0 {
                return Some(Action::fight(ctx.opponent(), index));
            }
        }

        tracing::warn!(
            "No move with PP drawn for {} in {} attempts",
            active.species,
            ctx.config.random_attack_max_draws
        );
        let action = match active.moves.iter().position(|slot| slot.is_usable()) {
            Some(index) => Action::fight(ctx.opponent(), index),
            None => Action::struggle(ctx.opponent()),
        };
        Some(action)
    }
}
