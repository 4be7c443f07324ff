use battle_core::Action;

use crate::providers::ai::scoring::has_legal_move;
use crate::providers::ai::{DecisionContext, DecisionStage};

/// Forces Struggle when no move slot can be used this turn.
///
/// A slot is usable when it is set, has PP, and is not locked out by Taunt
/// or Torment. Under Encore only the encored slot counts, and only its PP is
/// checked. Consumes no randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct StruggleGuard;

impl DecisionStage for StruggleGuard {
    fn name(&self) -> &'static str {
        "struggle_guard"
    }

    fn decide(&self, ctx: &mut DecisionContext<'_>) -> Option<Action> {
        let active = ctx.active();
        let usable = if active.volatile.encored() {
            match active.slot_of(active.volatile.encore_move) {
                Some(index) => active.moves[index].pp > 0,
                // The weighting pass spreads evenly over every slot.
                None => active.has_usable_move(),
            }
        } else {
            has_legal_move(active, &ctx.env)
        };
        if usable {
            return None;
        }
        tracing::debug!("{} has no usable move", active.species);
        Some(Action::struggle(ctx.opponent()))
    }
}
