use battle_core::{Action, ItemCategory};

use crate::providers::ai::{DecisionContext, DecisionStage};

/// Uses the trainer's healing item on its active combatant when health is at
/// or below the healing threshold, up to a per-battle cap.
///
/// The item comes from the trainer profile, falling back to the configured
/// default; so does the cap. Consumes no randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedHeal;

impl DecisionStage for ScriptedHeal {
    fn name(&self) -> &'static str {
        "scripted_heal"
    }

    fn decide(&self, ctx: &mut DecisionContext<'_>) -> Option<Action> {
        let active = ctx.active();
        if active.health_proportion() > ctx.config.healing_health_threshold {
            return None;
        }

        let cap = ctx.profile.max_times_healed_or(ctx.config);
        if ctx.memory.times_healed >= cap {
            tracing::debug!(
                "{} is low but has used all {} heals",
                active.species,
                cap
            );
            return None;
        }

        let item = ctx.profile.healing_item_or(ctx.config);
        ctx.memory.record_heal();
        tracing::debug!(
            "Healing {} with {} ({}/{})",
            active.species,
            item,
            ctx.memory.times_healed,
            cap
        );

        Some(Action::use_item(
            ItemCategory::Medicine,
            item,
            ctx.active_index(),
        ))
    }
}
