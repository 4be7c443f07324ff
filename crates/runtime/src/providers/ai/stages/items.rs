use battle_core::{Action, ItemCategory};

use crate::providers::ai::scoring::choose_item;
use crate::providers::ai::{DecisionContext, DecisionStage};

/// Uses a uniformly chosen compatible item of one category on the active
/// combatant; always produces an action.
#[derive(Clone, Copy, Debug)]
pub struct RandomItem {
    pub category: ItemCategory,
}

impl RandomItem {
    pub const fn new(category: ItemCategory) -> Self {
        Self { category }
    }
}

impl DecisionStage for RandomItem {
    fn name(&self) -> &'static str {
        match self.category {
            ItemCategory::Battle => "random_battle_item",
            ItemCategory::Medicine => "random_medicine_item",
        }
    }

    fn decide(&self, ctx: &mut DecisionContext<'_>) -> Option<Action> {
        let choice = choose_item(&ctx.env, self.category, ctx.active(), ctx.rng);
        Some(
            Action::use_item(choice.category, choice.item, ctx.active_index())
                .with_target_move_slot(choice.target_move_slot),
        )
    }
}
