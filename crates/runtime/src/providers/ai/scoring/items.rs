//! Item candidate filtering and uniform item choice.

use battle_core::{BattleEnv, Combatant, ItemCategory, ItemDefinition, ItemId, RandomStream};

/// An item picked for a target, with the move slot single-move PP restores
/// apply to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemChoice {
    pub category: ItemCategory,
    pub item: ItemId,
    pub target_move_slot: Option<usize>,
}

/// Items of `category` that would have an effect on `target`, in registry
/// order.
pub fn compatible_items(
    env: &BattleEnv<'_>,
    category: ItemCategory,
    target: &Combatant,
) -> Vec<ItemDefinition> {
    env.items()
        .items_in(category)
        .into_iter()
        .filter(|item| item.is_compatible_with(target, |id| env.max_pp(id)))
        .collect()
}

/// Picks uniformly among the compatible items of `category`.
///
/// Draws once from `rng` when at least one item qualifies. With no candidate
/// the category's fallback item is chosen without drawing.
pub fn choose_item(
    env: &BattleEnv<'_>,
    category: ItemCategory,
    target: &Combatant,
    rng: &mut dyn RandomStream,
) -> ItemChoice {
    let candidates = compatible_items(env, category, target);

    let chosen = if candidates.is_empty() {
        tracing::warn!(
            "No {} item is compatible with {}; choosing {}",
            category,
            target.species,
            ItemId::DEFAULT
        );
        env.items().definition(category, ItemId::DEFAULT)
    } else {
        let index = rng.next_int_range(0, candidates.len() as u32) as usize;
        candidates.into_iter().nth(index)
    };

    let Some(definition) = chosen else {
        tracing::error!(
            "{} registry has no fallback item {}",
            category,
            ItemId::DEFAULT
        );
        return ItemChoice {
            category,
            item: ItemId::DEFAULT,
            target_move_slot: None,
        };
    };

    ItemChoice {
        category,
        item: definition.id,
        target_move_slot: definition.target_move_slot(target, |id| env.max_pp(id)),
    }
}
