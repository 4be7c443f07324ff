//! Actions emitted by a decision and consumed by the turn executor.

use crate::battle::ParticipantId;
use crate::items::{ItemCategory, ItemId};

/// Index into a combatant's four move slots.
pub type MoveSlotIndex = usize;

/// Attack the target with a move slot, or with Struggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightAction {
    pub target: ParticipantId,
    /// Ignored by the executor when `struggle` is set.
    pub move_slot: MoveSlotIndex,
    pub struggle: bool,
}

/// Use an item on a party member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub category: ItemCategory,
    pub item: ItemId,
    pub target_party_index: usize,
    /// Move slot for single-move PP restores.
    pub target_move_slot: Option<MoveSlotIndex>,
}

/// The one action a decision produces for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Fight(FightAction),
    UseItem(UseItemAction),
}

impl Action {
    pub const fn fight(target: ParticipantId, move_slot: MoveSlotIndex) -> Self {
        Self::Fight(FightAction {
            target,
            move_slot,
            struggle: false,
        })
    }

    pub const fn struggle(target: ParticipantId) -> Self {
        Self::Fight(FightAction {
            target,
            move_slot: 0,
            struggle: true,
        })
    }

    pub const fn use_item(category: ItemCategory, item: ItemId, target_party_index: usize) -> Self {
        Self::UseItem(UseItemAction {
            category,
            item,
            target_party_index,
            target_move_slot: None,
        })
    }

    #[must_use]
    pub const fn with_target_move_slot(self, slot: Option<MoveSlotIndex>) -> Self {
        match self {
            Self::UseItem(mut item) => {
                item.target_move_slot = slot;
                Self::UseItem(item)
            }
            other => other,
        }
    }

    /// Move slot of a non-Struggle fight, if this is one.
    pub const fn move_slot(&self) -> Option<MoveSlotIndex> {
        match self {
            Self::Fight(FightAction {
                move_slot,
                struggle: false,
                ..
            }) => Some(*move_slot),
            _ => None,
        }
    }

    pub const fn is_struggle(&self) -> bool {
        matches!(self, Self::Fight(FightAction { struggle: true, .. }))
    }
}
