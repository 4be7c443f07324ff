//! Battle-usable item definitions.
//!
//! Items live in per-category registries ([`ItemCategory`]); ids are unique
//! within a category, and id `0` of each category is the designated fallback
//! when no item of that category suits the target.

use std::fmt;

use crate::combatant::{Combatant, NonVolatileStatus};
use crate::moves::MoveId;

/// Identifier of an item within its category registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u16);

impl ItemId {
    /// Fallback item of every category.
    pub const DEFAULT: Self = Self(0);
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// Registry an item belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    /// Stat-boosting items (X Attack, Dire Hit, ...).
    #[default]
    Battle,
    /// Restoratives (potions, revives, status cures, PP restores).
    Medicine,
}

/// Stat stages granted by a battle item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatModifiers {
    pub attack: i8,
    pub defense: i8,
    pub special_attack: i8,
    pub special_defense: i8,
    pub speed: i8,
    pub boosts_critical_hit_rate: bool,
}

/// Item behaviour with kind-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Battle item raising stat stages.
    StatBoost(StatModifiers),

    /// Restores health; `fully_heals` ignores `amount`.
    Health { fully_heals: bool, amount: u16 },

    /// Brings a fainted combatant back with a proportion of its health.
    Revive { proportion: f64 },

    /// Cures the listed non-volatile conditions.
    StatusCure { cures: Vec<NonVolatileStatus> },

    /// Restores move PP, for one chosen move or for all moves.
    PpRestore {
        single_move: bool,
        fully_restores: bool,
        amount: u8,
    },
}

impl ItemKind {
    pub const fn category(&self) -> ItemCategory {
        match self {
            Self::StatBoost(_) => ItemCategory::Battle,
            _ => ItemCategory::Medicine,
        }
    }
}

/// Item definition with common fields and kind-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub const fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    /// Whether using this item on `target` would have any effect.
    ///
    /// `max_pp` resolves a move's maximum PP; PP restores are only compatible
    /// when some set move is below its maximum.
    pub fn is_compatible_with<F>(&self, target: &Combatant, max_pp: F) -> bool
    where
        F: Fn(MoveId) -> Option<u8>,
    {
        match &self.kind {
            ItemKind::StatBoost(_) => !target.is_fainted(),
            ItemKind::Health { .. } => !target.is_fainted() && target.health < target.max_health,
            ItemKind::Revive { .. } => target.is_fainted(),
            ItemKind::StatusCure { cures } => {
                !target.is_fainted()
                    && target.status != NonVolatileStatus::None
                    && cures.contains(&target.status)
            }
            ItemKind::PpRestore { .. } => {
                !target.is_fainted() && first_restorable_slot(target, max_pp).is_some()
            }
        }
    }

    /// Move slot a single-move PP restore should target.
    ///
    /// Returns `None` for every other item kind.
    pub fn target_move_slot<F>(&self, target: &Combatant, max_pp: F) -> Option<usize>
    where
        F: Fn(MoveId) -> Option<u8>,
    {
        match self.kind {
            ItemKind::PpRestore {
                single_move: true, ..
            } => first_restorable_slot(target, max_pp),
            _ => None,
        }
    }
}

/// First set slot whose PP is below the move's maximum.
fn first_restorable_slot<F>(target: &Combatant, max_pp: F) -> Option<usize>
where
    F: Fn(MoveId) -> Option<u8>,
{
    target.moves.iter().position(|slot| {
        slot.is_set()
            && max_pp(slot.move_id)
                .map(|max| slot.pp < max)
                .unwrap_or(false)
    })
}
