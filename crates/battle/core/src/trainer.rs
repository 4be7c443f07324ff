//! NPC strategy selection and per-trainer overrides.

use crate::config::BattleConfig;
use crate::items::ItemId;

/// Decision strategy an NPC participant plays with.
///
/// Content files name strategies in snake_case (`"gym_leader"`); parsing is
/// case-insensitive.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Effectiveness-weighted moves with no status or health bias.
    WildPokemon,
    /// Uniform pick among set moves with PP left.
    RandomAttack,
    /// Weighted moves with a low-health priority finisher.
    #[default]
    BasicTrainer,
    /// Basic trainer that heals itself a limited number of times.
    GymLeader,
    /// Uniform pick among compatible battle items.
    RandomBattleItem,
    /// Uniform pick among compatible medicine items.
    RandomMedicineItem,
}

impl StrategyKind {
    /// Whether this strategy can emit item actions.
    pub const fn uses_items(self) -> bool {
        matches!(
            self,
            Self::GymLeader | Self::RandomBattleItem | Self::RandomMedicineItem
        )
    }
}

/// How a trainer plays, with optional overrides of the battle-wide defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrainerProfile {
    pub strategy: StrategyKind,
    /// Medicine item used by scripted heals.
    pub healing_item: Option<ItemId>,
    pub max_times_healed: Option<u32>,
}

impl TrainerProfile {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_healing(mut self, item: ItemId, max_times_healed: u32) -> Self {
        self.healing_item = Some(item);
        self.max_times_healed = Some(max_times_healed);
        self
    }

    pub fn healing_item_or(&self, config: &BattleConfig) -> ItemId {
        self.healing_item.unwrap_or(config.default_healing_item)
    }

    pub fn max_times_healed_or(&self, config: &BattleConfig) -> u32 {
        self.max_times_healed
            .unwrap_or(config.default_max_times_healed)
    }
}
