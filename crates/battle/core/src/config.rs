use crate::items::ItemId;

/// Battle AI tunables shared by every NPC strategy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Opponent health proportion strictly below which a usable priority move
    /// is taken instead of a weighted pick.
    pub priority_health_threshold: f64,

    /// Own health proportion at or below which scripted healers use their item.
    pub healing_health_threshold: f64,

    /// Item used by scripted healers that do not name one.
    pub default_healing_item: ItemId,

    /// Number of scripted heals allowed per battle when a trainer does not
    /// override it.
    pub default_max_times_healed: u32,

    /// Upper bound on re-draws for the plain random-move strategy.
    pub random_attack_max_draws: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_MOVE_SLOTS: usize = 4;
    pub const MAX_PARTY_SIZE: usize = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PRIORITY_HEALTH_THRESHOLD: f64 = 0.2;
    pub const DEFAULT_HEALING_HEALTH_THRESHOLD: f64 = 0.2;
    /// Hyper Potion in the bundled medicine catalogue.
    pub const DEFAULT_HEALING_ITEM: ItemId = ItemId(3);
    pub const DEFAULT_MAX_TIMES_HEALED: u32 = 3;
    pub const DEFAULT_RANDOM_ATTACK_MAX_DRAWS: u32 = 64;

    pub fn new() -> Self {
        Self {
            priority_health_threshold: Self::DEFAULT_PRIORITY_HEALTH_THRESHOLD,
            healing_health_threshold: Self::DEFAULT_HEALING_HEALTH_THRESHOLD,
            default_healing_item: Self::DEFAULT_HEALING_ITEM,
            default_max_times_healed: Self::DEFAULT_MAX_TIMES_HEALED,
            random_attack_max_draws: Self::DEFAULT_RANDOM_ATTACK_MAX_DRAWS,
        }
    }

    pub fn with_random_attack_max_draws(mut self, max_draws: u32) -> Self {
        self.random_attack_max_draws = max_draws;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
