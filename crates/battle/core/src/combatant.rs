//! Combatants: the Pokémon currently taking part in a battle.
//!
//! A [`Combatant`] is owned by the battle state; the decision engine only
//! reads it.

use crate::config::BattleConfig;
use crate::moves::MoveId;
use crate::types::TypePair;

/// Non-volatile status condition (persists after switching out).
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
pub enum NonVolatileStatus {
    #[default]
    None,
    Burn,
    Frozen,
    Paralysed,
    Poisoned,
    BadlyPoisoned,
    Asleep,
}

/// One of the four move-assignment positions of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSlot {
    pub move_id: MoveId,
    /// Remaining uses.
    pub pp: u8,
}

impl MoveSlot {
    pub const EMPTY: Self = Self {
        move_id: MoveId::UNSET,
        pp: 0,
    };

    pub const fn new(move_id: MoveId, pp: u8) -> Self {
        Self { move_id, pp }
    }

    #[inline]
    pub const fn is_set(&self) -> bool {
        !self.move_id.is_unset()
    }

    /// Set and with uses remaining.
    #[inline]
    pub const fn is_usable(&self) -> bool {
        self.is_set() && self.pp > 0
    }
}

/// Battle-turn-limited conditions restricting move choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VolatileConditions {
    /// Turns left in which the encored move must be repeated.
    pub encore_turns: u8,
    /// Move locked in by Encore.
    pub encore_move: MoveId,
    /// Turns left in which Status moves are banned.
    pub taunt_turns: u8,
    /// The last move used may not be used again.
    pub torment: bool,
    /// Move used on the previous turn, [`MoveId::UNSET`] if none.
    pub last_move: MoveId,
}

impl VolatileConditions {
    #[inline]
    pub const fn encored(&self) -> bool {
        self.encore_turns > 0
    }

    #[inline]
    pub const fn taunted(&self) -> bool {
        self.taunt_turns > 0
    }
}

/// A Pokémon as read by the decision engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub species: String,
    pub types: TypePair,
    pub health: u16,
    pub max_health: u16,
    pub moves: [MoveSlot; BattleConfig::MAX_MOVE_SLOTS],
    #[cfg_attr(feature = "serde", serde(default))]
    pub volatile: VolatileConditions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: NonVolatileStatus,
}

impl Combatant {
    /// Creates a healthy combatant with every move slot empty.
    pub fn new(species: impl Into<String>, types: TypePair, max_health: u16) -> Self {
        Self {
            species: species.into(),
            types,
            health: max_health,
            max_health,
            moves: [MoveSlot::EMPTY; BattleConfig::MAX_MOVE_SLOTS],
            volatile: VolatileConditions::default(),
            status: NonVolatileStatus::None,
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: u16) -> Self {
        self.health = health.min(self.max_health);
        self
    }

    #[must_use]
    pub fn with_moves(mut self, moves: [MoveSlot; BattleConfig::MAX_MOVE_SLOTS]) -> Self {
        self.moves = moves;
        self
    }

    #[must_use]
    pub fn with_move(mut self, slot: usize, move_slot: MoveSlot) -> Self {
        if let Some(target) = self.moves.get_mut(slot) {
            *target = move_slot;
        }
        self
    }

    #[must_use]
    pub fn with_volatile(mut self, volatile: VolatileConditions) -> Self {
        self.volatile = volatile;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: NonVolatileStatus) -> Self {
        self.status = status;
        self
    }

    /// Current health as a proportion of maximum health.
    ///
    /// A combatant with zero maximum health reports `0`.
    pub fn health_proportion(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        f64::from(self.health) / f64::from(self.max_health)
    }

    #[inline]
    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    /// True when at least one slot holds a move with uses remaining.
    pub fn has_usable_move(&self) -> bool {
        self.moves.iter().any(MoveSlot::is_usable)
    }

    /// Slot index holding `move_id`, if any.
    pub fn slot_of(&self, move_id: MoveId) -> Option<usize> {
        if move_id.is_unset() {
            return None;
        }
        self.moves.iter().position(|slot| slot.move_id == move_id)
    }
}
