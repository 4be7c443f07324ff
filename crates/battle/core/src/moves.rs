//! Move descriptors as seen by the decision engine.
//!
//! Descriptors are immutable per [`MoveId`] and come from a
//! [`crate::env::MoveOracle`]. Only the fields that influence move choice are
//! modelled here; power, accuracy and damage formulas belong to the turn
//! executor.

use std::fmt;

use crate::combatant::NonVolatileStatus;
use crate::types::ElementType;

/// Identifier of a move in the move registry.
///
/// [`MoveId::UNSET`] marks an empty move slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveId(pub u16);

impl MoveId {
    /// Reserved identifier for an empty slot.
    pub const UNSET: Self = Self(0);

    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0 == Self::UNSET.0
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            write!(f, "move:unset")
        } else {
            write!(f, "move:{}", self.0)
        }
    }
}

/// Damage category of a move.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveCategory {
    Physical,
    Special,
    /// Deals no direct damage.
    Status,
}

impl MoveCategory {
    #[inline]
    pub const fn is_status(self) -> bool {
        matches!(self, Self::Status)
    }
}

bitflags::bitflags! {
    /// Behavioural flags of a move.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        /// Acts with elevated turn-order priority.
        const PRIORITY = 1 << 0;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MoveFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MoveFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Stat-stage changes a move applies to its user or target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatChanges {
    pub attack: i8,
    pub defense: i8,
    pub special_attack: i8,
    pub special_defense: i8,
    pub speed: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatChanges {
    pub const NONE: Self = Self {
        attack: 0,
        defense: 0,
        special_attack: 0,
        special_defense: 0,
        speed: 0,
        accuracy: 0,
        evasion: 0,
    };

    pub fn iter(&self) -> impl Iterator<Item = i8> {
        [
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
            self.accuracy,
            self.evasion,
        ]
        .into_iter()
    }

    pub fn any_nonzero(&self) -> bool {
        self.iter().any(|stage| stage != 0)
    }
}

/// Chance that a move inflicts a non-volatile status condition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusChance {
    pub condition: NonVolatileStatus,
    /// Probability in `[0, 1]`; `1` means the condition is guaranteed.
    pub chance: f64,
}

impl StatusChance {
    pub const fn new(condition: NonVolatileStatus, chance: f64) -> Self {
        Self { condition, chance }
    }
}

/// Immutable metadata of a move.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDescriptor {
    pub id: MoveId,
    pub name: String,
    pub element: ElementType,
    pub category: MoveCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: MoveFlags,
    pub max_pp: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_stat_changes: StatChanges,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_stat_changes: StatChanges,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_chances: Vec<StatusChance>,
}

impl MoveDescriptor {
    pub fn new(
        id: MoveId,
        name: impl Into<String>,
        element: ElementType,
        category: MoveCategory,
        max_pp: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            element,
            category,
            flags: MoveFlags::empty(),
            max_pp,
            user_stat_changes: StatChanges::NONE,
            target_stat_changes: StatChanges::NONE,
            status_chances: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_user_stat_changes(mut self, changes: StatChanges) -> Self {
        self.user_stat_changes = changes;
        self
    }

    #[must_use]
    pub fn with_target_stat_changes(mut self, changes: StatChanges) -> Self {
        self.target_stat_changes = changes;
        self
    }

    #[must_use]
    pub fn with_status_chance(mut self, condition: NonVolatileStatus, chance: f64) -> Self {
        self.status_chances.push(StatusChance::new(condition, chance));
        self
    }

    #[inline]
    pub fn is_priority(&self) -> bool {
        self.flags.contains(MoveFlags::PRIORITY)
    }

    /// Whether using this move counts toward the AI's status-move usage.
    ///
    /// True when the move changes any stat stage of its user or target, or
    /// when it inflicts a non-volatile condition with certainty. Chance-based
    /// infliction (probability below 1) does not count.
    pub fn affects_stats_or_condition(&self) -> bool {
        self.user_stat_changes.any_nonzero()
            || self.target_stat_changes.any_nonzero()
            || self.status_chances.iter().any(|entry| entry.chance >= 1.0)
    }
}
