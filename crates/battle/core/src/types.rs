//! Elemental typing of moves and species.

/// Elemental type of a move or species.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ElementType {
    #[default]
    Normal,
    Fire,
    Fighting,
    Water,
    Flying,
    Grass,
    Poison,
    Electric,
    Ground,
    Psychic,
    Rock,
    Ice,
    Bug,
    Dragon,
    Ghost,
    Dark,
    Steel,
}

impl ElementType {
    /// Every type, in declaration order.
    pub const ALL: [ElementType; 17] = [
        Self::Normal,
        Self::Fire,
        Self::Fighting,
        Self::Water,
        Self::Flying,
        Self::Grass,
        Self::Poison,
        Self::Electric,
        Self::Ground,
        Self::Psychic,
        Self::Rock,
        Self::Ice,
        Self::Bug,
        Self::Dragon,
        Self::Ghost,
        Self::Dark,
        Self::Steel,
    ];
}

/// A species' single or dual typing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypePair {
    pub primary: ElementType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary: Option<ElementType>,
}

impl TypePair {
    pub const fn single(primary: ElementType) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub const fn dual(primary: ElementType, secondary: ElementType) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    pub fn contains(&self, ty: ElementType) -> bool {
        self.primary == ty || self.secondary == Some(ty)
    }
}
