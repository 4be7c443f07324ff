//! Traits describing read-only battle data.
//!
//! Oracles expose move metadata, item registries and the type-effectiveness
//! chart. The [`Env`] aggregate bundles them so the decision engine can reach
//! everything it needs without coupling to concrete registries. The battle's
//! random stream is deliberately *not* part of [`Env`]: it is mutable,
//! per-battle state and is passed alongside.
mod error;
mod items;
mod moves;
mod rng;
mod types;

pub use error::OracleError;
pub use items::ItemOracle;
pub use moves::MoveOracle;
pub use rng::{PcgRng, PcgStream, RandomStream, SequenceStream, compute_seed};
pub use types::{StandardTypeChart, TypeOracle};

use crate::items::{ItemCategory, ItemDefinition, ItemId};
use crate::moves::{MoveDescriptor, MoveId};
use crate::types::{ElementType, TypePair};

/// Aggregates read-only oracles required by the decision engine.
pub struct Env<'a, M, I, T>
where
    M: MoveOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TypeOracle + ?Sized,
{
    moves: &'a M,
    items: &'a I,
    types: &'a T,
}

impl<M, I, T> Clone for Env<'_, M, I, T>
where
    M: MoveOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TypeOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, I, T> Copy for Env<'_, M, I, T>
where
    M: MoveOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TypeOracle + ?Sized,
{
}

impl<M, I, T> core::fmt::Debug for Env<'_, M, I, T>
where
    M: MoveOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TypeOracle + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env").finish_non_exhaustive()
    }
}

pub type BattleEnv<'a> = Env<'a, dyn MoveOracle + 'a, dyn ItemOracle + 'a, dyn TypeOracle + 'a>;

impl<'a, M, I, T> Env<'a, M, I, T>
where
    M: MoveOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TypeOracle + ?Sized,
{
    pub fn new(moves: &'a M, items: &'a I, types: &'a T) -> Self {
        Self {
            moves,
            items,
            types,
        }
    }

    pub fn moves(&self) -> &'a M {
        self.moves
    }

    pub fn items(&self) -> &'a I {
        self.items
    }

    pub fn types(&self) -> &'a T {
        self.types
    }

    /// Resolves a set move id to its descriptor.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownMove` if the registry has no such move.
    pub fn move_descriptor(&self, id: MoveId) -> Result<MoveDescriptor, OracleError> {
        self.moves.descriptor(id).ok_or(OracleError::UnknownMove(id))
    }

    /// Resolves an item id within a category registry.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownItem` if the registry has no such item.
    pub fn item_definition(
        &self,
        category: ItemCategory,
        id: ItemId,
    ) -> Result<ItemDefinition, OracleError> {
        self.items
            .definition(category, id)
            .ok_or(OracleError::UnknownItem { category, id })
    }

    /// Maximum PP of a move, used by item compatibility checks.
    pub fn max_pp(&self, id: MoveId) -> Option<u8> {
        self.moves.descriptor(id).map(|descriptor| descriptor.max_pp)
    }

    /// Effectiveness multiplier of `attacking` against a defender's typing.
    pub fn effectiveness(&self, attacking: ElementType, defending: TypePair) -> f64 {
        self.types.multiplier(attacking, defending)
    }
}

impl<'a, M, I, T> Env<'a, M, I, T>
where
    M: MoveOracle + 'a,
    I: ItemOracle + 'a,
    T: TypeOracle + 'a,
{
    /// Converts this environment into a trait-object based `BattleEnv`.
    pub fn as_battle_env(&self) -> BattleEnv<'a> {
        let moves: &'a dyn MoveOracle = self.moves;
        let items: &'a dyn ItemOracle = self.items;
        let types: &'a dyn TypeOracle = self.types;
        Env::new(moves, items, types)
    }
}
