//! Runtime wrappers around static battle content.
//!
//! These implementations expose `battle-core` oracle traits and bundle them
//! into an [`OracleManager`] so a decision call can borrow a
//! [`battle_core::BattleEnv`] on demand. The data is immutable once built;
//! several battles may share one manager without cross-talk.
mod items;
mod moves;

use std::sync::Arc;

use battle_core::{BattleEnv, Env, StandardTypeChart};

pub use items::ItemOracleImpl;
pub use moves::MoveOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) moves: Arc<MoveOracleImpl>,
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) types: StandardTypeChart,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(moves: Arc<MoveOracleImpl>, items: Arc<ItemOracleImpl>) -> Self {
        Self {
            moves,
            items,
            types: StandardTypeChart, // stateless chart
        }
    }

    /// Builds registries from a content data directory (`moves.ron`, `items.ron`).
    #[cfg(feature = "content")]
    pub fn from_content(factory: &battle_content::ContentFactory) -> anyhow::Result<Self> {
        let moves = MoveOracleImpl::from_descriptors(factory.load_moves()?);
        let catalog = factory.load_items()?;
        let items = ItemOracleImpl::from_registries(catalog.battle, catalog.medicine);
        Ok(Self::new(Arc::new(moves), Arc::new(items)))
    }

    /// Borrows the oracles as a trait-object environment for battle-core.
    pub fn as_battle_env(&self) -> BattleEnv<'_> {
        Env::new(self.moves.as_ref(), self.items.as_ref(), &self.types).as_battle_env()
    }

    pub fn moves(&self) -> &MoveOracleImpl {
        &self.moves
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }
}
