//! Data-driven battle content and loaders.
//!
//! This crate reads static battle data from RON/TOML files:
//! - Move registry (data-driven via RON)
//! - Battle and medicine item registries (data-driven via RON)
//! - Trainer rosters with their strategies (data-driven via RON)
//! - Battle AI tunables (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in battle state.
//!
//! All loaders use battle-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CombatantSpec, ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult, MoveLoader,
    TrainerDefinition, TrainerLoader, TrainerSpec,
};
