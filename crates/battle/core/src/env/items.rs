use crate::items::{ItemCategory, ItemDefinition, ItemId};

/// Oracle over the per-category item registries.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, category: ItemCategory, id: ItemId) -> Option<ItemDefinition>;

    /// Every item of `category`, in registry order.
    ///
    /// Registry order is part of the deterministic draw contract: uniform
    /// item picks index into this list.
    fn items_in(&self, category: ItemCategory) -> Vec<ItemDefinition>;
}
