//! [`battle_core::ItemOracle`] backed by in-memory per-category registries.
use battle_core::{ItemCategory, ItemDefinition, ItemId, ItemOracle};

/// ItemOracle implementation with static item registries.
///
/// Registry order is insertion order and is what uniform item picks index
/// into.
#[derive(Debug, Default)]
pub struct ItemOracleImpl {
    battle: Vec<ItemDefinition>,
    medicine: Vec<ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registries(
        battle: impl IntoIterator<Item = ItemDefinition>,
        medicine: impl IntoIterator<Item = ItemDefinition>,
    ) -> Self {
        let mut oracle = Self::new();
        for def in battle.into_iter().chain(medicine) {
            oracle.add_definition(def);
        }
        oracle
    }

    /// Add an item definition to the registry of its kind's category.
    ///
    /// A definition with an id already present replaces it in place.
    pub fn add_definition(&mut self, def: ItemDefinition) {
        let registry = self.registry_mut(def.category());
        match registry.iter_mut().find(|existing| existing.id == def.id) {
            Some(existing) => *existing = def,
            None => registry.push(def),
        }
    }

    fn registry(&self, category: ItemCategory) -> &[ItemDefinition] {
        match category {
            ItemCategory::Battle => &self.battle,
            ItemCategory::Medicine => &self.medicine,
        }
    }

    fn registry_mut(&mut self, category: ItemCategory) -> &mut Vec<ItemDefinition> {
        match category {
            ItemCategory::Battle => &mut self.battle,
            ItemCategory::Medicine => &mut self.medicine,
        }
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, category: ItemCategory, id: ItemId) -> Option<ItemDefinition> {
        self.registry(category)
            .iter()
            .find(|def| def.id == id)
            .cloned()
    }

    fn items_in(&self, category: ItemCategory) -> Vec<ItemDefinition> {
        self.registry(category).to_vec()
    }
}
