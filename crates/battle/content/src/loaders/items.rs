//! Item registry loader.

use std::collections::HashSet;
use std::path::Path;

use battle_core::{ItemCategory, ItemDefinition, ItemId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files: one registry per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    #[serde(default)]
    pub battle: Vec<ItemDefinition>,
    #[serde(default)]
    pub medicine: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn registry(&self, category: ItemCategory) -> &[ItemDefinition] {
        match category {
            ItemCategory::Battle => &self.battle,
            ItemCategory::Medicine => &self.medicine,
        }
    }

    fn validate(&self) -> LoadResult<()> {
        for category in [ItemCategory::Battle, ItemCategory::Medicine] {
            let registry = self.registry(category);
            let mut seen = HashSet::new();
            for item in registry {
                if item.category() != category {
                    anyhow::bail!(
                        "Item '{}' ({}) is listed under {} but is a {} item",
                        item.name,
                        item.id,
                        category,
                        item.category()
                    );
                }
                if !seen.insert(item.id) {
                    anyhow::bail!("Duplicate {} item id {}", category, item.id);
                }
            }
            if !registry.is_empty() && !seen.contains(&ItemId::DEFAULT) {
                anyhow::bail!(
                    "{} registry must define the fallback item {}",
                    category,
                    ItemId::DEFAULT
                );
            }
        }
        Ok(())
    }
}

/// Loader for item registries from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        catalog.validate()?;
        Ok(catalog)
    }
}
