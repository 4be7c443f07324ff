//! Move registry loader.

use std::collections::HashSet;
use std::path::Path;

use battle_core::MoveDescriptor;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Move catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCatalog {
    pub moves: Vec<MoveDescriptor>,
}

/// Loader for the move registry from RON files.
pub struct MoveLoader;

impl MoveLoader {
    /// Load the move catalog from a RON file.
    ///
    /// Rejects the reserved unset id and duplicate ids.
    pub fn load(path: &Path) -> LoadResult<Vec<MoveDescriptor>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MoveDescriptor>> {
        let catalog: MoveCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse move catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for descriptor in &catalog.moves {
            if descriptor.id.is_unset() {
                anyhow::bail!("Move '{}' uses the reserved unset id", descriptor.name);
            }
            if !seen.insert(descriptor.id) {
                anyhow::bail!("Duplicate move id {}", descriptor.id);
            }
        }

        Ok(catalog.moves)
    }
}
