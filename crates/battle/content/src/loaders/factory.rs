//! Content factory for building registries from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, MoveDescriptor, MoveOracle};

use crate::loaders::{
    ConfigLoader, ItemCatalog, ItemLoader, LoadResult, MoveLoader, TrainerDefinition,
    TrainerLoader,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── moves.ron
/// ├── items.ron
/// └── trainers.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle AI tunables from `config.toml`.
    ///
    /// A missing file yields [`BattleConfig::default`].
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the move registry from `moves.ron`.
    pub fn load_moves(&self) -> LoadResult<Vec<MoveDescriptor>> {
        let path = self.data_dir.join("moves.ron");
        MoveLoader::load(&path)
    }

    /// Load the item registries from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load trainers from `trainers.ron`, resolved against `moves`.
    pub fn load_trainers<M>(&self, moves: &M) -> LoadResult<Vec<TrainerDefinition>>
    where
        M: MoveOracle + ?Sized,
    {
        let path = self.data_dir.join("trainers.ron");
        TrainerLoader::load(&path, moves)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
    }

    #[test]
    fn loads_files_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "default_max_times_healed = 1\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("moves.ron"),
            r#"(moves: [(id: 1, name: "Ember", element: Fire, category: Special, max_pp: 25)])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().default_max_times_healed, 1);
        assert_eq!(factory.load_moves().unwrap()[0].name, "Ember");

        let err = factory.load_items().unwrap_err();
        assert!(err.to_string().contains("items.ron"));
    }
}
