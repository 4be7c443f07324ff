//! [`battle_core::MoveOracle`] backed by an in-memory map.
use std::collections::BTreeMap;

use battle_core::{MoveDescriptor, MoveId, MoveOracle};

/// MoveOracle implementation with static move descriptors
#[derive(Debug, Default)]
pub struct MoveOracleImpl {
    descriptors: BTreeMap<MoveId, MoveDescriptor>,
}

impl MoveOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = MoveDescriptor>) -> Self {
        let mut oracle = Self::new();
        for descriptor in descriptors {
            oracle.add_descriptor(descriptor);
        }
        oracle
    }

    /// Add a move descriptor; the reserved unset id is ignored.
    pub fn add_descriptor(&mut self, descriptor: MoveDescriptor) {
        if descriptor.id.is_unset() {
            tracing::warn!("Ignoring move '{}' with the unset id", descriptor.name);
            return;
        }
        self.descriptors.insert(descriptor.id, descriptor);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl MoveOracle for MoveOracleImpl {
    fn descriptor(&self, id: MoveId) -> Option<MoveDescriptor> {
        self.descriptors.get(&id).cloned()
    }

    fn all_descriptors(&self) -> Vec<MoveDescriptor> {
        self.descriptors.values().cloned().collect()
    }
}
