use crate::moves::{MoveDescriptor, MoveId};

/// Oracle resolving move ids to their immutable descriptors.
pub trait MoveOracle: Send + Sync {
    /// Returns the descriptor for `id`, or `None` for unknown ids and
    /// [`MoveId::UNSET`].
    fn descriptor(&self, id: MoveId) -> Option<MoveDescriptor>;

    /// Returns all move descriptors available in this oracle.
    fn all_descriptors(&self) -> Vec<MoveDescriptor>;
}
