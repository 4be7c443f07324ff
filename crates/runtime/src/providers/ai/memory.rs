//! Per-battle counters an NPC carries between decisions.

/// AI memory owned by the battle participant and threaded through each
/// decision call.
///
/// Both counters start at zero for a new battle, only ever increase, and are
/// dropped with the participant when the battle ends. Keeping them outside
/// the strategy lets a battle (AI memory included) be serialized and
/// replayed from its seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiMemory {
    /// Stat- or condition-affecting moves chosen so far.
    pub status_moves_used: u32,
    /// Scripted heals used so far.
    pub times_healed: u32,
}

impl AiMemory {
    pub const fn new() -> Self {
        Self {
            status_moves_used: 0,
            times_healed: 0,
        }
    }

    pub(crate) fn record_status_move(&mut self) {
        self.status_moves_used = self.status_moves_used.saturating_add(1);
    }

    pub(crate) fn record_heal(&mut self) {
        self.times_healed = self.times_healed.saturating_add(1);
    }
}
