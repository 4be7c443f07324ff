//! Replacement choice after the active combatant faints.

use battle_core::{Participant, ParticipantId};

use crate::api::{Result, RuntimeError};

/// Party index of the first member that has not fainted.
///
/// # Errors
///
/// Returns `RuntimeError::NoUsableCombatant` when the whole party has
/// fainted.
pub fn next_combatant(participant: ParticipantId, side: &Participant) -> Result<usize> {
    side.party
        .iter()
        .position(|combatant| !combatant.is_fainted())
        .ok_or(RuntimeError::NoUsableCombatant { participant })
}
