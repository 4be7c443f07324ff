//! Abstraction for sourcing participant intent.
//!
//! The turn executor asks an [`ActionProvider`] for one action per turn and,
//! after a faint, for the next party member to send out. NPC policies live in
//! [`crate::providers::ai`]; player input or replayed scripts plug in the same
//! way.
use battle_core::{Action, BattleState, ParticipantId, RandomStream};

use super::errors::Result;
use crate::providers::ai::AiMemory;

/// Everything a provider may read or advance while choosing one action.
pub struct DecisionRequest<'a> {
    /// Side that must act.
    pub participant: ParticipantId,
    /// Read-only battle snapshot.
    pub state: &'a BattleState,
    /// Per-battle AI counters owned by the acting participant.
    pub memory: &'a mut AiMemory,
    /// The battle's single seeded stream.
    pub rng: &'a mut dyn RandomStream,
}

impl<'a> DecisionRequest<'a> {
    pub fn new(
        participant: ParticipantId,
        state: &'a BattleState,
        memory: &'a mut AiMemory,
        rng: &'a mut dyn RandomStream,
    ) -> Self {
        Self {
            participant,
            state,
            memory,
            rng,
        }
    }
}

/// Trait for providing actions based on the current battle state.
pub trait ActionProvider: Send + Sync {
    /// Provide the action for `request.participant` this turn.
    ///
    /// # Errors
    ///
    /// Only fails when no action can reference the participant at all (no
    /// active combatant); every other inconsistency is logged and answered
    /// with a fallback action.
    fn provide_action(&self, request: DecisionRequest<'_>) -> Result<Action>;

    /// Party index to send out next for `participant`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::NoUsableCombatant` when every party member has
    /// fainted.
    fn provide_next_combatant(&self, participant: ParticipantId, state: &BattleState)
    -> Result<usize>;
}
