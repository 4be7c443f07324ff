//! Decision context shared by every pipeline stage.
//!
//! The [`DecisionContext`] is the blackboard for one decision: read access to
//! the battle snapshot and static data, plus the two pieces of mutable state
//! a decision may advance (the participant's [`AiMemory`] and the battle's
//! random stream).

use battle_core::{
    BattleConfig, BattleEnv, BattleState, Combatant, Participant, ParticipantId, RandomStream,
    TrainerProfile,
};

use super::AiMemory;
use crate::api::{Result, RuntimeError};

/// Context for one NPC decision.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the battle snapshot and oracles it
/// reads; a context never outlives the decision call that built it.
pub struct DecisionContext<'a> {
    /// Side making the decision.
    pub participant: ParticipantId,

    /// Read-only access to the battle snapshot.
    pub state: &'a BattleState,

    /// Read-only access to all battle oracles.
    pub env: BattleEnv<'a>,

    pub config: &'a BattleConfig,

    pub profile: &'a TrainerProfile,

    /// Counters advanced when a stage commits to a qualifying action.
    pub memory: &'a mut AiMemory,

    /// The battle's single sequential stream. Stages draw only on the
    /// branches that document a draw.
    pub rng: &'a mut dyn RandomStream,

    active: &'a Combatant,
}

impl<'a> DecisionContext<'a> {
    /// Creates a context for `participant`'s active combatant.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::NoActiveCombatant` if the participant's active
    /// index does not point into its party.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        participant: ParticipantId,
        state: &'a BattleState,
        env: BattleEnv<'a>,
        config: &'a BattleConfig,
        profile: &'a TrainerProfile,
        memory: &'a mut AiMemory,
        rng: &'a mut dyn RandomStream,
    ) -> Result<Self> {
        let side = state.participant(participant);
        let active = side.active().ok_or(RuntimeError::NoActiveCombatant {
            participant,
            index: side.active_index,
        })?;

        Ok(Self {
            participant,
            state,
            env,
            config,
            profile,
            memory,
            rng,
            active,
        })
    }

    // ========================================================================
    // Battle State Helpers
    // ========================================================================

    /// The deciding participant's combatant in battle.
    pub fn active(&self) -> &'a Combatant {
        self.active
    }

    /// Party index of the active combatant (target of self-use items).
    pub fn active_index(&self) -> usize {
        self.side().active_index
    }

    pub fn side(&self) -> &'a Participant {
        self.state.participant(self.participant)
    }

    /// Side every Fight action targets.
    pub fn opponent(&self) -> ParticipantId {
        self.participant.opposing()
    }

    /// The opposing combatant in battle, if the opposing side has one.
    pub fn opponent_active(&self) -> Option<&'a Combatant> {
        self.state.opposing_active(self.participant)
    }
}
