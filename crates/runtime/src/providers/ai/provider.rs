//! Pipeline-driven NPC action provider.

use battle_core::{Action, BattleConfig, BattleError, BattleState, ParticipantId, TrainerProfile};

use super::{DecisionContext, DecisionPipeline, presets, switching};
use crate::api::{ActionProvider, DecisionRequest, Result, RuntimeError};
use crate::oracle::OracleManager;

/// Action provider for one NPC participant.
///
/// The provider holds only immutable data: oracles, tunables, the trainer
/// profile, and the strategy pipeline. Everything that changes during a
/// battle (AI memory and the random stream) arrives with each
/// [`DecisionRequest`], so one provider can serve concurrent battles.
///
/// # Decision flow
///
/// 1. Resolve the acting participant's active combatant
/// 2. Run the strategy pipeline; the first stage that commits wins
/// 3. Fall back to move slot 0 if every stage deferred
pub struct NpcDecisionProvider {
    oracles: OracleManager,
    config: BattleConfig,
    profile: TrainerProfile,
    pipeline: DecisionPipeline,
}

impl NpcDecisionProvider {
    /// Creates a provider playing the profile's preset strategy.
    pub fn new(oracles: OracleManager, config: BattleConfig, profile: TrainerProfile) -> Self {
        let pipeline = presets::for_strategy(profile.strategy);
        Self {
            oracles,
            config,
            profile,
            pipeline,
        }
    }

    /// Replaces the preset with a custom pipeline.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: DecisionPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn profile(&self) -> &TrainerProfile {
        &self.profile
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &DecisionPipeline {
        &self.pipeline
    }
}

impl ActionProvider for NpcDecisionProvider {
    fn provide_action(&self, request: DecisionRequest<'_>) -> Result<Action> {
        let DecisionRequest {
            participant,
            state,
            memory,
            rng,
        } = request;

        let mut ctx = DecisionContext::new(
            participant,
            state,
            self.oracles.as_battle_env(),
            &self.config,
            &self.profile,
            memory,
            rng,
        )
        .inspect_err(|err| report(participant, err))?;

        tracing::debug!(
            "{} ({}) deciding for {} on turn {}",
            participant,
            self.profile.strategy,
            ctx.active().species,
            state.turn
        );

        let action = self.pipeline.run(&mut ctx).unwrap_or_else(|| {
            tracing::error!(
                "No stage of the {} pipeline produced an action; using move slot 0",
                self.profile.strategy
            );
            Action::fight(ctx.opponent(), 0)
        });

        tracing::debug!("{} action: {:?}", participant, action);
        Ok(action)
    }

    fn provide_next_combatant(
        &self,
        participant: ParticipantId,
        state: &BattleState,
    ) -> Result<usize> {
        let index = switching::next_combatant(participant, state.participant(participant))
            .inspect_err(|err| report(participant, err))?;
        tracing::debug!("{} sends out party member {}", participant, index);
        Ok(index)
    }
}

/// Logs a failed request at the level its severity calls for.
fn report(participant: ParticipantId, err: &RuntimeError) {
    let severity = err.severity();
    if severity.is_internal() {
        tracing::error!(
            "{} request failed [{}, {}]: {}",
            participant,
            severity.as_str(),
            err.error_code(),
            err
        );
    } else {
        tracing::warn!("{} request failed [{}]: {}", participant, err.error_code(), err);
    }
}

impl std::fmt::Debug for NpcDecisionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NpcDecisionProvider")
            .field("config", &self.config)
            .field("profile", &self.profile)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
