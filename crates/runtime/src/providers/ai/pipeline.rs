//! Ordered decision pipeline.
//!
//! A strategy is a list of [`DecisionStage`]s evaluated in precedence order;
//! the first stage that produces an [`Action`] ends the decision. This is the
//! short-circuiting OR of a behavior-tree selector, with the winning action
//! carried out of the node instead of stored on the blackboard.

use battle_core::Action;

use super::DecisionContext;

/// One step of a strategy: either commits to an action or defers.
pub trait DecisionStage: Send + Sync {
    /// Stable label for logs.
    fn name(&self) -> &'static str;

    /// Returns `Some(action)` to end the decision, `None` to defer to the
    /// next stage.
    ///
    /// A stage that defers must not have drawn from the random stream or
    /// touched AI memory.
    fn decide(&self, ctx: &mut DecisionContext<'_>) -> Option<Action>;
}

/// Blanket implementation for boxed stages.
impl DecisionStage for Box<dyn DecisionStage> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn decide(&self, ctx: &mut DecisionContext<'_>) -> Option<Action> {
        (**self).decide(ctx)
    }
}

/// Stages evaluated in order until one produces an action.
#[derive(Default)]
pub struct DecisionPipeline {
    stages: Vec<Box<dyn DecisionStage>>,
}

impl DecisionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage with lower precedence than every stage added so far.
    #[must_use]
    pub fn then(mut self, stage: impl DecisionStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the stages in precedence order.
    ///
    /// Returns `None` only if every stage deferred.
    pub fn run(&self, ctx: &mut DecisionContext<'_>) -> Option<Action> {
        for stage in &self.stages {
            if let Some(action) = stage.decide(ctx) {
                tracing::debug!(
                    "{} chose {:?} via {}",
                    ctx.participant,
                    action,
                    stage.name()
                );
                return Some(action);
            }
        }
        None
    }
}

impl std::fmt::Debug for DecisionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionPipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
