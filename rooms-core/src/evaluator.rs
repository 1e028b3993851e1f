//! Evaluate [`Agent`].
use crate::{record::Record, Agent, Env};
use anyhow::Result;
mod default_evaluator;
pub use default_evaluator::DefaultEvaluator;

/// Evaluate [`Agent`].
pub trait Evaluator<E: Env, A: Agent<E>> {
    /// Evaluate [`Agent`] on the given environment.
    ///
    /// The caller of this method needs to handle the internal state of `agent`,
    /// like training/evaluation mode.
    fn evaluate(&mut self, env: &mut E, agent: &mut A) -> Result<Record>;
}
