//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{record::Record, run_episode, Agent, Env};
use anyhow::Result;
use log::info;

/// Runs a fixed number of episodes without learning and reports the
/// mean discounted return as `"eval_return"`.
///
/// The episodes run on the environment given to [`Evaluator::evaluate`],
/// which is the environment the training loop uses. Planning agents
/// holding a handle to it therefore plan in the evaluated environment.
pub struct DefaultEvaluator {
    n_episodes: usize,
    discount_factor: f32,
}

impl DefaultEvaluator {
    /// Constructs a new [`DefaultEvaluator`].
    pub fn new(n_episodes: usize, discount_factor: f32) -> Self {
        Self {
            n_episodes,
            discount_factor,
        }
    }
}

impl<E: Env, A: Agent<E>> Evaluator<E, A> for DefaultEvaluator {
    fn evaluate(&mut self, env: &mut E, agent: &mut A) -> Result<Record> {
        if self.n_episodes == 0 {
            return Ok(Record::empty());
        }

        let mut r_total = 0f32;
        for _ in 0..self.n_episodes {
            let stats = run_episode(env, agent, self.discount_factor, false)?;
            r_total += stats.discounted_return;
        }

        let eval_return = r_total / self.n_episodes as f32;
        info!("Evaluation return = {}", eval_return);
        Ok(Record::from_scalar("eval_return", eval_return))
    }
}
