//! Uniformly random agent.
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rooms_core::{record::Record, Agent, Env, Policy, Transition};
use serde::{Deserialize, Serialize};

/// Configuration of [`RandomAgent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomAgentConfig {
    /// The number of actions.
    pub n_actions: usize,

    /// Seed of the random number generator.
    pub seed: u64,
}

impl Default for RandomAgentConfig {
    fn default() -> Self {
        Self {
            n_actions: 4,
            seed: 42,
        }
    }
}

impl RandomAgentConfig {
    /// Sets the number of actions.
    pub fn n_actions(mut self, v: usize) -> Self {
        self.n_actions = v;
        self
    }

    /// Sets the seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }
}

/// Picks actions uniformly at random and never learns.
pub struct RandomAgent {
    n_actions: usize,
    train: bool,
    rng: SmallRng,
}

impl RandomAgent {
    /// Constructs the agent.
    pub fn build(config: RandomAgentConfig) -> Self {
        Self {
            n_actions: config.n_actions,
            train: true,
            rng: SmallRng::seed_from_u64(config.seed),
        }
    }
}

impl<E> Policy<E> for RandomAgent
where
    E: Env,
    E::Act: From<usize>,
{
    fn sample(&mut self, _: &E::Obs) -> E::Act {
        self.rng.gen_range(0..self.n_actions).into()
    }
}

impl<E> Agent<E> for RandomAgent
where
    E: Env,
    E::Act: From<usize>,
{
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn update_with_record(&mut self, _: &Transition<E>) -> Record {
        Record::empty()
    }
}
