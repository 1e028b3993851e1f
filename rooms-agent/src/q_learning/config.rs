//! Configuration of the Q-learning agent.
use super::EpsilonGreedy;
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Configuration of [`QLearningAgent`](super::QLearningAgent).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct QLearningConfig {
    /// The number of actions.
    pub n_actions: usize,

    /// Discount factor of the TD target.
    pub discount_factor: f32,

    /// Step size of the update.
    pub learning_rate: f32,

    /// Exploration during training.
    pub explorer: EpsilonGreedy,

    /// Seed of the random number generator.
    pub seed: u64,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            n_actions: 4,
            discount_factor: 0.99,
            learning_rate: 0.1,
            explorer: EpsilonGreedy::default(),
            seed: 42,
        }
    }
}

impl QLearningConfig {
    /// Sets the number of actions.
    pub fn n_actions(mut self, v: usize) -> Self {
        self.n_actions = v;
        self
    }

    /// Sets the discount factor.
    pub fn discount_factor(mut self, v: f32) -> Self {
        self.discount_factor = v;
        self
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, v: f32) -> Self {
        self.learning_rate = v;
        self
    }

    /// Sets the explorer.
    pub fn explorer(mut self, v: EpsilonGreedy) -> Self {
        self.explorer = v;
        self
    }

    /// Sets the seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }
}
