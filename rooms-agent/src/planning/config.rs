//! Configurations of the planning agents.
use crate::q_learning::QLearningConfig;
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Configuration of [`MonteCarloPlanningAgent`](super::MonteCarloPlanningAgent).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PlanningConfig {
    /// The number of actions.
    pub n_actions: usize,

    /// Discount factor of simulated returns.
    pub discount_factor: f32,

    /// Length of each random plan.
    pub horizon: usize,

    /// The number of plans simulated per decision.
    pub simulations: usize,

    /// Seed of the random number generator.
    pub seed: u64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            n_actions: 4,
            discount_factor: 0.99,
            horizon: 5,
            simulations: 100,
            seed: 42,
        }
    }
}

impl PlanningConfig {
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

    /// Sets the plan length.
    pub fn horizon(mut self, v: usize) -> Self {
        self.horizon = v;
        self
    }

    /// Sets the number of simulations per decision.
    pub fn simulations(mut self, v: usize) -> Self {
        self.simulations = v;
        self
    }

    /// Sets the seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }
}

/// Configuration of [`PlanningAndLearningAgent`](super::PlanningAndLearningAgent).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PlanningAndLearningConfig {
    /// Rollout parameters.
    pub planning: PlanningConfig,

    /// The Q-learner bootstrapping the rollouts.
    pub q_learning: QLearningConfig,

    /// The number of decisions taken at random before planning starts.
    pub warmup_phase: usize,
}

impl Default for PlanningAndLearningConfig {
    fn default() -> Self {
        Self {
            planning: PlanningConfig::default(),
            q_learning: QLearningConfig::default(),
            warmup_phase: 5000,
        }
    }
}

impl PlanningAndLearningConfig {
    /// Sets the rollout parameters.
    pub fn planning(mut self, v: PlanningConfig) -> Self {
        self.planning = v;
        self
    }

    /// Sets the configuration of the Q-learner.
    pub fn q_learning(mut self, v: QLearningConfig) -> Self {
        self.q_learning = v;
        self
    }

    /// Sets the length of the warmup phase.
    pub fn warmup_phase(mut self, v: usize) -> Self {
        self.warmup_phase = v;
        self
    }
}
