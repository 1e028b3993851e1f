//! Exploration strategy of the Q-learning agent.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Epsilon-greedy explorer with linear decay.
///
/// After `n` decays epsilon is `max(eps_start - n * eps_decay, eps_min)`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpsilonGreedy {
    /// Initial value of epsilon.
    pub eps_start: f64,

    /// Decrement of epsilon per decay.
    pub eps_decay: f64,

    /// Lower bound of epsilon.
    pub eps_min: f64,

    #[serde(skip)]
    n_decays: usize,
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self {
            eps_start: 1.0,
            eps_decay: 1e-4,
            eps_min: 0.01,
            n_decays: 0,
        }
    }
}

impl EpsilonGreedy {
    /// Constructs epsilon-greedy explorer with the default schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value of epsilon.
    pub fn eps_start(mut self, v: f64) -> Self {
        self.eps_start = v;
        self
    }

    /// Set the decrement of epsilon per decay.
    pub fn eps_decay(mut self, v: f64) -> Self {
        self.eps_decay = v;
        self
    }

    /// Set the lower bound of epsilon.
    pub fn eps_min(mut self, v: f64) -> Self {
        self.eps_min = v;
        self
    }

    /// Current value of epsilon.
    pub fn epsilon(&self) -> f64 {
        (self.eps_start - self.eps_decay * self.n_decays as f64).max(self.eps_min)
    }

    /// Moves epsilon one step along the schedule.
    pub fn decay(&mut self) {
        if self.epsilon() > self.eps_min {
            self.n_decays += 1;
        }
    }

    /// Returns `true` if the next action should be random.
    pub fn is_random<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.epsilon()
    }
}
