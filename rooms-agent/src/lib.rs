//! Agents of the rooms sandbox.
//!
//! * [`RandomAgent`] acts uniformly at random.
//! * [`QLearningAgent`] learns a table of action values with epsilon-greedy
//!   exploration.
//! * [`MonteCarloPlanningAgent`] plans each decision with random rollouts on
//!   forks of the live environment.
//! * [`PlanningAndLearningAgent`] combines the two, bootstrapping rollouts
//!   with learned action values.
//!
//! Agents work with action indices in `0..n_actions`; the action type of the
//! environment converts from and into `usize`.
pub mod planning;
pub mod q_learning;
mod random;
mod util;
pub use planning::{
    ActionValues, MonteCarloPlanningAgent, PlanningAndLearningAgent, PlanningAndLearningConfig,
    PlanningConfig,
};
pub use q_learning::{EpsilonGreedy, QLearningAgent, QLearningConfig, QTable};
pub use random::{RandomAgent, RandomAgentConfig};
pub use util::{argmax, argmax_where};
