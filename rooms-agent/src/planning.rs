//! Planning agents.
//!
//! Both agents evaluate each decision with random-shooting rollouts: a
//! number of uniformly random action sequences is executed on forks of the
//! live environment and the first action with the highest mean discounted
//! return is taken. See [`Simulator::fork`](rooms_core::Simulator::fork).
mod config;
mod hybrid;
mod mc;
mod rollout;
pub use config::{PlanningAndLearningConfig, PlanningConfig};
pub use hybrid::PlanningAndLearningAgent;
pub use mc::MonteCarloPlanningAgent;
use rollout::Planner;
pub use rollout::ActionValues;
