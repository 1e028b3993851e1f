#![warn(missing_docs)]
//! Core traits and the training loop of the rooms sandbox.
//!
//! The crate is independent of any concrete environment or agent. It defines
//!
//! * [`Env`] and [`Simulator`], the interface of an environment and of an
//!   environment that can be copied for look-ahead,
//! * [`Policy`] and [`Agent`], the decision and learning contracts,
//! * [`SharedEnv`], a handle that lets planning agents read the environment
//!   the training loop is stepping,
//! * [`record`], key/value records emitted during training,
//! * [`Trainer`] and [`Evaluator`], the episode driver.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Agent, Env, Info, Obs, Policy, SharedEnv, Simulator, Step, Transition};

mod trainer;
pub use trainer::{run_episode, EpisodeStats, Trainer, TrainerConfig};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
