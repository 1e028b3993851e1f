//! Experiments in the rooms gridworld.
//!
//! An experiment trains one agent on one layout with the
//! [`Trainer`](rooms_core::Trainer) and optionally writes the episode returns
//! and the observations of the last episode to disk.
mod config;
mod run;
pub use config::{AgentConfig, ExperimentConfig};
pub use run::{run_experiment, write_returns, EpisodeRow};
