//! Configuration of [`RoomsEnv`](super::RoomsEnv).
use serde::{Deserialize, Serialize};
use std::{default::Default, path::PathBuf};

/// Configurations of [`RoomsEnv`](super::RoomsEnv).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomsEnvConfig {
    /// Path of the layout file.
    pub map_path: PathBuf,

    /// The maximum number of steps in an episode.
    pub time_limit: usize,

    /// If `true`, an action is replaced by a random one with probability
    /// [`NOISE_PROBABILITY`](super::NOISE_PROBABILITY).
    pub stochastic: bool,
}

impl Default for RoomsEnvConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("layouts/rooms_9_9_4.txt"),
            time_limit: 200,
            stochastic: false,
        }
    }
}

impl RoomsEnvConfig {
    /// Sets the path of the layout file.
    pub fn map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.map_path = path.into();
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn time_limit(mut self, v: usize) -> Self {
        self.time_limit = v;
        self
    }

    /// Enables or disables action noise.
    pub fn stochastic(mut self, v: bool) -> Self {
        self.stochastic = v;
        self
    }
}
