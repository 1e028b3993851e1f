//! Configuration of an experiment.
use anyhow::Result;
use log::info;
use rooms_agent::{PlanningAndLearningConfig, PlanningConfig, QLearningConfig, RandomAgentConfig};
use rooms_core::TrainerConfig;
use rooms_env::RoomsEnvConfig;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Agent of an experiment with its configuration.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "snake_case")]
pub enum AgentConfig {
    /// [`RandomAgent`](rooms_agent::RandomAgent).
    Random(RandomAgentConfig),

    /// [`QLearningAgent`](rooms_agent::QLearningAgent).
    QLearning(QLearningConfig),

    /// [`MonteCarloPlanningAgent`](rooms_agent::MonteCarloPlanningAgent).
    MonteCarloPlanning(PlanningConfig),

    /// [`PlanningAndLearningAgent`](rooms_agent::PlanningAndLearningAgent).
    PlanningAndLearning(PlanningAndLearningConfig),
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::PlanningAndLearning(PlanningAndLearningConfig::default())
    }
}

impl AgentConfig {
    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::QLearning(_) => "q-learning",
            Self::MonteCarloPlanning(_) => "mc-planning",
            Self::PlanningAndLearning(_) => "planning-and-learning",
        }
    }
}

/// Configuration of an experiment.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ExperimentConfig {
    /// The environment.
    pub env: RoomsEnvConfig,

    /// The agent.
    pub agent: AgentConfig,

    /// The training loop.
    pub trainer: TrainerConfig,

    /// The number of episodes of each evaluation.
    pub n_episodes_per_eval: usize,

    /// Seed of the environment.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            env: RoomsEnvConfig::default(),
            agent: AgentConfig::default(),
            trainer: TrainerConfig::default(),
            n_episodes_per_eval: 5,
            seed: 42,
        }
    }
}

impl ExperimentConfig {
    /// Sets the environment configuration.
    pub fn env(mut self, v: RoomsEnvConfig) -> Self {
        self.env = v;
        self
    }

    /// Sets the agent configuration.
    pub fn agent(mut self, v: AgentConfig) -> Self {
        self.agent = v;
        self
    }

    /// Sets the trainer configuration.
    pub fn trainer(mut self, v: TrainerConfig) -> Self {
        self.trainer = v;
        self
    }

    /// Sets the number of episodes of each evaluation.
    pub fn n_episodes_per_eval(mut self, v: usize) -> Self {
        self.n_episodes_per_eval = v;
        self
    }

    /// Sets the seed of the environment.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Loads [`ExperimentConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        info!("Load config of experiment from {:?}", path_);
        Ok(b)
    }

    /// Saves [`ExperimentConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save config of experiment into {:?}", path_);
        Ok(())
    }
}
