//! Running an experiment.
use crate::{AgentConfig, ExperimentConfig};
use anyhow::Result;
use csv::WriterBuilder;
use log::info;
use rooms_agent::{MonteCarloPlanningAgent, PlanningAndLearningAgent, QLearningAgent, RandomAgent};
use rooms_core::{
    record::{BufferedRecorder, Record},
    Agent, DefaultEvaluator, Env as _, SharedEnv, Trainer,
};
use rooms_env::{Position, RoomsEnv};
use serde::Serialize;
use std::{convert::TryFrom, fs::File, path::Path};

/// A row of the returns file.
#[derive(Debug, Serialize, PartialEq)]
pub struct EpisodeRow {
    /// Index of the episode.
    pub episode: usize,

    /// Discounted return.
    pub discounted_return: f32,

    /// Undiscounted return.
    pub undiscounted_return: f32,

    /// The number of steps.
    pub episode_length: usize,

    /// Mean return of the evaluation after the episode, if any.
    pub eval_return: Option<f32>,
}

impl TryFrom<&Record> for EpisodeRow {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            discounted_return: record.get_scalar("discounted_return")?,
            undiscounted_return: record.get_scalar("undiscounted_return")?,
            episode_length: record.get_scalar("episode_length")? as _,
            eval_return: record.get_scalar("eval_return").ok(),
        })
    }
}

fn train<A>(
    config: &ExperimentConfig,
    env: &mut SharedEnv<RoomsEnv>,
    agent: &mut A,
    recorder: &mut BufferedRecorder,
) -> Result<Vec<f32>>
where
    A: Agent<SharedEnv<RoomsEnv>>,
{
    let mut trainer = Trainer::build(config.trainer.clone());
    let mut evaluator =
        DefaultEvaluator::new(config.n_episodes_per_eval, config.trainer.discount_factor);
    trainer.train(env, agent, recorder, &mut evaluator)
}

/// Writes one [`EpisodeRow`] per record to a CSV file.
pub fn write_returns(path: impl AsRef<Path>, recorder: &BufferedRecorder) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(true)
        .from_writer(File::create(path.as_ref())?);
    for record in recorder.iter() {
        wtr.serialize(EpisodeRow::try_from(record)?)?;
    }
    wtr.flush()?;
    info!("Saved returns to {:?}", path.as_ref());
    Ok(())
}

/// Trains the configured agent and returns the discounted return of each
/// training episode.
///
/// If given, the episode records are written to `returns_csv` and the
/// observations of the last episode to `frames`.
///
/// Evaluation episodes run on the training environment. Their rewards add to
/// the score of the final state summary, and when an evaluation follows the
/// last training episode, `frames` holds the last evaluation episode.
pub fn run_experiment(
    config: &ExperimentConfig,
    returns_csv: Option<&Path>,
    frames: Option<&Path>,
) -> Result<Vec<f32>> {
    let mut env = SharedEnv::<RoomsEnv>::build(&config.env, config.seed as i64)?;
    let mut recorder = BufferedRecorder::new();
    info!("Train {} agent for {} episodes", config.agent.name(), config.trainer.max_episodes);

    let returns = match &config.agent {
        AgentConfig::Random(c) => {
            let mut agent = RandomAgent::build(c.clone());
            train(config, &mut env, &mut agent, &mut recorder)?
        }
        AgentConfig::QLearning(c) => {
            let mut agent = QLearningAgent::<Position>::build(c.clone());
            train(config, &mut env, &mut agent, &mut recorder)?
        }
        AgentConfig::MonteCarloPlanning(c) => {
            let mut agent = MonteCarloPlanningAgent::build(c.clone(), env.handle());
            train(config, &mut env, &mut agent, &mut recorder)?
        }
        AgentConfig::PlanningAndLearning(c) => {
            let mut agent = PlanningAndLearningAgent::build(c.clone(), env.handle());
            train(config, &mut env, &mut agent, &mut recorder)?
        }
    };

    {
        let env = env.borrow();
        let summary = env.state_summary(&env.observation());
        info!("Final state: {:?}", summary);
    }

    if let Some(path) = returns_csv {
        write_returns(path, &recorder)?;
    }
    if let Some(dir) = frames {
        env.borrow().save_frames(dir)?;
    }

    Ok(returns)
}
