use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use rooms::{run_experiment, AgentConfig, ExperimentConfig};
use rooms_agent::{PlanningAndLearningConfig, PlanningConfig, QLearningConfig, RandomAgentConfig};
use rooms_core::TrainerConfig;
use rooms_env::{RoomsEnvConfig, N_ACTIONS};
use std::path::PathBuf;

const DISCOUNT_FACTOR: f32 = 0.99;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AgentKind {
    Random,
    QLearning,
    McPlanning,
    PlanningAndLearning,
}

/// Train an agent in the rooms gridworld
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Layout file
    #[arg(long, default_value = "layouts/rooms_9_9_4.txt")]
    layout: PathBuf,

    /// Agent to train
    #[arg(long, value_enum, default_value_t = AgentKind::PlanningAndLearning)]
    agent: AgentKind,

    /// The number of training episodes
    #[arg(long, default_value_t = 50)]
    episodes: usize,

    /// The maximum number of steps in an episode
    #[arg(long, default_value_t = 200)]
    time_limit: usize,

    /// Replace actions at random with probability 0.2
    #[arg(long, default_value_t = false)]
    stochastic: bool,

    /// Length of simulated plans
    #[arg(long, default_value_t = 5)]
    horizon: usize,

    /// The number of simulated plans per decision
    #[arg(long, default_value_t = 100)]
    simulations: usize,

    /// The number of random decisions before planning and learning starts
    #[arg(long, default_value_t = 5000)]
    warmup: usize,

    /// Seed of the environment and the agent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Evaluate the agent every this number of episodes, 0 disables
    #[arg(long, default_value_t = 0)]
    eval_interval: usize,

    /// Load the experiment from a YAML file, ignoring the options above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the experiment to a YAML file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Write the episode returns to a CSV file
    #[arg(long)]
    returns_csv: Option<PathBuf>,

    /// Write the observations of the last episode as PNG files to a directory
    #[arg(long)]
    frames: Option<PathBuf>,
}

fn experiment_config(args: &Args) -> ExperimentConfig {
    let planning = PlanningConfig::default()
        .n_actions(N_ACTIONS)
        .discount_factor(DISCOUNT_FACTOR)
        .horizon(args.horizon)
        .simulations(args.simulations)
        .seed(args.seed);
    let q_learning = QLearningConfig::default()
        .n_actions(N_ACTIONS)
        .discount_factor(DISCOUNT_FACTOR)
        .seed(args.seed);
    let agent = match args.agent {
        AgentKind::Random => AgentConfig::Random(
            RandomAgentConfig::default()
                .n_actions(N_ACTIONS)
                .seed(args.seed),
        ),
        AgentKind::QLearning => AgentConfig::QLearning(q_learning),
        AgentKind::McPlanning => AgentConfig::MonteCarloPlanning(planning),
        AgentKind::PlanningAndLearning => AgentConfig::PlanningAndLearning(
            PlanningAndLearningConfig::default()
                .planning(planning)
                .q_learning(q_learning)
                .warmup_phase(args.warmup),
        ),
    };

    ExperimentConfig::default()
        .env(
            RoomsEnvConfig::default()
                .map_path(&args.layout)
                .time_limit(args.time_limit)
                .stochastic(args.stochastic),
        )
        .agent(agent)
        .trainer(
            TrainerConfig::default()
                .max_episodes(args.episodes)
                .discount_factor(DISCOUNT_FACTOR)
                .eval_interval(args.eval_interval),
        )
        .seed(args.seed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ExperimentConfig::load(path)?,
        None => experiment_config(&args),
    };
    if let Some(path) = &args.save_config {
        config.save(path)?;
    }

    let returns = run_experiment(&config, args.returns_csv.as_deref(), args.frames.as_deref())?;
    let mean = returns.iter().sum::<f32>() / returns.len().max(1) as f32;
    info!("Mean discounted return over {} episodes: {}", returns.len(), mean);

    Ok(())
}
