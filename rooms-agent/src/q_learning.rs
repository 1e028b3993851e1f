//! Q-learning agent.
mod base;
mod config;
mod explorer;
mod table;
pub use base::QLearningAgent;
pub use config::QLearningConfig;
pub use explorer::EpsilonGreedy;
pub use table::QTable;
