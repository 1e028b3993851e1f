//! Core functionalities.
mod agent;
mod env;
mod policy;
mod shared;
mod step;
pub use agent::Agent;
pub use env::{Env, Simulator};
pub use policy::Policy;
pub use shared::SharedEnv;
use std::fmt::Debug;
pub use step::{Info, Step, Transition};

/// An observation of an environment.
///
/// In this sandbox an observation is the state key handed to agents,
/// e.g. the position of the agent in a grid.
pub trait Obs: Clone + Debug {}

/// An action of an environment.
pub trait Act: Clone + Debug {}
