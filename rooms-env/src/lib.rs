//! A gridworld of rooms connected by doorways.
//!
//! The agent starts in the lower-left corner `(1, 1)` and has to reach the
//! goal at `(width - 2, height - 2)`. The layout is read from a text file, see
//! [`map`]. The only reward is 1 for reaching the goal. In stochastic mode an
//! action is replaced by a uniformly random one with probability
//! [`NOISE_PROBABILITY`].
//!
//! Here is an example of running an episode with a fixed policy.
//!
//! ```no_run
//! use anyhow::Result;
//! use rooms_core::{Env as _, Policy};
//! use rooms_env::{Move, Position, RoomsEnv, RoomsEnvConfig};
//!
//! struct AlwaysEast;
//!
//! impl Policy<RoomsEnv> for AlwaysEast {
//!     fn sample(&mut self, _: &Position) -> Move {
//!         Move::East
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let config = RoomsEnvConfig::default()
//!         .map_path("layouts/rooms_9_9_4.txt")
//!         .time_limit(20);
//!     let mut env = RoomsEnv::build(&config, 42)?;
//!     let mut policy = AlwaysEast;
//!
//!     let mut obs = env.reset()?;
//!     loop {
//!         let (step, _) = env.step(&policy.sample(&obs));
//!         if step.is_done() {
//!             break;
//!         }
//!         obs = step.obs;
//!     }
//!     env.save_frames("frames")?;
//!     Ok(())
//! }
//! ```
mod act;
mod env;
mod frames;
pub mod map;
mod obs;
pub use act::{Move, N_ACTIONS};
pub use env::{
    load_env, RoomsEnv, RoomsEnvConfig, RoomsInfo, StateSummary, NOISE_PROBABILITY, START,
};
pub use frames::{grid_to_image, CELL_PIXELS};
pub use obs::{Channel, Grid, Position, N_CHANNELS};
