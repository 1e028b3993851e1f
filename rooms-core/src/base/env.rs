//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an MDP.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [Step] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performes an environment step.
    ///
    /// Stepping an environment whose episode has ended must not fail;
    /// implementations return a stable terminal step instead.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;
}

/// An environment that can be copied for speculative simulation.
///
/// A copy made with [`Clone::clone`] shares no mutable state with the
/// original: stepping the copy leaves the original untouched. Because the
/// copy also inherits the state of the random number generator, rollouts
/// should use [`Simulator::fork`] so that each copy draws its own noise.
pub trait Simulator: Env + Clone {
    /// Replaces the state of the internal random number generator.
    fn reseed(&mut self, seed: u64);

    /// Returns an independent copy with a freshly seeded generator.
    fn fork(&self, seed: u64) -> Self {
        let mut sim = self.clone();
        sim.reseed(seed);
        sim
    }
}
