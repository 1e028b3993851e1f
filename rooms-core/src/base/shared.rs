//! Shared handle to an environment.
use super::{Env, Simulator, Step};
use crate::record::Record;
use anyhow::Result;
use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

/// A single-threaded shared handle to an environment.
///
/// The training loop steps the environment through one handle, while planning
/// agents keep another one and take snapshots of the live state before
/// simulating ahead. [`SharedEnv`] implements [`Env`] by delegation, so it can
/// be passed to [`Trainer`](crate::Trainer) like any other environment.
///
/// The handle is neither `Send` nor `Sync`; all access happens on one thread.
pub struct SharedEnv<E>(Rc<RefCell<E>>);

impl<E> SharedEnv<E> {
    /// Wraps an environment.
    pub fn new(env: E) -> Self {
        Self(Rc::new(RefCell::new(env)))
    }

    /// Returns another handle to the same environment.
    pub fn handle(&self) -> Self {
        Self(Rc::clone(&self.0))
    }

    /// Immutably borrows the environment.
    ///
    /// Panics if the environment is being stepped at the same time.
    pub fn borrow(&self) -> Ref<'_, E> {
        self.0.borrow()
    }

    /// Mutably borrows the environment.
    pub fn borrow_mut(&self) -> RefMut<'_, E> {
        self.0.borrow_mut()
    }
}

impl<E: Simulator> SharedEnv<E> {
    /// Returns a deep copy of the current state of the environment.
    pub fn snapshot(&self) -> E {
        self.0.borrow().clone()
    }

    /// Returns a deep copy of the current state with a reseeded generator.
    ///
    /// See [`Simulator::fork`].
    pub fn fork(&self, seed: u64) -> E {
        self.0.borrow().fork(seed)
    }
}

impl<E: Env> Env for SharedEnv<E> {
    type Config = E::Config;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self::new(E::build(config, seed)?))
    }

    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        let (step, record) = self.0.borrow_mut().step(a);
        (step.cast(), record)
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.0.borrow_mut().reset()
    }
}
