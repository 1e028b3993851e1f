//! Agent.
use super::{Env, Policy, Transition};
use crate::record::Record;

/// Represents a trainable policy on an environment.
pub trait Agent<E: Env>: Policy<E> {
    /// Set the policy to training mode.
    fn train(&mut self);

    /// Set the policy to evaluation mode.
    fn eval(&mut self);

    /// Return if it is in training mode.
    fn is_train(&self) -> bool;

    /// Integrates a transition observed in the environment.
    fn update(&mut self, transition: &Transition<E>) {
        let _ = self.update_with_record(transition);
    }

    /// Integrates a transition and returns some information.
    ///
    /// Agents without learning return an empty record.
    fn update_with_record(&mut self, transition: &Transition<E>) -> Record;
}
