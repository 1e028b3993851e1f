//! Environment step.
use super::Env;

/// Additional information to `Obs` and `Act`.
pub trait Info {}

impl Info for () {}

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`
/// with some additional information.
///
/// An environment emits [`Step`] object at every interaction steps.
/// This object is used to create transitions `(o_t, a_t, r_t, o_t+1)`.
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if episode is terminated.
    pub is_terminated: bool,

    /// Flag denoting if episode is truncated.
    pub is_truncated: bool,

    /// Information defined by user.
    pub info: E::Info,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: f32,
        is_terminated: bool,
        is_truncated: bool,
        info: E::Info,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
            info,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }

    /// Re-labels the step for an environment sharing the same observation,
    /// action and information types, e.g. a wrapper of `E`.
    pub fn cast<F>(self) -> Step<F>
    where
        F: Env<Obs = E::Obs, Act = E::Act, Info = E::Info>,
    {
        Step {
            act: self.act,
            obs: self.obs,
            reward: self.reward,
            is_terminated: self.is_terminated,
            is_truncated: self.is_truncated,
            info: self.info,
        }
    }
}

/// A transition `(o_t, a_t, r_t, o_t+1)` integrated by [`Agent::update`].
///
/// [`Agent::update`]: crate::Agent::update
pub struct Transition<E: Env> {
    /// Observation before the step.
    pub obs: E::Obs,

    /// Action taken.
    pub act: E::Act,

    /// Reward.
    pub reward: f32,

    /// Observation after the step.
    pub next_obs: E::Obs,

    /// If the episode ended with this transition.
    pub is_done: bool,
}

impl<E: Env> Transition<E> {
    /// Constructs a transition.
    pub fn new(obs: E::Obs, act: E::Act, reward: f32, next_obs: E::Obs, is_done: bool) -> Self {
        Self {
            obs,
            act,
            reward,
            next_obs,
            is_done,
        }
    }

    /// Constructs a transition from the previous observation and a [`Step`].
    pub fn from_step(obs: E::Obs, step: &Step<E>) -> Self {
        Self {
            obs,
            act: step.act.clone(),
            reward: step.reward,
            next_obs: step.obs.clone(),
            is_done: step.is_done(),
        }
    }
}
