//! A single episode of interaction.
use crate::{Agent, Env, Transition};
use anyhow::Result;
use log::trace;

/// Statistics of one episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeStats {
    /// `sum_t discount_factor^t * r_t`.
    pub discounted_return: f32,

    /// `sum_t r_t`.
    pub undiscounted_return: f32,

    /// The number of environment steps.
    pub length: usize,
}

/// Runs one episode from reset until the environment reports the end.
///
/// At every step the agent selects an action, the environment applies it and,
/// if `learn` is `true`, the transition is passed to [`Agent::update`].
pub fn run_episode<E, A>(
    env: &mut E,
    agent: &mut A,
    discount_factor: f32,
    learn: bool,
) -> Result<EpisodeStats>
where
    E: Env,
    A: Agent<E>,
{
    let mut obs = env.reset()?;
    let mut discounted_return = 0f32;
    let mut undiscounted_return = 0f32;
    let mut discount = 1f32;
    let mut length = 0;

    loop {
        let act = agent.sample(&obs);
        let (step, _) = env.step(&act);
        trace!("{:?} --{:?}--> {:?}, r = {}", obs, act, step.obs, step.reward);

        if learn {
            agent.update(&Transition::from_step(obs, &step));
        }

        discounted_return += step.reward * discount;
        undiscounted_return += step.reward;
        discount *= discount_factor;
        length += 1;

        if step.is_done() {
            break;
        }
        obs = step.obs;
    }

    Ok(EpisodeStats {
        discounted_return,
        undiscounted_return,
        length,
    })
}
