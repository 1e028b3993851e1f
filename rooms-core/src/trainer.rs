//! Train [`Agent`].
mod config;
mod episode;
use crate::{
    record::{Record, RecordValue, Recorder},
    Agent, Env, Evaluator,
};
use anyhow::Result;
use chrono::Local;
pub use config::TrainerConfig;
pub use episode::{run_episode, EpisodeStats};
use log::info;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Manages the training loop.
///
/// # Training loop
///
/// 1. For `episode` in `0..max_episodes`:
///     1. Reset [`Env`] and run the episode with [`run_episode`]. At every
///        step the agent samples an action, the environment applies it and
///        the transition is integrated with [`Agent::update`].
///     2. Log `"{episode} : {discounted return}"` and write a record with the
///        episode statistics to the recorder.
///     3. If `(episode + 1) % eval_interval == 0`, switch the agent to
///        evaluation mode, run the [`Evaluator`] on the training environment
///        and switch back.
///     4. If `(episode + 1) % flush_record_interval == 0`, flush the recorder.
/// 2. Return the discounted return of every episode.
///
/// # Interaction of objects
///
/// ```mermaid
/// graph LR
///     A[Agent]-->|Env::Act|B[Env]
///     B -->|Env::Obs|A
///     B -->|Transition|A
///     C[Trainer]-->|Record|D[Recorder]
/// ```
pub struct Trainer {
    /// The number of training episodes.
    max_episodes: usize,

    /// Discount factor of the episode return.
    discount_factor: f32,

    /// Interval of evaluation in episodes.
    eval_interval: usize,

    /// Interval of flushing records in episodes.
    flush_record_interval: usize,
}

impl Trainer {
    /// Constructs a trainer.
    pub fn build(config: TrainerConfig) -> Self {
        Self {
            max_episodes: config.max_episodes,
            discount_factor: config.discount_factor,
            eval_interval: config.eval_interval,
            flush_record_interval: config.flush_record_interval,
        }
    }

    fn episode_record(episode: usize, stats: &EpisodeStats) -> Record {
        Record::from_slice(&[
            ("episode", RecordValue::Scalar(episode as f32)),
            ("discounted_return", RecordValue::Scalar(stats.discounted_return)),
            (
                "undiscounted_return",
                RecordValue::Scalar(stats.undiscounted_return),
            ),
            ("episode_length", RecordValue::Scalar(stats.length as f32)),
            ("datetime", RecordValue::DateTime(Local::now())),
        ])
    }

    /// Train the agent.
    ///
    /// Returns the discounted return of each training episode.
    pub fn train<E, A, D>(
        &mut self,
        env: &mut E,
        agent: &mut A,
        recorder: &mut dyn Recorder,
        evaluator: &mut D,
    ) -> Result<Vec<f32>>
    where
        E: Env,
        A: Agent<E>,
        D: Evaluator<E, A>,
    {
        let mut returns = Vec::with_capacity(self.max_episodes);
        agent.train();

        for episode in 0..self.max_episodes {
            let stats = run_episode(env, agent, self.discount_factor, true)?;
            info!("{} : {}", episode, stats.discounted_return);
            returns.push(stats.discounted_return);

            let mut record = Self::episode_record(episode, &stats);

            if self.eval_interval > 0 && (episode + 1) % self.eval_interval == 0 {
                info!("Starts evaluation of the agent");
                agent.eval();
                let eval_record = evaluator.evaluate(env, agent)?;
                agent.train();
                record = record.merge(eval_record);
            }

            recorder.write(record.clone());
            recorder.store(record);

            if self.flush_record_interval > 0 && (episode + 1) % self.flush_record_interval == 0
            {
                recorder.flush((episode + 1) as i64);
            }
        }

        Ok(returns)
    }
}
