//! Tabular Q-learning agent.
use super::{EpsilonGreedy, QLearningConfig, QTable};
use crate::util::argmax;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rooms_core::{
    record::{Record, RecordValue},
    Agent, Env, Policy, Transition,
};
use std::hash::Hash;

/// Tabular Q-learning agent.
///
/// Action values are kept per observation `S`, which must identify the
/// state. In training mode actions are epsilon-greedy, in evaluation mode
/// greedy. Ties between maximal values are broken uniformly at random.
pub struct QLearningAgent<S> {
    n_actions: usize,
    discount_factor: f32,
    learning_rate: f32,
    explorer: EpsilonGreedy,
    table: QTable<S>,
    train: bool,
    rng: SmallRng,
}

impl<S: Hash + Eq + Clone> QLearningAgent<S> {
    /// Constructs the agent.
    pub fn build(config: QLearningConfig) -> Self {
        Self {
            n_actions: config.n_actions,
            discount_factor: config.discount_factor,
            learning_rate: config.learning_rate,
            explorer: config.explorer,
            table: QTable::new(config.n_actions),
            train: true,
            rng: SmallRng::seed_from_u64(config.seed),
        }
    }

    /// Action values of `state`, zeros if it has never been updated.
    pub fn q_values(&self, state: &S) -> Vec<f32> {
        self.table.values(state)
    }

    /// `max_a Q(state, a)`.
    pub fn max_q(&self, state: &S) -> f32 {
        self.table.max(state)
    }

    /// Current exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.explorer.epsilon()
    }

    /// The action value table.
    pub fn table(&self) -> &QTable<S> {
        &self.table
    }

    /// Selects the index of an action.
    pub fn select(&mut self, state: &S) -> usize {
        if self.train && self.explorer.is_random(&mut self.rng) {
            self.rng.gen_range(0..self.n_actions)
        } else {
            argmax(&self.table.values(state), &mut self.rng)
        }
    }

    /// Applies `Q(s, a) <- (1 - lr) Q(s, a) + lr (r + gamma max Q(s'))` and
    /// decays epsilon.
    ///
    /// Returns the TD error and the exploration rate.
    pub fn learn(&mut self, state: &S, act: usize, reward: f32, next_state: &S) -> Record {
        let target = reward + self.discount_factor * self.table.max(next_state);
        let lr = self.learning_rate;
        let q = &mut self.table.row_mut(state.clone())[act];
        let td_error = target - *q;
        *q = (1.0 - lr) * *q + lr * target;
        self.explorer.decay();

        Record::from_slice(&[
            ("td_error", RecordValue::Scalar(td_error)),
            ("epsilon", RecordValue::Scalar(self.explorer.epsilon() as f32)),
        ])
    }

    pub(crate) fn set_train(&mut self, train: bool) {
        self.train = train;
    }
}

impl<E, S> Policy<E> for QLearningAgent<S>
where
    E: Env<Obs = S>,
    E::Act: From<usize>,
    S: Hash + Eq + Clone,
{
    fn sample(&mut self, obs: &S) -> E::Act {
        self.select(obs).into()
    }
}

impl<E, S> Agent<E> for QLearningAgent<S>
where
    E: Env<Obs = S>,
    E::Act: From<usize> + Into<usize>,
    S: Hash + Eq + Clone,
{
    fn train(&mut self) {
        self.set_train(true);
    }

    fn eval(&mut self) {
        self.set_train(false);
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn update_with_record(&mut self, transition: &Transition<E>) -> Record {
        let act = transition.act.clone().into();
        self.learn(&transition.obs, act, transition.reward, &transition.next_obs)
    }
}
