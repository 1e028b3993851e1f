//! Planning agent bootstrapped with learned action values.
use super::{ActionValues, Planner, PlanningAndLearningConfig};
use crate::q_learning::QLearningAgent;
use log::info;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rooms_core::{record::Record, Agent, Policy, SharedEnv, Simulator, Transition};
use std::hash::Hash;

/// Monte Carlo planning whose simulated returns are completed with
/// `gamma^horizon max_a Q(s, a)` of an inner Q-learner at the end of each
/// plan.
///
/// Real transitions train the Q-learner. During the first `warmup_phase`
/// decisions in training mode the agent acts uniformly at random, so the
/// table holds some values before it is used for bootstrapping.
pub struct PlanningAndLearningAgent<E>
where
    E: Simulator,
{
    env: SharedEnv<E>,
    planner: Planner,
    q_learner: QLearningAgent<E::Obs>,
    warmup_phase: usize,
    n_samples: usize,
    train: bool,
    rng: SmallRng,
}

impl<E> PlanningAndLearningAgent<E>
where
    E: Simulator,
    E::Obs: Hash + Eq,
    E::Act: From<usize>,
{
    /// Constructs the agent planning on `env`.
    pub fn build(config: PlanningAndLearningConfig, env: SharedEnv<E>) -> Self {
        Self {
            env,
            planner: Planner::build(&config.planning),
            q_learner: QLearningAgent::build(config.q_learning),
            warmup_phase: config.warmup_phase,
            n_samples: 0,
            train: true,
            rng: SmallRng::seed_from_u64(config.planning.seed),
        }
    }

    /// The inner Q-learner.
    pub fn q_learner(&self) -> &QLearningAgent<E::Obs> {
        &self.q_learner
    }

    /// Returns `true` while decisions are random.
    pub fn in_warmup(&self) -> bool {
        self.train && self.n_samples < self.warmup_phase
    }

    /// Estimates of one planning call from the current state.
    pub fn estimate(&mut self, obs: &E::Obs) -> ActionValues {
        let q_learner = &self.q_learner;
        self.planner
            .estimate(&self.env, obs, &mut self.rng, |s| q_learner.max_q(s))
    }
}

impl<E> Policy<SharedEnv<E>> for PlanningAndLearningAgent<E>
where
    E: Simulator,
    E::Obs: Hash + Eq,
    E::Act: From<usize>,
{
    fn sample(&mut self, obs: &E::Obs) -> E::Act {
        let warmup = self.in_warmup();
        if self.train {
            self.n_samples += 1;
            if self.n_samples == self.warmup_phase {
                info!("Warmup finished after {} decisions", self.n_samples);
            }
        }

        if warmup {
            self.rng.gen_range(0..self.planner.n_actions).into()
        } else {
            let values = self.estimate(obs);
            values.best(&mut self.rng).into()
        }
    }
}

impl<E> Agent<SharedEnv<E>> for PlanningAndLearningAgent<E>
where
    E: Simulator,
    E::Obs: Hash + Eq,
    E::Act: From<usize> + Into<usize>,
{
    fn train(&mut self) {
        self.train = true;
        self.q_learner.set_train(true);
    }

    fn eval(&mut self) {
        self.train = false;
        self.q_learner.set_train(false);
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn update_with_record(&mut self, transition: &Transition<SharedEnv<E>>) -> Record {
        let act = transition.act.clone().into();
        self.q_learner
            .learn(&transition.obs, act, transition.reward, &transition.next_obs)
    }
}
