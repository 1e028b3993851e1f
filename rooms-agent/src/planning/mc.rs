//! Monte Carlo planning agent.
use super::{ActionValues, Planner, PlanningConfig};
use rand::{rngs::SmallRng, SeedableRng};
use rooms_core::{record::Record, Agent, Policy, SharedEnv, Simulator, Transition};

/// Plans every decision by simulating random action sequences from the
/// current state of the live environment and picking the first action with
/// the highest mean discounted return.
///
/// The agent keeps a [`SharedEnv`] handle to the environment the training
/// loop steps and acts on that environment only. It does not learn.
pub struct MonteCarloPlanningAgent<E> {
    env: SharedEnv<E>,
    planner: Planner,
    train: bool,
    rng: SmallRng,
}

impl<E> MonteCarloPlanningAgent<E>
where
    E: Simulator,
    E::Act: From<usize>,
{
    /// Constructs the agent planning on `env`.
    pub fn build(config: PlanningConfig, env: SharedEnv<E>) -> Self {
        Self {
            env,
            planner: Planner::build(&config),
            train: true,
            rng: SmallRng::seed_from_u64(config.seed),
        }
    }

    /// Estimates of one planning call from the current state.
    pub fn estimate(&mut self, obs: &E::Obs) -> ActionValues {
        self.planner.estimate(&self.env, obs, &mut self.rng, |_| 0.0)
    }
}

impl<E> Policy<SharedEnv<E>> for MonteCarloPlanningAgent<E>
where
    E: Simulator,
    E::Act: From<usize>,
{
    fn sample(&mut self, obs: &E::Obs) -> E::Act {
        let values = self.estimate(obs);
        values.best(&mut self.rng).into()
    }
}

impl<E> Agent<SharedEnv<E>> for MonteCarloPlanningAgent<E>
where
    E: Simulator,
    E::Act: From<usize>,
{
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn update_with_record(&mut self, _: &Transition<SharedEnv<E>>) -> Record {
        Record::empty()
    }
}
