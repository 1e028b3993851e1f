//! Random-shooting rollouts on forks of the live environment.
use super::PlanningConfig;
use crate::util::argmax_where;
use log::debug;
use rand::{rngs::SmallRng, Rng};
use rooms_core::{SharedEnv, Simulator};

/// Mean simulated return of each first action of one planning call.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionValues {
    values: Vec<f32>,
    counts: Vec<usize>,
}

impl ActionValues {
    /// All-zero estimates.
    pub fn new(n_actions: usize) -> Self {
        Self {
            values: vec![0.0; n_actions],
            counts: vec![0; n_actions],
        }
    }

    /// Incorporates a return of a plan starting with `act`.
    pub fn add(&mut self, act: usize, ret: f32) {
        self.counts[act] += 1;
        self.values[act] += (ret - self.values[act]) / self.counts[act] as f32;
    }

    /// Mean returns, `0` for actions that were never sampled.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// The number of plans starting with each action.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The best action among the sampled ones, ties broken at random.
    /// Uniform over all actions if nothing was sampled.
    pub fn best<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let counts = &self.counts;
        match argmax_where(&self.values, |&ix| counts[ix] > 0, rng) {
            Some(ix) => ix,
            None => rng.gen_range(0..self.values.len()),
        }
    }
}

/// Rollout parameters shared by the planning agents.
pub(crate) struct Planner {
    pub(crate) n_actions: usize,
    discount_factor: f32,
    horizon: usize,
    simulations: usize,
}

impl Planner {
    pub(crate) fn build(config: &PlanningConfig) -> Self {
        Self {
            n_actions: config.n_actions,
            discount_factor: config.discount_factor,
            horizon: config.horizon,
            simulations: config.simulations,
        }
    }

    /// Simulates `simulations` uniformly random plans of length `horizon` on
    /// forks of the live environment.
    ///
    /// The return of a plan is `sum_t gamma^t r_t + gamma^horizon leaf_value(s)`
    /// where `s` is the observation after the plan, or `obs` if the plan is
    /// empty.
    pub(crate) fn estimate<E, F>(
        &self,
        env: &SharedEnv<E>,
        obs: &E::Obs,
        rng: &mut SmallRng,
        leaf_value: F,
    ) -> ActionValues
    where
        E: Simulator,
        E::Act: From<usize>,
        F: Fn(&E::Obs) -> f32,
    {
        let mut values = ActionValues::new(self.n_actions);
        if self.horizon == 0 {
            return values;
        }

        let root = env.fork(rng.gen());
        let bootstrap = self.discount_factor.powi(self.horizon as i32);

        for _ in 0..self.simulations {
            let plan = (0..self.horizon)
                .map(|_| rng.gen_range(0..self.n_actions))
                .collect::<Vec<_>>();
            let mut sim = root.fork(rng.gen());
            let (ret, leaf) = rollout(&mut sim, &plan, self.discount_factor);
            let ret = ret + bootstrap * leaf_value(leaf.as_ref().unwrap_or(obs));
            values.add(plan[0], ret);
        }

        debug!("values = {:?}, counts = {:?}", values.values(), values.counts());
        values
    }
}

/// Executes `plan` and returns the discounted return and the last
/// observation. The rest of the plan is skipped once the episode ends.
fn rollout<E>(sim: &mut E, plan: &[usize], discount_factor: f32) -> (f32, Option<E::Obs>)
where
    E: Simulator,
    E::Act: From<usize>,
{
    let mut ret = 0.0;
    let mut discount = 1.0;
    let mut leaf = None;

    for &a in plan.iter() {
        let (step, _) = sim.step(&E::Act::from(a));
        ret += discount * step.reward;
        discount *= discount_factor;
        let is_done = step.is_done();
        leaf = Some(step.obs);
        if is_done {
            break;
        }
    }

    (ret, leaf)
}
