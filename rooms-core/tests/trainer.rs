use anyhow::Result;
use rooms_core::{
    record::{BufferedRecorder, NullRecorder, Record, Recorder},
    run_episode, Act, Agent, DefaultEvaluator, Env, Obs, Policy, SharedEnv, Simulator, Step,
    Trainer, TrainerConfig, Transition,
};

/// A corridor of `len` cells; stepping right from the last cell ends the
/// episode with reward 1. The episode is truncated after `time_limit` steps.
#[derive(Clone, Debug)]
struct Corridor {
    len: usize,
    time_limit: usize,
    pos: usize,
    time: usize,
    seed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell(usize);

impl Obs for Cell {}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Dir {
    Left,
    Right,
}

impl Act for Dir {}

impl Env for Corridor {
    type Config = (usize, usize);
    type Obs = Cell;
    type Act = Dir;
    type Info = ();

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self {
            len: config.0,
            time_limit: config.1,
            pos: 0,
            time: 0,
            seed: seed as u64,
        })
    }

    fn step(&mut self, a: &Dir) -> (Step<Self>, Record) {
        self.time += 1;
        let reward = match a {
            Dir::Left => {
                self.pos = self.pos.saturating_sub(1);
                0.0
            }
            Dir::Right if self.pos + 1 == self.len => 1.0,
            Dir::Right => {
                self.pos += 1;
                0.0
            }
        };
        let is_terminated = reward > 0.0;
        let is_truncated = !is_terminated && self.time >= self.time_limit;
        let step = Step::new(Cell(self.pos), *a, reward, is_terminated, is_truncated, ());
        (step, Record::empty())
    }

    fn reset(&mut self) -> Result<Cell> {
        self.pos = 0;
        self.time = 0;
        Ok(Cell(0))
    }
}

impl Simulator for Corridor {
    fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }
}

/// Always goes right and counts the transitions it is given.
struct GoRight {
    train: bool,
    n_updates: usize,
    rewards: f32,
}

impl GoRight {
    fn new() -> Self {
        Self {
            train: true,
            n_updates: 0,
            rewards: 0.0,
        }
    }
}

impl<E: Env<Obs = Cell, Act = Dir>> Policy<E> for GoRight {
    fn sample(&mut self, _obs: &Cell) -> Dir {
        Dir::Right
    }
}

impl<E: Env<Obs = Cell, Act = Dir>> Agent<E> for GoRight {
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn update_with_record(&mut self, transition: &Transition<E>) -> Record {
        self.n_updates += 1;
        self.rewards += transition.reward;
        Record::empty()
    }
}

#[test]
fn test_run_episode_discounts_return() -> Result<()> {
    let mut env = Corridor::build(&(3, 100), 0)?;
    let mut agent = GoRight::new();

    let stats = run_episode(&mut env, &mut agent, 0.5, true)?;

    // Two moves, then the rewarding step at t = 2
    assert_eq!(stats.length, 3);
    assert_eq!(stats.undiscounted_return, 1.0);
    assert_eq!(stats.discounted_return, 0.25);
    assert_eq!(agent.n_updates, 3);
    Ok(())
}

#[test]
fn test_run_episode_without_learning() -> Result<()> {
    let mut env = Corridor::build(&(2, 100), 0)?;
    let mut agent = GoRight::new();

    let stats = run_episode(&mut env, &mut agent, 0.99, false)?;

    assert_eq!(stats.length, 2);
    assert_eq!(agent.n_updates, 0);
    Ok(())
}

#[test]
fn test_trainer_returns_one_value_per_episode() -> Result<()> {
    let mut env = Corridor::build(&(2, 100), 0)?;
    let mut agent = GoRight::new();
    let mut recorder = BufferedRecorder::new();
    let mut evaluator = DefaultEvaluator::new(2, 1.0);
    let mut trainer = Trainer::build(
        TrainerConfig::default()
            .max_episodes(4)
            .discount_factor(1.0)
            .eval_interval(2)
            .flush_record_interval(2),
    );

    let returns = trainer.train(&mut env, &mut agent, &mut recorder, &mut evaluator)?;

    assert_eq!(returns, vec![1.0; 4]);
    assert_eq!(recorder.len(), 4);
    let records = recorder.iter().collect::<Vec<_>>();
    assert_eq!(records[3].get_scalar("episode")?, 3.0);
    assert_eq!(records[3].get_scalar("episode_length")?, 2.0);
    assert!(records[0].get_scalar("eval_return").is_err());
    assert_eq!(records[1].get_scalar("eval_return")?, 1.0);
    // Only training episodes are integrated
    assert_eq!(agent.n_updates, 8);
    assert!(Agent::<Corridor>::is_train(&agent));
    Ok(())
}

#[test]
fn test_trainer_counts_truncated_episodes() -> Result<()> {
    struct GoLeft;

    impl Policy<Corridor> for GoLeft {
        fn sample(&mut self, _obs: &Cell) -> Dir {
            Dir::Left
        }
    }

    impl Agent<Corridor> for GoLeft {
        fn train(&mut self) {}
        fn eval(&mut self) {}
        fn is_train(&self) -> bool {
            true
        }
        fn update_with_record(&mut self, _transition: &Transition<Corridor>) -> Record {
            Record::empty()
        }
    }

    let mut env = Corridor::build(&(3, 5), 0)?;
    let mut recorder = NullRecorder::new();
    let mut trainer = Trainer::build(TrainerConfig::default().max_episodes(2));
    let returns = trainer.train(
        &mut env,
        &mut GoLeft,
        &mut recorder,
        &mut DefaultEvaluator::new(0, 1.0),
    )?;

    assert_eq!(returns, vec![0.0, 0.0]);
    recorder.flush(0);
    Ok(())
}

#[test]
fn test_shared_env_snapshot_is_isolated() -> Result<()> {
    let mut env = SharedEnv::<Corridor>::build(&(5, 100), 0)?;
    let planner_view = env.handle();

    env.reset()?;
    env.step(&Dir::Right);

    let mut sim = planner_view.fork(7);
    assert_eq!(sim.pos, 1);
    assert_eq!(sim.seed, 7);
    sim.step(&Dir::Right);
    sim.step(&Dir::Right);

    assert_eq!(sim.pos, 3);
    assert_eq!(planner_view.borrow().pos, 1);
    assert_eq!(planner_view.borrow().time, 1);
    assert_eq!(planner_view.borrow().seed, 0);
    Ok(())
}
