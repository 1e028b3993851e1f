use anyhow::Result;
use rooms_agent::{
    EpsilonGreedy, MonteCarloPlanningAgent, PlanningAndLearningAgent, PlanningAndLearningConfig,
    PlanningConfig, QLearningAgent, QLearningConfig, RandomAgent, RandomAgentConfig,
};
use rooms_core::{
    record::NullRecorder, Agent, DefaultEvaluator, Env, Policy, SharedEnv, Trainer,
    TrainerConfig, Transition,
};
use rooms_env::{map::MapLayout, Move, Position, RoomsEnv, RoomsEnvConfig, START};

const FOUR_ROOMS: &str = "\
# # # # # # # # #
# . . . # . . . #
# . . . . . . . #
# . . . # . . . #
# # . # # # . # #
# . . . # . . . #
# . . . . . . . #
# . . . # . . . #
# # # # # # # # #
";

// The goal (2, 1) is east of the start
const CORRIDOR: &str = "# # # #\n# . . #\n# # # #\n";

fn env(layout: &str) -> Result<RoomsEnv> {
    RoomsEnv::from_layout(MapLayout::parse(layout)?, &RoomsEnvConfig::default(), 0)
}

fn shared_env(layout: &str) -> Result<SharedEnv<RoomsEnv>> {
    let mut env = SharedEnv::new(env(layout)?);
    env.reset()?;
    Ok(env)
}

#[test]
fn test_q_learning_update_with_unit_learning_rate() {
    let config = QLearningConfig::default()
        .learning_rate(1.0)
        .discount_factor(0.99);
    let mut agent = QLearningAgent::<Position>::build(config);
    let s0 = START;
    let s1 = Position::new(1, 2);
    let s2 = Position::new(2, 2);

    Agent::<RoomsEnv>::update(
        &mut agent,
        &Transition::new(s1, Move::East, 0.5, s2, false),
    );
    assert_eq!(agent.q_values(&s1), vec![0.0, 0.0, 0.0, 0.5]);

    Agent::<RoomsEnv>::update(
        &mut agent,
        &Transition::new(s0, Move::North, 0.25, s1, false),
    );
    let expected = 0.25f32 + 0.99f32 * 0.5f32;
    assert_eq!(agent.q_values(&s0)[Move::North.index()], expected);
    assert_eq!(agent.table().len(), 2);
}

#[test]
fn test_q_learning_partial_update() {
    let config = QLearningConfig::default().learning_rate(0.5);
    let mut agent = QLearningAgent::<Position>::build(config);

    let record = Agent::<RoomsEnv>::update_with_record(
        &mut agent,
        &Transition::new(START, Move::South, 1.0, START, false),
    );
    assert_eq!(agent.q_values(&START)[Move::South.index()], 0.5);
    assert_eq!(record.get_scalar("td_error").unwrap(), 1.0);
    assert!(record.get_scalar("epsilon").is_ok());
}

#[test]
fn test_q_learning_reads_do_not_grow_table() {
    let agent = QLearningAgent::<Position>::build(QLearningConfig::default());
    assert_eq!(agent.q_values(&START), vec![0.0; 4]);
    assert_eq!(agent.max_q(&START), 0.0);
    assert!(agent.table().is_empty());
}

#[test]
fn test_q_learning_epsilon_decays_per_update() {
    let explorer = EpsilonGreedy::new().eps_decay(0.25).eps_min(0.1);
    let config = QLearningConfig::default().explorer(explorer);
    let mut agent = QLearningAgent::<Position>::build(config);
    let mut epsilons = vec![agent.epsilon()];

    for _ in 0..6 {
        Agent::<RoomsEnv>::update(
            &mut agent,
            &Transition::new(START, Move::West, 0.0, START, false),
        );
        epsilons.push(agent.epsilon());
    }

    assert_eq!(epsilons, vec![1.0, 0.75, 0.5, 0.25, 0.1, 0.1, 0.1]);
}

#[test]
fn test_q_learning_eval_is_greedy() {
    let config = QLearningConfig::default().learning_rate(1.0);
    let mut agent = QLearningAgent::<Position>::build(config);
    Agent::<RoomsEnv>::update(
        &mut agent,
        &Transition::new(START, Move::East, 1.0, Position::new(2, 1), false),
    );

    Agent::<RoomsEnv>::eval(&mut agent);
    for _ in 0..100 {
        let act: Move = Policy::<RoomsEnv>::sample(&mut agent, &START);
        assert_eq!(act, Move::East);
    }
}

#[test]
fn test_random_agent_covers_all_actions() {
    let mut agent = RandomAgent::build(RandomAgentConfig::default().seed(1));
    let mut seen = [false; 4];
    for _ in 0..200 {
        let act: Move = Policy::<RoomsEnv>::sample(&mut agent, &START);
        seen[act.index()] = true;
    }
    assert_eq!(seen, [true; 4]);
}

#[test]
fn test_planning_single_simulation_takes_first_action_of_plan() -> Result<()> {
    let env = shared_env(FOUR_ROOMS)?;
    let config = PlanningConfig::default().simulations(1).horizon(3).seed(7);

    for seed in 0..20 {
        let config = config.clone().seed(seed);
        let mut probe = MonteCarloPlanningAgent::build(config.clone(), env.handle());
        let mut agent = MonteCarloPlanningAgent::build(config, env.handle());

        let values = probe.estimate(&START);
        let sampled = values
            .counts()
            .iter()
            .position(|&n| n == 1)
            .expect("one plan is sampled");
        assert_eq!(values.counts().iter().sum::<usize>(), 1);

        let act = agent.sample(&START);
        assert_eq!(act.index(), sampled);
    }
    Ok(())
}

#[test]
fn test_planning_finds_adjacent_goal() -> Result<()> {
    let mut env = shared_env(CORRIDOR)?;
    let config = PlanningConfig::default().horizon(1).simulations(50);
    let mut agent = MonteCarloPlanningAgent::build(config, env.handle());

    let values = agent.estimate(&START);
    assert_eq!(values.counts().iter().sum::<usize>(), 50);
    assert_eq!(values.values()[Move::East.index()], 1.0);
    assert_eq!(values.values()[Move::West.index()], 0.0);

    let act = agent.sample(&START);
    assert_eq!(act, Move::East);

    // Planning leaves the live environment untouched
    assert_eq!(env.borrow().position(), START);
    assert_eq!(env.borrow().time(), 0);
    assert!(env.borrow().state_history().is_empty());

    let (step, _) = env.step(&act);
    assert_eq!(step.reward, 1.0);
    Ok(())
}

#[test]
fn test_planning_averages_returns_of_first_action() -> Result<()> {
    let env = shared_env(CORRIDOR)?;
    let config = PlanningConfig::default().horizon(3).simulations(2000);
    let mut agent = MonteCarloPlanningAgent::build(config, env.handle());

    let values = agent.estimate(&START);
    assert_eq!(values.values()[Move::East.index()], 1.0);

    // A blocked first move reaches the goal at the second step with
    // probability 1/4 and at the third step with probability 3/16
    let gamma = 0.99f32;
    let expected = 0.25 * gamma + 0.1875 * gamma.powi(2);
    for act in &[Move::North, Move::South, Move::West] {
        let value = values.values()[act.index()];
        assert!(values.counts()[act.index()] > 100);
        assert!((value - expected).abs() < 0.1, "{:?}: {}", act, value);
    }
    assert_eq!(agent.sample(&START), Move::East);
    Ok(())
}

#[test]
fn test_planning_without_horizon_samples_nothing() -> Result<()> {
    let env = shared_env(CORRIDOR)?;
    let config = PlanningConfig::default().horizon(0);
    let mut agent = MonteCarloPlanningAgent::build(config, env.handle());

    let values = agent.estimate(&START);
    assert_eq!(values.counts(), &[0; 4]);
    assert_eq!(values.values(), &[0.0; 4]);

    let mut seen = [false; 4];
    for _ in 0..200 {
        seen[agent.sample(&START).index()] = true;
    }
    assert_eq!(seen, [true; 4]);
    Ok(())
}

#[test]
fn test_planning_and_learning_bootstraps_leaves() -> Result<()> {
    let env = shared_env(FOUR_ROOMS)?;
    let config = PlanningAndLearningConfig::default()
        .planning(PlanningConfig::default().horizon(1).simulations(200))
        .q_learning(QLearningConfig::default().learning_rate(1.0))
        .warmup_phase(0);
    let mut agent = PlanningAndLearningAgent::build(config, env.handle());

    // Q((1, 2), north) = 1
    let above = Position::new(1, 2);
    agent.update(&Transition::new(
        above,
        Move::North,
        1.0,
        Position::new(1, 3),
        false,
    ));
    assert_eq!(agent.q_learner().max_q(&above), 1.0);

    let values = agent.estimate(&START);
    assert_eq!(values.values()[Move::North.index()], 0.99);
    assert_eq!(values.values()[Move::South.index()], 0.0);
    assert_eq!(values.values()[Move::East.index()], 0.0);
    assert_eq!(agent.sample(&START), Move::North);
    Ok(())
}

#[test]
fn test_planning_and_learning_discounts_leaves_by_horizon() -> Result<()> {
    let env = shared_env(FOUR_ROOMS)?;
    let config = PlanningAndLearningConfig::default()
        .planning(PlanningConfig::default().horizon(2).simulations(100))
        .q_learning(QLearningConfig::default().learning_rate(1.0))
        .warmup_phase(0);
    let mut agent = PlanningAndLearningAgent::build(config, env.handle());

    // Every cell of the top-left room has value 1, so every leaf of a
    // two-step plan does
    let outside = Position::new(7, 1);
    for x in 1..=3 {
        for y in 1..=3 {
            let pos = Position::new(x, y);
            agent.update(&Transition::new(pos, Move::North, 1.0, outside, false));
            assert_eq!(agent.q_learner().max_q(&pos), 1.0);
        }
    }

    let values = agent.estimate(&START);
    assert_eq!(values.counts().iter().sum::<usize>(), 100);
    for (&value, &count) in values.values().iter().zip(values.counts()) {
        if count > 0 {
            assert_eq!(value, 0.99f32.powi(2));
        }
    }
    Ok(())
}

#[test]
fn test_planning_and_learning_warmup() -> Result<()> {
    let env = shared_env(CORRIDOR)?;
    let config = PlanningAndLearningConfig::default()
        .planning(PlanningConfig::default().horizon(1).simulations(100))
        .warmup_phase(3);
    let mut agent = PlanningAndLearningAgent::build(config, env.handle());

    for _ in 0..3 {
        assert!(agent.in_warmup());
        agent.sample(&START);
    }
    assert!(!agent.in_warmup());
    assert_eq!(agent.sample(&START), Move::East);

    // Evaluation never acts at random
    let mut agent = PlanningAndLearningAgent::build(
        PlanningAndLearningConfig::default()
            .planning(PlanningConfig::default().horizon(1).simulations(100)),
        env.handle(),
    );
    agent.eval();
    assert!(!agent.in_warmup());
    for _ in 0..10 {
        assert_eq!(agent.sample(&START), Move::East);
    }
    agent.train();
    assert!(agent.in_warmup());
    Ok(())
}

#[test]
fn test_trainer_with_planning_agent() -> Result<()> {
    let mut env = SharedEnv::new(env(CORRIDOR)?);
    let config = PlanningConfig::default().horizon(2).simulations(100);
    let mut agent = MonteCarloPlanningAgent::build(config, env.handle());
    let mut trainer = Trainer::build(TrainerConfig::default().max_episodes(5).eval_interval(5));

    let returns = trainer.train(
        &mut env,
        &mut agent,
        &mut NullRecorder::new(),
        &mut DefaultEvaluator::new(2, 0.99),
    )?;

    assert_eq!(returns, vec![1.0; 5]);
    // Five training and two evaluation episodes
    assert_eq!(env.borrow().undiscounted_return(), 7.0);
    Ok(())
}

#[test]
fn test_trainer_with_q_learning_agent() -> Result<()> {
    let mut env = env(FOUR_ROOMS)?;
    let mut agent = QLearningAgent::<Position>::build(QLearningConfig::default());
    let mut trainer = Trainer::build(TrainerConfig::default().max_episodes(10));

    let returns = trainer.train(
        &mut env,
        &mut agent,
        &mut NullRecorder::new(),
        &mut DefaultEvaluator::new(0, 0.99),
    )?;

    assert_eq!(returns.len(), 10);
    assert!(returns.iter().all(|r| (0.0..=1.0).contains(r)));
    assert!(!agent.table().is_empty());
    Ok(())
}
