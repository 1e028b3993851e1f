mod config;
mod summary;
use crate::{
    map::{read_map_file, MapError, MapLayout},
    Channel, Grid, Move, Position, N_ACTIONS,
};
use anyhow::Result;
pub use config::RoomsEnvConfig;
use log::trace;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use rooms_core::{record::Record, Env, Info, Simulator, Step};
use std::{collections::HashSet, path::Path};
pub use summary::StateSummary;

/// Probability that an action is replaced by a random one in stochastic mode.
pub const NOISE_PROBABILITY: f64 = 0.2;

/// The cell where every episode starts.
pub const START: Position = Position { x: 1, y: 1 };

/// Information of a step of [`RoomsEnv`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomsInfo {
    /// The movement actually executed, which differs from the requested one
    /// when action noise kicked in. `None` after the episode has ended.
    pub executed: Option<Move>,
}

impl Info for RoomsInfo {}

/// Grid navigation among rooms.
///
/// The agent starts at [`START`] and has to reach the goal at
/// `(width - 2, height - 2)`. Moves into obstacles or out of the grid leave
/// the agent in place. Reaching the goal gives reward 1 and terminates the
/// episode; otherwise the reward is 0 and the episode is truncated after
/// `time_limit` steps.
///
/// Cloning gives an independent deep copy; see also [`Simulator::fork`].
#[derive(Clone, Debug)]
pub struct RoomsEnv {
    width: usize,
    height: usize,
    obstacles: HashSet<Position>,
    goal: Position,
    position: Position,
    time: usize,
    time_limit: usize,
    terminated: bool,
    truncated: bool,
    stochastic: bool,

    // Sum of rewards over all episodes since construction
    undiscounted_return: f32,

    // Observations before each step of the current episode
    state_history: Vec<Grid>,
    record_history: bool,

    rng: SmallRng,
}

impl RoomsEnv {
    /// Constructs the environment from a parsed layout.
    pub fn from_layout(layout: MapLayout, config: &RoomsEnvConfig, seed: u64) -> Result<Self> {
        let MapLayout {
            width,
            height,
            obstacles,
        } = layout;
        if width < 3 || height < 3 {
            return Err(MapError::TooSmall { width, height }.into());
        }
        let obstacles: HashSet<Position> = obstacles.into_iter().collect();
        let goal = Position::new(width - 2, height - 2);
        for (cell, position) in [("start", START), ("goal", goal)].iter() {
            if obstacles.contains(position) {
                return Err(MapError::Blocked {
                    cell: *cell,
                    position: *position,
                }
                .into());
            }
        }

        Ok(Self {
            width,
            height,
            obstacles,
            goal,
            position: START,
            time: 0,
            time_limit: config.time_limit,
            terminated: false,
            truncated: false,
            stochastic: config.stochastic,
            undiscounted_return: 0.0,
            state_history: vec![],
            record_history: true,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// Width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of actions.
    pub fn n_actions(&self) -> usize {
        N_ACTIONS
    }

    /// Current position of the agent.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Position of the goal.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Returns `true` if `p` is an obstacle.
    pub fn is_obstacle(&self, p: Position) -> bool {
        self.obstacles.contains(&p)
    }

    /// Steps elapsed in the current episode.
    pub fn time(&self) -> usize {
        self.time
    }

    /// Returns `true` if the current episode has ended.
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }

    /// Sum of rewards over all episodes since construction.
    pub fn undiscounted_return(&self) -> f32 {
        self.undiscounted_return
    }

    /// Observations recorded before each step of the current episode.
    pub fn state_history(&self) -> &[Grid] {
        &self.state_history
    }

    /// The three-channel observation of the current state.
    pub fn observation(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        grid.set(self.position, Channel::Agent);
        grid.set(self.goal, Channel::Goal);
        for p in self.obstacles.iter() {
            grid.set(*p, Channel::Obstacle);
        }
        grid
    }

    /// Returns `true` if the agent is on the goal or in a doorway, i.e. both
    /// vertical or both horizontal neighbours are obstacles in `grid`.
    pub fn is_subgoal(&self, grid: &Grid) -> bool {
        let p = self.position;
        let blocked = |dx: i64, dy: i64| {
            p.offset(dx, dy).map_or(false, |q| grid.is_set(q, Channel::Obstacle))
        };
        let is_at_door_vertical = blocked(0, -1) && blocked(0, 1);
        let is_at_door_horizontal = blocked(-1, 0) && blocked(1, 0);
        p == self.goal || is_at_door_vertical || is_at_door_horizontal
    }

    /// Diagnostic summary of the current state.
    pub fn state_summary(&self, grid: &Grid) -> StateSummary {
        StateSummary {
            agent_x: self.position.x,
            agent_y: self.position.x,
            goal_x: self.goal.x,
            goal_y: self.goal.x,
            is_subgoal: self.is_subgoal(grid),
            time_step: self.time,
            score: self.undiscounted_return,
        }
    }

    fn set_position_if_no_obstacle(&mut self, m: Move) {
        let (dx, dy) = m.delta();
        if let Some(p) = self.position.offset(dx, dy) {
            if p.x < self.width && p.y < self.height && !self.obstacles.contains(&p) {
                self.position = p;
            }
        }
    }

    fn terminal_step(&self, act: Move) -> Step<Self> {
        Step::new(
            self.position,
            act,
            0.0,
            self.terminated,
            self.truncated,
            RoomsInfo { executed: None },
        )
    }
}

impl Env for RoomsEnv {
    type Config = RoomsEnvConfig;
    type Obs = Position;
    type Act = Move;
    type Info = RoomsInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let layout = read_map_file(&config.map_path)?;
        Self::from_layout(layout, config, seed as u64)
    }

    fn step(&mut self, act: &Move) -> (Step<Self>, Record) {
        if self.is_done() {
            return (self.terminal_step(*act), Record::empty());
        }

        let executed = if self.stochastic && self.rng.gen::<f64>() < NOISE_PROBABILITY {
            let m = *Move::ALL.choose(&mut self.rng).unwrap_or(act);
            trace!("Action {} replaced by {}", act, m);
            m
        } else {
            *act
        };

        self.time += 1;
        if self.record_history {
            self.state_history.push(self.observation());
        }
        self.set_position_if_no_obstacle(executed);

        let goal_reached = self.position == self.goal;
        let reward = if goal_reached { 1.0 } else { 0.0 };
        self.undiscounted_return += reward;
        self.terminated = goal_reached;
        self.truncated = !goal_reached && self.time >= self.time_limit;

        let step = Step::new(
            self.position,
            *act,
            reward,
            self.terminated,
            self.truncated,
            RoomsInfo {
                executed: Some(executed),
            },
        );
        (step, Record::empty())
    }

    fn reset(&mut self) -> Result<Position> {
        self.terminated = false;
        self.truncated = false;
        self.position = START;
        self.time = 0;
        self.state_history.clear();
        Ok(self.position)
    }
}

impl Simulator for RoomsEnv {
    fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Forks start with an empty history and do not record one.
    fn fork(&self, seed: u64) -> Self {
        Self {
            width: self.width,
            height: self.height,
            obstacles: self.obstacles.clone(),
            goal: self.goal,
            position: self.position,
            time: self.time,
            time_limit: self.time_limit,
            terminated: self.terminated,
            truncated: self.truncated,
            stochastic: self.stochastic,
            undiscounted_return: self.undiscounted_return,
            state_history: vec![],
            record_history: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

/// Loads a layout file and builds the environment.
pub fn load_env(path: impl AsRef<Path>, config: &RoomsEnvConfig, seed: i64) -> Result<RoomsEnv> {
    let config = config.clone().map_path(path.as_ref());
    RoomsEnv::build(&config, seed)
}
