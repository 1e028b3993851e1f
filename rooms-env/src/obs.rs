//! Observations of [`RoomsEnv`](crate::RoomsEnv).
use rooms_core::Obs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of the grid.
///
/// This is the observation handed to agents and the key of their Q-tables.
/// The full spatial observation is available as a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column.
    pub x: usize,

    /// Row.
    pub y: usize,
}

impl Position {
    /// Constructs a position.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the position displaced by `(dx, dy)`, if it is non-negative.
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        let x = self.x as i64 + dx;
        let y = self.y as i64 + dy;
        if x < 0 || y < 0 {
            None
        } else {
            Some(Self::new(x as usize, y as usize))
        }
    }
}

impl Obs for Position {}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Channels of a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Position of the agent.
    Agent = 0,

    /// Position of the goal.
    Goal = 1,

    /// Obstacle cells.
    Obstacle = 2,
}

/// The number of channels of a [`Grid`].
pub const N_CHANNELS: usize = 3;

/// A three-channel spatial observation, one-hot per channel.
///
/// Cells are stored row-major with interleaved channels, i.e. the value of
/// channel `c` at `(x, y)` is at `(y * width + x) * 3 + c`. This is the
/// memory layout of an RGB image with `width` columns and `height` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Grid {
    /// Constructs an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * N_CHANNELS],
        }
    }

    /// Width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize, c: Channel) -> usize {
        (y * self.width + x) * N_CHANNELS + c as usize
    }

    /// Sets the cell of the given channel.
    ///
    /// Panics if `p` is outside of the grid.
    pub fn set(&mut self, p: Position, c: Channel) {
        assert!(p.x < self.width && p.y < self.height, "{} is out of the grid", p);
        let ix = self.index(p.x, p.y, c);
        self.data[ix] = 1;
    }

    /// Returns `true` if the cell is set in the given channel.
    /// Cells outside of the grid are never set.
    pub fn is_set(&self, p: Position, c: Channel) -> bool {
        p.x < self.width && p.y < self.height && self.data[self.index(p.x, p.y, c)] == 1
    }

    /// Returns the raw data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
