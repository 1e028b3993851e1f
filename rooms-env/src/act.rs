//! Action for [`RoomsEnv`](crate::RoomsEnv).
use rooms_core::Act;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The number of actions of [`RoomsEnv`](crate::RoomsEnv).
pub const N_ACTIONS: usize = 4;

/// A movement in the grid.
///
/// The discriminants are the action indices agents work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// `y + 1`
    North = 0,

    /// `y - 1`
    South = 1,

    /// `x - 1`
    West = 2,

    /// `x + 1`
    East = 3,
}

impl Move {
    /// All movements ordered by action index.
    pub const ALL: [Move; N_ACTIONS] = [Move::North, Move::South, Move::West, Move::East];

    /// Returns the movement with the given action index, if any.
    pub fn from_index(ix: usize) -> Option<Self> {
        Self::ALL.get(ix).copied()
    }

    /// Returns the action index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the displacement `(dx, dy)`.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Move::North => (0, 1),
            Move::South => (0, -1),
            Move::West => (-1, 0),
            Move::East => (1, 0),
        }
    }
}

impl Act for Move {}

impl From<usize> for Move {
    /// # Panics
    ///
    /// Panics if `ix >= N_ACTIONS`. Agents sample indices from
    /// `0..N_ACTIONS`, so an out-of-range index is a bug in the caller.
    fn from(ix: usize) -> Self {
        match Self::from_index(ix) {
            Some(m) => m,
            None => panic!("action index {} is out of range 0..{}", ix, N_ACTIONS),
        }
    }
}

impl From<Move> for usize {
    fn from(m: Move) -> Self {
        m.index()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::North => "north",
            Move::South => "south",
            Move::West => "west",
            Move::East => "east",
        };
        f.write_str(s)
    }
}
