//! Layout files of [`RoomsEnv`](crate::RoomsEnv).
//!
//! A layout is plain text. Each line is a row of whitespace-separated tokens;
//! the token `#` is an obstacle at `(column, row)`, any other token is a free
//! cell. For example, a 9×9 map with four rooms:
//!
//! ```text
//! # # # # # # # # #
//! # . . . # . . . #
//! # . . . . . . . #
//! # . . . # . . . #
//! # # . # # # . # #
//! # . . . # . . . #
//! # . . . . . . . #
//! # . . . # . . . #
//! # # # # # # # # #
//! ```
use crate::Position;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

/// The token of an obstacle cell.
pub const OBSTACLE_TOKEN: &str = "#";

/// Errors while loading a layout.
#[derive(Error, Debug)]
pub enum MapError {
    /// The file could not be read.
    #[error("Failed to read layout {path:?}: {source}")]
    Io {
        /// Path of the layout.
        path: PathBuf,

        /// Underlying error.
        source: std::io::Error,
    },

    /// The layout has no cells.
    #[error("Layout has no cells")]
    Empty,

    /// A row has fewer cells than the widest row.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the row.
        row: usize,

        /// Number of cells of the widest row.
        expected: usize,

        /// Number of cells of the row.
        found: usize,
    },

    /// The layout cannot hold the start and goal cells.
    #[error("Layout is {width}x{height}, at least 3x3 is required")]
    TooSmall {
        /// Width.
        width: usize,

        /// Height.
        height: usize,
    },

    /// The start or goal cell is an obstacle.
    #[error("The {cell} cell {position} is an obstacle")]
    Blocked {
        /// `"start"` or `"goal"`.
        cell: &'static str,

        /// Position of the cell.
        position: Position,
    },
}

/// A parsed layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayout {
    /// The number of columns.
    pub width: usize,

    /// The number of rows.
    pub height: usize,

    /// Obstacle cells in reading order.
    pub obstacles: Vec<Position>,
}

impl MapLayout {
    /// Parses a layout from its text.
    ///
    /// The map is the bounding box of the tokens: leading and trailing blank
    /// lines are ignored and the width is the token count of the widest row.
    /// Every row in between must have that many tokens.
    pub fn parse(content: &str) -> Result<Self, MapError> {
        let rows: Vec<Vec<&str>> = content
            .lines()
            .map(|line| line.split_whitespace().collect())
            .collect();
        let first = rows
            .iter()
            .position(|row| !row.is_empty())
            .ok_or(MapError::Empty)?;
        let last = rows.iter().rposition(|row| !row.is_empty()).unwrap_or(first);
        let rows = &rows[first..=last];
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut obstacles = vec![];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, cell) in row.iter().enumerate() {
                if *cell == OBSTACLE_TOKEN {
                    obstacles.push(Position::new(x, y));
                }
            }
        }

        Ok(Self {
            width,
            height,
            obstacles,
        })
    }
}

/// Reads a layout file.
pub fn read_map_file(path: impl AsRef<Path>) -> Result<MapLayout, MapError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let layout = MapLayout::parse(&content)?;
    debug!(
        "Loaded {}x{} layout with {} obstacles from {:?}",
        layout.width,
        layout.height,
        layout.obstacles.len(),
        path
    );
    Ok(layout)
}
