//! Tabular action values.
use std::{collections::HashMap, hash::Hash};
use xxhash_rust::xxh3::Xxh3Builder;

/// Action values per state.
///
/// Rows are created with all-zero values the first time they are written
/// and are never removed. Reads of unseen states see zeros without growing
/// the table.
#[derive(Debug, Clone)]
pub struct QTable<S> {
    n_actions: usize,
    rows: HashMap<S, Vec<f32>, Xxh3Builder>,
}

impl<S: Hash + Eq> QTable<S> {
    /// Constructs an empty table.
    pub fn new(n_actions: usize) -> Self {
        Self {
            n_actions,
            rows: HashMap::default(),
        }
    }

    /// The number of actions.
    pub fn n_actions(&self) -> usize {
        self.n_actions
    }

    /// The number of states with a row.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no state has been written.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row of `state`, if it has been written.
    pub fn get(&self, state: &S) -> Option<&[f32]> {
        self.rows.get(state).map(|row| row.as_slice())
    }

    /// Action values of `state`, zeros for an unseen state.
    pub fn values(&self, state: &S) -> Vec<f32> {
        match self.get(state) {
            Some(row) => row.to_vec(),
            None => vec![0.0; self.n_actions],
        }
    }

    /// `max_a Q(state, a)`, `0` for an unseen state.
    pub fn max(&self, state: &S) -> f32 {
        self.get(state)
            .map(|row| row.iter().copied().fold(f32::NEG_INFINITY, f32::max))
            .unwrap_or(0.0)
    }

    /// Mutable row of `state`, inserting zeros if it has not been written.
    pub fn row_mut(&mut self, state: S) -> &mut [f32] {
        let n_actions = self.n_actions;
        self.rows
            .entry(state)
            .or_insert_with(|| vec![0.0; n_actions])
    }
}
