//! Diagnostic summary of the state of [`RoomsEnv`](super::RoomsEnv).
use serde::Serialize;

/// Diagnostic summary of the environment state.
///
/// `agent_y` and `goal_y` hold the x coordinates of the agent and the goal.
/// Existing summaries were produced that way and are compared against, so
/// the layout is kept; use [`RoomsEnv::position`](super::RoomsEnv::position)
/// for the actual row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSummary {
    pub agent_x: usize,
    pub agent_y: usize,
    pub goal_x: usize,
    pub goal_y: usize,
    pub is_subgoal: bool,
    pub time_step: usize,
    pub score: f32,
}
