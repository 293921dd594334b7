//! Exploration state machine states and progress reporting.

use serde::Serialize;

/// Exploration state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ExplorationState {
    /// Not started yet
    Idle,
    /// Walking depth-first through unexplored exits
    Exploring,
    /// Dead end reached, routing to the nearest frontier
    Backtracking,
    /// No reachable frontier remains
    Done,
}

impl ExplorationState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExplorationState::Done)
    }

    /// Is exploration active?
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ExplorationState::Exploring | ExplorationState::Backtracking
        )
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ExplorationState::Idle => "Idle",
            ExplorationState::Exploring => "Exploring",
            ExplorationState::Backtracking => "Backtracking",
            ExplorationState::Done => "Done",
        }
    }
}

/// Exploration progress counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExplorationProgress {
    /// Current state name
    pub state: String,
    /// Rooms registered in the map
    pub rooms_known: usize,
    /// Rooms with no unexplored exit left when last visited
    pub rooms_finished: usize,
    /// Successful moves (length of the traversal path)
    pub moves: usize,
    /// Exits the mover refused
    pub blocked_exits: usize,
    /// Edges wired by coordinate inference
    pub shortcuts_inferred: usize,
    /// Frontier routes followed
    pub backtracks: usize,
    /// State machine steps taken
    pub steps: usize,
}
