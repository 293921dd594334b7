//! Append-only record of every move taken.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Directions walked so far, in order.
///
/// Diagnostics and replay only; planning never reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraversalPath {
    moves: Vec<Direction>,
}

impl TraversalPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move.
    pub fn push(&mut self, direction: Direction) {
        self.moves.push(direction);
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// No moves yet?
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves as a slice.
    pub fn as_slice(&self) -> &[Direction] {
        &self.moves
    }

    /// Iterate over the moves.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.moves.iter().copied()
    }
}

impl From<Vec<Direction>> for TraversalPath {
    fn from(moves: Vec<Direction>) -> Self {
        Self { moves }
    }
}

/// Compact form, e.g. `nnesw`.
impl fmt::Display for TraversalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in &self.moves {
            write!(f, "{}", dir.as_char())?;
        }
        Ok(())
    }
}
