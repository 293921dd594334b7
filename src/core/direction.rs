//! Cardinal exit directions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::GridCoord;

/// One of the four cardinal exits a room can have.
///
/// The derived ordering (`N, S, E, W`) is the order exits are iterated in
/// everywhere a deterministic order matters (exit maps, BFS expansion).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// +y
    #[serde(rename = "n", alias = "N")]
    North,
    /// -y
    #[serde(rename = "s", alias = "S")]
    South,
    /// +x
    #[serde(rename = "e", alias = "E")]
    East,
    /// -x
    #[serde(rename = "w", alias = "W")]
    West,
}

impl Direction {
    /// All four directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction leading back.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit grid offset of one step in this direction.
    #[inline]
    pub fn offset(self) -> GridCoord {
        match self {
            Direction::North => GridCoord::new(0, 1),
            Direction::South => GridCoord::new(0, -1),
            Direction::East => GridCoord::new(1, 0),
            Direction::West => GridCoord::new(-1, 0),
        }
    }

    /// Single-letter form (`n`, `s`, `e`, `w`).
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
