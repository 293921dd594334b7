//! Room identifiers and per-exit knowledge.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Opaque, stable room identifier supplied by the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for RoomId {
    fn from(id: u64) -> Self {
        RoomId(id)
    }
}

/// What is known about one exit of a room.
///
/// `Unknown` resolves once, to `Inferred`, `Room` or `Blocked`. An
/// `Inferred` edge resolves once more: to `Room` when walked, or to `Blocked`
/// when the mover refuses it. `Room` and `Blocked` are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitState {
    /// Exit exists but nobody has been through it yet
    Unknown,
    /// The mover refused this exit; never retried
    Blocked,
    /// Exit leads to this room; walked at least once
    Room(RoomId),
    /// Exit faces this room on the grid but was never walked
    Inferred(RoomId),
}

impl ExitState {
    /// Still waiting to be explored?
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, ExitState::Unknown)
    }

    /// Neighbor room, walked or inferred.
    #[inline]
    pub fn room(&self) -> Option<RoomId> {
        match self {
            ExitState::Room(id) | ExitState::Inferred(id) => Some(*id),
            ExitState::Unknown | ExitState::Blocked => None,
        }
    }

    /// Connected by inference only?
    #[inline]
    pub fn is_inferred(&self) -> bool {
        matches!(self, ExitState::Inferred(_))
    }
}

/// Exit knowledge of a single room, in canonical direction order.
pub type ExitMap = BTreeMap<Direction, ExitState>;
