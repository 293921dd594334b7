//! Error types for maze mapping and exploration.

use thiserror::Error;

use crate::core::{Direction, ExitState, GridCoord, RoomId};

/// Contradiction detected while updating the map.
///
/// Any of these means the maze is not a consistent planar grid, or the map
/// was fed inconsistent data. Exploration stops on the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("room {room} already placed at {existing}, cannot move it to {proposed}")]
    CoordinateConflict {
        room: RoomId,
        existing: GridCoord,
        proposed: GridCoord,
    },

    #[error("coordinate {coord} already holds room {occupant}, cannot place {proposed}")]
    OccupiedCoordinate {
        coord: GridCoord,
        occupant: RoomId,
        proposed: RoomId,
    },

    #[error("exit {direction} of room {room} is already {existing:?}")]
    EdgeConflict {
        room: RoomId,
        direction: Direction,
        existing: ExitState,
    },

    #[error("room {room} has no {direction} exit")]
    MissingExit { room: RoomId, direction: Direction },

    #[error("expected to arrive in room {expected}, mover reported {actual}")]
    UnexpectedArrival { expected: RoomId, actual: RoomId },

    #[error("room {0} has no coordinate")]
    UnplacedRoom(RoomId),
}

/// Maze error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("room {0} is not registered")]
    MissingRoom(RoomId),

    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] Violation),

    #[error("exit {direction} of room {room} is blocked")]
    BlockedExit { room: RoomId, direction: Direction },

    #[error("no known exit connects room {from} to room {to}")]
    DisconnectedPath { from: RoomId, to: RoomId },

    #[error("no known route from room {from} to room {to}")]
    NotFound { from: RoomId, to: RoomId },

    #[error("exploration has not started")]
    NotStarted,

    #[error("exploration exceeded {limit} steps")]
    StepLimitExceeded { limit: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

impl MazeError {
    /// Get a short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRoom(_) => "MISSING_ROOM",
            Self::InvariantViolation(_) => "INVARIANT_VIOLATION",
            Self::BlockedExit { .. } => "BLOCKED_EXIT",
            Self::DisconnectedPath { .. } => "DISCONNECTED_PATH",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::NotStarted => "NOT_STARTED",
            Self::StepLimitExceeded { .. } => "STEP_LIMIT",
            Self::Config(_) => "CONFIG",
        }
    }

    /// Can exploration absorb this error and carry on?
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::BlockedExit { .. })
    }
}

impl From<serde_yaml::Error> for MazeError {
    fn from(e: serde_yaml::Error) -> Self {
        MazeError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MazeError::BlockedExit {
            room: RoomId(3),
            direction: Direction::East,
        };
        assert_eq!(err.to_string(), "exit e of room #3 is blocked");

        let err: MazeError = Violation::CoordinateConflict {
            room: RoomId(1),
            existing: GridCoord::new(0, 1),
            proposed: GridCoord::new(1, 1),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invariant violation: room #1 already placed at (0, 1), cannot move it to (1, 1)"
        );
    }

    #[test]
    fn test_error_code() {
        assert_eq!(MazeError::MissingRoom(RoomId(0)).code(), "MISSING_ROOM");
        assert_eq!(
            MazeError::StepLimitExceeded { limit: 10 }.code(),
            "STEP_LIMIT"
        );
    }

    #[test]
    fn test_only_blocked_exit_is_recoverable() {
        assert!(
            MazeError::BlockedExit {
                room: RoomId(0),
                direction: Direction::North
            }
            .is_recoverable()
        );
        assert!(!MazeError::MissingRoom(RoomId(0)).is_recoverable());
        assert!(!MazeError::from(Violation::UnplacedRoom(RoomId(2))).is_recoverable());
    }
}
