//! Capabilities the explorer needs from the outside world.

use crate::core::{Direction, RoomId};
use crate::error::Result;

/// Where a move ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    /// Room the player is now in
    pub room: RoomId,
    /// Exits that room advertises; cross-checked against the provider
    pub exits: Vec<Direction>,
}

/// Answers "which exits does this room have?".
///
/// Implement this for whatever holds the maze: a loaded world file, a game
/// server, a simulator. The explorer asks once per room, the first time the
/// room is entered.
pub trait RoomProvider {
    /// Exit directions of `room`.
    ///
    /// Fails with [`MazeError::MissingRoom`](crate::MazeError::MissingRoom)
    /// if the room does not exist.
    fn exits(&self, room: RoomId) -> Result<Vec<Direction>>;
}

/// The agent that physically walks the maze.
///
/// # Example
///
/// ```ignore
/// struct Player { /* connection to the game */ }
///
/// impl Mover for Player {
///     fn current_room(&self) -> RoomId {
///         self.room
///     }
///
///     fn travel(&mut self, direction: Direction) -> Result<Arrival> {
///         let reply = self.server.move_to(direction)?;
///         Ok(Arrival { room: reply.room, exits: reply.exits })
///     }
/// }
/// ```
pub trait Mover {
    /// Room the agent is standing in.
    fn current_room(&self) -> RoomId;

    /// Walk through an exit.
    ///
    /// Fails with [`MazeError::BlockedExit`](crate::MazeError::BlockedExit)
    /// if the exit cannot be traversed; the agent must then stay where it
    /// was. Any other error aborts exploration.
    fn travel(&mut self, direction: Direction) -> Result<Arrival>;
}
