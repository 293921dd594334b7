//! Core types shared by every other module.
//!
//! - [`Direction`]: the four cardinal exits and their opposites
//! - [`GridCoord`]: dead-reckoned integer room position
//! - [`RoomId`]: opaque room key handed out by the maze
//! - [`ExitState`]: what is known about one exit (`Unknown`, `Blocked`, `Room`)

mod direction;
mod point;
mod room;

pub use direction::Direction;
pub use point::GridCoord;
pub use room::{ExitMap, ExitState, RoomId};
