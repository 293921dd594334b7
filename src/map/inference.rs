//! Coordinate inference: wiring up edges the explorer never walked.
//!
//! Every placed room has a grid coordinate. When a room is placed, each of
//! its `Unknown` exits is projected one cell outwards; if a known room
//! already sits there, the two must be neighbors and are connected directly.
//! Such edges stay `Inferred` until walked, since the mover may still refuse
//! them.
//!
//! ```text
//!   B ── C        walked: A→B (north), B→C (east), C→D (south)
//!   │    ?        placing D at (1,0) finds A at (0,0) west of it,
//!   A ?  D        so A.e and D.w are inferred without a move
//! ```

use log::debug;

use crate::core::{Direction, ExitState, GridCoord, RoomId};
use crate::error::{Result, Violation};

use super::store::MapStore;

/// An edge discovered by inference rather than by moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shortcut {
    /// Room whose exit was resolved
    pub room: RoomId,
    /// Exit that was resolved
    pub direction: Direction,
    /// Room found at the projected coordinate
    pub neighbor: RoomId,
}

/// Coordinate reached by leaving `coord` through `direction`.
#[inline]
pub fn neighbor_coordinate(coord: GridCoord, direction: Direction) -> GridCoord {
    coord.step(direction)
}

impl MapStore {
    /// Assign a coordinate and wire every shortcut it reveals.
    ///
    /// Re-placing a room at its existing coordinate does nothing.
    pub fn place(&mut self, id: RoomId, coord: GridCoord) -> Result<Vec<Shortcut>> {
        if self.set_coordinate(id, coord)? {
            self.infer_shortcuts(id)
        } else {
            Ok(Vec::new())
        }
    }

    /// Scan a placed room's `Unknown` exits for rooms already mapped at the
    /// neighboring coordinate.
    ///
    /// A neighbor whose facing exit is `Blocked` blocks this side too. A
    /// neighbor without a facing exit means the maze is not a planar grid.
    pub fn infer_shortcuts(&mut self, id: RoomId) -> Result<Vec<Shortcut>> {
        let coord = self
            .coordinate_of(id)?
            .ok_or(Violation::UnplacedRoom(id))?;

        let mut shortcuts = Vec::new();
        for direction in self.unexplored_exits(id)? {
            let target = neighbor_coordinate(coord, direction);
            let Some(neighbor) = self.room_at(target) else {
                continue;
            };

            let facing = direction.opposite();
            match self.exits_of(neighbor)?.get(&facing).copied() {
                None => {
                    return Err(Violation::MissingExit {
                        room: neighbor,
                        direction: facing,
                    }
                    .into());
                }
                Some(ExitState::Blocked) => {
                    debug!(
                        "Exit {} of {} faces blocked exit of {}, blocking",
                        direction, id, neighbor
                    );
                    self.mark_blocked(id, direction)?;
                }
                Some(ExitState::Unknown | ExitState::Room(_) | ExitState::Inferred(_)) => {
                    self.connect_inferred(id, neighbor, direction)?;
                    debug!(
                        "Inferred shortcut {} -{}-> {} at {}",
                        id, direction, neighbor, target
                    );
                    shortcuts.push(Shortcut {
                        room: id,
                        direction,
                        neighbor,
                    });
                }
            }
        }
        Ok(shortcuts)
    }
}
