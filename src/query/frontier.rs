//! Nearest-frontier planning.
//!
//! A frontier is any room that still has an `Unknown` exit. When the
//! explorer runs out of unexplored exits locally it asks for the closest
//! frontier by hop count over the known map and walks there.

use crate::core::{ExitState, RoomId};
use crate::error::Result;
use crate::map::MapStore;

use super::search::breadth_first;

/// Route from `start` to the nearest room with an `Unknown` exit.
///
/// The returned rooms start with `start`; a single-element route means
/// `start` is itself a frontier. `None` means every reachable room is fully
/// explored.
pub fn find_frontier(map: &MapStore, start: RoomId) -> Result<Option<Vec<RoomId>>> {
    breadth_first(map, start, |_, exits| {
        exits.values().any(ExitState::is_unknown)
    })
}
