//! Room-to-room routing and conversion to moves.

use crate::core::{Direction, RoomId};
use crate::error::{MazeError, Result};
use crate::map::MapStore;

use super::search::breadth_first;

/// Shortest known route between two registered rooms.
pub fn shortest_path(map: &MapStore, from: RoomId, to: RoomId) -> Result<Option<Vec<RoomId>>> {
    if !map.contains(to) {
        return Err(MazeError::MissingRoom(to));
    }
    breadth_first(map, from, |room, _| room == to)
}

/// Convert a room sequence into the moves that walk it.
///
/// Each consecutive pair must be joined by a walked or inferred exit,
/// otherwise the route and the map disagree and
/// [`MazeError::DisconnectedPath`] is returned. The result is one shorter
/// than `path`.
pub fn to_directions(map: &MapStore, path: &[RoomId]) -> Result<Vec<Direction>> {
    path.windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            map.exits_of(from)?
                .iter()
                .find(|(_, state)| state.room() == Some(to))
                .map(|(dir, _)| *dir)
                .ok_or(MazeError::DisconnectedPath { from, to })
        })
        .collect()
}
