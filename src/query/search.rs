//! Breadth-first search over the known part of the map.

use std::collections::{HashMap, VecDeque};

use log::trace;

use crate::core::{ExitMap, RoomId};
use crate::error::Result;
use crate::map::MapStore;

/// Shortest route (by hop count) from `start` to the first room accepted by
/// `is_goal`, following walked and inferred edges.
///
/// Rooms are expanded in FIFO order and exits in canonical `N,S,E,W` order,
/// so ties always resolve the same way. Parent pointers replace per-entry
/// path copies; the route is rebuilt backwards from the goal.
///
/// Returns the room sequence including `start`, or `None` when no reachable
/// room qualifies.
pub(crate) fn breadth_first<F>(
    map: &MapStore,
    start: RoomId,
    mut is_goal: F,
) -> Result<Option<Vec<RoomId>>>
where
    F: FnMut(RoomId, &ExitMap) -> bool,
{
    let mut queue = VecDeque::from([start]);
    // parent of every discovered room; start maps to itself
    let mut parents: HashMap<RoomId, RoomId> = HashMap::from([(start, start)]);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        let exits = map.exits_of(current)?;
        if is_goal(current, exits) {
            trace!("BFS from {} reached {} after {} expansions", start, current, expanded);
            return Ok(Some(rebuild(&parents, start, current)));
        }

        expanded += 1;
        for neighbor in exits.values().filter_map(|state| state.room()) {
            if !parents.contains_key(&neighbor) {
                parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    trace!("BFS from {} exhausted after {} expansions", start, expanded);
    Ok(None)
}

fn rebuild(parents: &HashMap<RoomId, RoomId>, start: RoomId, goal: RoomId) -> Vec<RoomId> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = parents[&current];
        path.push(current);
    }
    path.reverse();
    path
}
