//! Test utilities for maze exploration scenarios.
//!
//! Fixture loading, exploration runners, and brute-force references to check
//! the planner against.

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;

use marga::{
    Direction, ExitState, Explorer, ExplorerConfig, GridCoord, MapStore, RoomId, SimulatedMaze,
    TraversalPath,
};

/// Initialize logging once per test binary.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Path to a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a YAML maze fixture.
pub fn load_fixture(name: &str) -> SimulatedMaze {
    SimulatedMaze::load(&fixture_path(name)).expect("fixture should load")
}

/// Explore a maze to completion.
pub fn explore(maze: &mut SimulatedMaze, config: ExplorerConfig) -> (Explorer, TraversalPath) {
    let mut explorer = Explorer::new(config);
    let path = explorer.explore(maze).expect("exploration should succeed");
    (explorer, path)
}

/// Check the explorer's map against the hidden maze.
///
/// Every mapped coordinate must equal the true coordinate relative to the
/// start room, and every walked edge must exist in the maze. Inferred edges
/// were never tried, so they only have to point at the true grid neighbor.
pub fn assert_map_matches_maze(map: &MapStore, maze: &SimulatedMaze) {
    let origin = maze
        .room(maze.start())
        .expect("start room exists")
        .coordinate;

    for id in map.room_ids() {
        let truth = maze.room(id).expect("mapped room exists in maze");
        assert_eq!(
            map.coordinate_of(id).unwrap(),
            Some(truth.coordinate - origin),
            "room {} placed wrong",
            id
        );

        for (dir, state) in map.exits_of(id).unwrap() {
            let actual = truth.exits.get(dir).copied().flatten();
            match state {
                ExitState::Room(target) => assert_eq!(
                    actual,
                    Some(*target),
                    "room {} exit {} mapped to {}",
                    id,
                    dir,
                    target
                ),
                ExitState::Inferred(target) => {
                    let neighbor = maze.room(*target).expect("inferred room exists in maze");
                    assert_eq!(
                        neighbor.coordinate,
                        truth.coordinate.step(*dir),
                        "room {} exit {} inferred to non-neighbor {}",
                        id,
                        dir,
                        target
                    );
                }
                ExitState::Blocked => {
                    assert_eq!(actual, None, "room {} exit {} wrongly blocked", id, dir)
                }
                ExitState::Unknown => panic!("room {} exit {} left unexplored", id, dir),
            }
        }
    }
}

/// Shortest hop count between two rooms by trying every simple path.
///
/// Exponential; only for small maps.
pub fn brute_force_distance(map: &MapStore, from: RoomId, to: RoomId) -> Option<usize> {
    let mut visited = HashSet::from([from]);
    let mut best = None;
    walk_all(map, from, to, 0, &mut visited, &mut best);
    best
}

fn walk_all(
    map: &MapStore,
    current: RoomId,
    to: RoomId,
    depth: usize,
    visited: &mut HashSet<RoomId>,
    best: &mut Option<usize>,
) {
    if current == to {
        *best = Some(best.map_or(depth, |b: usize| b.min(depth)));
        return;
    }
    if best.is_some_and(|b| depth >= b) {
        return;
    }
    let neighbors: Vec<RoomId> = map
        .exits_of(current)
        .unwrap()
        .values()
        .filter_map(ExitState::room)
        .collect();
    for next in neighbors {
        if visited.insert(next) {
            walk_all(map, next, to, depth + 1, visited, best);
            visited.remove(&next);
        }
    }
}

/// Walk `moves` through the maze from its current room, returning where the
/// player ends up.
pub fn replay(maze: &mut SimulatedMaze, moves: &[Direction]) -> RoomId {
    use marga::Mover;
    for &dir in moves {
        maze.travel(dir).expect("planned move should succeed");
    }
    maze.current_room()
}

/// Mapped coordinates, sorted.
pub fn mapped_coordinates(map: &MapStore) -> Vec<(RoomId, GridCoord)> {
    let mut coords: Vec<(RoomId, GridCoord)> = map
        .room_ids()
        .filter_map(|id| map.coordinate_of(id).ok().flatten().map(|c| (id, c)))
        .collect();
    coords.sort();
    coords
}

/// Every edge must have its mirror, of the same kind, on the other side.
pub fn assert_bidirectional(map: &MapStore) {
    for id in map.room_ids() {
        for (dir, state) in map.exits_of(id).unwrap() {
            let (other, expected) = match state {
                ExitState::Room(other) => (*other, ExitState::Room(id)),
                ExitState::Inferred(other) => (*other, ExitState::Inferred(id)),
                ExitState::Unknown | ExitState::Blocked => continue,
            };
            assert_eq!(
                map.exits_of(other).unwrap().get(&dir.opposite()),
                Some(&expected),
                "edge {} -{}-> {} has no mirror",
                id,
                dir,
                other
            );
        }
    }
}
