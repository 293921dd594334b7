//! In-memory maze world.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, GridCoord, RoomId};
use crate::error::{MazeError, Result, Violation};
use crate::explore::{Arrival, Mover, RoomProvider};

/// One room of the hidden maze.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeRoom {
    /// True position. Never shown to the explorer.
    pub coordinate: GridCoord,
    /// Advertised exits. `None` is an exit the mover refuses to take.
    #[serde(default)]
    pub exits: BTreeMap<Direction, Option<RoomId>>,
}

/// On-disk layout.
#[derive(Deserialize, Serialize)]
struct MazeFile {
    start: RoomId,
    rooms: BTreeMap<RoomId, MazeRoom>,
}

/// A maze held entirely in memory, with a player walking it.
///
/// Implements both [`RoomProvider`] and [`Mover`], so it can stand in for a
/// real game world when dry-running the explorer.
#[derive(Clone, Debug)]
pub struct SimulatedMaze {
    rooms: BTreeMap<RoomId, MazeRoom>,
    start: RoomId,
    current: RoomId,
    moves: usize,
    refused: usize,
}

impl SimulatedMaze {
    /// Build from a room table, checking that every exit leads somewhere real.
    pub fn new(start: RoomId, rooms: BTreeMap<RoomId, MazeRoom>) -> Result<Self> {
        if !rooms.contains_key(&start) {
            return Err(MazeError::Config(format!("start room {} does not exist", start)));
        }
        for (id, room) in &rooms {
            for (dir, target) in &room.exits {
                if let Some(target) = target
                    && !rooms.contains_key(target)
                {
                    return Err(MazeError::Config(format!(
                        "exit {} of room {} leads to unknown room {}",
                        dir, id, target
                    )));
                }
            }
        }
        Ok(Self {
            rooms,
            start,
            current: start,
            moves: 0,
            refused: 0,
        })
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: MazeFile = serde_yaml::from_str(yaml)?;
        Self::new(file.start, file.rooms)
    }

    /// Load a maze from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MazeError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&contents)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let file = MazeFile {
            start: self.start,
            rooms: self.rooms.clone(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// Fully open `width` x `height` rectangle.
    ///
    /// Room `y * width + x` sits at `(x, y)`.
    pub fn grid(width: u32, height: u32, start: RoomId) -> Result<Self> {
        let mut rooms = Self::grid_rooms(width, height)?;
        for id in 0..u64::from(width) * u64::from(height) {
            let coord = grid_coordinate(id, width);
            for (dir, neighbor) in coord.neighbors_4() {
                if let Some(neighbor_id) = grid_id(neighbor, width, height)
                    && let Some(room) = rooms.get_mut(&RoomId(id))
                {
                    room.exits.insert(dir, Some(neighbor_id));
                }
            }
        }
        Self::new(start, rooms)
    }

    /// `n` rooms in a row running east from room 0.
    pub fn line(n: u32) -> Result<Self> {
        Self::grid(n, 1, RoomId(0))
    }

    /// Random maze carved from a `width` x `height` grid.
    ///
    /// A randomized depth-first spanning tree, plus up to `extra_links`
    /// additional openings that create loops. Starts in room 0.
    pub fn carved<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        extra_links: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut rooms = Self::grid_rooms(width, height)?;
        let mut visited = HashSet::from([RoomId(0)]);
        let mut stack = vec![RoomId(0)];
        let mut walls = Vec::new();

        while let Some(&id) = stack.last() {
            let coord = grid_coordinate(id.0, width);
            let mut candidates: Vec<(Direction, RoomId)> = coord
                .neighbors_4()
                .into_iter()
                .filter_map(|(dir, c)| grid_id(c, width, height).map(|n| (dir, n)))
                .collect();
            candidates.shuffle(rng);

            match candidates.iter().find(|(_, n)| !visited.contains(n)) {
                Some(&(dir, next)) => {
                    open(&mut rooms, id, dir, next);
                    visited.insert(next);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
            walls.extend(
                candidates
                    .into_iter()
                    .filter(|(_, n)| id < *n)
                    .map(|(dir, n)| (id, dir, n)),
            );
        }

        walls.retain(|(a, dir, _)| rooms.get(a).is_some_and(|r| !r.exits.contains_key(dir)));
        walls.sort();
        walls.dedup();
        walls.shuffle(rng);
        for (a, dir, b) in walls.into_iter().take(extra_links) {
            open(&mut rooms, a, dir, b);
        }

        Self::new(RoomId(0), rooms)
    }

    fn grid_rooms(width: u32, height: u32) -> Result<BTreeMap<RoomId, MazeRoom>> {
        if width == 0 || height == 0 {
            return Err(MazeError::Config(format!(
                "maze must have at least one room, got {}x{}",
                width, height
            )));
        }
        Ok((0..u64::from(width) * u64::from(height))
            .map(|id| {
                let room = MazeRoom {
                    coordinate: grid_coordinate(id, width),
                    exits: BTreeMap::new(),
                };
                (RoomId(id), room)
            })
            .collect())
    }

    /// Room the player started in.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Number of rooms in the maze.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All room ids, ascending.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }

    /// Hidden definition of a room.
    pub fn room(&self, id: RoomId) -> Option<&MazeRoom> {
        self.rooms.get(&id)
    }

    /// Successful moves so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Moves refused so far.
    pub fn refused_moves(&self) -> usize {
        self.refused
    }

    /// Put the player back at the start and clear the counters.
    pub fn reset(&mut self) {
        self.current = self.start;
        self.moves = 0;
        self.refused = 0;
    }

    /// Replay `path` from the start room without moving the player.
    ///
    /// Returns every room visited, start included.
    pub fn verify_visits<I>(&self, path: I) -> Result<HashSet<RoomId>>
    where
        I: IntoIterator<Item = Direction>,
    {
        let mut room = self.start;
        let mut visited = HashSet::from([room]);
        for direction in path {
            room = self.destination(room, direction)?;
            visited.insert(room);
        }
        Ok(visited)
    }

    /// Rooms reachable from the start through passable exits.
    pub fn reachable_rooms(&self) -> HashSet<RoomId> {
        let mut seen = HashSet::from([self.start]);
        let mut stack = vec![self.start];
        while let Some(id) = stack.pop() {
            let Some(room) = self.rooms.get(&id) else {
                continue;
            };
            for next in room.exits.values().flatten() {
                if seen.insert(*next) {
                    stack.push(*next);
                }
            }
        }
        seen
    }

    fn destination(&self, from: RoomId, direction: Direction) -> Result<RoomId> {
        let room = self.rooms.get(&from).ok_or(MazeError::MissingRoom(from))?;
        match room.exits.get(&direction) {
            Some(Some(target)) => Ok(*target),
            Some(None) => Err(MazeError::BlockedExit {
                room: from,
                direction,
            }),
            None => Err(Violation::MissingExit {
                room: from,
                direction,
            }
            .into()),
        }
    }
}

impl RoomProvider for SimulatedMaze {
    fn exits(&self, room: RoomId) -> Result<Vec<Direction>> {
        self.rooms
            .get(&room)
            .map(|r| r.exits.keys().copied().collect())
            .ok_or(MazeError::MissingRoom(room))
    }
}

impl Mover for SimulatedMaze {
    fn current_room(&self) -> RoomId {
        self.current
    }

    fn travel(&mut self, direction: Direction) -> Result<Arrival> {
        let target = match self.destination(self.current, direction) {
            Ok(target) => target,
            Err(e) => {
                self.refused += 1;
                return Err(e);
            }
        };
        debug!("Player walked {} from {} to {}", direction, self.current, target);
        self.current = target;
        self.moves += 1;
        Ok(Arrival {
            room: target,
            exits: self.exits(target)?,
        })
    }
}

/// Hand-built maze for tests and demos.
///
/// ```
/// use marga::core::{Direction, RoomId};
/// use marga::harness::MazeBuilder;
///
/// let maze = MazeBuilder::new()
///     .room(0, (0, 0))
///     .room(1, (0, 1))
///     .link(0, Direction::North, 1)
///     .blocked(0, Direction::East)
///     .build()
///     .unwrap();
/// assert_eq!(maze.room_count(), 2);
/// assert_eq!(maze.start(), RoomId(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MazeBuilder {
    rooms: BTreeMap<RoomId, MazeRoom>,
    exits: Vec<(RoomId, Direction, Option<RoomId>)>,
    start: Option<RoomId>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room at its true coordinate.
    pub fn room(mut self, id: u64, coordinate: impl Into<GridCoord>) -> Self {
        self.rooms.insert(
            RoomId(id),
            MazeRoom {
                coordinate: coordinate.into(),
                exits: BTreeMap::new(),
            },
        );
        self
    }

    /// Two-way passage: `a`'s `direction` exit and `b`'s opposite exit.
    pub fn link(mut self, a: u64, direction: Direction, b: u64) -> Self {
        self.exits.push((RoomId(a), direction, Some(RoomId(b))));
        self.exits
            .push((RoomId(b), direction.opposite(), Some(RoomId(a))));
        self
    }

    /// Exit that is advertised but can never be walked through.
    pub fn blocked(mut self, room: u64, direction: Direction) -> Self {
        self.exits.push((RoomId(room), direction, None));
        self
    }

    /// Starting room (defaults to the lowest id).
    pub fn start(mut self, id: u64) -> Self {
        self.start = Some(RoomId(id));
        self
    }

    pub fn build(self) -> Result<SimulatedMaze> {
        let mut rooms = self.rooms;
        for (id, direction, target) in self.exits {
            let room = rooms.get_mut(&id).ok_or_else(|| {
                MazeError::Config(format!("exit {} added to unknown room {}", direction, id))
            })?;
            room.exits.insert(direction, target);
        }
        let start = match self.start {
            Some(start) => start,
            None => *rooms
                .keys()
                .next()
                .ok_or_else(|| MazeError::Config("maze has no rooms".to_string()))?,
        };
        SimulatedMaze::new(start, rooms)
    }
}

fn grid_coordinate(id: u64, width: u32) -> GridCoord {
    let width = u64::from(width);
    GridCoord::new((id % width) as i32, (id / width) as i32)
}

fn grid_id(coord: GridCoord, width: u32, height: u32) -> Option<RoomId> {
    let in_bounds = coord.x >= 0
        && coord.y >= 0
        && (coord.x as u32) < width
        && (coord.y as u32) < height;
    in_bounds.then(|| RoomId(coord.y as u64 * u64::from(width) + coord.x as u64))
}

fn open(rooms: &mut BTreeMap<RoomId, MazeRoom>, a: RoomId, direction: Direction, b: RoomId) {
    if let Some(room) = rooms.get_mut(&a) {
        room.exits.insert(direction, Some(b));
    }
    if let Some(room) = rooms.get_mut(&b) {
        room.exits.insert(direction.opposite(), Some(a));
    }
}
