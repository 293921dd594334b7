//! Authoritative store of discovered rooms, exits and coordinates.

use std::collections::HashMap;

use log::{debug, trace};

use crate::core::{Direction, ExitMap, ExitState, GridCoord, RoomId};
use crate::error::{MazeError, Result, Violation};

/// Everything known about one room.
#[derive(Clone, Debug, Default)]
pub(super) struct RoomRecord {
    pub exits: ExitMap,
    pub coordinate: Option<GridCoord>,
}

/// Map of the maze as discovered so far.
///
/// Owns all room and coordinate data. Edges are always stored in both
/// directions, and exit states only move forward (see [`ExitState`]).
#[derive(Clone, Debug, Default)]
pub struct MapStore {
    pub(super) rooms: HashMap<RoomId, RoomRecord>,
    /// Reverse lookup, kept in step with `RoomRecord::coordinate`
    coordinate_index: HashMap<GridCoord, RoomId>,
}

impl MapStore {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room with all of its exits `Unknown`.
    ///
    /// Returns `false` (and changes nothing) if the room is already known.
    pub fn register_room<I>(&mut self, id: RoomId, exits: I) -> bool
    where
        I: IntoIterator<Item = Direction>,
    {
        if self.rooms.contains_key(&id) {
            return false;
        }
        let exits: ExitMap = exits
            .into_iter()
            .map(|dir| (dir, ExitState::Unknown))
            .collect();
        trace!("Registered room {} with {} exits", id, exits.len());
        self.rooms.insert(
            id,
            RoomRecord {
                exits,
                coordinate: None,
            },
        );
        true
    }

    /// Is the room registered?
    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// No rooms registered yet?
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All registered room ids (unordered).
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }

    /// Exit knowledge of a room.
    pub fn exits_of(&self, id: RoomId) -> Result<&ExitMap> {
        self.record(id).map(|r| &r.exits)
    }

    /// Coordinate of a room, `None` if not yet placed.
    pub fn coordinate_of(&self, id: RoomId) -> Result<Option<GridCoord>> {
        self.record(id).map(|r| r.coordinate)
    }

    /// Room placed at `coord`, if any.
    pub fn room_at(&self, coord: GridCoord) -> Option<RoomId> {
        self.coordinate_index.get(&coord).copied()
    }

    /// Assign a room's coordinate.
    ///
    /// Assigning the same value again is a no-op and returns `false`.
    /// Moving a placed room, or placing two rooms on one cell, is an
    /// [`Violation`].
    pub fn set_coordinate(&mut self, id: RoomId, coord: GridCoord) -> Result<bool> {
        let record = self.record(id)?;
        match record.coordinate {
            Some(existing) if existing == coord => return Ok(false),
            Some(existing) => {
                return Err(Violation::CoordinateConflict {
                    room: id,
                    existing,
                    proposed: coord,
                }
                .into());
            }
            None => {}
        }
        if let Some(&occupant) = self.coordinate_index.get(&coord) {
            return Err(Violation::OccupiedCoordinate {
                coord,
                occupant,
                proposed: id,
            }
            .into());
        }

        self.coordinate_index.insert(coord, id);
        if let Some(record) = self.rooms.get_mut(&id) {
            record.coordinate = Some(coord);
        }
        Ok(true)
    }

    /// Connect `a` to `b` through `a`'s `direction` exit, and `b` back to `a`
    /// through the opposite exit, as a walked edge.
    ///
    /// Both sides are validated before either is written, so a failed call
    /// leaves the map untouched. An `Inferred` edge between the same rooms is
    /// upgraded to `Room`. Returns `false` if the walked edge already existed.
    pub fn connect(&mut self, a: RoomId, b: RoomId, direction: Direction) -> Result<bool> {
        self.link(a, b, direction, false)
    }

    /// Like [`MapStore::connect`], but records an edge that was deduced from
    /// coordinates and never walked.
    ///
    /// Existing edges between the same rooms are left as they are.
    pub fn connect_inferred(
        &mut self,
        a: RoomId,
        b: RoomId,
        direction: Direction,
    ) -> Result<bool> {
        self.link(a, b, direction, true)
    }

    /// Turn an inferred edge the mover refused into a blocked exit on both
    /// sides.
    ///
    /// Returns the room on the far side. Walked edges cannot be severed.
    pub fn sever(&mut self, id: RoomId, direction: Direction) -> Result<RoomId> {
        let state = self
            .record(id)?
            .exits
            .get(&direction)
            .copied()
            .ok_or(Violation::MissingExit {
                room: id,
                direction,
            })?;
        let ExitState::Inferred(neighbor) = state else {
            return Err(Violation::EdgeConflict {
                room: id,
                direction,
                existing: state,
            }
            .into());
        };

        let facing = direction.opposite();
        match self.record(neighbor)?.exits.get(&facing) {
            Some(ExitState::Inferred(back)) if *back == id => {}
            Some(existing) => {
                return Err(Violation::EdgeConflict {
                    room: neighbor,
                    direction: facing,
                    existing: *existing,
                }
                .into());
            }
            None => {
                return Err(Violation::MissingExit {
                    room: neighbor,
                    direction: facing,
                }
                .into());
            }
        }

        if let Some(record) = self.rooms.get_mut(&id) {
            record.exits.insert(direction, ExitState::Blocked);
        }
        if let Some(record) = self.rooms.get_mut(&neighbor) {
            record.exits.insert(facing, ExitState::Blocked);
        }
        debug!("Severed inferred edge {} -{}-> {}", id, direction, neighbor);
        Ok(neighbor)
    }

    fn link(
        &mut self,
        a: RoomId,
        b: RoomId,
        direction: Direction,
        inferred: bool,
    ) -> Result<bool> {
        let forward = Self::check_link(a, self.record(a)?, direction, b, inferred)?;
        let backward = Self::check_link(b, self.record(b)?, direction.opposite(), a, inferred)?;
        if !forward && !backward {
            return Ok(false);
        }

        let edge = |room| {
            if inferred {
                ExitState::Inferred(room)
            } else {
                ExitState::Room(room)
            }
        };
        if forward && let Some(record) = self.rooms.get_mut(&a) {
            record.exits.insert(direction, edge(b));
        }
        if backward && let Some(record) = self.rooms.get_mut(&b) {
            record.exits.insert(direction.opposite(), edge(a));
        }
        debug!(
            "Connected {} -{}-> {}{}",
            a,
            direction,
            b,
            if inferred { " (inferred)" } else { "" }
        );
        Ok(true)
    }

    /// Mark an `Unknown` exit as permanently blocked.
    pub fn mark_blocked(&mut self, id: RoomId, direction: Direction) -> Result<()> {
        let current = self
            .record(id)?
            .exits
            .get(&direction)
            .copied()
            .ok_or(Violation::MissingExit {
                room: id,
                direction,
            })?;
        match current {
            ExitState::Blocked => Ok(()),
            ExitState::Room(_) | ExitState::Inferred(_) => Err(Violation::EdgeConflict {
                room: id,
                direction,
                existing: current,
            }
            .into()),
            ExitState::Unknown => {
                if let Some(record) = self.rooms.get_mut(&id) {
                    record.exits.insert(direction, ExitState::Blocked);
                }
                Ok(())
            }
        }
    }

    /// Exits of a room still waiting to be explored, in canonical order.
    pub fn unexplored_exits(&self, id: RoomId) -> Result<Vec<Direction>> {
        Ok(self
            .exits_of(id)?
            .iter()
            .filter(|(_, state)| state.is_unknown())
            .map(|(dir, _)| *dir)
            .collect())
    }

    /// Does the room have at least one `Unknown` exit?
    pub fn has_unexplored(&self, id: RoomId) -> Result<bool> {
        Ok(self.exits_of(id)?.values().any(ExitState::is_unknown))
    }

    /// Total `Unknown` exits across the whole map.
    pub fn unknown_exit_count(&self) -> usize {
        self.rooms
            .values()
            .flat_map(|r| r.exits.values())
            .filter(|s| s.is_unknown())
            .count()
    }

    fn record(&self, id: RoomId) -> Result<&RoomRecord> {
        self.rooms.get(&id).ok_or(MazeError::MissingRoom(id))
    }

    /// Validate that `room`'s `direction` exit may point at `target`.
    ///
    /// Returns whether the exit would change.
    fn check_link(
        room: RoomId,
        record: &RoomRecord,
        direction: Direction,
        target: RoomId,
        inferred: bool,
    ) -> Result<bool> {
        match record.exits.get(&direction) {
            None => Err(Violation::MissingExit { room, direction }.into()),
            Some(ExitState::Unknown) => Ok(true),
            Some(ExitState::Room(existing)) if *existing == target => Ok(false),
            Some(ExitState::Inferred(existing)) if *existing == target => Ok(!inferred),
            Some(existing) => Err(Violation::EdgeConflict {
                room,
                direction,
                existing: *existing,
            }
            .into()),
        }
    }
}
