//! Read-only export of the discovered map.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, ExitMap, GridCoord, RoomId};
use crate::error::Result;

use super::store::MapStore;

/// One room as seen in a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub id: RoomId,
    pub coordinate: Option<GridCoord>,
    pub exits: ExitMap,
}

/// A bidirectional connection, walked or inferred, reported once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Lower-id end
    pub from: RoomId,
    /// Exit of `from` leading to `to`
    pub direction: Direction,
    pub to: RoomId,
}

/// Point-in-time copy of the map, sorted by room id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub rooms: Vec<RoomSnapshot>,
    pub edges: Vec<Edge>,
}

impl MapSnapshot {
    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a room.
    pub fn room(&self, id: RoomId) -> Option<&RoomSnapshot> {
        self.rooms
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|idx| &self.rooms[idx])
    }

    /// Coordinates of all placed rooms.
    pub fn coordinates(&self) -> impl Iterator<Item = (RoomId, GridCoord)> + '_ {
        self.rooms
            .iter()
            .filter_map(|r| r.coordinate.map(|c| (r.id, c)))
    }

    /// Bounding box `(min, max)` of placed rooms.
    pub fn bounds(&self) -> Option<(GridCoord, GridCoord)> {
        self.coordinates().fold(None, |acc, (_, c)| match acc {
            None => Some((c, c)),
            Some((min, max)) => Some((
                GridCoord::new(min.x.min(c.x), min.y.min(c.y)),
                GridCoord::new(max.x.max(c.x), max.y.max(c.y)),
            )),
        })
    }

    /// Serialize to YAML for inspection.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl MapStore {
    /// Copy the current map state.
    pub fn snapshot(&self) -> MapSnapshot {
        let mut rooms: Vec<RoomSnapshot> = self
            .rooms
            .iter()
            .map(|(id, record)| RoomSnapshot {
                id: *id,
                coordinate: record.coordinate,
                exits: record.exits.clone(),
            })
            .collect();
        rooms.sort_by_key(|r| r.id);

        let mut edges = Vec::new();
        for room in &rooms {
            for (direction, state) in &room.exits {
                let Some(to) = state.room() else {
                    continue;
                };
                // Each edge is stored twice; keep the lower-id side.
                // Self-loops keep the N/E side.
                if room.id < to || (room.id == to && direction < &direction.opposite()) {
                    edges.push(Edge {
                        from: room.id,
                        direction: *direction,
                        to,
                    });
                }
            }
        }

        MapSnapshot { rooms, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExitState;
    use Direction::*;

    fn corridor() -> MapStore {
        let mut map = MapStore::new();
        map.register_room(RoomId(5), [East]);
        map.register_room(RoomId(2), [West, East]);
        map.register_room(RoomId(9), [West]);
        map.place(RoomId(5), GridCoord::ORIGIN).unwrap();
        map.connect(RoomId(5), RoomId(2), East).unwrap();
        map.place(RoomId(2), GridCoord::new(1, 0)).unwrap();
        map
    }

    #[test]
    fn test_snapshot_sorted_and_deduplicated() {
        let snapshot = corridor().snapshot();

        let ids: Vec<_> = snapshot.rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RoomId(2), RoomId(5), RoomId(9)]);
        assert_eq!(
            snapshot.edges,
            vec![Edge {
                from: RoomId(2),
                direction: West,
                to: RoomId(5),
            }]
        );
        assert_eq!(
            snapshot.room(RoomId(2)).unwrap().exits[&East],
            ExitState::Unknown
        );
        assert!(snapshot.room(RoomId(3)).is_none());
    }

    #[test]
    fn test_bounds_ignore_unplaced_rooms() {
        let snapshot = corridor().snapshot();
        assert_eq!(snapshot.coordinates().count(), 2);
        assert_eq!(
            snapshot.bounds(),
            Some((GridCoord::ORIGIN, GridCoord::new(1, 0)))
        );
        assert_eq!(MapSnapshot::default().bounds(), None);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let snapshot = corridor().snapshot();
        let yaml = snapshot.to_yaml().unwrap();
        let parsed: MapSnapshot = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
