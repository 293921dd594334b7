//! # Marga: Incremental Maze Mapping and Exploration
//!
//! Explores an unknown maze of rooms connected by `n`/`s`/`e`/`w` exits,
//! visiting every reachable room while building a map of it.
//!
//! ## Features
//!
//! - **Dead-reckoned coordinates**: each room is placed on an integer grid
//!   relative to the starting room
//! - **Shortcut inference**: rooms that turn out to be grid neighbors are
//!   connected without walking the exit between them
//! - **Nearest-frontier backtracking**: breadth-first search over the known
//!   map picks the closest room with unexplored exits
//! - **Blocked exits**: exits the mover refuses are recorded and never retried
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::explore::{Explorer, ExplorerConfig};
//! use marga::harness::SimulatedMaze;
//!
//! let mut maze = SimulatedMaze::grid(4, 4, marga::RoomId(0)).unwrap();
//! let mut explorer = Explorer::new(ExplorerConfig::seeded(7));
//!
//! let path = explorer.explore(&mut maze).unwrap();
//! assert_eq!(explorer.map().len(), 16);
//! assert_eq!(maze.verify_visits(path.iter()).unwrap().len(), 16);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Direction, GridCoord, RoomId, ExitState
//! - [`error`]: MazeError and Violation
//! - [`map`]: MapStore, coordinate inference, snapshots
//! - [`query`]: frontier search, shortest paths, move translation
//! - [`explore`]: Explorer state machine and its Mover/RoomProvider seams
//! - [`config`]: YAML configuration
//! - [`harness`]: in-memory simulated mazes
//! - [`graph`]: general digraph, ancestry and social-network searches
//!
//! ## Data Flow
//!
//! ```text
//!   Mover::travel ──► Arrival ──► MapStore::register_room + connect
//!                                          │
//!                                          ▼
//!                                 MapStore::place (coordinate)
//!                                          │ infer shortcuts
//!                                          ▼
//!              dead end? ──► find_frontier ──► to_directions ──► Mover::travel
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod explore;
pub mod graph;
pub mod harness;
pub mod map;
pub mod query;

pub use config::MargaConfig;
pub use core::{Direction, ExitMap, ExitState, GridCoord, RoomId};
pub use error::{MazeError, Result, Violation};
pub use explore::{
    Arrival, ExplorationProgress, ExplorationState, Explorer, ExplorerConfig, Mover, RoomProvider,
    TraversalPath,
};
pub use harness::{MazeBuilder, SimulatedMaze};
pub use map::{MapSnapshot, MapStore, Shortcut};
pub use query::{find_frontier, shortest_path, to_directions};
