//! Simulated maze worlds for dry runs and tests.
//!
//! [`SimulatedMaze`] keeps the whole maze in memory, including each room's
//! true coordinate, and walks a virtual player through it. Mazes come from
//! YAML files, the [`MazeBuilder`], or generators (`grid`, `line`, `carved`).
//!
//! # YAML format
//!
//! ```yaml
//! start: 0
//! rooms:
//!   0:
//!     coordinate: { x: 0, y: 0 }
//!     exits: { n: 1, e: ~ }   # ~ = advertised but blocked
//!   1:
//!     coordinate: { x: 0, y: 1 }
//!     exits: { s: 0 }
//! ```

mod maze;

pub use maze::{MazeBuilder, MazeRoom, SimulatedMaze};
