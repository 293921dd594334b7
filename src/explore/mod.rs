//! Autonomous maze exploration.
//!
//! The [`Explorer`] walks an unknown maze through a [`Mover`], asks a
//! [`RoomProvider`] which exits each room has, and builds a
//! [`MapStore`](crate::map::MapStore) as it goes. It finishes once no reachable
//! room has an unexplored exit.
//!
//! # Example
//!
//! ```ignore
//! use marga::explore::{Explorer, ExplorerConfig};
//!
//! // Implement Mover + RoomProvider for your player
//! struct MyPlayer { /* ... */ }
//!
//! let mut explorer = Explorer::new(ExplorerConfig::seeded(42));
//! let mut player = MyPlayer::connect();
//!
//! let path = explorer.explore(&mut player)?;
//! println!("Visited {} rooms in {} moves", explorer.map().len(), path.len());
//! ```

mod config;
mod explorer;
mod path;
mod source;
mod state;

pub use config::ExplorerConfig;
pub use explorer::Explorer;
pub use path::TraversalPath;
pub use source::{Arrival, Mover, RoomProvider};
pub use state::{ExplorationProgress, ExplorationState};
