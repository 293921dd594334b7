//! The discovered map.
//!
//! [`MapStore`] is the single owner of room, exit and coordinate data. The
//! explorer and the inference pass mutate it through its methods; everything
//! else reads it or takes a [`MapSnapshot`].

mod inference;
mod snapshot;
mod store;

pub use inference::{Shortcut, neighbor_coordinate};
pub use snapshot::{Edge, MapSnapshot, RoomSnapshot};
pub use store::MapStore;
