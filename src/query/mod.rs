//! Map queries: frontier planning, routing and move translation.
//!
//! All searches run over the *known* map only (walked and inferred edges),
//! never the hidden maze.

mod frontier;
mod path;
mod search;

pub use frontier::find_frontier;
pub use path::{shortest_path, to_directions};
