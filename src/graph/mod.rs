//! General graph exercises built on the same search ideas as the maze
//! planner.
//!
//! - [`Digraph`]: adjacency-map digraph with breadth/depth-first traversals
//!   and path searches
//! - [`earliest_ancestor`]: farthest ancestor in a parent/child table
//! - [`SocialGraph`]: random friendship network and degrees of separation

mod ancestry;
mod digraph;
mod social;

use std::fmt::Debug;

use thiserror::Error;

pub use ancestry::earliest_ancestor;
pub use digraph::{Digraph, Vertex};
pub use social::{SocialGraph, User, UserId};

/// Digraph error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} does not exist")]
    MissingVertex(String),
}

impl GraphError {
    pub(crate) fn missing<V: Debug>(vertex: V) -> Self {
        GraphError::MissingVertex(format!("{:?}", vertex))
    }
}

/// Social graph error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SocialError {
    #[error("{0} cannot befriend themselves")]
    SelfFriendship(UserId),

    #[error("{0} and {1} are already friends")]
    AlreadyFriends(UserId, UserId),

    #[error("{0} does not exist")]
    UnknownUser(UserId),

    #[error("average of {average} friendships needs more than {users} users")]
    TooManyFriendships { average: u32, users: u32 },
}
