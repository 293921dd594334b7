//! Explorer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the [`Explorer`](super::Explorer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Seed for the direction shuffle (`None` = seed from entropy).
    #[serde(default)]
    pub seed: Option<u64>,

    /// Shuffle the direction order at every room.
    ///
    /// When disabled, exits are tried in `N, S, E, W` order.
    #[serde(default = "default_shuffle")]
    pub shuffle_directions: bool,

    /// Maximum state machine steps before giving up.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_shuffle() -> bool {
    true
}

fn default_max_steps() -> usize {
    1_000_000
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_directions: default_shuffle(),
            max_steps: default_max_steps(),
        }
    }
}

impl ExplorerConfig {
    /// Randomized but reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Fixed `N, S, E, W` direction order.
    pub fn deterministic() -> Self {
        Self {
            shuffle_directions: false,
            ..Default::default()
        }
    }

    /// Override the step cap.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}
