//! Top-level configuration loaded from YAML.
//!
//! ```yaml
//! exploration:
//!   seed: 42
//!   shuffle_directions: true
//!   max_steps: 100000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::explore::{Explorer, ExplorerConfig};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/marga.yaml";

/// Full configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MargaConfig {
    /// Exploration settings
    #[serde(default)]
    pub exploration: ExplorerConfig,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MazeError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, falling back to defaults if absent.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Explorer configured from this file.
    pub fn explorer(&self) -> Explorer {
        Explorer::new(self.exploration.clone())
    }
}
