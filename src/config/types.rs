//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConflictPolicy, ExtensionAllowList};
use crate::error::SourcedbResult;

use super::loader::{self, LoadedConfig};

/// Build map filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuildMapConfig {
    /// Extensions whose entries are kept (leading dot optional)
    #[serde(default)]
    pub extensions: ExtensionAllowList,
}

/// Merge configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MergeConfig {
    #[serde(default)]
    pub conflicts: ConflictPolicy,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build_map: BuildMapConfig,

    #[serde(default)]
    pub merge: MergeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from project config, user config, or defaults, then apply env overrides
    pub fn load_layered(project_root: Option<&Path>) -> SourcedbResult<LoadedConfig> {
        loader::load_layered(project_root)
    }

    /// Extension allow-list used by the manifest parser
    pub fn allow_list(&self) -> &ExtensionAllowList {
        &self.build_map.extensions
    }
}
