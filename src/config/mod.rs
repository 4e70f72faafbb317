//! Configuration module for sourcedb-merger
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SOURCEDB_*)
//! 3. Project config (<root>/.sourcedb.toml)
//! 4. User config (~/.config/sourcedb-merger/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{BuildMapConfig, Config, MergeConfig, OutputConfig};
