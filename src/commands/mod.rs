//! Command handlers for the CLI

pub mod inspect;
pub mod merge;

use std::path::Path;

use anyhow::Result;
use tracing::warn;
use sourcedb_merger::config::Config;
use sourcedb_merger::ExtensionAllowList;

/// Effective config for a root, with `--extensions` taking precedence
pub(crate) fn resolve_config(
    root: &Path,
    extensions: Option<Vec<String>>,
) -> Result<(Config, ExtensionAllowList)> {
    let loaded = Config::load_layered(Some(root))?;
    let allow = flag_allow_list(loaded.config.allow_list(), extensions);
    Ok((loaded.config, allow))
}

/// An empty `--extensions` list is ignored, like an empty `SOURCEDB_EXTENSIONS`
fn flag_allow_list(
    configured: &ExtensionAllowList,
    extensions: Option<Vec<String>>,
) -> ExtensionAllowList {
    let Some(list) = extensions else {
        return configured.clone();
    };
    let parsed = ExtensionAllowList::new(list);
    if parsed.is_empty() {
        warn!("ignoring empty --extensions, keeping {}", configured);
        return configured.clone();
    }
    parsed
}
