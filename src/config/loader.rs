//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::{ConflictPolicy, ExtensionAllowList};
use crate::error::{SourcedbError, SourcedbResult};

use super::types::Config;

/// Config file looked up in the root directory
pub const PROJECT_CONFIG_FILE: &str = ".sourcedb.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown config key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            )?,
            None => write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SourcedbResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| SourcedbError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SourcedbError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// The first file found wins; files are not merged with each other.
/// Environment overrides are applied last.
pub fn load_layered(project_root: Option<&Path>) -> SourcedbResult<LoadedConfig> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }
        let (config, warnings) = load_with_warnings(&candidate)?;
        for warning in &warnings {
            warn!("{}", warning);
        }
        debug!(path = %candidate.display(), "loaded config");
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            warnings,
            source: Some(candidate),
        });
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        ..Default::default()
    })
}

/// Apply environment variable overrides (SOURCEDB_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // SOURCEDB_EXTENSIONS (comma-separated)
    if let Some(extensions) = lookup("SOURCEDB_EXTENSIONS") {
        let parsed = ExtensionAllowList::parse_list(&extensions);
        if parsed.is_empty() {
            warn!("ignoring empty SOURCEDB_EXTENSIONS");
        } else {
            config.build_map.extensions = parsed;
        }
    }

    // SOURCEDB_CONFLICT_POLICY
    if let Some(policy) = lookup("SOURCEDB_CONFLICT_POLICY") {
        match ConflictPolicy::parse(&policy) {
            Some(policy) => config.merge.conflicts = policy,
            None => warn!(value = %policy, "ignoring unknown SOURCEDB_CONFLICT_POLICY"),
        }
    }

    config
}

/// `$XDG_CONFIG_HOME/sourcedb-merger/config.toml`, falling back to the platform config dir
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("sourcedb-merger").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build_map",
        "extensions",
        "merge",
        "conflicts",
        "output",
        "pretty",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
