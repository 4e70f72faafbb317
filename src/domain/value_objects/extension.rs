//! Extension allow-list value object
//!
//! Decides which build map keys are relevant. A key's extension is the
//! suffix of its final path component after the last `.`; names without a
//! dot and dotfiles like `.py` have no extension.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Source and stub extensions kept by default
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["py", "pyi"];

/// Set of file extensions whose build map entries are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionAllowList {
    extensions: BTreeSet<String>,
}

impl ExtensionAllowList {
    /// Build an allow-list; entries may be given with or without the leading dot
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| normalize(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// Parse a comma-separated list (`"py, .pyi"`)
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Returns true if the key's extension is in the allow-list
    pub fn allows(&self, key: &str) -> bool {
        Path::new(key)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(ext))
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Extensions without their leading dot, in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl Default for ExtensionAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl std::fmt::Display for ExtensionAllowList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self.iter().map(|ext| format!(".{}", ext)).collect();
        write!(f, "{}", joined.join(", "))
    }
}

impl Serialize for ExtensionAllowList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|ext| format!(".{}", ext)))
    }
}

impl<'de> Deserialize<'de> for ExtensionAllowList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
