//! BuildMap entity - the filtered content of one manifest
//!
//! Built once by the manifest parser and never mutated afterwards. Backed by
//! a `BTreeMap` so iteration and serialization are deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from relative source path to resolved origin path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildMap {
    content: BTreeMap<String, String>,
}

impl BuildMap {
    /// Origin path for a source path
    pub fn get(&self, source: &str) -> Option<&str> {
        self.content.get(source).map(String::as_str)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.content.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Entries in source-path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.content.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the underlying map
    pub fn content(&self) -> &BTreeMap<String, String> {
        &self.content
    }
}

impl From<BTreeMap<String, String>> for BuildMap {
    fn from(content: BTreeMap<String, String>) -> Self {
        Self { content }
    }
}

impl<K, V> FromIterator<(K, V)> for BuildMap
where
    K: Into<String>,
    V: Into<String>,
{
    /// Later pairs overwrite earlier ones with the same key
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            content: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
