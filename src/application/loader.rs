//! Target loader
//!
//! Reads the top-level target list, resolves every manifest path against a
//! root directory and hands each manifest to the parser.
//!
//! ## Flow
//!
//! 1. Validate the target list shape (`null` or `[target, manifest_path]`)
//! 2. Read and decode `root / manifest_path`
//! 3. Parse the manifest into a `BuildMap`
//!
//! Loading is eager: the first failure aborts the call and nothing partial
//! is returned. Read and decode failures keep their own error variants so
//! they are never confused with shape violations.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{BuildMap, TargetEntry};
use crate::domain::ports::FileSystem;
use crate::domain::services::{json_kind, parse_manifest};
use crate::domain::value_objects::{ExtensionAllowList, Target};
use crate::error::{ManifestFormatError, SourcedbError, SourcedbResult};
use crate::infrastructure::fs::LocalFs;

/// Loads target lists and their manifests through a [`FileSystem`]
#[derive(Debug, Clone)]
pub struct TargetLoader<FS>
where
    FS: FileSystem,
{
    fs: FS,
    allow: ExtensionAllowList,
}

impl TargetLoader<LocalFs> {
    /// Loader backed by the local disk
    pub fn local(allow: ExtensionAllowList) -> Self {
        Self::new(LocalFs::new(), allow)
    }
}

impl<FS> TargetLoader<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS, allow: ExtensionAllowList) -> Self {
        Self { fs, allow }
    }

    pub(crate) fn fs(&self) -> &FS {
        &self.fs
    }

    /// Read, decode and parse a single manifest file
    ///
    /// The path is used as given; no root is applied here.
    pub fn load_manifest(&self, path: &Path) -> SourcedbResult<BuildMap> {
        let input = self.read_json(path)?;
        Ok(parse_manifest(&input, &self.allow)?)
    }

    /// Load every target listed in an already decoded target list
    pub fn load_from_json(&self, root: &Path, input: &Value) -> SourcedbResult<Vec<TargetEntry>> {
        let items = input.as_array().ok_or(ManifestFormatError::NotAList {
            document: "target list",
            actual: json_kind(input),
        })?;

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let Some((target, manifest)) = parse_target_item(item)? else {
                continue;
            };

            let build_map = self.load_manifest(&root.join(manifest))?;
            debug!(
                build_target = target,
                manifest,
                entries = build_map.len(),
                "loaded build map"
            );
            entries.push(TargetEntry::new(Target::new(target), build_map));
        }

        Ok(entries)
    }

    /// Load the target list stored at `root / input_path`
    pub fn load_from_path(&self, root: &Path, input_path: &Path) -> SourcedbResult<Vec<TargetEntry>> {
        let input = self.read_json(&root.join(input_path))?;
        self.load_from_json(root, &input)
    }

    fn read_json(&self, path: &Path) -> SourcedbResult<Value> {
        let content = self.fs.read(path).map_err(|e| SourcedbError::io(path, e))?;
        serde_json::from_slice(&content).map_err(|e| SourcedbError::decode(path, e))
    }
}

/// Validate one target list item; `Ok(None)` means "no build map"
fn parse_target_item(item: &Value) -> Result<Option<(&str, &str)>, ManifestFormatError> {
    let pair = match item {
        Value::Null => return Ok(None),
        Value::Array(pair) if pair.is_empty() => return Ok(None),
        Value::Array(pair) if pair.len() == 2 => pair,
        other => {
            return Err(ManifestFormatError::TargetNotPair {
                item: other.to_string(),
            })
        }
    };

    let target = pair[0]
        .as_str()
        .ok_or_else(|| ManifestFormatError::TargetNotString {
            target: pair[0].to_string(),
        })?;
    let manifest = pair[1]
        .as_str()
        .ok_or_else(|| ManifestFormatError::ManifestPathNotString {
            path: pair[1].to_string(),
        })?;

    Ok(Some((target, manifest)))
}

/// Read and parse one manifest from the local disk
pub fn load_manifest(path: &Path, allow: &ExtensionAllowList) -> SourcedbResult<BuildMap> {
    TargetLoader::local(allow.clone()).load_manifest(path)
}

/// Load a decoded target list, reading manifests from the local disk
pub fn load_targets(
    root: &Path,
    input: &Value,
    allow: &ExtensionAllowList,
) -> SourcedbResult<Vec<TargetEntry>> {
    TargetLoader::local(allow.clone()).load_from_json(root, input)
}

/// Load the target list file at `root / input_path` from the local disk
pub fn load_targets_from_path(
    root: &Path,
    input_path: &Path,
    allow: &ExtensionAllowList,
) -> SourcedbResult<Vec<TargetEntry>> {
    TargetLoader::local(allow.clone()).load_from_path(root, input_path)
}
