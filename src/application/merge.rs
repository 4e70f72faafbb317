//! Merge use case
//!
//! Load every target, merge their build maps and optionally write the
//! result. Used by the `merge` command.

use std::path::PathBuf;

use crate::domain::entities::MergedBuildMap;
use crate::domain::ports::FileSystem;
use crate::domain::services::merge_build_maps;
use crate::domain::value_objects::{ConflictPolicy, ExtensionAllowList};
use crate::error::SourcedbResult;
use crate::infrastructure::output::write_merged_output;

use super::loader::TargetLoader;

/// Options for a merge run
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Directory every manifest path is relative to
    pub root: PathBuf,
    /// Target list file, relative to `root`
    pub input: PathBuf,
    /// Where to write the merged build map (nothing is written when unset)
    pub output: Option<PathBuf>,
    pub conflicts: ConflictPolicy,
    pub pretty: bool,
}

impl MergeOptions {
    pub fn new(root: impl Into<PathBuf>, input: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            input: input.into(),
            output: None,
            conflicts: ConflictPolicy::default(),
            pretty: true,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_conflicts(mut self, conflicts: ConflictPolicy) -> Self {
        self.conflicts = conflicts;
        self
    }
}

/// Outcome of a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// Targets that had a build map
    pub loaded_targets: usize,
    pub merged: MergedBuildMap,
    pub output: Option<PathBuf>,
}

/// Merge use case - load, merge and write
pub struct MergeUseCase<FS>
where
    FS: FileSystem,
{
    loader: TargetLoader<FS>,
}

impl<FS> MergeUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS, allow: ExtensionAllowList) -> Self {
        Self {
            loader: TargetLoader::new(fs, allow),
        }
    }

    pub fn execute(&self, options: &MergeOptions) -> SourcedbResult<MergeResult> {
        let entries = self.loader.load_from_path(&options.root, &options.input)?;
        let merged = merge_build_maps(&entries, options.conflicts);

        if let Some(output) = &options.output {
            write_merged_output(self.loader.fs(), output, &merged, options.pretty)?;
        }

        Ok(MergeResult {
            loaded_targets: entries.len(),
            merged,
            output: options.output.clone(),
        })
    }
}
