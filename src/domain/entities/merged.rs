//! MergedBuildMap entity - result of combining all target build maps
//!
//! This is also the shape written to disk, so field names follow the
//! output format consumed by the type checker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::BuildMap;
use crate::domain::value_objects::Target;

/// Why a target was left out of the merged map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Target that already owned the source path
    pub conflict_with: Target,
    /// Source path mapped twice
    pub key: String,
    /// Origin path the dropped target wanted
    pub value: String,
    /// Origin path already in the merged map
    pub conflict_value: String,
}

/// Global build map plus bookkeeping about what was merged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedBuildMap {
    pub build_map: BuildMap,
    pub built_targets_count: usize,
    #[serde(default)]
    pub dropped_targets: BTreeMap<Target, Conflict>,
}

impl MergedBuildMap {
    /// True when no target was dropped
    pub fn is_clean(&self) -> bool {
        self.dropped_targets.is_empty()
    }
}
