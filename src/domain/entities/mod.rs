//! Domain Entities
//!
//! - `BuildMap` - validated source path → origin path mapping for one manifest
//! - `TargetEntry` - a build target paired with its build map
//! - `MergedBuildMap` - the global map produced by merging every target

mod build_map;
mod merged;
mod target_entry;

pub use build_map::BuildMap;
pub use merged::{Conflict, MergedBuildMap};
pub use target_entry::TargetEntry;
