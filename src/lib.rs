//! sourcedb-merger - build map loading and merging
//!
//! Loads the per-target build map manifests a build system produces,
//! validates their shape, keeps only source and stub files and merges
//! everything into one source path → origin path mapping for a type
//! checker or indexer.
//!
//! ```no_run
//! use std::path::Path;
//! use sourcedb_merger::{load_targets_from_path, ExtensionAllowList};
//!
//! let entries = load_targets_from_path(
//!     Path::new("buck-out"),
//!     Path::new("targets.json"),
//!     &ExtensionAllowList::default(),
//! )?;
//! for entry in &entries {
//!     println!("{}: {} files", entry.target(), entry.build_map().len());
//! }
//! # Ok::<(), sourcedb_merger::SourcedbError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    load_manifest, load_targets, load_targets_from_path, MergeOptions, MergeResult, MergeUseCase,
    TargetLoader,
};
pub use config::Config;
pub use domain::entities::{BuildMap, Conflict, MergedBuildMap, TargetEntry};
pub use domain::services::{merge_build_maps, parse_manifest};
pub use domain::value_objects::{ConflictPolicy, ExtensionAllowList, Target};
pub use error::{ManifestFormatError, SourcedbError, SourcedbResult};
