//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TargetLoader` - Reads the target list and every per-target manifest
//! - `MergeUseCase` - Loads, merges and writes the global build map

pub mod loader;
pub mod merge;

pub use loader::{load_manifest, load_targets, load_targets_from_path, TargetLoader};
pub use merge::{MergeOptions, MergeResult, MergeUseCase};
