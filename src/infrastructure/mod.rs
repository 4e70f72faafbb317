//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `output` - Serialization of the merged build map

pub mod fs;
pub mod output;

// Re-export for convenience
pub use fs::LocalFs;
pub use output::{render_merged_output, write_merged_output};
