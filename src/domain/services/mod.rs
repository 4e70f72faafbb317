//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod manifest_parser;
mod merger;

pub use manifest_parser::{json_kind, parse_manifest};
pub use merger::merge_build_maps;
