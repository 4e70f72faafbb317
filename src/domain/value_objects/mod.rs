//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod conflict_policy;
mod extension;
mod target;

pub use conflict_policy::ConflictPolicy;
pub use extension::{ExtensionAllowList, DEFAULT_EXTENSIONS};
pub use target::Target;
