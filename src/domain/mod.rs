//! Domain Layer
//!
//! Pure build map logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Build maps and the entries that pair them with targets
//! - `value_objects/` - Immutable value types (Target, ExtensionAllowList, ConflictPolicy)
//! - `services/` - Manifest parsing and build map merging
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
