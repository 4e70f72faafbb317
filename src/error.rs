//! Error types for sourcedb-merger
//!
//! Shape violations, decode failures and filesystem failures are kept as
//! separate variants so callers can tell "not JSON at all" apart from
//! "valid JSON, wrong shape".

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sourcedb-merger operations
pub type SourcedbResult<T> = Result<T, SourcedbError>;

/// Structural violation of an expected manifest shape.
///
/// Every variant carries a rendering of the offending value so the message
/// points at the exact element that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestFormatError {
    /// Top-level value is not a JSON array
    #[error("{document} is expected to be a list, got `{actual}` instead")]
    NotAList {
        document: &'static str,
        actual: &'static str,
    },

    /// Build map item is not a JSON array
    #[error("build map items are expected to be lists, got `{item}`")]
    ItemNotAList { item: String },

    /// Build map item has fewer than three fields
    #[error("build map items are expected to have at least 3 fields, got {len}")]
    ItemTooShort { len: usize },

    /// Build map key is not a string
    #[error("build map keys are expected to be strings, got `{key}`")]
    KeyNotString { key: String },

    /// Build map value is not a string
    #[error("build map values are expected to be strings, got `{value}`")]
    ValueNotString { value: String },

    /// Target list element is neither null nor a 2-element list
    #[error("target list items are expected to be null or [target, manifest] pairs, got `{item}`")]
    TargetNotPair { item: String },

    /// Target name is not a string
    #[error("target names are expected to be strings, got `{target}`")]
    TargetNotString { target: String },

    /// Manifest path is not a string
    #[error("manifest paths are expected to be strings, got `{path}`")]
    ManifestPathNotString { path: String },
}

/// Main error type for sourcedb-merger operations
#[derive(Error, Debug)]
pub enum SourcedbError {
    /// Valid JSON with the wrong shape
    #[error(transparent)]
    Format(#[from] ManifestFormatError),

    /// File could not be read or written
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON
    #[error("invalid JSON in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Merged output could not be serialized
    #[error("failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl SourcedbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// True when the failure is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// The format error, if this failure is a shape violation
    pub fn as_format(&self) -> Option<&ManifestFormatError> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}
