//! Merged output writer
//!
//! Serializes a [`MergedBuildMap`] as JSON for the downstream type checker.

use std::path::Path;

use tracing::info;

use crate::domain::entities::MergedBuildMap;
use crate::domain::ports::FileSystem;
use crate::error::{SourcedbError, SourcedbResult};

/// Render the merged build map as JSON text
pub fn render_merged_output(merged: &MergedBuildMap, pretty: bool) -> SourcedbResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(merged)
    } else {
        serde_json::to_string(merged)
    };
    rendered.map_err(SourcedbError::Serialize)
}

/// Write the merged build map atomically, with a trailing newline
pub fn write_merged_output<FS: FileSystem>(
    fs: &FS,
    path: &Path,
    merged: &MergedBuildMap,
    pretty: bool,
) -> SourcedbResult<()> {
    let mut content = render_merged_output(merged, pretty)?;
    content.push('\n');

    fs.write_atomic(path, content.as_bytes())
        .map_err(|e| SourcedbError::io(path, e))?;

    info!(path = %path.display(), entries = merged.build_map.len(), "wrote merged build map");
    Ok(())
}
