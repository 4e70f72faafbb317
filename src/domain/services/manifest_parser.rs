//! Manifest parser
//!
//! Turns the decoded JSON of one per-target manifest into a [`BuildMap`].
//!
//! A manifest is a list of `[source_path, origin_path, ...]` items. Fields
//! past the second are reserved metadata and ignored. Items whose source
//! path has an extension outside the allow-list are dropped without a
//! warning; that filtering is policy, not validation.

use serde_json::Value;
use tracing::trace;

use crate::domain::entities::BuildMap;
use crate::domain::value_objects::ExtensionAllowList;
use crate::error::ManifestFormatError;

/// Minimum number of fields in a build map item
const MIN_ITEM_LEN: usize = 3;

/// Human-readable name of a JSON value's kind
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Validate and filter one manifest
///
/// Key and value types are checked before the extension filter runs, so a
/// malformed item is an error even when its key would have been dropped.
/// Duplicate keys resolve to the last item.
pub fn parse_manifest(
    input: &Value,
    allow: &ExtensionAllowList,
) -> Result<BuildMap, ManifestFormatError> {
    let items = input.as_array().ok_or(ManifestFormatError::NotAList {
        document: "manifest",
        actual: json_kind(input),
    })?;

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let fields = item
            .as_array()
            .ok_or_else(|| ManifestFormatError::ItemNotAList {
                item: item.to_string(),
            })?;
        if fields.len() < MIN_ITEM_LEN {
            return Err(ManifestFormatError::ItemTooShort { len: fields.len() });
        }

        let key = fields[0]
            .as_str()
            .ok_or_else(|| ManifestFormatError::KeyNotString {
                key: fields[0].to_string(),
            })?;
        let value = fields[1]
            .as_str()
            .ok_or_else(|| ManifestFormatError::ValueNotString {
                value: fields[1].to_string(),
            })?;

        if !allow.allows(key) {
            trace!(key, "skipping build map entry outside extension allow-list");
            continue;
        }
        entries.push((key, value));
    }

    Ok(entries.into_iter().collect())
}
