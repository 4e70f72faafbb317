//! Inspect command handler

use std::path::Path;

use anyhow::{Context, Result};

use sourcedb_merger::application::TargetLoader;
use sourcedb_merger::TargetEntry;

use super::resolve_config;

pub fn cmd_inspect(
    input: &Path,
    root: &Path,
    extensions: Option<Vec<String>>,
    show_entries: bool,
    json: bool,
) -> Result<()> {
    let (_config, allow) = resolve_config(root, extensions)?;

    let entries = TargetLoader::local(allow)
        .load_from_path(root, input)
        .with_context(|| format!("failed to load targets from {}", input.display()))?;

    if json {
        emit_json(&entries)?;
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{}  ({} entries)",
            entry.target(),
            entry.build_map().len()
        );
        if show_entries {
            for (source, origin) in entry.build_map().iter() {
                println!("    {} → {}", source, origin);
            }
        }
    }
    println!("✓ {} targets", entries.len());
    Ok(())
}

fn emit_json(entries: &[TargetEntry]) -> Result<()> {
    let items: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "target": entry.target(),
                "build_map": entry.build_map(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string(&items)?);
    Ok(())
}
