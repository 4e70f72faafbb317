//! Merge command handler
//!
//! Loads the target list, merges every build map and writes the result.

use std::path::PathBuf;

use anyhow::{Context, Result};

use sourcedb_merger::application::{MergeOptions, MergeResult, MergeUseCase};
use sourcedb_merger::infrastructure::LocalFs;
use sourcedb_merger::ConflictPolicy;

use super::resolve_config;

/// Arguments of `sourcedb-merger merge`
#[derive(Debug)]
pub struct MergeArgs {
    pub input: PathBuf,
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: Option<Vec<String>>,
    pub conflicts: Option<ConflictPolicy>,
    pub compact: bool,
}

pub fn cmd_merge(args: MergeArgs, json: bool) -> Result<()> {
    let (config, allow) = resolve_config(&args.root, args.extensions)?;

    let mut options = MergeOptions::new(&args.root, &args.input)
        .with_output(&args.output)
        .with_conflicts(args.conflicts.unwrap_or(config.merge.conflicts));
    options.pretty = config.output.pretty && !args.compact;

    let result = MergeUseCase::new(LocalFs::new(), allow)
        .execute(&options)
        .with_context(|| format!("failed to merge build maps from {}", args.input.display()))?;

    if json {
        emit_json(&result)?;
    } else {
        print_summary(&result);
    }
    Ok(())
}

fn emit_json(result: &MergeResult) -> Result<()> {
    let output = serde_json::json!({
        "event": "merge",
        "status": if result.merged.is_clean() { "success" } else { "partial" },
        "loaded_targets": result.loaded_targets,
        "built_targets": result.merged.built_targets_count,
        "dropped_targets": result.merged.dropped_targets.len(),
        "entries": result.merged.build_map.len(),
        "output": result.output.as_ref().map(|p| p.display().to_string()),
    });
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn print_summary(result: &MergeResult) {
    let merged = &result.merged;
    println!(
        "✓ Loaded {} targets, merged {} ({} entries)",
        result.loaded_targets,
        merged.built_targets_count,
        merged.build_map.len()
    );
    if !merged.dropped_targets.is_empty() {
        println!("⚠ Dropped {} conflicting targets:", merged.dropped_targets.len());
        for (target, conflict) in &merged.dropped_targets {
            println!(
                "  - {}: {} already maps to {} via {}",
                target, conflict.key, conflict.conflict_value, conflict.conflict_with
            );
        }
    }
    if let Some(path) = &result.output {
        println!("✓ Wrote {}", path.display());
    }
}
