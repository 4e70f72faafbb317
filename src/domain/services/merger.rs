//! Build map merger
//!
//! Combines the per-target build maps into one global map. Targets are
//! visited in ascending name order so the result does not depend on the
//! order of the target list. A target listed more than once is merged as a
//! single target; among its own build maps the first listed value wins.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::entities::{BuildMap, Conflict, MergedBuildMap, TargetEntry};
use crate::domain::value_objects::{ConflictPolicy, Target};

/// Merge loaded target entries into a single build map
pub fn merge_build_maps(entries: &[TargetEntry], policy: ConflictPolicy) -> MergedBuildMap {
    let mut grouped: BTreeMap<&Target, Vec<&BuildMap>> = BTreeMap::new();
    for entry in entries {
        grouped.entry(entry.target()).or_default().push(entry.build_map());
    }

    let mut merged: BTreeMap<String, String> = BTreeMap::new();
    let mut owners: BTreeMap<String, &Target> = BTreeMap::new();
    let mut dropped = BTreeMap::new();
    let mut built_targets_count = 0;

    for (target, maps) in grouped {
        if maps.len() > 1 {
            debug!(build_target = %target, occurrences = maps.len(), "target listed more than once");
        }

        if policy == ConflictPolicy::DropTarget {
            if let Some(conflict) = find_conflict(&maps, &merged, &owners) {
                debug!(
                    build_target = %target,
                    conflict_with = %conflict.conflict_with,
                    key = %conflict.key,
                    "dropping conflicting target"
                );
                dropped.insert(target.clone(), conflict);
                continue;
            }
        }

        for (key, value) in maps.iter().flat_map(|map| map.iter()) {
            if !merged.contains_key(key) {
                merged.insert(key.to_string(), value.to_string());
                owners.insert(key.to_string(), target);
            }
        }
        built_targets_count += 1;
    }

    info!(
        targets = built_targets_count,
        dropped = dropped.len(),
        entries = merged.len(),
        "merged build maps"
    );

    MergedBuildMap {
        build_map: merged.into(),
        built_targets_count,
        dropped_targets: dropped,
    }
}

/// First key of a target that an earlier target already maps elsewhere
fn find_conflict(
    maps: &[&BuildMap],
    merged: &BTreeMap<String, String>,
    owners: &BTreeMap<String, &Target>,
) -> Option<Conflict> {
    maps.iter()
        .flat_map(|map| map.iter())
        .find_map(|(key, value)| {
            let existing = merged.get(key)?;
            if existing == value {
                return None;
            }
            Some(Conflict {
                conflict_with: owners.get(key).map(|t| (*t).clone())?,
                key: key.to_string(),
                value: value.to_string(),
                conflict_value: existing.clone(),
            })
        })
}
