//! Property tests for build map merging.

use std::collections::BTreeSet;

use proptest::prelude::*;

use sourcedb_merger::{merge_build_maps, BuildMap, ConflictPolicy, TargetEntry};

fn build_map() -> impl Strategy<Value = BuildMap> {
    proptest::collection::btree_map("[a-d]\\.py", "[xyz]", 0..4).prop_map(BuildMap::from)
}

/// Entries with unique target names
fn entries() -> impl Strategy<Value = Vec<TargetEntry>> {
    proptest::collection::btree_map("//t[0-9]", build_map(), 0..6).prop_map(|maps| {
        maps.into_iter()
            .map(|(target, map)| TargetEntry::new(target, map))
            .collect()
    })
}

/// Entries drawn from a few names, so targets repeat
fn entries_with_repeats() -> impl Strategy<Value = Vec<TargetEntry>> {
    proptest::collection::vec(("//t[0-2]", build_map()), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(target, map)| TargetEntry::new(target, map))
            .collect()
    })
}

fn distinct_targets(entries: &[TargetEntry]) -> usize {
    entries.iter().map(TargetEntry::target).collect::<BTreeSet<_>>().len()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Merging does not depend on the order of the target list.
    #[test]
    fn property_merge_is_order_independent(entries in entries()) {
        let mut reversed = entries.clone();
        reversed.reverse();

        for policy in [ConflictPolicy::DropTarget, ConflictPolicy::FirstWins] {
            prop_assert_eq!(
                merge_build_maps(&entries, policy),
                merge_build_maps(&reversed, policy)
            );
        }
    }

    /// PROPERTY: Every target is either built or dropped, never both.
    #[test]
    fn property_targets_are_accounted_for(entries in entries_with_repeats()) {
        let merged = merge_build_maps(&entries, ConflictPolicy::DropTarget);

        prop_assert_eq!(
            merged.built_targets_count + merged.dropped_targets.len(),
            distinct_targets(&entries)
        );
    }

    /// PROPERTY: A dropped target never conflicts with itself.
    #[test]
    fn property_conflicts_name_another_target(entries in entries_with_repeats()) {
        let merged = merge_build_maps(&entries, ConflictPolicy::DropTarget);

        for (target, conflict) in &merged.dropped_targets {
            prop_assert_ne!(target, &conflict.conflict_with);
            prop_assert!(!merged.dropped_targets.contains_key(&conflict.conflict_with));
        }
    }

    /// PROPERTY: Under drop-target every built target's map is a subset of the result.
    #[test]
    fn property_built_targets_are_fully_merged(entries in entries()) {
        let merged = merge_build_maps(&entries, ConflictPolicy::DropTarget);

        for entry in &entries {
            if merged.dropped_targets.contains_key(entry.target()) {
                continue;
            }
            for (key, value) in entry.build_map().iter() {
                prop_assert_eq!(merged.build_map.get(key), Some(value));
            }
        }
    }

    /// PROPERTY: First-wins never drops and covers every key.
    #[test]
    fn property_first_wins_covers_all_keys(entries in entries_with_repeats()) {
        let merged = merge_build_maps(&entries, ConflictPolicy::FirstWins);

        prop_assert!(merged.dropped_targets.is_empty());
        prop_assert_eq!(merged.built_targets_count, distinct_targets(&entries));
        for entry in &entries {
            for (key, _) in entry.build_map().iter() {
                prop_assert!(merged.build_map.contains(key));
            }
        }
    }
}
