//! Scenario: loading a target list from disk
//!
//! A build produced one manifest per target plus a target list pointing at
//! them. Loading must keep order, skip targets without a build map and
//! report each kind of failure distinctly.

use std::path::Path;

use serde_json::json;
use sourcedb_merger::{
    load_manifest, load_targets, load_targets_from_path, BuildMap, ExtensionAllowList,
    ManifestFormatError, SourcedbError, TargetEntry,
};

use crate::common::*;

fn allow() -> ExtensionAllowList {
    ExtensionAllowList::default()
}

#[test]
fn scenario_targets_load_in_order_and_skip_null() {
    let env = TestEnv::standard();

    let entries = load_targets(
        env.root_path(),
        &json!([["//target0", "a.json"], null, ["//target1", "b.json"]]),
        &allow(),
    )
    .unwrap();

    assert_eq!(
        entries,
        vec![
            TargetEntry::new(
                "//target0",
                [("crucible.py", "red")].into_iter().collect::<BuildMap>()
            ),
            TargetEntry::new(
                "//target1",
                [("bfg.py", "green"), ("unmakyr.py", "red")]
                    .into_iter()
                    .collect::<BuildMap>()
            ),
        ]
    );
}

#[test]
fn scenario_missing_manifest_surfaces_not_found() {
    let env = TestEnv::standard();

    let err = load_targets(
        env.root_path(),
        &json!([["//target0", "nonexistent.json"]]),
        &allow(),
    )
    .unwrap_err();

    match err {
        SourcedbError::Io { ref source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("expected an IO error, got {other:?}"),
    }
}

#[test]
fn scenario_non_json_manifest_surfaces_decode_error() {
    let env = TestEnv::standard();

    let err = load_targets(env.root_path(), &json!([["//target0", "c.txt"]]), &allow())
        .unwrap_err();

    assert!(matches!(err, SourcedbError::Decode { .. }), "got {err:?}");
}

#[test]
fn scenario_non_utf8_manifest_surfaces_decode_error() {
    let env = TestEnv::standard();
    std::fs::write(env.path("latin1.json"), b"[[\"caf\xe9.py\", \"x\", \"y\"]]").unwrap();

    let err = load_targets(
        env.root_path(),
        &json!([["//target0", "latin1.json"]]),
        &allow(),
    )
    .unwrap_err();

    assert!(matches!(err, SourcedbError::Decode { .. }), "got {err:?}");
}

#[test]
fn scenario_wrong_shape_manifest_is_format_error() {
    let env = TestEnv::standard();

    let err = load_targets(env.root_path(), &json!([["//target0", "d.json"]]), &allow())
        .unwrap_err();

    assert!(
        matches!(
            err,
            SourcedbError::Format(ManifestFormatError::NotAList { .. })
        ),
        "got {err:?}"
    );
}

#[test]
fn scenario_target_list_from_path() {
    let env = TestEnv::standard();

    let entries =
        load_targets_from_path(env.root_path(), Path::new("targets.json"), &allow()).unwrap();

    let targets: Vec<_> = entries.iter().map(|e| e.target().name()).collect();
    assert_eq!(targets, vec!["//target0", "//target1"]);
}

#[test]
fn scenario_nested_manifest_paths_resolve_against_root() {
    let env = TestEnv::new().with_files(&[
        ("out/gen/pkg/manifest.json", MIXED_MANIFEST),
        ("out/targets.json", r#"[["//pkg:lib", "out/gen/pkg/manifest.json"]]"#),
    ]);

    let entries = load_targets_from_path(
        env.root_path(),
        Path::new("out/targets.json"),
        &allow(),
    )
    .unwrap();

    assert_eq!(entries.len(), 1);
    let map = entries[0].build_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("pkg/api.pyi"), Some("stubs/pkg/api.pyi"));
    assert!(!map.contains("pkg/data.json"));
}

#[test]
fn scenario_load_manifest_directly() {
    let env = TestEnv::standard();

    let map = load_manifest(&env.path("b.json"), &allow()).unwrap();
    assert_eq!(map.len(), 2);

    let err = load_manifest(&env.path("missing.json"), &allow()).unwrap_err();
    assert!(err.is_not_found());
}
