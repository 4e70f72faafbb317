#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use sourcedb_merger::{MergeOptions, MergeUseCase};

fuzz_target!(|data: &[u8]| {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    if std::fs::write(dir.path().join("targets.json"), data).is_err() {
        return;
    }
    // Target lists pointing at missing manifests must surface as errors
    let options = MergeOptions::new(dir.path(), Path::new("targets.json"));
    let _ = MergeUseCase::new(
        sourcedb_merger::infrastructure::LocalFs::new(),
        Default::default(),
    )
    .execute(&options);
});
