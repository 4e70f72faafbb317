#![no_main]

use libfuzzer_sys::fuzz_target;
use sourcedb_merger::{parse_manifest, ExtensionAllowList};

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        // Manifest parsing must reject malformed input without panicking
        let _ = parse_manifest(&value, &ExtensionAllowList::default());
    }
});
