#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz worker report scanning - this should never panic
        let _ = mbench::logs::worker_counts_in(content, Path::new("fuzz.log"));
    }
});
