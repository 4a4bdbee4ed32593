#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz DURATION scanning - this should never panic
        let _ = mbench::logs::last_duration_in(content, Path::new("fuzz.log"));
    }
});
