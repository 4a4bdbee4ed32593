#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Fuzz specification parsing - this should never panic
        let _ = mbench::BenchmarkSpec::parse(raw);
        let _ = mbench::TerminationSpec::parse(raw);
        let _ = mbench::kill_fraction(raw);
    }
});
