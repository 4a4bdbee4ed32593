//! Property tests for log scanning.

use std::path::Path;

use proptest::prelude::*;

use mbench::logs::{last_duration_in, worker_counts_in};

fn noise_line() -> impl Strategy<Value = String> {
    // Lowercase noise can never collide with the uppercase markers.
    proptest::string::string_regex("[a-z ]{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: With any mix of noise and DURATION lines, the last
    /// duration wins.
    #[test]
    fn property_last_duration_wins(
        values in proptest::collection::vec(0i64..1_000_000_000_000, 1..8),
        noise in proptest::collection::vec(noise_line(), 0..8),
    ) {
        let mut lines = Vec::new();
        let mut noise_iter = noise.iter();
        for value in &values {
            if let Some(line) = noise_iter.next() {
                lines.push(line.clone());
            }
            lines.push(format!("DURATION {value}"));
        }
        let content = lines.join("\n");

        let result = last_duration_in(&content, Path::new("prop.log")).unwrap();
        prop_assert_eq!(result, values.last().copied());
    }

    /// PROPERTY: The log scanners never panic on arbitrary content; bad
    /// input surfaces as an error, not a crash.
    #[test]
    fn property_scanners_never_panic(content in "(?s).{0,512}") {
        let _ = last_duration_in(&content, Path::new("prop.log"));
        let _ = worker_counts_in(&content, Path::new("prop.log"));
    }
}
