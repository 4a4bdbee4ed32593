//! Property tests for specification string parsing.

use proptest::prelude::*;

use mbench::{kill_fraction, BenchConfig, BenchmarkSpec, BenchmarkVariant, Experiment, TerminationSpec};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every well-formed specification round-trips, and the
    /// generated experiment carries the literal node count and the computed
    /// total job count.
    #[test]
    fn property_valid_spec_round_trips(
        index in 0usize..BenchmarkVariant::ALL.len(),
        processors in 1u64..=500,
        jobs_per_processor in 2u64..=50_000,
    ) {
        let variant = BenchmarkVariant::ALL[index];
        let raw = format!("{variant}-{processors}-{jobs_per_processor}");

        let spec = BenchmarkSpec::parse(&raw).expect("constructed spec must parse");
        prop_assert_eq!(spec.variant, variant);
        prop_assert_eq!(spec.processors, processors);
        prop_assert_eq!(spec.jobs_per_processor, jobs_per_processor);

        let rendered = Experiment::standard(&spec, &BenchConfig::default()).render();
        let process_count = format!(".process.count = {}\n", processors);
        let resource_count = format!(".resource.count = {}\n", processors);
        prop_assert!(rendered.contains(&process_count));
        prop_assert!(rendered.contains(&resource_count));
        // The total job count is the last argument, either alone (plain) or
        // after the variant's flags.
        let total = processors * jobs_per_processor;
        let total_args = format!("arguments = {}\n", total);
        let total_suffix = format!(",{}\n", total);
        prop_assert!(
            rendered.contains(&total_args) || rendered.contains(&total_suffix)
        );
    }

    /// PROPERTY: Specification parsing never panics on arbitrary input.
    #[test]
    fn property_spec_parse_never_panics(raw in "(?s).{0,64}") {
        let _ = BenchmarkSpec::parse(&raw);
        let _ = TerminationSpec::parse(&raw);
        let _ = kill_fraction(&raw);
    }

    /// PROPERTY: The termination label never contains a dot, whatever the
    /// fraction looks like.
    #[test]
    fn property_termination_label_has_no_dots(fraction in "[0-9.]{1,8}") {
        if let Ok(spec) = TerminationSpec::parse(&format!("video-plain-{fraction}")) {
            prop_assert!(!spec.label().contains('.'));
        }
    }
}
