use std::process::Command;

#[test]
fn test_help_lists_all_subcommands() {
    let bin = env!("CARGO_BIN_EXE_mbench");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "average-duration",
        "termination-duration",
        "build-experiment",
        "build-termination-experiment",
        "build-plain-one-experiment",
        "plain-curve",
        "compute-runtime",
        "compute-termination-runtime",
        "extract-job-counts",
        "extract-task-counts",
        "subtract-results",
        "ideal-termination-table",
    ] {
        assert!(
            stdout.contains(name),
            "help output should list '{}'; got:\n{}",
            name,
            stdout
        );
    }
}

#[test]
fn test_no_subcommand_exits_one_with_diagnostic_on_stdout() {
    let bin = env!("CARGO_BIN_EXE_mbench");

    let output = Command::new(bin).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    // The harness contract: diagnostics go to stdout, not stderr.
    assert!(!output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_unknown_subcommand_exits_one() {
    let bin = env!("CARGO_BIN_EXE_mbench");

    let output = Command::new(bin).arg("frobnicate").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
}
