use std::fs;
use std::process::Command;

use tempfile::TempDir;

#[test]
fn test_writes_one_experiment_file_per_curve_point() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mbench"))
        .arg("plain-curve")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for p in [1u64, 2, 4, 8, 16] {
        assert!(stdout.contains(&format!("fnm=plain-run{p}.experiment")));
        assert!(dir.path().join(format!("plain-run{p}.experiment")).exists());
    }

    let sixteen = fs::read_to_string(dir.path().join("plain-run16.experiment")).unwrap();
    assert!(sixteen.starts_with("# Generated experiment file\n"));
    assert!(sixteen.contains("run16.application.name = TestProg\n"));
    assert!(sixteen.contains("run16.process.count = 16\n"));
    assert!(sixteen.contains("run16.pool.name = plain-run-16\n"));
    // The curve points share one output list under the default prefix.
    assert!(sixteen.contains("default.output.files = run16-out0,run16-out1,"));
    assert!(sixteen.contains("run16-out15\n"));
    assert!(!sixteen.contains("run16.application.output.files"));

    let one = fs::read_to_string(dir.path().join("plain-run1.experiment")).unwrap();
    assert!(one.contains("default.output.files = run1-out0\n"));
}

#[test]
fn test_json_mode_reports_each_file() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mbench"))
        .arg("--json")
        .arg("plain-curve")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|e| e["event"] == "experiment-file"));
}
