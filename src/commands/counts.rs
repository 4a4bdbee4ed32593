//! Worker count extraction handler
//!
//! Shared by `extract-job-counts` and `extract-task-counts`: the harness
//! invokes both names, and the log layout is identical for jobs and tasks.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use mbench::{logs, stats};

pub fn cmd_extract_counts(
    _tag: &str,
    output: &Path,
    files: &[PathBuf],
    json: bool,
    verbose: u8,
) -> Result<()> {
    let mut rows = Vec::with_capacity(files.len());
    for file in files {
        let counts = logs::worker_counts(file)?;
        if verbose > 0 && !json {
            println!("{}: {:?}", file.display(), counts);
        }
        rows.push(counts);
    }

    rows.sort_by(|a, b| stats::compare_rows(a, b));

    let mut table = String::new();
    for (i, row) in rows.iter().enumerate() {
        let _ = write!(table, "{i} ");
        for value in row {
            let _ = write!(table, "{value} ");
        }
        table.push('\n');
    }
    fs::write(output, table)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "extract-counts",
                "rows": rows.len(),
                "output": output.display().to_string(),
            })
        );
    }
    Ok(())
}
