//! Duration averaging handlers
//!
//! Both handlers reduce a set of run logs to the mean of their DURATION
//! measurements. They differ in how strict they are about missing markers
//! and where the result goes: `average-duration` prints a `label seconds`
//! line, `termination-duration` appends a row to a gnuplot table file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use mbench::error::BenchError;
use mbench::{logs, spec, BenchConfig};

/// Scale factor from summed nanoseconds to seconds
const SECONDS_PER_NANO: f64 = 1e-9;

pub fn cmd_average_duration(
    tag: &str,
    files: &[PathBuf],
    json: bool,
    verbose: u8,
) -> Result<()> {
    // The tag may carry run parameters after the label; only the label is
    // reported.
    let label = tag.split('-').next().unwrap_or(tag);

    let mut sum: i64 = 0;
    let mut count: i64 = 0;
    for file in files {
        let duration = logs::last_duration(file)?.ok_or_else(|| BenchError::DurationNotFound {
            file: file.clone(),
        })?;
        if verbose > 0 && !json {
            println!("{}: {} ns", file.display(), duration);
        }
        sum += duration;
        count += 1;
    }

    // Integer mean in nanoseconds, then scaled; clap guarantees count >= 1.
    let seconds = SECONDS_PER_NANO * ((sum / count) as f64);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "average-duration",
                "label": label,
                "seconds": seconds,
                "files": count,
            })
        );
    } else {
        println!("{label} {seconds}");
    }
    Ok(())
}

pub fn cmd_termination_duration(
    tag: &str,
    output: &Path,
    files: &[PathBuf],
    config: &BenchConfig,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let (fraction, _) = spec::kill_fraction(tag)?;

    let mut sum: i64 = 0;
    let mut count: i64 = 0;
    for file in files {
        // Killed-off runs may die before reporting; their logs are skipped.
        match logs::last_duration(file)? {
            Some(duration) => {
                if verbose > 0 && !json {
                    println!("{}: {} ns", file.display(), duration);
                }
                sum += duration;
                count += 1;
            }
            None => {
                if verbose > 0 && !json {
                    println!("{}: no DURATION, skipped", file.display());
                }
            }
        }
    }

    if count < 1 {
        let list = files
            .iter()
            .map(|f| f.display().to_string())
            .collect::<Vec<_>>()
            .join(",");
        return Err(BenchError::NoDurationsAnywhere { files: list }.into());
    }

    let duration = SECONDS_PER_NANO * ((sum / count) as f64);
    let time_per_frame = duration / config.termination.jobs_per_processor as f64;

    fs::write(output, format!("{fraction} {duration:.6} {time_per_frame:.6}\n"))?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "termination-duration",
                "fraction": fraction,
                "seconds": duration,
                "time_per_frame": time_per_frame,
                "files": count,
                "output": output.display().to_string(),
            })
        );
    }
    Ok(())
}
