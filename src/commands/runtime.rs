//! Reservation runtime estimation handlers
//!
//! The cluster scheduler needs a wall-clock reservation up front. These
//! estimates are deliberately rough: proportional to the per-processor job
//! count, floored at five minutes so short runs still get a sane slot.

use anyhow::Result;

use mbench::error::BenchError;
use mbench::{spec, BenchConfig, BenchmarkSpec};

/// Minimum reservation, in seconds
const MIN_RUNTIME_SECS: u64 = 5 * 60;

pub fn cmd_compute_runtime(spec: &str, json: bool) -> Result<()> {
    let spec = BenchmarkSpec::parse(spec)?;
    let runtime = (2 * spec.jobs_per_processor / 3).max(MIN_RUNTIME_SECS);
    emit(runtime, json)
}

pub fn cmd_compute_termination_runtime(
    tag: &str,
    config: &BenchConfig,
    json: bool,
) -> Result<()> {
    let (_, kill_fraction) = spec::kill_fraction(tag)?;
    if !(0.0..1.0).contains(&kill_fraction) {
        return Err(BenchError::IllegalKillFraction {
            fraction: kill_fraction,
            spec: tag.to_string(),
        }
        .into());
    }

    // Killed-off processors stretch the run: the survivors redo their share.
    let jobs_per_processor =
        (config.jobs.per_processor as f64 / (1.0 - kill_fraction)) as u64;
    if jobs_per_processor < 2 {
        return Err(BenchError::IllegalJobCount {
            jobs: jobs_per_processor,
            spec: tag.to_string(),
        }
        .into());
    }

    let runtime = ((0.7 * jobs_per_processor as f64) as u64).max(MIN_RUNTIME_SECS);
    emit(runtime, json)
}

fn emit(runtime: u64, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({"event": "runtime", "seconds": runtime})
        );
    } else {
        println!("RUNTIME={runtime}");
    }
    Ok(())
}
