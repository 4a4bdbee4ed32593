//! Result arithmetic handlers

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Result;

use mbench::error::BenchError;

/// Subtract a warm-up time from a full measurement. The labels are a sanity
/// check that both numbers came from the same measurement series.
pub fn cmd_subtract_results(
    label: &str,
    time: f64,
    label_full: &str,
    time_full: f64,
    json: bool,
) -> Result<()> {
    if label != label_full {
        return Err(BenchError::LabelMismatch {
            left: label.to_string(),
            right: label_full.to_string(),
        }
        .into());
    }

    let difference = time_full - time;
    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "subtract-results",
                "label": label,
                "difference": difference,
            })
        );
    } else {
        println!("{label} {difference}");
    }
    Ok(())
}

/// Tabulate the ideal (no-overhead) runtime of a termination run for each
/// kill fraction: the surviving processors redo the killed share, so the
/// baseline stretches by 1/(1-f).
pub fn cmd_ideal_termination_table(
    _tag: &str,
    base: f64,
    output: &Path,
    fractions: &[String],
    json: bool,
) -> Result<()> {
    let mut table = String::new();
    for fraction in fractions {
        let value: f64 = fraction.parse().map_err(|_| BenchError::MalformedSpec {
            spec: fraction.clone(),
            reason: format!("'{fraction}' is not a number"),
        })?;
        if !(0.0..1.0).contains(&value) {
            return Err(BenchError::IllegalKillFraction {
                fraction: value,
                spec: fraction.clone(),
            }
            .into());
        }
        let ideal = base / (1.0 - value);
        let _ = writeln!(table, "{fraction} {ideal:.6}");
    }
    fs::write(output, table)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "ideal-termination-table",
                "rows": fractions.len(),
                "output": output.display().to_string(),
            })
        );
    }
    Ok(())
}
