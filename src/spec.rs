//! Benchmark specification strings
//!
//! The external harness names every measurement with a hyphen-delimited
//! specification string, e.g. `plain-4-20000` (variant, node count, jobs per
//! processor) or `video-slow-0.2` (name, variant, kill fraction). This module
//! parses those strings and owns the canned translation table from variant
//! name to benchmark command-line arguments.

use std::fmt;
use std::str::FromStr;

use crate::error::{BenchError, BenchResult};

/// A benchmark variant, selecting the argument list handed to the
/// benchmark application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkVariant {
    /// Run every filter at its normal speed
    Plain,
    /// Collapse the pipeline into a single task
    OneTask,
    /// Disable the scale/sharpen filters on alternating frames
    NoFilters,
    /// Slow down the scale/sharpen filters on alternating frames
    SlowFilters,
    /// Single task with the slowed-down filters
    OneSlow,
}

impl BenchmarkVariant {
    /// Every variant, in the order the diagnostics list them
    pub const ALL: [BenchmarkVariant; 5] = [
        BenchmarkVariant::Plain,
        BenchmarkVariant::OneTask,
        BenchmarkVariant::NoFilters,
        BenchmarkVariant::SlowFilters,
        BenchmarkVariant::OneSlow,
    ];

    /// The subset allowed in termination experiments
    pub const TERMINATION: [BenchmarkVariant; 2] =
        [BenchmarkVariant::Plain, BenchmarkVariant::SlowFilters];

    /// Command-line arguments for the benchmark application. The total job
    /// count is always the last argument.
    pub fn arguments(&self, jobs: u64) -> Vec<String> {
        let mut args: Vec<String> = match self {
            BenchmarkVariant::Plain => vec![],
            BenchmarkVariant::OneTask => vec!["-onetask".into()],
            BenchmarkVariant::NoFilters => vec!["-oddnoscale".into(), "-evennosharpen".into()],
            BenchmarkVariant::SlowFilters => {
                vec!["-oddslowscale".into(), "-evenslowsharpen".into()]
            }
            BenchmarkVariant::OneSlow => vec![
                "-onetask".into(),
                "-oddslowscale".into(),
                "-evenslowsharpen".into(),
            ],
        };
        args.push(jobs.to_string());
        args
    }

    /// Comma-joined variant names, for "I only know [...]" diagnostics
    pub fn known_list(variants: &[BenchmarkVariant]) -> String {
        variants
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for BenchmarkVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BenchmarkVariant::Plain => "plain",
            BenchmarkVariant::OneTask => "onetask",
            BenchmarkVariant::NoFilters => "no",
            BenchmarkVariant::SlowFilters => "slow",
            BenchmarkVariant::OneSlow => "oneslow",
        };
        f.write_str(name)
    }
}

impl FromStr for BenchmarkVariant {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(BenchmarkVariant::Plain),
            "onetask" => Ok(BenchmarkVariant::OneTask),
            "no" => Ok(BenchmarkVariant::NoFilters),
            "slow" => Ok(BenchmarkVariant::SlowFilters),
            "oneslow" => Ok(BenchmarkVariant::OneSlow),
            other => Err(BenchError::UnknownVariant {
                kind: other.to_string(),
                known: BenchmarkVariant::known_list(&BenchmarkVariant::ALL),
            }),
        }
    }
}

/// A parsed `<variant>-<nodes>-<jobsPerProcessor>` specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSpec {
    /// The specification string as given on the command line
    pub raw: String,
    pub variant: BenchmarkVariant,
    pub processors: u64,
    pub jobs_per_processor: u64,
}

impl BenchmarkSpec {
    /// Parse a `<variant>-<nodes>-<jobsPerProcessor>` string.
    ///
    /// Trailing fields beyond the third are ignored, matching the harness
    /// convention of suffixing run numbers to the tag.
    pub fn parse(raw: &str) -> BenchResult<Self> {
        let elements: Vec<&str> = raw.split('-').collect();
        if elements.len() < 3 {
            return Err(BenchError::MalformedSpec {
                spec: raw.to_string(),
                reason: "expected <variant>-<nodes>-<jobsPerProcessor>".to_string(),
            });
        }

        let variant: BenchmarkVariant = elements[0].parse()?;

        let processors: u64 = elements[1].parse().map_err(|_| BenchError::MalformedSpec {
            spec: raw.to_string(),
            reason: format!("'{}' is not a node count", elements[1]),
        })?;
        if processors < 1 {
            return Err(BenchError::IllegalNodeCount {
                count: processors,
                spec: raw.to_string(),
            });
        }

        let jobs_per_processor: u64 =
            elements[2].parse().map_err(|_| BenchError::MalformedSpec {
                spec: raw.to_string(),
                reason: format!("'{}' is not a job count", elements[2]),
            })?;
        if jobs_per_processor < 2 {
            return Err(BenchError::IllegalJobCount {
                jobs: jobs_per_processor,
                spec: raw.to_string(),
            });
        }

        if processors.checked_mul(jobs_per_processor).is_none() {
            return Err(BenchError::MalformedSpec {
                spec: raw.to_string(),
                reason: "total job count overflows".to_string(),
            });
        }

        Ok(BenchmarkSpec {
            raw: raw.to_string(),
            variant,
            processors,
            jobs_per_processor,
        })
    }

    /// Total job count across all processors
    pub fn total_jobs(&self) -> u64 {
        self.processors * self.jobs_per_processor
    }
}

/// A parsed `<name>-<variant>-<fraction>` termination specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationSpec {
    /// The specification string as given on the command line
    pub raw: String,
    pub variant: BenchmarkVariant,
    /// Kill fraction, kept verbatim: it is pasted into the generated
    /// system-properties line, not interpreted numerically here.
    pub kill_fraction: String,
}

impl TerminationSpec {
    pub fn parse(raw: &str) -> BenchResult<Self> {
        let elements: Vec<&str> = raw.split('-').collect();
        if elements.len() < 3 {
            return Err(BenchError::MalformedSpec {
                spec: raw.to_string(),
                reason: "expected <name>-<variant>-<fraction>".to_string(),
            });
        }

        let variant = elements[1]
            .parse::<BenchmarkVariant>()
            .ok()
            .filter(|v| BenchmarkVariant::TERMINATION.contains(v))
            .ok_or_else(|| BenchError::UnknownVariant {
                kind: elements[1].to_string(),
                known: BenchmarkVariant::known_list(&BenchmarkVariant::TERMINATION),
            })?;

        Ok(TerminationSpec {
            raw: raw.to_string(),
            variant,
            kill_fraction: elements[2].to_string(),
        })
    }

    /// Experiment key prefix: the spec with dots flattened so the fraction
    /// survives the properties-file key syntax.
    pub fn label(&self) -> String {
        self.raw.replace('.', "-")
    }
}

/// Extract the kill fraction from a measurement tag: the second
/// hyphen-delimited field, e.g. `term-0.2` yields `0.2`.
///
/// Returns both the verbatim field (for labelling output rows) and its
/// numeric value.
pub fn kill_fraction(tag: &str) -> BenchResult<(String, f64)> {
    let field = tag.split('-').nth(1).ok_or_else(|| BenchError::MalformedSpec {
        spec: tag.to_string(),
        reason: "expected a '-<fraction>' field".to_string(),
    })?;
    let value: f64 = field.parse().map_err(|_| BenchError::MalformedSpec {
        spec: tag.to_string(),
        reason: format!("'{field}' is not a number"),
    })?;
    Ok((field.to_string(), value))
}
