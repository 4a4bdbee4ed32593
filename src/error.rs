//! Error types for mbench
//!
//! Uses `thiserror` for library errors. Every failure is fatal to the
//! single-shot process; the binary prints the diagnostic and exits 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mbench operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Main error type for mbench operations
#[derive(Error, Debug)]
pub enum BenchError {
    /// A log file contained no DURATION marker line
    #[error("no DURATION found in file \"{file}\"")]
    DurationNotFound { file: PathBuf },

    /// None of the input files contained a DURATION marker line
    #[error("none of the files [{files}] contains the string 'DURATION'")]
    NoDurationsAnywhere { files: String },

    /// A DURATION line carried a non-integer payload
    #[error("bad duration in {file}: '{payload}' is not an integer")]
    BadDuration { file: PathBuf, payload: String },

    /// A worker report header or count line could not be parsed
    #[error("bad worker report in {file}:{line}: {reason}")]
    BadWorkerReport {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// Specification string does not have the expected shape
    #[error("malformed specification '{spec}': {reason}")]
    MalformedSpec { spec: String, reason: String },

    /// Node count outside the legal range
    #[error("illegal node count {count} (from '{spec}')")]
    IllegalNodeCount { count: u64, spec: String },

    /// Jobs-per-processor outside the legal range
    #[error("illegal number of jobs per processor {jobs} (from '{spec}')")]
    IllegalJobCount { jobs: u64, spec: String },

    /// Kill fraction outside [0, 1)
    #[error("illegal kill fraction {fraction} (from '{spec}')")]
    IllegalKillFraction { fraction: f64, spec: String },

    /// Benchmark variant not in the canned translation table
    #[error("unknown benchmark type '{kind}'; I only know [{known}]")]
    UnknownVariant { kind: String, known: String },

    /// The two result labels handed to subtract-results differ
    #[error("different labels '{left}' and '{right}'")]
    LabelMismatch { left: String, right: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parsing error
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
