//! mbench - Maestro benchmark post-processing toolkit
//!
//! mbench digests the log files written by Maestro benchmark runs and
//! generates the experiment files that drive future runs. Every operation is
//! single-shot: read a handful of small text files, reduce them to a few
//! numbers, print or write the result.

pub mod config;
pub mod error;
pub mod experiment;
pub mod logs;
pub mod spec;
pub mod stats;

// Re-exports for convenience
pub use config::BenchConfig;
pub use error::{BenchError, BenchResult};
pub use experiment::Experiment;
pub use logs::{last_duration, worker_counts, DURATION_MARKER, WORKER_MARKER, WORKER_SLOTS};
pub use spec::{kill_fraction, BenchmarkSpec, BenchmarkVariant, TerminationSpec};
