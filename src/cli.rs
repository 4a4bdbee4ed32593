use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mbench - Maestro benchmark post-processing toolkit
#[derive(Parser, Debug)]
#[command(name = "mbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit results as single-line JSON objects
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the defaults file (default: mbench.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Average the DURATION measurements of a set of run logs
    AverageDuration {
        /// Measurement tag; the first '-'-field becomes the output label
        tag: String,

        /// Run logs to average over
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Average the DURATION measurements of a termination run and write a
    /// table row to a file
    TerminationDuration {
        /// Measurement tag; the second '-'-field is the kill fraction
        tag: String,

        /// File the table row is written to
        output: PathBuf,

        /// Run logs to average over (logs without a DURATION are skipped)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Generate an experiment file for a standard benchmark run
    BuildExperiment {
        /// Specification of the form <variant>-<nodes>-<jobsPerProcessor>
        spec: String,
    },

    /// Generate an experiment file for a fault-tolerance run
    BuildTerminationExperiment {
        /// Specification of the form <name>-<variant>-<fraction>
        spec: String,
    },

    /// Generate a single-task experiment file for a plain run
    BuildPlainOneExperiment {
        /// Number of nodes
        nodes: u64,
    },

    /// Write the experiment files for the plain scaling curve
    PlainCurve,

    /// Estimate the reservation runtime of a standard run
    ComputeRuntime {
        /// Specification of the form <variant>-<nodes>-<jobsPerProcessor>
        spec: String,
    },

    /// Estimate the reservation runtime of a termination run
    ComputeTerminationRuntime {
        /// Specification whose second '-'-field is the kill fraction
        spec: String,
    },

    /// Extract per-worker job counts from run logs into a sorted table
    ExtractJobCounts {
        /// Measurement tag (accepted for harness compatibility)
        tag: String,

        /// File the table is written to
        output: PathBuf,

        /// Run logs to extract from
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Extract per-worker task counts from run logs into a sorted table
    ExtractTaskCounts {
        /// Measurement tag (accepted for harness compatibility)
        tag: String,

        /// File the table is written to
        output: PathBuf,

        /// Run logs to extract from
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Subtract a warm-up measurement from a full measurement
    SubtractResults {
        /// Label of the warm-up measurement
        label: String,

        /// Warm-up time, subtracted from the full time
        time: f64,

        /// Label of the full measurement; must equal the first label
        label_full: String,

        /// Full time
        time_full: f64,
    },

    /// Tabulate ideal termination runtimes for a set of kill fractions
    IdealTerminationTable {
        /// Measurement tag (accepted for harness compatibility)
        tag: String,

        /// Baseline runtime without failures, in seconds
        base: f64,

        /// File the table is written to
        output: PathBuf,

        /// Kill fractions, each in [0, 1)
        #[arg(required = true)]
        fractions: Vec<String>,
    },
}
