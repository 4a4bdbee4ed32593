//! Command handlers
//!
//! One module per functional cluster: duration averaging, count extraction,
//! experiment generation, runtime estimation and result arithmetic. Each
//! handler does the work and owns its own output formatting.

use anyhow::Result;

use mbench::BenchConfig;

use crate::cli::{Cli, Commands};

mod average;
mod counts;
mod experiment;
mod results;
mod runtime;

/// Dispatch the parsed command line to its handler.
pub fn run(cli: Cli, config: &BenchConfig) -> Result<()> {
    let json = cli.json;
    let verbose = cli.verbose;

    match cli.command {
        Commands::AverageDuration { tag, files } => {
            average::cmd_average_duration(&tag, &files, json, verbose)
        }
        Commands::TerminationDuration { tag, output, files } => {
            average::cmd_termination_duration(&tag, &output, &files, config, json, verbose)
        }
        Commands::BuildExperiment { spec } => {
            experiment::cmd_build_experiment(&spec, config, json)
        }
        Commands::BuildTerminationExperiment { spec } => {
            experiment::cmd_build_termination_experiment(&spec, config, json)
        }
        Commands::BuildPlainOneExperiment { nodes } => {
            experiment::cmd_build_plain_one_experiment(nodes, config, json)
        }
        Commands::PlainCurve => experiment::cmd_plain_curve(config, json),
        Commands::ComputeRuntime { spec } => runtime::cmd_compute_runtime(&spec, json),
        Commands::ComputeTerminationRuntime { spec } => {
            runtime::cmd_compute_termination_runtime(&spec, config, json)
        }
        Commands::ExtractJobCounts { tag, output, files }
        | Commands::ExtractTaskCounts { tag, output, files } => {
            counts::cmd_extract_counts(&tag, &output, &files, json, verbose)
        }
        Commands::SubtractResults {
            label,
            time,
            label_full,
            time_full,
        } => results::cmd_subtract_results(&label, time, &label_full, time_full, json),
        Commands::IdealTerminationTable {
            tag,
            base,
            output,
            fractions,
        } => results::cmd_ideal_termination_table(&tag, base, &output, &fractions, json),
    }
}
