//! mbench CLI - Maestro benchmark post-processing toolkit
//!
//! Usage: mbench <COMMAND>
//!
//! One subcommand per post-processing step: duration averaging, worker count
//! extraction, experiment file generation, runtime estimation and result
//! arithmetic. Invoked once per shot by the measurement harness.

use std::process;

use clap::Parser;

use mbench::BenchConfig;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    // The harness reads usage messages and diagnostics from stdout.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            print!("{}", err.render());
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let config = match BenchConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = commands::run(cli, &config) {
        println!("{err:#}");
        process::exit(1);
    }
}
