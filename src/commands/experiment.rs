//! Experiment file generation handlers
//!
//! Thin wrappers around the `Experiment` constructors: parse the
//! specification, build the block, then either print it (single
//! experiments, which the harness redirects) or write one file per scaling
//! point (`plain-curve`).

use std::fs;

use anyhow::Result;

use mbench::experiment::CURVE_POINTS;
use mbench::{BenchConfig, BenchmarkSpec, Experiment, TerminationSpec};

pub fn cmd_build_experiment(spec: &str, config: &BenchConfig, json: bool) -> Result<()> {
    let spec = BenchmarkSpec::parse(spec)?;
    emit(&Experiment::standard(&spec, config), json)
}

pub fn cmd_build_termination_experiment(
    spec: &str,
    config: &BenchConfig,
    json: bool,
) -> Result<()> {
    let spec = TerminationSpec::parse(spec)?;
    emit(&Experiment::termination(&spec, config)?, json)
}

pub fn cmd_build_plain_one_experiment(nodes: u64, config: &BenchConfig, json: bool) -> Result<()> {
    emit(&Experiment::plain_one(nodes, config)?, json)
}

pub fn cmd_plain_curve(config: &BenchConfig, json: bool) -> Result<()> {
    for p in CURVE_POINTS {
        let filename = format!("plain-run{p}.experiment");
        let experiment = Experiment::curve_point(p, config);
        fs::write(&filename, experiment.render())?;

        if json {
            println!(
                "{}",
                serde_json::json!({"event": "experiment-file", "path": filename})
            );
        } else {
            println!("fnm={filename}");
        }
    }
    Ok(())
}

fn emit(experiment: &Experiment, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "experiment",
                "prefix": experiment.prefix,
                "content": experiment.render(),
            })
        );
    } else {
        print!("{}", experiment.render());
    }
    Ok(())
}
