//! Experiment file rendering
//!
//! Maestro consumes `.properties`-style "experiment" files: a comment header
//! followed by `key = value` lines, every key prefixed with the run label.
//! All generator commands reduce to filling in an [`Experiment`] and calling
//! [`Experiment::render`].

use std::fmt::Write as _;

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::spec::{BenchmarkSpec, TerminationSpec};

/// First line of every generated experiment file
pub const HEADER: &str = "# Generated experiment file";

/// Jobs per processor in a single-task plain run
pub const PLAIN_ONE_JOBS_PER_PROCESSOR: u64 = 1000;

/// Node counts of the plain scaling curve
pub const CURVE_POINTS: [u64; 5] = [1, 2, 4, 8, 16];

/// One Maestro experiment block.
///
/// Optional aspects render nothing when absent; the key order is fixed and
/// matches what the deployment harness expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    /// Key prefix, e.g. `run4` or a flattened termination label
    pub prefix: String,
    /// Application class name launched on every node
    pub application: String,
    pub process_count: u64,
    pub cluster: String,
    pub pool: String,
    pub input_files: Option<String>,
    pub output_files: Option<String>,
    /// When set, the output list is emitted under the shared `default.`
    /// prefix instead of the run prefix (used by the scaling-curve runs,
    /// which all read the same key).
    pub shared_output_files: bool,
    pub arguments: Option<String>,
    pub system_properties: Option<String>,
}

impl Experiment {
    /// Experiment block for a standard benchmark run.
    pub fn standard(spec: &BenchmarkSpec, config: &BenchConfig) -> Experiment {
        let arguments = spec.variant.arguments(spec.total_jobs()).join(",");
        Experiment {
            prefix: format!("run{}", spec.processors),
            application: config.application.benchmark.clone(),
            process_count: spec.processors,
            cluster: config.cluster.name.clone(),
            pool: format!("{}-pool", spec.raw),
            input_files: Some(format!("settag-{}.sh", spec.raw)),
            output_files: Some(format!("{}.logs", spec.raw)),
            arguments: Some(arguments),
            ..Experiment::default()
        }
    }

    /// Experiment block for a fault-tolerance run. The node count comes from
    /// configuration; the kill fraction only parameterizes the terminator's
    /// node quotum.
    pub fn termination(spec: &TerminationSpec, config: &BenchConfig) -> BenchResult<Experiment> {
        let processors = config.termination.processors;
        let jobs = processors
            .checked_mul(config.jobs.per_processor)
            .ok_or_else(|| BenchError::MalformedSpec {
                spec: spec.raw.clone(),
                reason: "total job count overflows".to_string(),
            })?;
        let arguments = spec.variant.arguments(jobs).join(",");

        let properties = format!(
            "ibis.maestro.terminatorStartQuotum=0,\
             ibis.maestro.terminatorInitialSleepTime=1000,\
             ibis.maestro.terminatorSleepTime=100,\
             ibis.maestro.terminatorNodeQuotum={}",
            spec.kill_fraction
        );

        Ok(Experiment {
            prefix: spec.label(),
            application: config.application.benchmark.clone(),
            process_count: processors,
            cluster: config.cluster.name.clone(),
            pool: format!("{}-pool", spec.raw),
            input_files: Some(format!("settag-{}.sh", spec.raw)),
            output_files: Some(format!("{}.logs", spec.raw)),
            arguments: Some(arguments),
            system_properties: Some(properties),
            ..Experiment::default()
        })
    }

    /// Experiment block for a single-task plain run on `nodes` nodes.
    pub fn plain_one(nodes: u64, config: &BenchConfig) -> BenchResult<Experiment> {
        if nodes < 1 {
            return Err(BenchError::IllegalNodeCount {
                count: nodes,
                spec: nodes.to_string(),
            });
        }

        let jobs = nodes
            .checked_mul(PLAIN_ONE_JOBS_PER_PROCESSOR)
            .ok_or_else(|| BenchError::MalformedSpec {
                spec: nodes.to_string(),
                reason: "total job count overflows".to_string(),
            })?;
        let outputs = (0..nodes)
            .map(|n| format!("plain-run{nodes}-out.{n}"))
            .collect::<Vec<_>>()
            .join(",");
        let arguments = format!("-onetask,{jobs}");

        Ok(Experiment {
            prefix: format!("run{nodes}"),
            application: config.application.benchmark.clone(),
            process_count: nodes,
            cluster: config.cluster.name.clone(),
            pool: format!("plain-one-run{nodes}"),
            output_files: Some(outputs),
            arguments: Some(arguments),
            ..Experiment::default()
        })
    }

    /// Experiment block for one point of the plain scaling curve. The curve
    /// runs the lightweight test program and shares one output list.
    pub fn curve_point(p: u64, config: &BenchConfig) -> Experiment {
        let outputs = (0..p)
            .map(|n| format!("run{p}-out{n}"))
            .collect::<Vec<_>>()
            .join(",");

        Experiment {
            prefix: format!("run{p}"),
            application: config.application.test.clone(),
            process_count: p,
            cluster: config.cluster.name.clone(),
            pool: format!("plain-run-{p}"),
            output_files: Some(outputs),
            shared_output_files: true,
            ..Experiment::default()
        }
    }

    /// Render the experiment block, trailing newline included.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let p = &self.prefix;

        // writeln! to a String cannot fail
        let _ = writeln!(out, "{HEADER}");
        let _ = writeln!(out, "{p}.application.name = {}", self.application);
        let _ = writeln!(out, "{p}.process.count = {}", self.process_count);
        let _ = writeln!(out, "{p}.cluster.name = {}", self.cluster);
        let _ = writeln!(out, "{p}.pool.name = {}", self.pool);
        if let Some(files) = &self.input_files {
            let _ = writeln!(out, "{p}.application.input.files = {files}");
        }
        if let Some(files) = &self.output_files {
            if self.shared_output_files {
                let _ = writeln!(out, "default.output.files = {files}");
            } else {
                let _ = writeln!(out, "{p}.application.output.files = {files}");
            }
        }
        if let Some(arguments) = &self.arguments {
            let _ = writeln!(out, "{p}.application.arguments = {arguments}");
        }
        if let Some(props) = &self.system_properties {
            let _ = writeln!(out, "{p}.application.system.properties = {props}");
        }
        let _ = writeln!(out, "{p}.resource.count = {}", self.process_count);
        out
    }
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            application: String::new(),
            process_count: 1,
            cluster: String::new(),
            pool: String::new(),
            input_files: None,
            output_files: None,
            shared_output_files: false,
            arguments: None,
            system_properties: None,
        }
    }
}
