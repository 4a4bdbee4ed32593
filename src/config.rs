//! Configuration module for mbench
//!
//! Site-specific defaults (cluster name, application class names, canonical
//! job counts) live in an optional `mbench.toml` next to the logs. Every
//! field has a built-in default so a missing file behaves like the stock
//! deployment.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BenchResult;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "mbench.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BenchConfig {
    #[serde(default)]
    pub cluster: ClusterConfig,

    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub jobs: JobsConfig,

    #[serde(default)]
    pub termination: TerminationConfig,
}

/// Cluster section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    #[serde(default = "default_cluster_name")]
    pub name: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            name: default_cluster_name(),
        }
    }
}

fn default_cluster_name() -> String {
    "VU".to_string()
}

/// Application class names launched by the generated experiments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Full benchmark program (the video pipeline)
    #[serde(default = "default_benchmark_application")]
    pub benchmark: String,

    /// Lightweight test program used by the scaling curve
    #[serde(default = "default_test_application")]
    pub test: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            benchmark: default_benchmark_application(),
            test: default_test_application(),
        }
    }
}

fn default_benchmark_application() -> String {
    "VideoPlayerBenchmarkProgram".to_string()
}

fn default_test_application() -> String {
    "TestProg".to_string()
}

/// Canonical job counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobsConfig {
    /// Jobs per processor in a standard run
    #[serde(default = "default_jobs_per_processor")]
    pub per_processor: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            per_processor: default_jobs_per_processor(),
        }
    }
}

fn default_jobs_per_processor() -> u64 {
    2000
}

/// Fault-tolerance (termination) experiment parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationConfig {
    /// A termination experiment always runs on this many processors
    #[serde(default = "default_termination_processors")]
    pub processors: u64,

    /// Frame count a termination run processes per processor; divides the
    /// measured duration into a per-frame time
    #[serde(default = "default_jobs_per_processor")]
    pub jobs_per_processor: u64,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self {
            processors: default_termination_processors(),
            jobs_per_processor: default_jobs_per_processor(),
        }
    }
}

fn default_termination_processors() -> u64 {
    50
}

impl BenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> BenchResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from an explicit path, or from `mbench.toml` in
    /// the working directory when present. A missing implicit file yields
    /// the defaults; an unreadable explicit file is an error.
    pub fn load_or_default(path: Option<&Path>) -> BenchResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let implicit = Path::new(CONFIG_FILE);
                if implicit.exists() {
                    Self::load(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
