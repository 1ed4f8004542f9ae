//! pareto-check library
//!
//! Consistency checks for the Pareto fronts logged by a multi-objective
//! segmentation run.
//!
//! A log file holds one line per claimed front; each individual on a line is
//! an `(edge_value, connectivity, overall_deviation)` fitness tuple. Edge
//! value is maximized, the other two are minimized. This library:
//! - Parses log directories into fitness logs
//! - Recomputes Pareto efficiency and a full non-dominated sort per log
//! - Reports every individual whose claimed front disagrees
//! - Summarizes fronts per log and stages evaluator inputs
//!
//! # Example
//!
//! ```no_run
//! use pareto_check::{run_checks, CheckConfig};
//!
//! let config = CheckConfig::default();
//! let report = run_checks(&config).expect("check run failed");
//! println!("Logs flagged: {}", report.summary().flagged_files);
//! ```

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod engine;
pub mod logging;
pub mod pareto;
pub mod platform;
pub mod version;

use cli::args::CheckArgs;
use config::FileConfig;
use data::log::read_log_dir;
use engine::orchestrator::{create_all_checks, CheckOrchestrator, OrchestratorConfig};
use engine::result::ValidationReport;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

// Re-exports for public API
pub use engine::orchestrator::CheckOrchestrator as Orchestrator;
pub use engine::result::{FileReport, ResultSummary, ValidationReport as Report};

/// Check result indicating the outcome of one validator on one log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckResult {
    /// Log is consistent
    Pass {
        message: String,
        duration_ms: u64,
    },
    /// Log is consistent but has something worth a look
    Warn {
        message: String,
        details: String,
        duration_ms: u64,
    },
    /// Claimed fronts disagree with the recomputed ones
    Fail {
        message: String,
        details: String,
        duration_ms: u64,
    },
    /// Check does not apply to this log
    Skip {
        reason: String,
    },
}

impl CheckResult {
    /// Lowercase status name
    pub fn status(&self) -> &'static str {
        match self {
            CheckResult::Pass { .. } => "pass",
            CheckResult::Warn { .. } => "warn",
            CheckResult::Fail { .. } => "fail",
            CheckResult::Skip { .. } => "skip",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CheckResult::Fail { .. })
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            CheckResult::Pass { duration_ms, .. }
            | CheckResult::Warn { duration_ms, .. }
            | CheckResult::Fail { duration_ms, .. } => *duration_ms,
            CheckResult::Skip { .. } => 0,
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { message, .. } => write!(f, "PASS: {}", message),
            CheckResult::Warn { message, details, .. } => {
                write!(f, "WARN: {} ({})", message, details)
            }
            CheckResult::Fail { message, .. } => write!(f, "FAIL: {}", message),
            CheckResult::Skip { reason } => write!(f, "SKIP: {}", reason),
        }
    }
}

/// Check category for grouping related checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    /// Shape of the log itself (empty fronts, duplicates)
    Structure,
    /// Brute-force efficiency cross-check of front 0
    Efficiency,
    /// Full non-dominated sort of every front
    Sort,
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::Structure => write!(f, "Structure"),
            CheckCategory::Efficiency => write!(f, "Efficiency"),
            CheckCategory::Sort => write!(f, "Sort"),
        }
    }
}

/// A validation check with its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Unique identifier (e.g., "NDS-001")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Check category
    pub category: CheckCategory,
    /// Description of what this check validates
    pub description: String,
    /// Result of the check (None if not yet executed)
    pub result: Option<CheckResult>,
}

/// Error types for pareto-check operations.
#[derive(Debug, Error)]
pub enum ParetoCheckError {
    /// Filesystem error
    #[error("I/O error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    /// Malformed log content
    #[error("Parse error in {file} line {line}: {message} (segment '{segment}')")]
    Parse {
        file: String,
        line: usize,
        segment: String,
        message: String,
    },
    /// Invalid configuration or arguments
    #[error("Configuration error: {0}")]
    Config(String),
    /// External command could not run or failed
    #[error("Command '{command}' error: {message}")]
    Command {
        command: String,
        message: String,
    },
}

impl ParetoCheckError {
    pub(crate) fn io(context: impl fmt::Display, source: std::io::Error) -> Self {
        ParetoCheckError::Io {
            context: context.to_string(),
            source,
        }
    }
}

/// Configuration for a check run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Directory scanned for logs
    pub log_dir: PathBuf,
    /// Log file extension
    pub extension: String,
    /// Specific checks to skip (by ID)
    pub skip_checks: Vec<String>,
    /// Specific checks to run (by ID)
    pub only_checks: Vec<String>,
    /// Stop after the first log with a failure
    pub fail_fast: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            log_dir: PathBuf::from(config::DEFAULT_LOG_DIR),
            extension: config::DEFAULT_EXTENSION.to_string(),
            skip_checks: Vec::new(),
            only_checks: Vec::new(),
            fail_fast: false,
        }
    }
}

impl CheckConfig {
    /// Merge command line arguments over the config file.
    ///
    /// Repeatable `--only`/`--skip` replace the file lists when given.
    pub fn from_args(args: &CheckArgs, file: &FileConfig) -> Self {
        let defaults = CheckConfig::default();

        let pick_list = |cli: &Vec<String>, file: &Option<Vec<String>>| {
            if !cli.is_empty() {
                cli.clone()
            } else {
                file.clone().unwrap_or_default()
            }
        };

        CheckConfig {
            log_dir: args
                .log_dir
                .clone()
                .or_else(|| file.log_dir.clone())
                .unwrap_or(defaults.log_dir),
            extension: args
                .extension
                .clone()
                .or_else(|| file.extension.clone())
                .unwrap_or(defaults.extension),
            skip_checks: pick_list(&args.skip, &file.skip),
            only_checks: pick_list(&args.only, &file.only),
            fail_fast: match (args.fail_fast, args.no_fail_fast) {
                (true, _) => true,
                (_, true) => false,
                _ => file.fail_fast.unwrap_or(defaults.fail_fast),
            },
        }
    }
}

/// Run every selected check over every log in the configured directory.
///
/// Parse and filesystem errors abort the run. Logs are processed in path
/// order, one at a time.
///
/// # Example
///
/// ```no_run
/// use pareto_check::{run_checks, CheckConfig};
///
/// let config = CheckConfig {
///     only_checks: vec!["NDS-001".to_string()],
///     ..Default::default()
/// };
///
/// match run_checks(&config) {
///     Ok(report) => println!("Failed: {}", report.summary().failed),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_checks(config: &CheckConfig) -> Result<ValidationReport, ParetoCheckError> {
    let logs = read_log_dir(&config.log_dir, &config.extension)?;
    info!(
        log_dir = %config.log_dir.display(),
        logs = logs.len(),
        "loaded fitness logs"
    );

    let mut orchestrator = CheckOrchestrator::new(OrchestratorConfig {
        fail_fast: config.fail_fast,
    });
    orchestrator.register_checks(create_all_checks());

    let mut report = if !config.only_checks.is_empty() {
        orchestrator.run_specific(&logs, &config.only_checks)
    } else if !config.skip_checks.is_empty() {
        orchestrator.run_excluding(&logs, &config.skip_checks)
    } else {
        orchestrator.run_all(&logs)
    };
    report.log_dir = config.log_dir.display().to_string();

    Ok(report)
}
