//! Command line arguments for pareto-check.
//!
//! `check` is the default command: options of `check` are also accepted
//! without naming it (`pareto-check --log-dir logs`).

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI integration
    Junit,
}

/// Parsed command line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pareto-check",
    version,
    about = "Pareto front consistency checks for multi-objective segmentation logs",
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the default `check` command
    #[command(flatten)]
    pub check: CheckArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t, global = true, env = "PARETO_CHECK_FORMAT")]
    pub format: OutputFormat,

    /// Only output failures and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Include detailed diagnostic information and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Load configuration from a JSON file
    #[arg(long, global = true, value_name = "FILE", env = "PARETO_CHECK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Command to execute
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Check every log against recomputed Pareto fronts (default)
    Check(CheckArgs),
    /// List all available checks
    List,
    /// Print per-front statistics of each log
    Stats(StatsArgs),
    /// Copy segmentation images into the evaluator layout and run it
    Stage(StageArgs),
    /// Print version information
    Version,
}

/// Options of the `check` command
#[derive(Debug, Clone, Default, PartialEq, ClapArgs)]
pub struct CheckArgs {
    /// Directory holding the fitness logs [default: ./logs]
    #[arg(long, value_name = "DIR", env = "PARETO_CHECK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Extension of log files [default: txt]
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Run only specific check by ID (repeatable)
    #[arg(long, value_name = "ID")]
    pub only: Vec<String>,

    /// Skip specific check by ID (repeatable)
    #[arg(long, value_name = "ID")]
    pub skip: Vec<String>,

    /// Stop after the first log with a failure
    #[arg(long, overrides_with = "no_fail_fast")]
    pub fail_fast: bool,

    /// Check every log even if the config file sets fail_fast
    #[arg(long, overrides_with = "fail_fast")]
    pub no_fail_fast: bool,

    /// Compare against a report saved with --save-report
    #[arg(long, value_name = "FILE")]
    pub baseline: Option<PathBuf>,

    /// Write the report as JSON
    #[arg(long, value_name = "FILE")]
    pub save_report: Option<PathBuf>,
}

/// Options of the `stats` command
#[derive(Debug, Clone, Default, PartialEq, ClapArgs)]
pub struct StatsArgs {
    /// Directory holding the fitness logs [default: ./logs]
    #[arg(long, value_name = "DIR", env = "PARETO_CHECK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Extension of log files [default: txt]
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Only the log with this label (`run_7.txt` has label `7`)
    #[arg(long, value_name = "LABEL")]
    pub index: Option<String>,
}

/// Options of the `stage` command
#[derive(Debug, Clone, Default, PartialEq, ClapArgs)]
pub struct StageArgs {
    /// Name of the problem instance folder
    pub problem_instance: String,

    /// Root of the training images [default: ./Project 3 training_images]
    #[arg(long, value_name = "DIR")]
    pub training_root: Option<PathBuf>,

    /// Root of the segmentation results [default: ./logs/result_segmentation]
    #[arg(long, value_name = "DIR")]
    pub results_root: Option<PathBuf>,

    /// Evaluator directory [default: ./evaluator]
    #[arg(long, value_name = "DIR")]
    pub evaluator_dir: Option<PathBuf>,

    /// Name prefix of ground-truth files [default: GT]
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Stage files without running the evaluator
    #[arg(long)]
    pub no_evaluate: bool,
}

impl Args {
    /// The command to run, `check` when none was named
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Check(self.check.clone()))
    }
}
