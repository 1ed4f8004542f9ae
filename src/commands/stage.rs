//! Evaluator staging command
//!
//! Copies the ground-truth images of a problem instance and the matching
//! segmentation results into the evaluator's folders, then runs the
//! evaluator.

use crate::cli::args::StageArgs;
use crate::config::{
    StageFileConfig, DEFAULT_EVALUATOR_DIR, DEFAULT_EVALUATOR_PROGRAM, DEFAULT_EVALUATOR_SCRIPT,
    DEFAULT_GROUND_TRUTH_PREFIX, DEFAULT_RESULTS_ROOT, DEFAULT_TRAINING_ROOT,
};
use crate::platform::fs::{clear_directory, copy_into, list_files};
use crate::ParetoCheckError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

/// Resolved stage settings
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    pub problem_instance: String,
    pub training_root: PathBuf,
    pub results_root: PathBuf,
    pub evaluator_dir: PathBuf,
    pub ground_truth_prefix: String,
    /// Program followed by its arguments; `None` skips evaluation
    pub evaluator_command: Option<Vec<String>>,
}

impl StageConfig {
    /// Merge command line arguments over the `stage` config section
    pub fn from_args(args: &StageArgs, file: Option<&StageFileConfig>) -> Self {
        let file = file.cloned().unwrap_or_default();

        let evaluator_dir = args
            .evaluator_dir
            .clone()
            .or(file.evaluator_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EVALUATOR_DIR));

        // The default script lives in whichever evaluator directory was chosen
        let evaluator_command = if args.no_evaluate {
            None
        } else {
            Some(file.evaluator_command.unwrap_or_else(|| {
                vec![
                    DEFAULT_EVALUATOR_PROGRAM.to_string(),
                    evaluator_dir.join(DEFAULT_EVALUATOR_SCRIPT).display().to_string(),
                ]
            }))
        };

        StageConfig {
            problem_instance: args.problem_instance.clone(),
            training_root: args
                .training_root
                .clone()
                .or(file.training_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TRAINING_ROOT)),
            results_root: args
                .results_root
                .clone()
                .or(file.results_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_ROOT)),
            evaluator_dir,
            ground_truth_prefix: args
                .prefix
                .clone()
                .or(file.ground_truth_prefix)
                .unwrap_or_else(|| DEFAULT_GROUND_TRUTH_PREFIX.to_string()),
            evaluator_command,
        }
    }

    pub fn optimal_dir(&self) -> PathBuf {
        self.evaluator_dir.join("optimal_segments")
    }

    pub fn student_dir(&self) -> PathBuf {
        self.evaluator_dir.join("student_segments")
    }
}

/// What a stage run did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageSummary {
    pub cleared_optimal: usize,
    pub cleared_student: usize,
    pub copied_ground_truth: usize,
    pub copied_results: usize,
    pub evaluated: bool,
}

/// Run the stage command
pub fn run(config: &StageConfig) -> Result<String, ParetoCheckError> {
    let summary = stage_instance(config)?;

    if let Some(command) = &config.evaluator_command {
        run_evaluator(command)?;
    }

    Ok(format_summary(
        config,
        &StageSummary {
            evaluated: config.evaluator_command.is_some(),
            ..summary
        },
    ))
}

/// Clear both evaluator folders and copy the instance's files into them.
///
/// Only regular files are copied. Ground-truth files must start with the
/// configured prefix; result files are copied unfiltered.
pub fn stage_instance(config: &StageConfig) -> Result<StageSummary, ParetoCheckError> {
    let training = config.training_root.join(&config.problem_instance);
    let results = config.results_root.join(&config.problem_instance);

    // Resolve sources before touching the destinations.
    let ground_truth: Vec<PathBuf> = source_files(&training)?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .map(|n| n.to_string_lossy().starts_with(&config.ground_truth_prefix))
                .unwrap_or(false)
        })
        .collect();
    let result_files = source_files(&results)?;

    let optimal = config.optimal_dir();
    let student = config.student_dir();
    let mut summary = StageSummary {
        cleared_optimal: clear_directory(&optimal)?,
        cleared_student: clear_directory(&student)?,
        ..Default::default()
    };

    for path in &ground_truth {
        copy_into(path, &optimal)?;
        summary.copied_ground_truth += 1;
    }
    for path in &result_files {
        copy_into(path, &student)?;
        summary.copied_results += 1;
    }

    info!(
        instance = %config.problem_instance,
        ground_truth = summary.copied_ground_truth,
        results = summary.copied_results,
        "staged evaluator inputs"
    );

    Ok(summary)
}

/// Regular files of a source directory; sub-directories are reported and skipped.
fn source_files(dir: &Path) -> Result<Vec<PathBuf>, ParetoCheckError> {
    let entries = fs::read_dir(dir).map_err(|e| ParetoCheckError::io(dir.display(), e))?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            warn!(path = %path.display(), "skipping sub-directory");
        }
    }
    list_files(dir)
}

/// Run the evaluator with inherited stdio
pub fn run_evaluator(command: &[String]) -> Result<(), ParetoCheckError> {
    let shown = command.join(" ");
    let (program, args) = command.split_first().ok_or_else(|| ParetoCheckError::Command {
        command: shown.clone(),
        message: "empty command".to_string(),
    })?;

    info!(command = %shown, "running evaluator");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| ParetoCheckError::Command {
            command: shown.clone(),
            message: format!("failed to start: {}", e),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ParetoCheckError::Command {
            command: shown,
            message: match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            },
        })
    }
}

fn format_summary(config: &StageConfig, summary: &StageSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("STAGED {}\n", config.problem_instance));
    output.push_str("------\n");
    output.push_str(&format!(
        "  {}: cleared {}, copied {} ground-truth files (prefix {})\n",
        config.optimal_dir().display(),
        summary.cleared_optimal,
        summary.copied_ground_truth,
        config.ground_truth_prefix
    ));
    output.push_str(&format!(
        "  {}: cleared {}, copied {} result files\n",
        config.student_dir().display(),
        summary.cleared_student,
        summary.copied_results
    ));
    if summary.evaluated {
        output.push_str("  Evaluator: completed\n");
    } else {
        output.push_str("  Evaluator: not run\n");
    }

    output
}
