//! Result aggregation and reporting.
//!
//! Collects per-log check results, generates summaries, and supports
//! comparison against a previously saved report.

use crate::{Check, CheckResult, ParetoCheckError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub passed: u32,
    pub warned: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total: u32,
    /// Logs checked
    pub files: u32,
    /// Logs with at least one failed check
    pub flagged_files: u32,
    pub total_duration_ms: u64,
}

impl ResultSummary {
    /// Process exit code: 1 on failures, 2 on warnings only, else 0
    pub fn exit_code(&self) -> u8 {
        if self.failed > 0 {
            1
        } else if self.warned > 0 {
            2
        } else {
            0
        }
    }
}

/// Check results for one log file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// File name
    pub file: String,
    pub label: String,
    pub individuals: usize,
    /// Claimed fronts holding at least one individual
    pub fronts: usize,
    pub checks: Vec<Check>,
}

impl FileReport {
    pub fn has_failures(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(&c.result, Some(CheckResult::Fail { .. })))
    }

    pub fn has_issues(&self) -> bool {
        self.checks.iter().any(|c| {
            matches!(
                &c.result,
                Some(CheckResult::Fail { .. }) | Some(CheckResult::Warn { .. })
            )
        })
    }
}

/// Validation report containing all check results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub timestamp: u64,
    pub log_dir: String,
    pub files: Vec<FileReport>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        ValidationReport {
            timestamp: crate::platform::get_unix_timestamp(),
            log_dir: String::new(),
            files: Vec::new(),
            total_duration_ms: 0,
        }
    }

    /// All checks with the file they ran on
    pub fn checks(&self) -> impl Iterator<Item = (&FileReport, &Check)> {
        self.files
            .iter()
            .flat_map(|file| file.checks.iter().map(move |check| (file, check)))
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary {
            files: self.files.len() as u32,
            flagged_files: self.files.iter().filter(|f| f.has_failures()).count() as u32,
            ..Default::default()
        };

        for (_, check) in self.checks() {
            summary.total += 1;

            match &check.result {
                Some(CheckResult::Pass { duration_ms, .. }) => {
                    summary.passed += 1;
                    summary.total_duration_ms += duration_ms;
                }
                Some(CheckResult::Warn { duration_ms, .. }) => {
                    summary.warned += 1;
                    summary.total_duration_ms += duration_ms;
                }
                Some(CheckResult::Fail { duration_ms, .. }) => {
                    summary.failed += 1;
                    summary.total_duration_ms += duration_ms;
                }
                Some(CheckResult::Skip { .. }) | None => {
                    summary.skipped += 1;
                }
            }
        }

        summary
    }

    /// Files with at least one failed check
    pub fn flagged_files(&self) -> Vec<&FileReport> {
        self.files.iter().filter(|f| f.has_failures()).collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Baseline comparison result, keyed `file:check-id`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub new_failures: Vec<String>,
    pub new_warnings: Vec<String>,
    pub resolved: Vec<String>,
    pub regressions: Vec<String>,
    pub unchanged: Vec<String>,
}

impl ComparisonResult {
    pub fn has_changes(&self) -> bool {
        !(self.new_failures.is_empty()
            && self.new_warnings.is_empty()
            && self.resolved.is_empty()
            && self.regressions.is_empty())
    }
}

/// Result aggregator for collecting per-file results
pub struct ResultAggregator {
    files: Vec<FileReport>,
    total_duration_ms: u64,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new() -> Self {
        ResultAggregator {
            files: Vec::new(),
            total_duration_ms: 0,
        }
    }

    pub fn set_duration(&mut self, total_duration_ms: u64) {
        self.total_duration_ms = total_duration_ms;
    }

    /// Add the results of one log
    pub fn add_file(&mut self, file: FileReport) {
        self.files.push(file);
    }

    /// Create final validation report
    pub fn into_report(self) -> ValidationReport {
        ValidationReport {
            timestamp: crate::platform::get_unix_timestamp(),
            log_dir: String::new(),
            files: self.files,
            total_duration_ms: self.total_duration_ms,
        }
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare a report against a baseline report
pub fn compare_to_baseline(current: &ValidationReport, baseline: &ValidationReport) -> ComparisonResult {
    let mut result = ComparisonResult::default();

    let baseline_results: HashMap<String, &'static str> = baseline
        .checks()
        .filter_map(|(file, check)| {
            check
                .result
                .as_ref()
                .map(|r| (format!("{}:{}", file.file, check.id), r.status()))
        })
        .collect();

    for (file, check) in current.checks() {
        let key = format!("{}:{}", file.file, check.id);
        let current_status = check.result.as_ref().map(|r| r.status());
        let baseline_status = baseline_results.get(&key).copied();

        // Skip ranks with pass
        match (baseline_status, current_status) {
            (Some(before), Some("fail")) if before != "fail" => {
                result.regressions.push(key);
            }
            (None, Some("fail")) => {
                result.new_failures.push(key);
            }
            (Some("pass"), Some("warn")) | (Some("skip"), Some("warn")) | (None, Some("warn")) => {
                result.new_warnings.push(key);
            }
            (Some("fail"), Some(after)) if after != "fail" => {
                result.resolved.push(key);
            }
            (Some("warn"), Some("pass")) | (Some("warn"), Some("skip")) => {
                result.resolved.push(key);
            }
            _ => {
                result.unchanged.push(key);
            }
        }
    }

    result
}

/// Save a validation report as JSON
pub fn save_report(report: &ValidationReport, path: &Path) -> Result<(), ParetoCheckError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| ParetoCheckError::Config(format!("cannot serialize report: {}", e)))?;
    fs::write(path, json).map_err(|e| ParetoCheckError::io(path.display(), e))
}

/// Load a validation report saved with [`save_report`]
pub fn load_baseline(path: &Path) -> Result<ValidationReport, ParetoCheckError> {
    let content = fs::read_to_string(path).map_err(|e| ParetoCheckError::io(path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| {
        ParetoCheckError::Config(format!("invalid baseline {}: {}", path.display(), e))
    })
}
