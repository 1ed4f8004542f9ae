//! Output formatting tests.
//!
//! Tests for terminal, JSON, and JUnit XML output formatters.

use pareto_check::cli::args::OutputFormat;
use pareto_check::cli::output::{get_formatter, JsonFormatter, JunitFormatter, OutputFormatter, TerminalFormatter};
use pareto_check::engine::result::{FileReport, ValidationReport};
use pareto_check::{Check, CheckCategory, CheckResult};

fn check(id: &str, name: &str, category: CheckCategory, result: CheckResult) -> Check {
    Check {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: format!("{} description", name),
        result: Some(result),
    }
}

fn create_sample_report() -> ValidationReport {
    ValidationReport {
        timestamp: 1733500000,
        log_dir: "logs".to_string(),
        files: vec![
            FileReport {
                file: "run_1.txt".to_string(),
                label: "1".to_string(),
                individuals: 2,
                fronts: 1,
                checks: vec![
                    check(
                        "LOG-001",
                        "Log Structure",
                        CheckCategory::Structure,
                        CheckResult::Pass {
                            message: "2 individuals across 1 fronts".to_string(),
                            duration_ms: 1,
                        },
                    ),
                    check(
                        "EFF-001",
                        "Front 0 Efficiency",
                        CheckCategory::Efficiency,
                        CheckResult::Skip {
                            reason: "All individuals claim front 0".to_string(),
                        },
                    ),
                ],
            },
            FileReport {
                file: "run_2.txt".to_string(),
                label: "2".to_string(),
                individuals: 3,
                fronts: 2,
                checks: vec![
                    check(
                        "LOG-001",
                        "Log Structure",
                        CheckCategory::Structure,
                        CheckResult::Warn {
                            message: "Log structure has 1 potential issues".to_string(),
                            details: "identical fitness tuples at rows 0, 1".to_string(),
                            duration_ms: 2,
                        },
                    ),
                    check(
                        "NDS-001",
                        "Non-Dominated Sort",
                        CheckCategory::Sort,
                        CheckResult::Fail {
                            message: "1 of 3 individuals are in the wrong front".to_string(),
                            details: "   front  reference_front\n0      1                0  *".to_string(),
                            duration_ms: 3,
                        },
                    ),
                ],
            },
        ],
        total_duration_ms: 1500,
    }
}

#[test]
fn test_terminal_formatter_groups_by_file() {
    let output = TerminalFormatter::new(false, false, false).format(&create_sample_report());

    assert!(output.contains("Log directory: logs"));
    assert!(output.contains("Timestamp: 2024-12-06T15:46:40Z"));
    assert!(output.contains("run_1.txt (label 1, 2 individuals, 1 fronts)"));
    assert!(output.contains("[PASS] LOG-001: Log Structure (2 individuals across 1 fronts)"));
    assert!(output.contains("[SKIP] EFF-001"));
    assert!(output.contains("[WARN] LOG-001"));
    assert!(output.contains("[FAIL] NDS-001"));
    assert!(output.contains("SUMMARY: 2 logs, 1 flagged; 1 passed, 1 warnings, 1 failed, 1 skipped"));
    assert!(output.contains("Total time: 1.5s"));
    assert!(output.contains("Exit code: 1 (inconsistent fronts detected)"));
}

#[test]
fn test_terminal_formatter_prints_failure_table() {
    let output = TerminalFormatter::new(false, false, false).format(&create_sample_report());
    assert!(output.contains("      0      1                0  *"));
}

#[test]
fn test_terminal_formatter_no_color() {
    let output = TerminalFormatter::new(false, false, false).format(&create_sample_report());
    assert!(!output.contains("\x1b["));

    let colored = TerminalFormatter::new(true, false, false).format(&create_sample_report());
    assert!(colored.contains("\x1b[31m[FAIL]\x1b[0m"));
}

#[test]
fn test_terminal_formatter_quiet() {
    let output = TerminalFormatter::new(false, false, true).format(&create_sample_report());

    assert!(!output.contains("run_1.txt"));
    assert!(!output.contains("[PASS]"));
    assert!(output.contains("[WARN] LOG-001"));
    assert!(output.contains("[FAIL] NDS-001"));
    assert!(output.contains("reference_front"));
}

#[test]
fn test_terminal_formatter_verbose_durations() {
    let output = TerminalFormatter::new(false, true, false).format(&create_sample_report());
    assert!(output.contains("(2 individuals across 1 fronts (1ms))"));
}

#[test]
fn test_json_formatter() {
    let output = JsonFormatter::new(true).format(&create_sample_report());
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["log_dir"], "logs");
    assert_eq!(parsed["summary"]["failed"], 1);
    assert_eq!(parsed["summary"]["flagged_files"], 1);
    assert_eq!(parsed["files"][1]["checks"][1]["result"]["status"], "fail");
    assert_eq!(parsed["files"][0]["checks"][1]["category"], "efficiency");
}

#[test]
fn test_json_report_reloads() {
    let report = create_sample_report();
    let output = JsonFormatter::new(false).format(&report);
    let reloaded: ValidationReport = serde_json::from_str(&output).unwrap();
    assert_eq!(reloaded, report);
}

#[test]
fn test_junit_formatter() {
    let output = JunitFormatter::new().format(&create_sample_report());

    assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(output.contains("<testsuites name=\"pareto-check\" tests=\"4\" failures=\"1\""));
    assert!(output.contains("<testsuite name=\"run_1.txt\" tests=\"2\" failures=\"0\" errors=\"0\" skipped=\"1\""));
    assert!(output.contains("<testsuite name=\"run_2.txt\" tests=\"2\" failures=\"1\""));
    assert!(output.contains("classname=\"pareto-check.2\""));
    assert!(output.contains("<failure message=\"1 of 3 individuals are in the wrong front\">"));
    assert!(output.contains("<skipped message=\"All individuals claim front 0\" />"));
    assert!(output.ends_with("</testsuites>"));
}

#[test]
fn test_get_formatter() {
    let report = create_sample_report();
    assert!(get_formatter(&OutputFormat::Text, true, false, false)
        .format(&report)
        .contains("SUMMARY"));
    assert!(get_formatter(&OutputFormat::Json, true, false, false)
        .format(&report)
        .starts_with('{'));
    assert!(get_formatter(&OutputFormat::Junit, true, false, false)
        .format(&report)
        .starts_with("<?xml"));
}
