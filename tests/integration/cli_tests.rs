//! CLI integration tests.
//!
//! Tests for argument parsing, configuration merging and the exit codes of
//! the built binary.

use crate::mocks::{LogDir, DUPLICATES, TRADE_OFF_ONE_LINE, TRADE_OFF_SPLIT};
use clap::Parser;
use pareto_check::cli::args::{Args, Command, OutputFormat};
use pareto_check::config::{FileConfig, DEFAULT_EXTENSION};
use pareto_check::CheckConfig;
use std::path::PathBuf;
use std::process::Command as Process;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("pareto-check").chain(args.iter().copied())).unwrap()
}

fn check_args(args: &[&str]) -> pareto_check::cli::args::CheckArgs {
    match parse(args).resolved_command() {
        Command::Check(check) => check,
        other => panic!("expected check command, got {other:?}"),
    }
}

fn binary() -> Process {
    let mut command = Process::new(env!("CARGO_BIN_EXE_pareto-check"));
    command
        .env_remove("PARETO_CHECK_FORMAT")
        .env_remove("PARETO_CHECK_CONFIG")
        .env_remove("PARETO_CHECK_LOG_DIR")
        .env("NO_COLOR", "1");
    command
}

#[test]
fn test_version_command() {
    assert_eq!(parse(&["version"]).resolved_command(), Command::Version);
}

#[test]
fn test_check_subcommand_and_bare_options_agree() {
    let bare = check_args(&["--log-dir", "out", "--fail-fast"]);
    let named = check_args(&["check", "--log-dir", "out", "--fail-fast"]);
    assert_eq!(bare, named);
    assert_eq!(bare.log_dir, Some(PathBuf::from("out")));
    assert!(bare.fail_fast);
}

#[test]
fn test_json_and_junit_format() {
    assert_eq!(parse(&["--format", "json"]).format, OutputFormat::Json);
    assert_eq!(parse(&["--format", "junit"]).format, OutputFormat::Junit);
}

#[test]
fn test_quiet_verbose_flags() {
    let args = parse(&["-q", "-v"]);
    assert!(args.quiet);
    assert!(args.verbose);
}

#[test]
fn test_config_defaults() {
    let config = CheckConfig::from_args(&check_args(&[]), &FileConfig::default());
    assert_eq!(config.log_dir, PathBuf::from("./logs"));
    assert_eq!(config.extension, DEFAULT_EXTENSION);
    assert!(config.only_checks.is_empty());
    assert!(!config.fail_fast);
}

#[test]
fn test_cli_overrides_config_file() {
    let file = FileConfig {
        log_dir: Some(PathBuf::from("from-file")),
        extension: Some("log".to_string()),
        skip: Some(vec!["LOG-001".to_string()]),
        fail_fast: Some(true),
        ..Default::default()
    };

    let config = CheckConfig::from_args(&check_args(&["--log-dir", "from-cli"]), &file);
    assert_eq!(config.log_dir, PathBuf::from("from-cli"));
    assert_eq!(config.extension, "log");
    assert_eq!(config.skip_checks, vec!["LOG-001"]);
    assert!(config.fail_fast);

    let config = CheckConfig::from_args(&check_args(&["--skip", "EFF-001"]), &file);
    assert_eq!(config.skip_checks, vec!["EFF-001"]);
}

#[test]
fn test_no_fail_fast_overrides_config_file() {
    let file = FileConfig {
        fail_fast: Some(true),
        ..Default::default()
    };

    assert!(CheckConfig::from_args(&check_args(&[]), &file).fail_fast);
    assert!(!CheckConfig::from_args(&check_args(&["--no-fail-fast"]), &file).fail_fast);

    // The last of the two flags wins
    let args = check_args(&["--no-fail-fast", "--fail-fast"]);
    assert!(args.fail_fast && !args.no_fail_fast);
    let args = check_args(&["--fail-fast", "--no-fail-fast"]);
    assert!(!args.fail_fast && args.no_fail_fast);
    assert!(!CheckConfig::from_args(&args, &file).fail_fast);
}

#[test]
fn test_binary_exit_code_consistent_logs() {
    let logs = LogDir::new();
    logs.write("run_1.txt", TRADE_OFF_ONE_LINE);

    let output = binary().arg("--log-dir").arg(logs.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SUMMARY: 1 logs, 0 flagged"));
}

#[test]
fn test_binary_exit_code_inconsistent_logs() {
    let logs = LogDir::new();
    logs.write("run_1.txt", TRADE_OFF_ONE_LINE);
    logs.write("run_2.txt", TRADE_OFF_SPLIT);

    let output = binary().arg("--log-dir").arg(logs.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("run_2.txt"));
    assert!(stdout.contains("[FAIL] NDS-001"));
}

#[test]
fn test_binary_exit_code_warnings_only() {
    let logs = LogDir::new();
    logs.write("run_1.txt", "\n");

    let output = binary().arg("--log-dir").arg(logs.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_binary_exit_code_parse_error() {
    let logs = LogDir::new();
    logs.write("run_1.txt", "(5,2,x);\n");

    let output = binary().arg("--log-dir").arg(logs.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("run_1.txt"));
}

#[test]
fn test_binary_missing_directory_is_runtime_error() {
    let logs = LogDir::new();
    let output = binary()
        .arg("--log-dir")
        .arg(logs.path().join("absent"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_binary_bad_argument_is_runtime_error() {
    let output = binary().arg("--no-such-flag").output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_binary_help_succeeds() {
    let output = binary().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("stats"));
}

#[test]
fn test_binary_reads_config_file() {
    let logs = LogDir::new();
    logs.write("run_1.txt", DUPLICATES);
    let config = logs.write(
        "pareto-check.json",
        &format!(
            r#"{{"log_dir": {:?}, "only": ["NDS-001"]}}"#,
            logs.path().display().to_string()
        ),
    );

    let output = binary().arg("--config").arg(&config).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NDS-001"));
    assert!(!stdout.contains("LOG-001"));
}

#[test]
fn test_binary_invalid_config_is_runtime_error() {
    let logs = LogDir::new();
    let config = logs.write("bad.json", r#"{"unknown": 1}"#);
    let output = binary().arg("--config").arg(&config).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_binary_stats_json() {
    let logs = LogDir::new();
    logs.write("run_7.txt", TRADE_OFF_SPLIT);

    let output = binary()
        .args(["stats", "--format", "json", "--index", "7", "--log-dir"])
        .arg(logs.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["label"], "7");
    assert_eq!(parsed[0]["reference_front0"], 2);
}

#[test]
fn test_binary_stats_unknown_index() {
    let logs = LogDir::new();
    logs.write("run_7.txt", TRADE_OFF_SPLIT);

    let output = binary()
        .args(["stats", "--index", "8", "--log-dir"])
        .arg(logs.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("available: 7"));
}
