//! Output formatting for pareto-check.
//!
//! Provides terminal, JSON, and JUnit XML report formatters. All formatters
//! produce valid output for any report, including one with no logs.

use crate::cli::args::OutputFormat;
use crate::engine::result::{ComparisonResult, ResultSummary, ValidationReport};
use crate::CheckResult;
use serde::Serialize;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn gray(&self, text: &str) -> String {
        self.colorize(text, "90")
    }

    fn with_duration(&self, message: &str, duration_ms: u64) -> String {
        if self.verbose {
            format!("{} ({}ms)", message, duration_ms)
        } else {
            message.to_string()
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        output.push_str(RULE);
        output.push('\n');
        output.push_str("pareto-check report\n");
        output.push_str(&format!("Log directory: {}\n", report.log_dir));
        output.push_str(&format!("Timestamp: {}\n", format_timestamp(report.timestamp)));
        output.push_str(RULE);
        output.push_str("\n\n");

        for file in &report.files {
            if self.quiet && !file.has_issues() {
                continue;
            }

            output.push_str(&format!(
                "{} (label {}, {} individuals, {} fronts)\n",
                file.file, file.label, file.individuals, file.fronts
            ));

            for check in &file.checks {
                if self.quiet
                    && matches!(
                        &check.result,
                        Some(CheckResult::Pass { .. }) | Some(CheckResult::Skip { .. })
                    )
                {
                    continue;
                }

                let (status, message, table) = match &check.result {
                    Some(CheckResult::Pass { message, duration_ms }) => {
                        (self.green("[PASS]"), self.with_duration(message, *duration_ms), None)
                    }
                    Some(CheckResult::Warn {
                        message,
                        details,
                        duration_ms,
                    }) => (
                        self.yellow("[WARN]"),
                        self.with_duration(&format!("{} - {}", message, details), *duration_ms),
                        None,
                    ),
                    Some(CheckResult::Fail {
                        message,
                        details,
                        duration_ms,
                    }) => (
                        self.red("[FAIL]"),
                        self.with_duration(message, *duration_ms),
                        Some(details),
                    ),
                    Some(CheckResult::Skip { reason }) => (self.gray("[SKIP]"), reason.clone(), None),
                    None => (self.gray("[----]"), "Not executed".to_string(), None),
                };

                output.push_str(&format!("  {} {}: {} ({})\n", status, check.id, check.name, message));

                if let Some(table) = table {
                    for line in table.lines() {
                        output.push_str("      ");
                        output.push_str(line);
                        output.push('\n');
                    }
                }
            }

            output.push('\n');
        }

        let summary = report.summary();
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&format!(
            "SUMMARY: {} logs, {} flagged; {} passed, {} warnings, {} failed, {} skipped\n",
            summary.files,
            summary.flagged_files,
            summary.passed,
            summary.warned,
            summary.failed,
            summary.skipped
        ));
        output.push_str(&format!(
            "Total time: {:.1}s\n",
            report.total_duration_ms as f64 / 1000.0
        ));

        let exit_desc = match summary.exit_code() {
            1 => "inconsistent fronts detected",
            2 => "warnings detected",
            _ => "all fronts consistent",
        };
        output.push_str(&format!("Exit code: {} ({})\n", summary.exit_code(), exit_desc));
        output.push_str(RULE);

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: ResultSummary,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let document = JsonReport {
            summary: report.summary(),
            report,
        };
        let result = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        result.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }
}

/// JUnit XML formatter: one test suite per log, one test case per check
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }
}

impl Default for JunitFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        let summary = report.summary();
        output.push_str(&format!(
            "<testsuites name=\"pareto-check\" tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"{}\" time=\"{:.3}\">\n",
            summary.total,
            summary.failed,
            summary.skipped,
            report.total_duration_ms as f64 / 1000.0
        ));

        for file in &report.files {
            let failures = file.checks.iter().filter(|c| matches!(&c.result, Some(CheckResult::Fail { .. }))).count();
            let skipped = file
                .checks
                .iter()
                .filter(|c| matches!(&c.result, Some(CheckResult::Skip { .. }) | None))
                .count();
            let suite_time: u64 = file
                .checks
                .iter()
                .filter_map(|c| c.result.as_ref().map(|r| r.duration_ms()))
                .sum();

            output.push_str(&format!(
                "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"{}\" time=\"{:.3}\">\n",
                Self::escape_xml(&file.file),
                file.checks.len(),
                failures,
                skipped,
                suite_time as f64 / 1000.0
            ));

            for check in &file.checks {
                let time = check.result.as_ref().map(|r| r.duration_ms()).unwrap_or(0);

                output.push_str(&format!(
                    "    <testcase name=\"{}\" classname=\"pareto-check.{}\" time=\"{:.3}\"",
                    Self::escape_xml(&check.id),
                    Self::escape_xml(&file.label),
                    time as f64 / 1000.0
                ));

                match &check.result {
                    Some(CheckResult::Pass { message, .. }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <system-out>{}</system-out>\n",
                            Self::escape_xml(message)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Warn { message, details, .. }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <system-out>WARNING: {} - {}</system-out>\n",
                            Self::escape_xml(message),
                            Self::escape_xml(details)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Fail { message, details, .. }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <failure message=\"{}\">{}</failure>\n",
                            Self::escape_xml(message),
                            Self::escape_xml(details)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Skip { reason }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <skipped message=\"{}\" />\n",
                            Self::escape_xml(reason)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    None => {
                        output.push_str(" />\n");
                    }
                }
            }

            output.push_str("  </testsuite>\n");
        }

        output.push_str("</testsuites>");
        output
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(format: &OutputFormat, no_color: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(!no_color, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Junit => Box::new(JunitFormatter::new()),
    }
}

/// Format a baseline comparison as text
pub fn format_comparison(comparison: &ComparisonResult) -> String {
    let mut output = String::from("BASELINE COMPARISON\n");
    let sections = [
        ("Regressions", &comparison.regressions),
        ("New failures", &comparison.new_failures),
        ("New warnings", &comparison.new_warnings),
        ("Resolved", &comparison.resolved),
    ];

    for (title, keys) in sections {
        if keys.is_empty() {
            continue;
        }
        output.push_str(&format!("  {} ({}):\n", title, keys.len()));
        for key in keys {
            output.push_str(&format!("    {}\n", key));
        }
    }
    output.push_str(&format!("  Unchanged: {}", comparison.unchanged.len()));
    output
}

/// Format a Unix timestamp as ISO 8601
pub fn format_timestamp(timestamp: u64) -> String {
    let days_since_epoch = timestamp / 86400;
    let time_of_day = timestamp % 86400;

    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    let mut year = 1970;
    let mut remaining_days = days_since_epoch;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let mut month = 1;
    loop {
        let days = days_in_month(year, month);
        if remaining_days < days {
            break;
        }
        remaining_days -= days;
        month += 1;
    }

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        remaining_days + 1,
        hours,
        minutes,
        seconds
    )
}

fn is_leap_year(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u64, month: u64) -> u64 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
