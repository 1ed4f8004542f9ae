//! Front statistics command
//!
//! Summarizes every claimed front of each log: member count and the
//! min/max/mean of each objective, next to the size of the recomputed front 0.

use crate::cli::args::{OutputFormat, StatsArgs};
use crate::config::{FileConfig, DEFAULT_EXTENSION, DEFAULT_LOG_DIR};
use crate::data::log::{load_log_set, FitnessLog};
use crate::pareto::{non_dominated_sort, OBJECTIVES};
use crate::ParetoCheckError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Min/max/mean of one objective over a front
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectiveStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Statistics of one claimed front
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontStats {
    pub front: usize,
    pub count: usize,
    pub edge_value: ObjectiveStats,
    pub connectivity: ObjectiveStats,
    pub overall_deviation: ObjectiveStats,
}

/// Statistics of one log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogStats {
    pub label: String,
    pub file: String,
    pub individuals: usize,
    /// Size of front 0 as computed by the non-dominated sort
    pub reference_front0: usize,
    pub fronts: Vec<FrontStats>,
}

/// Run the stats command
pub fn run(args: &StatsArgs, format: OutputFormat, file: &FileConfig) -> Result<String, ParetoCheckError> {
    let log_dir = args
        .log_dir
        .clone()
        .or_else(|| file.log_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
    let extension = args
        .extension
        .clone()
        .or_else(|| file.extension.clone())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let set = load_log_set(&log_dir, &extension)?;
    let stats = select(&set, args.index.as_deref())?;

    match format {
        OutputFormat::Json => format_json(&stats),
        _ => Ok(format_text(&stats)),
    }
}

/// Compute statistics for the requested label, or every log.
pub fn select(set: &BTreeMap<String, FitnessLog>, index: Option<&str>) -> Result<Vec<LogStats>, ParetoCheckError> {
    match index {
        Some(label) => match set.get(label) {
            Some(log) => Ok(vec![compute_stats(log)]),
            None => {
                let available: Vec<&str> = set.keys().map(String::as_str).collect();
                Err(ParetoCheckError::Config(format!(
                    "no log with label '{}' (available: {})",
                    label,
                    if available.is_empty() {
                        "none".to_string()
                    } else {
                        available.join(", ")
                    }
                )))
            }
        },
        None => Ok(set.values().map(compute_stats).collect()),
    }
}

/// Compute per-front statistics of a log
pub fn compute_stats(log: &FitnessLog) -> LogStats {
    let mut by_front: BTreeMap<usize, Vec<[f64; 3]>> = BTreeMap::new();
    for individual in &log.individuals {
        by_front
            .entry(individual.front)
            .or_default()
            .push(individual.fitness.values());
    }

    let fronts = by_front
        .into_iter()
        .map(|(front, values)| FrontStats {
            front,
            count: values.len(),
            edge_value: objective_stats(&values, 0),
            connectivity: objective_stats(&values, 1),
            overall_deviation: objective_stats(&values, 2),
        })
        .collect();

    let sort = non_dominated_sort(&log.costs());

    LogStats {
        label: log.label.clone(),
        file: log.file_name(),
        individuals: log.individuals.len(),
        reference_front0: sort.first_front().len(),
        fronts,
    }
}

fn objective_stats(values: &[[f64; 3]], objective: usize) -> ObjectiveStats {
    let column = values.iter().map(|v| v[objective]);
    let min = column.clone().fold(f64::INFINITY, f64::min);
    let max = column.clone().fold(f64::NEG_INFINITY, f64::max);
    let mean = column.sum::<f64>() / values.len() as f64;
    ObjectiveStats { min, max, mean }
}

fn format_text(stats: &[LogStats]) -> String {
    let mut output = String::new();

    output.push_str("================================================================================\n");
    output.push_str("                            FRONT STATISTICS\n");
    output.push_str("================================================================================\n");

    if stats.is_empty() {
        output.push_str("\nNo logs found.\n");
        return output;
    }

    for log in stats {
        output.push('\n');
        let heading = format!("LOG {} ({})", log.label, log.file);
        output.push_str(&heading);
        output.push('\n');
        output.push_str(&"-".repeat(heading.len()));
        output.push('\n');
        output.push_str(&format!("  Individuals:        {}\n", log.individuals));
        output.push_str(&format!("  Claimed fronts:     {}\n", log.fronts.len()));
        output.push_str(&format!("  Reference front 0:  {}\n", log.reference_front0));

        if log.fronts.is_empty() {
            continue;
        }

        output.push('\n');
        output.push_str(&format!("  {:>5}  {:>5}", "FRONT", "COUNT"));
        for objective in &OBJECTIVES {
            output.push_str(&format!(
                "  {:>40}",
                format!("{} ({}) min/max/mean", objective.name, objective.direction)
            ));
        }
        output.push('\n');

        for front in &log.fronts {
            output.push_str(&format!("  {:>5}  {:>5}", front.front, front.count));
            for s in [&front.edge_value, &front.connectivity, &front.overall_deviation] {
                output.push_str(&format!(
                    "  {:>40}",
                    format!("{:.2} / {:.2} / {:.2}", s.min, s.max, s.mean)
                ));
            }
            output.push('\n');
        }
    }

    output
}

fn format_json(stats: &[LogStats]) -> Result<String, ParetoCheckError> {
    serde_json::to_string_pretty(stats)
        .map_err(|e| ParetoCheckError::Config(format!("cannot serialize statistics: {}", e)))
}
