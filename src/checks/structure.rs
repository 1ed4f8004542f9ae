//! Log structure check (LOG-001).
//!
//! Flags logs that parse but look wrong for a front listing. Duplicate
//! fitness tuples are reported because individuals with equal tuples cannot
//! be told apart by value; the sort check matches rows by index instead.

use crate::data::log::FitnessLog;
use crate::{Check, CheckCategory, CheckResult};
use std::collections::HashMap;
use std::time::Instant;

/// Get all structure checks
pub fn get_structure_checks() -> Vec<Check> {
    vec![Check {
        id: "LOG-001".to_string(),
        name: "Log Structure".to_string(),
        category: CheckCategory::Structure,
        description: "Check for empty logs, empty fronts and duplicate fitness tuples".to_string(),
        result: None,
    }]
}

/// Claimed fronts without members, below the highest populated front.
pub fn missing_fronts(log: &FitnessLog) -> Vec<usize> {
    let last = match log.individuals.last() {
        Some(individual) => individual.front,
        None => return Vec::new(),
    };
    let mut populated = vec![false; last + 1];
    for individual in &log.individuals {
        populated[individual.front] = true;
    }
    populated
        .iter()
        .enumerate()
        .filter(|(_, present)| !**present)
        .map(|(front, _)| front)
        .collect()
}

/// Groups of rows sharing an identical fitness tuple, in first-seen order.
pub fn duplicate_groups(log: &FitnessLog) -> Vec<Vec<usize>> {
    let mut by_bits: HashMap<[u64; 3], usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for individual in &log.individuals {
        // -0.0 and 0.0 compare equal, so normalize before hashing bits
        let key = individual.fitness.values().map(|v| (v + 0.0).to_bits());
        match by_bits.get(&key) {
            Some(&group) => groups[group].push(individual.row),
            None => {
                by_bits.insert(key, groups.len());
                groups.push(vec![individual.row]);
            }
        }
    }

    groups.retain(|rows| rows.len() > 1);
    groups
}

/// Run LOG-001: Log Structure
pub fn check_log_structure(log: &FitnessLog) -> CheckResult {
    let start = Instant::now();

    if log.is_empty() {
        return CheckResult::Warn {
            message: "Log contains no individuals".to_string(),
            details: format!("{} lines, none with a fitness tuple", log.line_count),
            duration_ms: start.elapsed().as_millis() as u64,
        };
    }

    let mut issues = Vec::new();

    let missing = missing_fronts(log);
    if !missing.is_empty() {
        let fronts: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
        issues.push(format!("fronts without individuals: {}", fronts.join(", ")));
    }

    let duplicates = duplicate_groups(log);
    for rows in &duplicates {
        let rows: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        issues.push(format!("identical fitness tuples at rows {}", rows.join(", ")));
    }

    let duration_ms = start.elapsed().as_millis() as u64;

    if issues.is_empty() {
        CheckResult::Pass {
            message: format!(
                "{} individuals across {} fronts",
                log.individuals.len(),
                log.claimed_front_count()
            ),
            duration_ms,
        }
    } else {
        CheckResult::Warn {
            message: format!("Log structure has {} potential issues", issues.len()),
            details: issues.join("; "),
            duration_ms,
        }
    }
}
