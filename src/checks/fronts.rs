//! Full front check (NDS-001).
//!
//! Runs a non-dominated sort over every individual of a log and compares the
//! resulting front of each row with the front the row claims. Rows keep
//! their index through the sort, so duplicate tuples never need to be
//! matched back by value.

use crate::data::log::FitnessLog;
use crate::data::table::front_table;
use crate::pareto::non_dominated_sort;
use crate::{Check, CheckCategory, CheckResult};
use std::time::Instant;

/// Get all front checks
pub fn get_front_checks() -> Vec<Check> {
    vec![Check {
        id: "NDS-001".to_string(),
        name: "Non-Dominated Sort".to_string(),
        category: CheckCategory::Sort,
        description: "Compare every claimed front with a full non-dominated sort".to_string(),
        result: None,
    }]
}

/// Reference front of every individual, in log order
pub fn reference_fronts(log: &FitnessLog) -> Vec<usize> {
    non_dominated_sort(&log.costs()).ranks
}

/// Rows whose claimed front differs from the reference front
pub fn mismatched_rows(log: &FitnessLog, reference: &[usize]) -> Vec<usize> {
    log.individuals
        .iter()
        .zip(reference)
        .filter(|(individual, &expected)| individual.front != expected)
        .map(|(individual, _)| individual.row)
        .collect()
}

/// Run NDS-001: Non-Dominated Sort
pub fn check_non_dominated_sort(log: &FitnessLog) -> CheckResult {
    let start = Instant::now();

    if log.is_empty() {
        return CheckResult::Skip {
            reason: "Log contains no individuals".to_string(),
        };
    }

    let reference = reference_fronts(log);
    let mismatched = mismatched_rows(log, &reference);
    let reference_count = reference.iter().max().map(|m| m + 1).unwrap_or(0);
    let duration_ms = start.elapsed().as_millis() as u64;

    if mismatched.is_empty() {
        CheckResult::Pass {
            message: format!("All {} claimed fronts match the reference sort", reference_count),
            duration_ms,
        }
    } else {
        CheckResult::Fail {
            message: format!(
                "{} of {} individuals are in the wrong front ({} claimed, {} expected)",
                mismatched.len(),
                log.individuals.len(),
                log.claimed_front_count(),
                reference_count
            ),
            details: front_table(log, &reference).render(),
            duration_ms,
        }
    }
}
