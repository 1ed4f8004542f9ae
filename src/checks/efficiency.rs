//! Efficiency cross-check (EFF-001).
//!
//! Recomputes the Pareto-efficient individuals of a whole log by brute force
//! and compares them with the individuals claiming front 0. This is a quick
//! heuristic: it says nothing about fronts beyond 0 and treats exact
//! duplicates as covering each other. NDS-001 is the authoritative check.

use crate::data::log::FitnessLog;
use crate::data::table::efficiency_table;
use crate::pareto::pareto_efficient_mask;
use crate::{Check, CheckCategory, CheckResult};
use std::time::Instant;

/// Get all efficiency checks
pub fn get_efficiency_checks() -> Vec<Check> {
    vec![Check {
        id: "EFF-001".to_string(),
        name: "Front 0 Efficiency".to_string(),
        category: CheckCategory::Efficiency,
        description: "Compare claimed front 0 with the brute-force Pareto-efficient set".to_string(),
        result: None,
    }]
}

/// Why an individual disagrees with the efficiency mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyMismatch {
    /// Efficient, but claims a later front
    EfficientOutsideFront0 { row: usize, front: usize },
    /// Claims front 0, but is not efficient
    DominatedInFront0 { row: usize },
}

/// Compare a log with its efficiency mask, in log order.
pub fn efficiency_mismatches(log: &FitnessLog, mask: &[bool]) -> Vec<EfficiencyMismatch> {
    log.individuals
        .iter()
        .zip(mask)
        .filter_map(|(individual, &efficient)| match (efficient, individual.front) {
            (true, 0) => None,
            (true, front) => Some(EfficiencyMismatch::EfficientOutsideFront0 {
                row: individual.row,
                front,
            }),
            (false, 0) => Some(EfficiencyMismatch::DominatedInFront0 { row: individual.row }),
            (false, _) => None,
        })
        .collect()
}

/// Run EFF-001: Front 0 Efficiency
pub fn check_front0_efficiency(log: &FitnessLog) -> CheckResult {
    let start = Instant::now();

    if log.is_empty() {
        return CheckResult::Skip {
            reason: "Log contains no individuals".to_string(),
        };
    }
    if log.individuals.iter().all(|i| i.front == 0) {
        return CheckResult::Skip {
            reason: "All individuals claim front 0".to_string(),
        };
    }

    let mask = pareto_efficient_mask(&log.costs());
    let mismatches = efficiency_mismatches(log, &mask);
    let efficient = mask.iter().filter(|e| **e).count();
    let duration_ms = start.elapsed().as_millis() as u64;

    if mismatches.is_empty() {
        return CheckResult::Pass {
            message: format!("Front 0 matches the {} Pareto-efficient individuals", efficient),
            duration_ms,
        };
    }

    let outside = mismatches
        .iter()
        .filter(|m| matches!(m, EfficiencyMismatch::EfficientOutsideFront0 { .. }))
        .count();
    let dominated = mismatches.len() - outside;

    CheckResult::Fail {
        message: format!(
            "{} efficient individuals outside front 0, {} inefficient individuals in front 0",
            outside, dominated
        ),
        details: efficiency_table(log, &mask).render(),
        duration_ms,
    }
}
