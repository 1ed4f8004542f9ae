//! Per-log validation checks.
//!
//! - Structure (LOG-001): empty logs, front numbering gaps, duplicate tuples
//! - Efficiency (EFF-001): brute-force efficiency against claimed front 0
//! - Sort (NDS-001): full non-dominated sort against every claimed front
//!
//! Checks are pure functions of a parsed [`FitnessLog`]. A disagreement is
//! reported as `CheckResult::Fail` with a table of the log in the details;
//! checks never return errors.
//!
//! [`FitnessLog`]: crate::data::log::FitnessLog

pub mod efficiency;
pub mod fronts;
pub mod structure;

use crate::{Check, CheckCategory};

/// Get all registered checks
pub fn get_all_checks() -> Vec<Check> {
    let mut checks = Vec::new();
    checks.extend(structure::get_structure_checks());
    checks.extend(efficiency::get_efficiency_checks());
    checks.extend(fronts::get_front_checks());
    checks
}

/// Get checks for a specific category
pub fn get_checks_by_category(category: CheckCategory) -> Vec<Check> {
    match category {
        CheckCategory::Structure => structure::get_structure_checks(),
        CheckCategory::Efficiency => efficiency::get_efficiency_checks(),
        CheckCategory::Sort => fronts::get_front_checks(),
    }
}
