//! Check execution orchestrator.
//!
//! Holds the registered checks and runs a selection of them over each log,
//! one log at a time, in the order given.
//!
//! - Unknown check IDs in a selection are logged and ignored
//! - An empty selection or an empty log list yields an empty report
//! - With `fail_fast`, the run stops after the first log with a failure

use crate::checks::{efficiency, fronts, structure};
use crate::data::log::FitnessLog;
use crate::engine::result::{FileReport, ResultAggregator, ValidationReport};
use crate::{Check, CheckCategory, CheckResult};
use std::time::Instant;
use tracing::{info, warn};

/// Orchestrator configuration
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
    pub fail_fast: bool,
}

/// A registered check with its execution function
pub struct RegisteredCheck {
    pub id: String,
    pub name: String,
    pub category: CheckCategory,
    pub description: String,
    pub check_fn: Box<dyn Fn(&FitnessLog) -> CheckResult + Send + Sync>,
}

impl RegisteredCheck {
    fn from_check(check: Check, check_fn: fn(&FitnessLog) -> CheckResult) -> Self {
        RegisteredCheck {
            id: check.id,
            name: check.name,
            category: check.category,
            description: check.description,
            check_fn: Box::new(check_fn),
        }
    }
}

/// Check orchestrator
pub struct CheckOrchestrator {
    config: OrchestratorConfig,
    checks: Vec<RegisteredCheck>,
}

impl CheckOrchestrator {
    /// Create a new orchestrator with the given configuration
    pub fn new(config: OrchestratorConfig) -> Self {
        CheckOrchestrator {
            config,
            checks: Vec::new(),
        }
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RegisteredCheck>) {
        self.checks.extend(checks);
    }

    /// Register a single check
    pub fn register_check(&mut self, check: RegisteredCheck) {
        self.checks.push(check);
    }

    /// IDs of registered checks, in registration order
    pub fn check_ids(&self) -> Vec<String> {
        self.checks.iter().map(|c| c.id.clone()).collect()
    }

    /// Run all registered checks
    pub fn run_all(&self, logs: &[FitnessLog]) -> ValidationReport {
        self.run_checks(logs, &self.check_ids())
    }

    /// Run checks in specific categories
    pub fn run_categories(&self, logs: &[FitnessLog], categories: &[CheckCategory]) -> ValidationReport {
        let ids: Vec<String> = self
            .checks
            .iter()
            .filter(|c| categories.contains(&c.category))
            .map(|c| c.id.clone())
            .collect();
        self.run_checks(logs, &ids)
    }

    /// Run specific checks by ID
    pub fn run_specific(&self, logs: &[FitnessLog], check_ids: &[String]) -> ValidationReport {
        self.run_checks(logs, check_ids)
    }

    /// Run all checks except specified IDs
    pub fn run_excluding(&self, logs: &[FitnessLog], skip_ids: &[String]) -> ValidationReport {
        let ids: Vec<String> = self
            .checks
            .iter()
            .filter(|c| !skip_ids.contains(&c.id))
            .map(|c| c.id.clone())
            .collect();
        self.run_checks(logs, &ids)
    }

    /// Execute the selected checks over every log
    fn run_checks(&self, logs: &[FitnessLog], check_ids: &[String]) -> ValidationReport {
        let start = Instant::now();
        let selected = self.select(check_ids);
        let mut aggregator = ResultAggregator::new();

        for log in logs {
            let file_report = self.run_log(log, &selected);
            let failed = file_report.has_failures();
            info!(
                file = %file_report.file,
                individuals = file_report.individuals,
                failed,
                "checked fitness log"
            );
            aggregator.add_file(file_report);

            if self.config.fail_fast && failed {
                info!("stopping after first failing log (fail-fast)");
                break;
            }
        }

        aggregator.set_duration(start.elapsed().as_millis() as u64);
        aggregator.into_report()
    }

    /// Resolve IDs to registered checks, keeping registration order
    fn select(&self, check_ids: &[String]) -> Vec<&RegisteredCheck> {
        for id in check_ids {
            if !self.checks.iter().any(|c| &c.id == id) {
                warn!(check = %id, "unknown check id ignored");
            }
        }
        self.checks
            .iter()
            .filter(|c| check_ids.contains(&c.id))
            .collect()
    }

    fn run_log(&self, log: &FitnessLog, selected: &[&RegisteredCheck]) -> FileReport {
        let checks = selected
            .iter()
            .map(|check| Check {
                id: check.id.clone(),
                name: check.name.clone(),
                category: check.category,
                description: check.description.clone(),
                result: Some((check.check_fn)(log)),
            })
            .collect();

        FileReport {
            file: log.file_name(),
            label: log.label.clone(),
            individuals: log.individuals.len(),
            fronts: log.claimed_front_count(),
            checks,
        }
    }
}

/// Create every built-in check with its execution function
pub fn create_all_checks() -> Vec<RegisteredCheck> {
    let mut checks = Vec::new();

    let functions: [(Vec<Check>, fn(&FitnessLog) -> CheckResult); 3] = [
        (structure::get_structure_checks(), structure::check_log_structure),
        (efficiency::get_efficiency_checks(), efficiency::check_front0_efficiency),
        (fronts::get_front_checks(), fronts::check_non_dominated_sort),
    ];

    for (descriptors, check_fn) in functions {
        for descriptor in descriptors {
            checks.push(RegisteredCheck::from_check(descriptor, check_fn));
        }
    }

    checks
}
