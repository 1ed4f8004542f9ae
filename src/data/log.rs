//! Fitness log parsing.
//!
//! A log holds one line per claimed front. Each line is a `;`-separated list
//! of individuals written as `(edge_value,connectivity,overall_deviation)`:
//!
//! ```text
//! (812.4,33.0,1204.7);(799.1,29.5,1240.2);
//! (640.0,41.2,1300.9);
//! ```
//!
//! Line index is the claimed front. Empty segments (a trailing `;`, or
//! `;;`) are skipped. A malformed value aborts parsing of the whole file.

use crate::pareto::OBJECTIVES;
use crate::platform::fs::list_files_with_extension;
use crate::ParetoCheckError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Raw fitness tuple of one individual, in log order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fitness {
    /// Maximized
    pub edge_value: f64,
    /// Minimized
    pub connectivity: f64,
    /// Minimized
    pub overall_deviation: f64,
}

impl Fitness {
    pub fn new(edge_value: f64, connectivity: f64, overall_deviation: f64) -> Self {
        Fitness {
            edge_value,
            connectivity,
            overall_deviation,
        }
    }

    /// Values in log order
    pub fn values(&self) -> [f64; 3] {
        [self.edge_value, self.connectivity, self.overall_deviation]
    }

    /// Minimize-oriented cost vector (edge value negated).
    pub fn costs(&self) -> [f64; 3] {
        let values = self.values();
        [
            OBJECTIVES[0].orient(values[0]),
            OBJECTIVES[1].orient(values[1]),
            OBJECTIVES[2].orient(values[2]),
        ]
    }
}

/// One individual as recorded in a log
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Individual {
    /// Position in log order across all lines
    pub row: usize,
    /// Claimed front (0-based line index)
    pub front: usize,
    pub fitness: Fitness,
}

/// A parsed log file
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessLog {
    pub source: PathBuf,
    pub label: String,
    /// Number of lines, including lines without individuals
    pub line_count: usize,
    pub individuals: Vec<Individual>,
}

impl FitnessLog {
    /// Parse log content. `source` is used for the label and error messages.
    pub fn parse(source: impl Into<PathBuf>, content: &str) -> Result<Self, ParetoCheckError> {
        let source = source.into();
        let mut individuals = Vec::new();
        let mut line_count = 0;

        for (front, line) in content.lines().enumerate() {
            line_count += 1;
            for segment in line.split(';') {
                let segment = segment.trim();
                if segment.is_empty() {
                    continue;
                }
                let fitness = parse_segment(segment).map_err(|message| ParetoCheckError::Parse {
                    file: source.display().to_string(),
                    line: front + 1,
                    segment: segment.to_string(),
                    message,
                })?;
                individuals.push(Individual {
                    row: individuals.len(),
                    front,
                    fitness,
                });
            }
        }

        Ok(FitnessLog {
            label: log_label(&source),
            source,
            line_count,
            individuals,
        })
    }

    /// Read and parse a log file
    pub fn read(path: &Path) -> Result<Self, ParetoCheckError> {
        let content = fs::read_to_string(path).map_err(|e| ParetoCheckError::io(path.display(), e))?;
        let log = Self::parse(path, &content)?;
        debug!(
            file = %path.display(),
            lines = log.line_count,
            individuals = log.individuals.len(),
            "parsed fitness log"
        );
        Ok(log)
    }

    /// File name for display
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Number of claimed fronts that hold at least one individual
    pub fn claimed_front_count(&self) -> usize {
        let mut fronts: Vec<usize> = self.individuals.iter().map(|i| i.front).collect();
        fronts.dedup();
        fronts.len()
    }

    /// Claimed fronts in log order
    pub fn claimed_fronts(&self) -> Vec<usize> {
        self.individuals.iter().map(|i| i.front).collect()
    }

    /// Minimize-oriented cost vectors in log order
    pub fn costs(&self) -> Vec<[f64; 3]> {
        self.individuals.iter().map(|i| i.fitness.costs()).collect()
    }
}

/// Parse one `(a,b,c)` segment.
pub fn parse_segment(segment: &str) -> Result<Fitness, String> {
    let inner: String = segment.chars().filter(|c| *c != '(' && *c != ')').collect();
    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    if fields.len() != OBJECTIVES.len() {
        return Err(format!(
            "expected {} values, found {}",
            OBJECTIVES.len(),
            fields.len()
        ));
    }

    let mut values = [0.0f64; 3];
    for (slot, (field, objective)) in values.iter_mut().zip(fields.iter().zip(OBJECTIVES.iter())) {
        let value: f64 = field
            .parse()
            .map_err(|_| format!("invalid {} '{}'", objective.name, field))?;
        if value.is_nan() {
            return Err(format!("{} is NaN", objective.name));
        }
        *slot = value;
    }

    Ok(Fitness::new(values[0], values[1], values[2]))
}

/// Derive the short label of a log file: the last `_`-separated part of the
/// file stem (`run_7.txt` -> `7`).
pub fn log_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();
    stem.rsplit('_').next().unwrap_or(stem).to_string()
}

/// Read every log in `dir` with the given extension, in path order.
pub fn read_log_dir(dir: &Path, extension: &str) -> Result<Vec<FitnessLog>, ParetoCheckError> {
    list_files_with_extension(dir, extension)?
        .iter()
        .map(|path| FitnessLog::read(path))
        .collect()
}

/// Load every log in `dir` into a label -> log mapping.
///
/// On a label collision the later file (in path order) wins.
pub fn load_log_set(dir: &Path, extension: &str) -> Result<BTreeMap<String, FitnessLog>, ParetoCheckError> {
    let mut set = BTreeMap::new();
    for log in read_log_dir(dir, extension)? {
        let source = log.source.clone();
        if let Some(previous) = set.insert(log.label.clone(), log) {
            warn!(
                label = %previous.label,
                replaced = %previous.source.display(),
                by = %source.display(),
                "log label collision"
            );
        }
    }
    Ok(set)
}
