//! Fitness log fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fitness tuple in log order: (edge_value, connectivity, overall_deviation)
pub type Tuple = (f64, f64, f64);

/// A temporary log directory, removed on drop
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        LogDir {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a log file with literal content
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("failed to write log");
        path
    }

    /// Write a log file with one line per front
    pub fn write_fronts(&self, name: &str, fronts: &[Vec<Tuple>]) -> PathBuf {
        self.write(name, &format_log(fronts))
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Render fronts in the optimizer's log format
pub fn format_log(fronts: &[Vec<Tuple>]) -> String {
    let mut content = String::new();
    for front in fronts {
        for (edge, connectivity, deviation) in front {
            content.push_str(&format!("({},{},{});", edge, connectivity, deviation));
        }
        content.push('\n');
    }
    content
}

/// A population whose fronts are already correctly sorted.
///
/// Within a front connectivity rises while deviation falls; each deeper
/// front is shifted so that every member is dominated by its counterpart in
/// the previous front.
pub fn layered_population(fronts: usize, per_front: usize) -> Vec<Vec<Tuple>> {
    (0..fronts)
        .map(|k| {
            (0..per_front)
                .map(|i| {
                    (
                        100.0 - 10.0 * k as f64,
                        (i + k) as f64,
                        (per_front - i + k) as f64,
                    )
                })
                .collect()
        })
        .collect()
}

/// Scenario: two mutually non-dominated individuals, both claimed front 0
pub const TRADE_OFF_ONE_LINE: &str = "(5,2,1);(3,1,2);\n";

/// Scenario: the same individuals split across two lines
pub const TRADE_OFF_SPLIT: &str = "(5,2,1);\n(3,1,2);\n";

/// Scenario: a duplicated tuple in a front listing
pub const DUPLICATES: &str = "(5,2,1);(5,2,1);\n(1,4,6);\n";
