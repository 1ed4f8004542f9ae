//! Configuration file support.
//!
//! The config file is a JSON object; every field is optional. Values given on
//! the command line or through the environment take precedence.

use crate::ParetoCheckError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_LOG_DIR: &str = "./logs";
pub const DEFAULT_EXTENSION: &str = "txt";

pub const DEFAULT_TRAINING_ROOT: &str = "./Project 3 training_images";
pub const DEFAULT_RESULTS_ROOT: &str = "./logs/result_segmentation";
pub const DEFAULT_EVALUATOR_DIR: &str = "./evaluator";
pub const DEFAULT_GROUND_TRUTH_PREFIX: &str = "GT";
pub const DEFAULT_EVALUATOR_PROGRAM: &str = "python";
/// Evaluator script, relative to the evaluator directory
pub const DEFAULT_EVALUATOR_SCRIPT: &str = "run.py";

/// Contents of a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub log_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub only: Option<Vec<String>>,
    pub skip: Option<Vec<String>>,
    pub fail_fast: Option<bool>,
    pub stage: Option<StageFileConfig>,
}

/// `stage` section of a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageFileConfig {
    pub training_root: Option<PathBuf>,
    pub results_root: Option<PathBuf>,
    pub evaluator_dir: Option<PathBuf>,
    pub ground_truth_prefix: Option<String>,
    /// Program followed by its arguments
    pub evaluator_command: Option<Vec<String>>,
}

impl FileConfig {
    /// Parse a config document
    pub fn from_json(source: &Path, content: &str) -> Result<Self, ParetoCheckError> {
        let config: FileConfig = serde_json::from_str(content).map_err(|e| {
            ParetoCheckError::Config(format!("invalid config file {}: {}", source.display(), e))
        })?;

        if let Some(command) = config.stage.as_ref().and_then(|s| s.evaluator_command.as_ref()) {
            if command.is_empty() {
                return Err(ParetoCheckError::Config(format!(
                    "invalid config file {}: stage.evaluator_command must name a program",
                    source.display()
                )));
            }
        }

        Ok(config)
    }
}

/// Load the config file at `path`, or the empty config when none is given
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, ParetoCheckError> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        ParetoCheckError::Config(format!("cannot read config file {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "loaded config file");
    FileConfig::from_json(path, &content)
}
