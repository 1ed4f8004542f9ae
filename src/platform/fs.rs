//! Filesystem helpers.
//!
//! Every failure is returned as `ParetoCheckError::Io` carrying the path it
//! concerns. Directory listings are sorted so runs are reproducible.

use crate::ParetoCheckError;
use std::fs;
use std::path::{Path, PathBuf};

/// List regular files in `dir` whose extension equals `extension`.
///
/// A leading dot in `extension` is ignored. Sorted by path.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ParetoCheckError> {
    let extension = extension.trim_start_matches('.');
    let mut files: Vec<PathBuf> = list_files(dir)?
        .into_iter()
        .filter(|path| path.extension().map(|e| e == extension).unwrap_or(false))
        .collect();
    files.sort();
    Ok(files)
}

/// List regular files directly inside `dir`, sorted by path.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, ParetoCheckError> {
    let entries = fs::read_dir(dir).map_err(|e| ParetoCheckError::io(dir.display(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ParetoCheckError::io(dir.display(), e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Create `dir` if needed and remove everything inside it.
///
/// Returns the number of entries removed.
pub fn clear_directory(dir: &Path) -> Result<usize, ParetoCheckError> {
    fs::create_dir_all(dir).map_err(|e| ParetoCheckError::io(dir.display(), e))?;

    let mut removed = 0;
    let entries = fs::read_dir(dir).map_err(|e| ParetoCheckError::io(dir.display(), e))?;
    for entry in entries {
        let path = entry.map_err(|e| ParetoCheckError::io(dir.display(), e))?.path();
        let result = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.map_err(|e| ParetoCheckError::io(path.display(), e))?;
        removed += 1;
    }
    Ok(removed)
}

/// Copy `source` into `dest_dir`, keeping its file name.
pub fn copy_into(source: &Path, dest_dir: &Path) -> Result<PathBuf, ParetoCheckError> {
    let name = source
        .file_name()
        .ok_or_else(|| ParetoCheckError::Config(format!("not a file: {}", source.display())))?;
    let dest = dest_dir.join(name);
    fs::copy(source, &dest).map_err(|e| ParetoCheckError::io(source.display(), e))?;
    Ok(dest)
}
