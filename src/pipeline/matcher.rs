//! Input discovery: which files in the source directory a task converts

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::directive::Task;
use super::extension::is_convertible;

/// Lowercase, dot-prefixed extension of a path, if it has one.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Whether a file extension is selected by the task.
pub fn task_matches(task: &Task, extension: &str) -> bool {
    if task.match_all() {
        is_convertible(extension)
    } else {
        task.accepts_extension(extension)
    }
}

/// Collect the regular files directly inside `source_dir` that the task selects.
///
/// A missing or non-directory `source_dir` yields an empty list. Results
/// follow directory enumeration order, which is platform-defined.
pub fn collect_inputs(source_dir: &Path, task: &Task) -> Vec<PathBuf> {
    let entries = match fs::read_dir(source_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %source_dir.display(), error = %e, "source directory not readable");
            return Vec::new();
        }
    };

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(dir = %source_dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        // follows symlinks, so a link to a regular file counts
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let selected = extension_of(&path)
            .map(|ext| task_matches(task, &ext))
            .unwrap_or(false);
        if selected {
            inputs.push(path);
        }
    }

    inputs
}
