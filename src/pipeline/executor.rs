//! Task execution: convert every matched file, isolating per-file failures

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::context::BatchContext;
use super::directive::Task;
use super::extension::folder_name_for;
use super::matcher::collect_inputs;
use crate::report::LogEvent;

/// Subdirectory of the base directory that holds input files.
pub const SOURCE_DIR_NAME: &str = "audio";

/// Result of converting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub success: bool,
    /// Tool output on success, failure diagnostic otherwise.
    pub diagnostic: String,
}

/// How a task finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Every matched file was attempted.
    Completed,
    /// Nothing in the source directory matched; not an error.
    NoFilesMatched,
    /// The output directory could not be created, so nothing was attempted.
    OutputDirFailed(String),
}

/// Everything one task did, in execution order.
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub task: Task,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub status: TaskStatus,
    pub outcomes: Vec<ConversionOutcome>,
}

impl TaskReport {
    pub fn matched(&self) -> usize {
        self.outcomes.len()
    }

    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.success).count()
    }
}

/// Output path for an input: its stem plus the target extension, inside `output_dir`.
///
/// Inputs sharing a stem map to the same output and overwrite each other.
pub fn output_path_for(input: &Path, output_dir: &Path, target_extension: &str) -> PathBuf {
    let mut name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(target_extension);
    output_dir.join(name)
}

/// Whether `folder` names exactly one directory directly under the base.
///
/// Rejects absolute paths, separators and `.`/`..`, which would place
/// output somewhere other than `<base>/<folder>`.
pub fn is_plain_folder_name(folder: &str) -> bool {
    let mut components = Path::new(folder).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Run one task against `<base>/audio`, writing into `<base>/<TARGET>`.
///
/// Never fails: a failing file is reported, logged and skipped, and the
/// remaining files are still attempted.
pub fn execute_task(task: &Task, ctx: &mut BatchContext<'_>) -> TaskReport {
    let source_dir = ctx.base_dir.join(SOURCE_DIR_NAME);
    let folder = folder_name_for(task.target_extension());
    let output_dir = ctx.base_dir.join(&folder);

    let mut report = TaskReport {
        task: task.clone(),
        source_dir: source_dir.clone(),
        output_dir: output_dir.clone(),
        status: TaskStatus::Completed,
        outcomes: Vec::new(),
    };

    ctx.log.record(LogEvent::TaskStarted {
        selector: task.selector_label().to_string(),
        target: task.target_extension().to_string(),
        output_dir: output_dir.clone(),
    });

    let prepared = if is_plain_folder_name(&folder) {
        fs::create_dir_all(&output_dir).map_err(|e| e.to_string())
    } else {
        Err(format!("'{}' is not a single directory name", folder))
    };
    if let Err(reason) = prepared {
        ctx.failure(&format!(
            "Cannot create output directory {}: {}",
            output_dir.display(),
            reason
        ));
        ctx.log.record(LogEvent::OutputDirFailed {
            output_dir: output_dir.clone(),
            reason: reason.clone(),
        });
        ctx.log.record(LogEvent::TaskEnded);
        report.status = TaskStatus::OutputDirFailed(reason);
        return report;
    }

    let inputs = collect_inputs(&source_dir, task);
    if inputs.is_empty() {
        ctx.log.record(LogEvent::NoFilesMatched {
            source_dir: source_dir.clone(),
        });
        ctx.info(&format!("No matching files found in {}", source_dir.display()));
        report.status = TaskStatus::NoFilesMatched;
        return report;
    }

    for input in inputs {
        let output = output_path_for(&input, &output_dir, task.target_extension());
        ctx.progress(&format!(
            "Converting: {} -> {}",
            input.display(),
            output.display()
        ));

        let outcome = match ctx.converter.convert(&input, &output) {
            Ok(result) => {
                ctx.success(&format!("Converted: {}", output.display()));
                ctx.log.record(LogEvent::ConversionSucceeded {
                    input: input.clone(),
                    output: output.clone(),
                    tool_output: result.text.clone(),
                });
                ConversionOutcome {
                    input,
                    output,
                    success: true,
                    diagnostic: result.text,
                }
            }
            Err(e) => {
                let diagnostic = e.diagnostic();
                ctx.failure(&format!(
                    "Conversion failed: {} | {}",
                    input.display(),
                    diagnostic
                ));
                ctx.log.record(LogEvent::FileFailed {
                    input: input.clone(),
                    output: output.clone(),
                    diagnostic: diagnostic.clone(),
                });
                ConversionOutcome {
                    input,
                    output,
                    success: false,
                    diagnostic,
                }
            }
        };
        report.outcomes.push(outcome);
    }

    ctx.log.record(LogEvent::TaskEnded);
    report
}
