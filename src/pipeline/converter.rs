//! External converter invocation.
//!
//! The [`Converter`] trait is the seam between the executor and the media
//! tool. [`FfmpegConverter`] runs `ffmpeg` directly (no shell), captures
//! stdout and stderr separately and merges them into one diagnostic text.
//! Success is decided by the exit status alone.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use thiserror::Error;
use tracing::debug;

/// Errors from a single converter invocation.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The converter binary could not be found.
    #[error("converter not found at path: {path}")]
    NotFound { path: PathBuf },

    /// The converter ran and exited unsuccessfully.
    #[error("converter exited with {status}")]
    Failed { status: String, output: String },

    /// Spawning or waiting on the converter failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ConverterError {
    /// Text to show the operator and write to the log for this failure.
    ///
    /// For a failed run this is the status line followed by everything the
    /// tool printed.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Failed { output, .. } if !output.trim().is_empty() => {
                format!("{}\n{}", self, output.trim_end())
            }
            _ => self.to_string(),
        }
    }
}

/// Captured text of a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOutput {
    pub text: String,
}

/// A tool that converts one input file into one output file.
pub trait Converter {
    /// Short name used in console messages.
    fn name(&self) -> &str;

    /// Convert `input` into `output`, overwriting any existing output.
    fn convert(&self, input: &Path, output: &Path) -> Result<ConversionOutput, ConverterError>;

    /// Check that the tool can be launched at all.
    fn validate(&self) -> Result<(), ConverterError>;
}

/// Settings for [`FfmpegConverter`].
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Path to the ffmpeg binary.
    pub ffmpeg_path: PathBuf,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
        }
    }
}

impl ConverterConfig {
    pub fn with_ffmpeg_path(ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }
}

/// ffmpeg-backed [`Converter`].
pub struct FfmpegConverter {
    config: ConverterConfig,
}

impl FfmpegConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Arguments for one conversion: overwrite, read input, drop video, write output.
    ///
    /// The container and codec follow from the output path's extension.
    pub fn build_args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-vn".to_string(),
            output.to_string_lossy().to_string(),
        ]
    }

    fn run(&self, args: &[String]) -> Result<Output, ConverterError> {
        debug!(program = %self.config.ffmpeg_path.display(), ?args, "running converter");

        Command::new(&self.config.ffmpeg_path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    ConverterError::NotFound {
                        path: self.config.ffmpeg_path.clone(),
                    }
                } else {
                    ConverterError::Io(e)
                }
            })
    }
}

/// Merge captured stdout and stderr into one diagnostic text.
pub fn merge_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !text.is_empty() && !stderr.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&stderr);
    text
}

impl Converter for FfmpegConverter {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<ConversionOutput, ConverterError> {
        let result = self.run(&Self::build_args(input, output))?;
        let text = merge_output(&result);

        if result.status.success() {
            Ok(ConversionOutput { text })
        } else {
            Err(ConverterError::Failed {
                status: result.status.to_string(),
                output: text,
            })
        }
    }

    fn validate(&self) -> Result<(), ConverterError> {
        let result = self.run(&["-version".to_string()])?;
        if result.status.success() {
            Ok(())
        } else {
            Err(ConverterError::Failed {
                status: result.status.to_string(),
                output: merge_output(&result),
            })
        }
    }
}
