//! Append-only conversion log.
//!
//! Every entry is written as `YYYY-MM-DD HH:MM:SS - <message>` in local time,
//! optionally followed by raw tool output on the next lines.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "conversion_log.txt";

/// Timestamp layout used for every log entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Something worth a durable log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    SessionStarted,
    SessionEnded,
    UserExit,
    TaskStarted {
        selector: String,
        target: String,
        output_dir: PathBuf,
    },
    NoFilesMatched {
        source_dir: PathBuf,
    },
    ConversionSucceeded {
        input: PathBuf,
        output: PathBuf,
        tool_output: String,
    },
    FileFailed {
        input: PathBuf,
        output: PathBuf,
        diagnostic: String,
    },
    OutputDirFailed {
        output_dir: PathBuf,
        reason: String,
    },
    TaskEnded,
    DirectiveFailed {
        directive: String,
        reason: String,
    },
}

impl LogEvent {
    /// Raw text written below the entry line, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ConversionSucceeded { tool_output, .. } if !tool_output.is_empty() => {
                Some(tool_output.as_str())
            }
            Self::FileFailed { diagnostic, .. } if !diagnostic.is_empty() => {
                Some(diagnostic.as_str())
            }
            _ => None,
        }
    }

    /// Whether the event records a failure.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::FileFailed { .. } | Self::OutputDirFailed { .. } | Self::DirectiveFailed { .. }
        )
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionStarted => write!(f, "session started"),
            Self::SessionEnded => write!(f, "session ended"),
            Self::UserExit => write!(f, "user exit"),
            Self::TaskStarted {
                selector,
                target,
                output_dir,
            } => write!(
                f,
                "task started: {} to {} | output directory: {}",
                selector,
                target,
                output_dir.display()
            ),
            Self::NoFilesMatched { source_dir } => write!(
                f,
                "no files matched in {}",
                source_dir.display()
            ),
            Self::ConversionSucceeded { input, output, .. } => write!(
                f,
                "conversion succeeded: {} -> {}",
                input.display(),
                output.display()
            ),
            Self::FileFailed { input, output, .. } => write!(
                f,
                "file failed: {} -> {}",
                input.display(),
                output.display()
            ),
            Self::OutputDirFailed { output_dir, reason } => write!(
                f,
                "cannot create output directory {}: {}",
                output_dir.display(),
                reason
            ),
            Self::TaskEnded => write!(f, "task ended"),
            Self::DirectiveFailed { directive, reason } => {
                write!(f, "directive failed: {} | reason: {}", directive, reason)
            }
        }
    }
}

/// Destination for log events.
pub trait LogSink {
    fn record(&mut self, event: LogEvent);
}

/// Render one event as it appears in the log file.
pub fn format_entry(timestamp: &str, event: &LogEvent) -> String {
    let mut entry = format!("{} - {}\n", timestamp, event);
    if let Some(detail) = event.detail() {
        entry.push_str(detail);
        if !detail.ends_with('\n') {
            entry.push('\n');
        }
    }
    entry
}

/// Log backed by a file opened in append mode.
///
/// Write failures are traced as warnings and otherwise ignored.
pub struct FileLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileLog {
    /// Open (or create) the log at `path` for appending.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }
}

impl LogSink for FileLog {
    fn record(&mut self, event: LogEvent) {
        let entry = format_entry(&timestamp(), &event);
        let result = self
            .writer
            .write_all(entry.as_bytes())
            .and_then(|_| self.writer.flush());
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "failed to write log entry");
        }
    }
}

/// In-memory log, mainly for tests.
#[derive(Debug, Default)]
pub struct MemoryLog {
    events: Vec<LogEvent>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    /// Rendered entries with a fixed timestamp, in recording order.
    pub fn render(&self, timestamp: &str) -> String {
        self.events
            .iter()
            .map(|event| format_entry(timestamp, event))
            .collect()
    }
}

impl LogSink for MemoryLog {
    fn record(&mut self, event: LogEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_format_entry_without_detail() {
        let entry = format_entry("2024-01-02 03:04:05", &LogEvent::TaskEnded);
        assert_eq!(entry, "2024-01-02 03:04:05 - task ended\n");
    }

    #[test]
    fn test_format_entry_with_detail() {
        let event = LogEvent::FileFailed {
            input: PathBuf::from("audio/a.mp3"),
            output: PathBuf::from("WAV/a.wav"),
            diagnostic: "converter exited with exit status: 1\nInvalid data".to_string(),
        };
        let entry = format_entry("2024-01-02 03:04:05", &event);
        assert_eq!(
            entry,
            "2024-01-02 03:04:05 - file failed: audio/a.mp3 -> WAV/a.wav\n\
             converter exited with exit status: 1\nInvalid data\n"
        );
    }

    #[test]
    fn test_task_started_message() {
        let event = LogEvent::TaskStarted {
            selector: "all".to_string(),
            target: ".wav".to_string(),
            output_dir: PathBuf::from("base/WAV"),
        };
        assert_eq!(
            event.to_string(),
            "task started: all to .wav | output directory: base/WAV"
        );
    }

    #[test]
    fn test_is_failure() {
        assert!(LogEvent::DirectiveFailed {
            directive: "x".to_string(),
            reason: "y".to_string()
        }
        .is_failure());
        assert!(!LogEvent::TaskEnded.is_failure());
    }

    #[test]
    fn test_file_log_appends_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_LOG_FILE);

        {
            let mut log = FileLog::open(&path).unwrap();
            log.record(LogEvent::SessionStarted);
        }
        {
            let mut log = FileLog::open(&path).unwrap();
            log.record(LogEvent::SessionEnded);
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - session started"));
        assert!(lines[1].ends_with(" - session ended"));
    }

    #[test]
    fn test_file_log_open_fails_for_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(FileLog::open(temp_dir.path()).is_err());
    }

    #[test]
    fn test_memory_log_render() {
        let mut log = MemoryLog::new();
        log.record(LogEvent::UserExit);
        log.record(LogEvent::SessionEnded);
        assert_eq!(log.events().len(), 2);
        assert_eq!(
            log.render("T"),
            "T - user exit\nT - session ended\n"
        );
    }
}
