//! Explicit session state handed to every batch operation

use std::io::Write;
use std::path::Path;

use super::converter::Converter;
use crate::report::LogSink;
use crate::utils::{failure_line, info_line, progress_line, success_line};

/// Everything a directive needs to run: where to work, what converts, where
/// outcomes go.
///
/// `console` receives operator-facing messages and `log` receives durable
/// entries. Both are written for every reported outcome.
pub struct BatchContext<'a> {
    pub base_dir: &'a Path,
    pub converter: &'a dyn Converter,
    pub log: &'a mut dyn LogSink,
    pub console: &'a mut dyn Write,
}

impl<'a> BatchContext<'a> {
    pub fn new(
        base_dir: &'a Path,
        converter: &'a dyn Converter,
        log: &'a mut dyn LogSink,
        console: &'a mut dyn Write,
    ) -> Self {
        Self {
            base_dir,
            converter,
            log,
            console,
        }
    }

    pub fn info(&mut self, message: &str) {
        self.say(&info_line(message));
    }

    pub fn progress(&mut self, message: &str) {
        self.say(&progress_line(message));
    }

    pub fn success(&mut self, message: &str) {
        self.say(&success_line(message));
    }

    pub fn failure(&mut self, message: &str) {
        self.say(&failure_line(message));
    }

    /// Write raw text to the console; console errors are not batch failures.
    pub fn say(&mut self, text: &str) {
        let _ = writeln!(self.console, "{}", text);
    }
}
