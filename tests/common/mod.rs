//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use gotobe::pipeline::{ConversionOutput, Converter, ConverterError, SOURCE_DIR_NAME};
use tempfile::TempDir;

/// Converter double: writes a small output file, or fails for chosen file names.
///
/// Every attempted input is recorded in call order.
#[derive(Default)]
pub struct StubConverter {
    failing: Vec<String>,
    pub attempts: RefCell<Vec<PathBuf>>,
}

impl StubConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail conversions whose input file name equals one of `names`.
    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|n| n.to_string()).collect(),
            attempts: RefCell::new(Vec::new()),
        }
    }

    pub fn attempted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .attempts
            .borrow()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Converter for StubConverter {
    fn name(&self) -> &str {
        "stub"
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<ConversionOutput, ConverterError> {
        self.attempts.borrow_mut().push(input.to_path_buf());

        let name = input.file_name().unwrap().to_string_lossy().to_string();
        if self.failing.contains(&name) {
            return Err(ConverterError::Failed {
                status: "exit status: 1".to_string(),
                output: format!("{}: Invalid data found when processing input", name),
            });
        }

        fs::write(output, b"converted")?;
        Ok(ConversionOutput {
            text: format!("stub converted {}", name),
        })
    }

    fn validate(&self) -> Result<(), ConverterError> {
        Ok(())
    }
}

/// Create a temporary base directory whose `audio` folder holds the given files.
pub fn create_audio_workspace(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let audio = temp_dir.path().join(SOURCE_DIR_NAME);
    fs::create_dir_all(&audio).unwrap();
    for file in files {
        fs::write(audio.join(file), b"fake audio").unwrap();
    }
    temp_dir
}

/// Sorted file names inside `dir`, or empty if it does not exist.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

/// Console output captured as text.
pub fn console_text(console: &[u8]) -> String {
    String::from_utf8_lossy(console).to_string()
}
