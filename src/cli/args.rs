//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::report::DEFAULT_LOG_FILE;

/// GOtobe - convert audio files in bulk with short directives like `mp3 to wav`
#[derive(Parser, Debug)]
#[command(name = "gotobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base directory. Inputs are read from its `audio` folder and outputs
    /// are written next to it (e.g. `AAC/`).
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Conversion log, opened in append mode.
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Path to the ffmpeg binary
    #[arg(long, default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute one directive line and exit, e.g. `gotobe run "mp3 to wav | all to flac"`
    Run {
        /// Directives separated by '|'
        line: String,
    },

    /// List the extensions matched by the `all` selector
    Formats,
}
