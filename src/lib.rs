//! GOtobe: Batch Audio Conversion Library
//!
//! Parses conversion directives such as `.mp3,.flac to wav`, finds matching
//! files in a working directory and drives an external converter per file.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
