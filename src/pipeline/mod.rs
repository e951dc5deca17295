//! Pipeline module - directive parsing, input matching and batch execution

pub mod batch;
pub mod context;
pub mod converter;
pub mod directive;
pub mod executor;
pub mod extension;
pub mod matcher;

pub use batch::*;
pub use context::BatchContext;
pub use converter::{ConversionOutput, Converter, ConverterConfig, ConverterError, FfmpegConverter};
pub use directive::*;
pub use executor::*;
pub use extension::*;
pub use matcher::*;
