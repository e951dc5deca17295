//! Report module - conversion log and task summaries

pub mod log;
pub mod summary;

pub use log::*;
pub use summary::*;
