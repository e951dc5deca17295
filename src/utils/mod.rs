//! Utility modules - terminal styling

pub mod styling;

pub use styling::*;
