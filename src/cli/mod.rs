//! CLI module - argument parsing and the interactive session

mod args;
pub mod session;

pub use args::{Cli, Commands};
pub use session::{is_exit_command, run_directive_line, run_session, SessionEnd, EXIT_KEYWORDS};
