//! Batch runner: one input line, many independent directives

use super::context::BatchContext;
use super::directive::{parse, DirectiveError};
use super::executor::{execute_task, TaskReport};
use crate::report::LogEvent;

/// Character separating directives on one line.
pub const DIRECTIVE_SEPARATOR: char = '|';

/// What happened to one directive of a line.
#[derive(Debug, Clone)]
pub enum DirectiveOutcome {
    Executed(TaskReport),
    Rejected(DirectiveError),
}

/// Split a line into trimmed, non-empty directive strings.
pub fn split_directives(line: &str) -> Vec<&str> {
    line.split(DIRECTIVE_SEPARATOR)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Parse and execute every directive on `line`, left to right.
///
/// A directive that fails to parse is reported and logged; the directives
/// after it still run.
pub fn run_line(line: &str, ctx: &mut BatchContext<'_>) -> Vec<DirectiveOutcome> {
    let mut outcomes = Vec::new();

    for directive in split_directives(line) {
        match parse(directive) {
            Ok(task) => outcomes.push(DirectiveOutcome::Executed(execute_task(&task, ctx))),
            Err(e) => {
                ctx.failure(&format!("Directive failed: {}", directive));
                ctx.say(&format!("      reason: {}", e));
                ctx.log.record(LogEvent::DirectiveFailed {
                    directive: directive.to_string(),
                    reason: e.to_string(),
                });
                outcomes.push(DirectiveOutcome::Rejected(e));
            }
        }
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_directives() {
        assert_eq!(
            split_directives(" mp3 to aac |  | aac to wav |"),
            vec!["mp3 to aac", "aac to wav"]
        );
    }

    #[test]
    fn test_split_directives_blank_line() {
        assert!(split_directives("   ").is_empty());
        assert!(split_directives("|||").is_empty());
    }

    #[test]
    fn test_split_single_directive() {
        assert_eq!(split_directives("all to flac"), vec!["all to flac"]);
    }
}
