//! Interactive session loop: read directive lines until the operator leaves

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::pipeline::{run_line, BatchContext, DirectiveOutcome};
use crate::report::{LogEvent, TaskSummary};
use crate::utils::{usage_text, PROMPT};

/// Lines that end the session, compared case-insensitively.
pub const EXIT_KEYWORDS: &[&str] = &["exit", "quit"];

/// Why the session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    UserExit,
    EndOfInput,
}

pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| line.eq_ignore_ascii_case(keyword))
}

/// Run one directive line and print a summary table for each executed task.
pub fn run_directive_line(line: &str, ctx: &mut BatchContext<'_>) -> Vec<DirectiveOutcome> {
    let outcomes = run_line(line, ctx);
    for outcome in &outcomes {
        if let DirectiveOutcome::Executed(report) = outcome {
            ctx.say(&TaskSummary::from_report(report).render());
        }
    }
    outcomes
}

/// Read lines from `input` and run each as a batch until `exit`/`quit` or end of input.
///
/// Blank lines are ignored. Only console I/O failures end the loop with an
/// error; directive and conversion failures are handled per line.
pub fn run_session<R: BufRead>(mut input: R, ctx: &mut BatchContext<'_>) -> Result<SessionEnd> {
    ctx.say(&usage_text());

    let mut line = String::new();
    loop {
        write!(ctx.console, "{}", PROMPT).context("Failed to write prompt")?;
        ctx.console.flush().context("Failed to flush console")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read directive line")?;
        if read == 0 {
            ctx.say("");
            return Ok(SessionEnd::EndOfInput);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_exit_command(trimmed) {
            ctx.info("Exiting.");
            ctx.log.record(LogEvent::UserExit);
            return Ok(SessionEnd::UserExit);
        }

        run_directive_line(trimmed, ctx);
        ctx.info("Line complete.");
        ctx.say("");
    }
}
