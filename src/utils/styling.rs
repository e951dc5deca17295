//! Terminal styling utilities for the interactive converter

use console::{style, Emoji};

use crate::pipeline::{CONVERTIBLE_EXTENSIONS, DIRECTIVE_SEPARATOR, SOURCE_DIR_NAME, WILDCARD};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ARROW: Emoji<'_, '_> = Emoji("🎵 ", ">> ");
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[x] ");

/// Prompt shown before each directive line.
pub const PROMPT: &str = "Go>>> ";

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("GOtobe").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Batch audio conversion, one directive at a time").dim()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Usage hints shown at session start.
pub fn usage_text() -> String {
    let lines = [
        format!(
            "Convert one format:        {}",
            style(".mp3 to .aac").yellow()
        ),
        format!(
            "Several directives:        {}",
            style(format!(".mp3 to .aac {} .aac to .wav", DIRECTIVE_SEPARATOR)).yellow()
        ),
        format!(
            "Several sources at once:   {}",
            style(".mp3,.aac to .wav").yellow()
        ),
        format!(
            "Every audio file:          {}",
            style(format!("{} to .xxx", WILDCARD)).yellow()
        ),
        format!(
            "Inputs are read from ./{}; outputs go to a folder named after the target (e.g. ./AAC)",
            SOURCE_DIR_NAME
        ),
        format!("Type {} or {} to leave.", style("exit").bold(), style("quit").bold()),
    ];

    let mut out = String::new();
    for line in lines {
        out.push_str("    ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// The extensions matched by the wildcard selector, one line.
pub fn formats_text() -> String {
    format!(
        "{} {}",
        style(format!("'{}' matches:", WILDCARD)).cyan().bold(),
        CONVERTIBLE_EXTENSIONS.join(" ")
    )
}

pub fn info_line(message: &str) -> String {
    format!("    {}{}", INFO, message)
}

pub fn progress_line(message: &str) -> String {
    format!("    {}{}", ARROW, style(message).dim())
}

pub fn success_line(message: &str) -> String {
    format!("    {}{}", CHECK, style(message).green())
}

pub fn failure_line(message: &str) -> String {
    format!("    {}{}", CROSS, style(message).red().bold())
}

/// Print a warning that doesn't stop the session
pub fn print_warning(message: &str) {
    eprintln!("    {} {}", style("!").yellow().bold(), style(message).yellow());
}
