//! Per-task conversion summary table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{TaskReport, TaskStatus};

/// Console summary of one executed task.
#[derive(Debug, Clone)]
pub struct TaskSummary {
    pub directive: String,
    pub output_dir: String,
    pub matched: usize,
    pub converted: usize,
    pub failed: usize,
    pub status: TaskStatus,
}

impl TaskSummary {
    pub fn from_report(report: &TaskReport) -> Self {
        Self {
            directive: report.task.to_string(),
            output_dir: report.output_dir.display().to_string(),
            matched: report.matched(),
            converted: report.converted(),
            failed: report.failed(),
            status: report.status.clone(),
        }
    }

    fn status_label(&self) -> &str {
        match &self.status {
            TaskStatus::Completed if self.failed == 0 => "completed",
            TaskStatus::Completed => "completed with failures",
            TaskStatus::NoFilesMatched => "no files matched",
            TaskStatus::OutputDirFailed(_) => "output directory unavailable",
        }
    }

    /// Render the summary as an indented table.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("Directive"), Cell::new(&self.directive)]);
        table.add_row(vec![Cell::new("Output"), Cell::new(&self.output_dir)]);
        table.add_row(vec![Cell::new("Matched"), Cell::new(self.matched)]);
        table.add_row(vec![
            Cell::new("Converted"),
            Cell::new(self.converted).fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new("Failed"),
            Cell::new(self.failed).fg(if self.failed == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        table.add_row(vec![
            Cell::new("Status"),
            Cell::new(self.status_label()).add_attribute(Attribute::Bold),
        ]);

        let mut out = format!(
            "\n    {} {}\n",
            style("▸").cyan(),
            style("TASK SUMMARY").white().bold()
        );
        for line in table.to_string().lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
