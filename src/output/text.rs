//! Text output formatter for human-readable display
//!
//! This module provides:
//! - The joined range string on a single line
//! - Per-run breakdown with version counts in verbose mode
//! - Versions missing from the reference list

use crate::domain::VersionRun;
use crate::output::{OutputFormatter, Verbosity};
use crate::report::GroupingReport;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn count_label(len: usize) -> String {
        if len == 1 {
            "1 version".to_string()
        } else {
            format!("{} versions", len)
        }
    }

    /// Format a single run line
    fn format_run_line(
        &self,
        run: &VersionRun,
        max_label_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let Some(label) = run.label() else {
            return Ok(());
        };
        let count = Self::count_label(run.len());

        if self.color {
            let label_display = format!("{:width$}", label, width = max_label_len);
            writeln!(writer, "  {} {}", label_display.bold(), count.dimmed())
        } else {
            writeln!(writer, "  {:width$} {}", label, count, width = max_label_len)
        }
    }

    /// Format the list of versions missing from the reference list
    fn format_missing(&self, missing: &[String], writer: &mut dyn Write) -> std::io::Result<()> {
        let joined = missing.join(", ");
        if self.color {
            writeln!(
                writer,
                "  {} {}",
                "not in reference list:".yellow(),
                joined.yellow()
            )
        } else {
            writeln!(writer, "  not in reference list: {}", joined)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &GroupingReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if !report.formatted.is_empty() {
            writeln!(writer, "{}", report.formatted)?;
        }

        if self.verbosity != Verbosity::Verbose {
            return Ok(());
        }

        let runs = report.grouped.runs();
        let max_label_len = runs
            .iter()
            .filter_map(|r| r.label())
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(writer)?;
        for run in runs {
            self.format_run_line(run, max_label_len, writer)?;
        }

        if report.is_unmatched() {
            let note = "  no version could be matched against the reference list";
            if self.color {
                writeln!(writer, "{}", note.yellow())?;
            } else {
                writeln!(writer, "{}", note)?;
            }
        }

        if report.has_missing() {
            self.format_missing(&report.missing, writer)?;
        }

        Ok(())
    }
}
