//! List output formatter: one range label per line

use crate::output::OutputFormatter;
use crate::report::GroupingReport;
use std::io::Write;

/// Writes each label on its own line
#[derive(Debug, Default)]
pub struct ListFormatter;

impl ListFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for ListFormatter {
    fn format(&self, report: &GroupingReport, writer: &mut dyn Write) -> std::io::Result<()> {
        for label in &report.labels {
            writeln!(writer, "{}", label)?;
        }
        Ok(())
    }
}
