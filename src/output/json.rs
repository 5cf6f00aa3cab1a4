//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the raw groups, labels and joined text
//! - The versions missing from the reference list

use crate::output::{OutputFormatter, Verbosity};
use crate::report::GroupingReport;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a grouping report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Raw groups, newest first
    groups: Vec<&'a [String]>,
    /// One label per non-empty group
    labels: &'a [String],
    /// Labels joined with ", "
    formatted: &'a str,
    /// Requested versions absent from the reference list
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
    /// Per-run detail (verbose only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    runs: Vec<JsonRun<'a>>,
}

/// JSON representation of a single run
#[derive(Serialize)]
struct JsonRun<'a> {
    newest: &'a str,
    oldest: &'a str,
    count: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &GroupingReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let runs: Vec<JsonRun> = if self.verbosity == Verbosity::Verbose {
            report
                .grouped
                .runs()
                .iter()
                .filter_map(|run| {
                    Some(JsonRun {
                        newest: run.newest()?,
                        oldest: run.oldest()?,
                        count: run.len(),
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            groups: report.grouped.runs().iter().map(|r| r.versions()).collect(),
            labels: &report.labels,
            formatted: &report.formatted,
            missing: report.missing.clone(),
            runs,
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
