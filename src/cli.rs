//! CLI argument parsing module for verrange

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Split free-form version input on whitespace and commas
pub fn split_versions(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collapse supported versions into contiguous ranges
#[derive(Parser, Debug, Clone)]
#[command(
    name = "verrange",
    version,
    about = "Collapse supported versions into contiguous ranges"
)]
pub struct CliArgs {
    /// Versions to group (read from stdin when omitted)
    pub versions: Vec<String>,

    /// Reference list file (.toml with `versions = [...]`, or one version per line)
    #[arg(short, long, value_name = "FILE")]
    pub reference: Option<PathBuf>,

    // Output options
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output results in JSON format (same as --format json)
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // General options
    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Versions given on the command line, split on commas as well
    pub fn inline_versions(&self) -> Vec<String> {
        self.versions
            .iter()
            .flat_map(|arg| split_versions(arg))
            .collect()
    }
}
