//! verrange - collapse supported versions into contiguous ranges
//!
//! Reads versions from the command line (or stdin), groups them against the
//! built-in game version list or a user-supplied reference list, and prints
//! the resulting ranges as text, a list, or JSON.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use verrange::cli::CliArgs;
use verrange::config::Settings;
use verrange::logging;
use verrange::output::{create_formatter, Verbosity};
use verrange::report::GroupingReport;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::from_cli(&args)?;
    let verbose = settings.output.verbosity == Verbosity::Verbose;

    logging::init(settings.output.verbosity, settings.output.color);

    // Print version info in verbose mode
    if verbose {
        eprintln!("verrange v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Reference: {}", settings.reference.describe());
    }

    let grouper = settings.grouper()?;
    let versions = settings.resolve_versions(io::stdin().lock())?;

    if verbose {
        eprintln!(
            "Grouping {} versions against {} reference entries",
            versions.len(),
            grouper.reference().len()
        );
    }

    let report = GroupingReport::build(&grouper, &versions);

    // Output results
    let formatter = create_formatter(settings.output.clone());
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    // Partial success - some versions are unknown to the reference list
    if report.has_missing() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
