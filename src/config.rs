//! Runtime configuration resolved from CLI arguments
//!
//! This module provides:
//! - Reference list selection (built-in game versions or a file)
//! - Reference file loading for TOML and plain-text lists
//! - Output settings derived from the CLI flags

use crate::cli::{split_versions, CliArgs};
use crate::domain::{strip_bom, ReferenceList};
use crate::error::{AppError, ConfigError, IoError};
use crate::grouping::VersionRangeGrouper;
use crate::output::{OutputConfig, OutputFormat};
use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "VERRANGE_LOG";

/// Where the canonical ordering comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReferenceSource {
    /// The built-in list of game releases
    #[default]
    Builtin,
    /// A reference list file
    File(PathBuf),
}

impl ReferenceSource {
    /// Short description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            ReferenceSource::Builtin => "built-in game versions".to_string(),
            ReferenceSource::File(path) => path.display().to_string(),
        }
    }
}

/// Settings for a single run of the tool
#[derive(Debug, Clone)]
pub struct Settings {
    /// Canonical ordering source
    pub reference: ReferenceSource,
    /// Output configuration
    pub output: OutputConfig,
    /// Versions given on the command line (empty means read stdin)
    pub versions: Vec<String>,
}

impl Settings {
    /// Resolve settings from parsed CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let format = match (args.json, args.format) {
            (true, Some(format)) if format != OutputFormat::Json => {
                return Err(ConfigError::conflicting_options(format!(
                    "--json cannot be combined with --format {}",
                    format_name(format)
                )));
            }
            (true, _) => OutputFormat::Json,
            (false, format) => format.unwrap_or_default(),
        };

        let reference = args
            .reference
            .clone()
            .map(ReferenceSource::File)
            .unwrap_or_default();

        Ok(Self {
            reference,
            output: OutputConfig::from_cli(format, args.verbose, args.quiet, args.no_color),
            versions: args.inline_versions(),
        })
    }

    /// Build the grouper for the configured reference list
    ///
    /// The built-in list borrows the shared grouper instead of copying it.
    pub fn grouper(&self) -> Result<Cow<'static, VersionRangeGrouper>, AppError> {
        match &self.reference {
            ReferenceSource::Builtin => {
                Ok(Cow::Borrowed(VersionRangeGrouper::game_versions()))
            }
            ReferenceSource::File(path) => {
                Ok(Cow::Owned(VersionRangeGrouper::new(load_reference(path)?)))
            }
        }
    }

    /// Versions to group: the inline ones, or whatever `input` provides
    pub fn resolve_versions(&self, input: impl Read) -> Result<Vec<String>, AppError> {
        if !self.versions.is_empty() {
            return Ok(self.versions.clone());
        }

        let versions = read_versions(input)?;
        if versions.is_empty() {
            return Err(ConfigError::NoVersions.into());
        }
        Ok(versions)
    }
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::List => "list",
        OutputFormat::Json => "json",
    }
}

/// Read whitespace/comma separated versions from a reader
pub fn read_versions(mut input: impl Read) -> Result<Vec<String>, IoError> {
    let mut buf = String::new();
    input.read_to_string(&mut buf).map_err(IoError::stdin)?;
    Ok(split_versions(&buf))
}

/// Load a reference list file
///
/// `.toml` files must contain `versions = [...]`; anything else is read as
/// plain text with one version per line.
pub fn load_reference(path: &Path) -> Result<ReferenceList, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    let content = strip_bom(&content);

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let list = if is_toml {
        ReferenceList::from_toml_str(content)
            .map_err(|e| ConfigError::reference_parse(path, e.message()))?
    } else {
        ReferenceList::from_plain_text(content)
    };

    if list.is_empty() {
        return Err(ConfigError::empty_reference(path).into());
    }

    debug!(path = %path.display(), entries = list.len(), "loaded reference list");
    Ok(list)
}
