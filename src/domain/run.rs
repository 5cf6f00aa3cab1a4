//! Runs of contiguous versions and the grouped result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the newest and oldest version of a multi-version run
pub const RANGE_SEPARATOR: char = '\u{2013}';

/// Separator between labels in the joined text form
pub const LIST_SEPARATOR: &str = ", ";

/// Versions that are consecutive in the reference list, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionRun(Vec<String>);

impl VersionRun {
    /// Create a run from versions already in descending order
    pub fn new(versions: Vec<String>) -> Self {
        Self(versions)
    }

    /// The newest (first) version of the run
    pub fn newest(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// The oldest (last) version of the run
    pub fn oldest(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Versions of the run, newest first
    pub fn versions(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable label
    ///
    /// A single version renders as itself, longer runs as `newest–oldest`.
    /// Empty runs have no label.
    pub fn label(&self) -> Option<String> {
        match self.0.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            [newest, .., oldest] => Some(format!("{newest}{RANGE_SEPARATOR}{oldest}")),
        }
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for VersionRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or_default())
    }
}

/// Ordered runs covering every grouped version exactly once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedVersions(Vec<VersionRun>);

impl GroupedVersions {
    pub fn new(runs: Vec<VersionRun>) -> Self {
        Self(runs)
    }

    /// The result returned when the newest requested version is not in the
    /// reference list: a single empty group
    pub fn unmatched() -> Self {
        Self(vec![VersionRun::default()])
    }

    /// Returns true for the single-empty-group result
    pub fn is_unmatched(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only.is_empty())
    }

    pub fn runs(&self) -> &[VersionRun] {
        &self.0
    }

    /// Total number of versions across all runs
    pub fn version_count(&self) -> usize {
        self.0.iter().map(VersionRun::len).sum()
    }

    /// One label per non-empty run, in run order
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().filter_map(VersionRun::label).collect()
    }

    /// Labels joined with `", "`
    pub fn to_text(&self) -> String {
        self.labels().join(LIST_SEPARATOR)
    }

    /// Raw groups as nested vectors
    pub fn into_groups(self) -> Vec<Vec<String>> {
        self.0.into_iter().map(VersionRun::into_inner).collect()
    }
}

impl fmt::Display for GroupedVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
