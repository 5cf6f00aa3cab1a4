//! Canonical reference list of versions
//!
//! The reference list defines adjacency: two versions are contiguous when
//! one immediately follows the other in this list. Lists are usually ordered
//! newest first so that they line up with the descending sort used by the
//! grouping algorithm.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Ordered list of known versions with constant-time position lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReferenceFile", into = "ReferenceFile")]
pub struct ReferenceList {
    /// Versions in canonical order
    versions: Vec<String>,
    /// Position of the first occurrence of each version
    positions: HashMap<String, usize>,
}

/// On-disk shape of a reference list (`versions = [...]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReferenceFile {
    versions: Vec<String>,
}

impl From<ReferenceFile> for ReferenceList {
    fn from(file: ReferenceFile) -> Self {
        ReferenceList::new(file.versions)
    }
}

impl From<ReferenceList> for ReferenceFile {
    fn from(list: ReferenceList) -> Self {
        ReferenceFile {
            versions: list.versions,
        }
    }
}

impl ReferenceList {
    /// Create a reference list from versions in canonical order
    ///
    /// Duplicate entries are kept in the sequence, but lookups resolve to
    /// the first occurrence.
    pub fn new<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let versions: Vec<String> = versions.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(versions.len());

        for (index, version) in versions.iter().enumerate() {
            if positions.contains_key(version) {
                warn!(
                    version = %version,
                    index,
                    "duplicate entry in reference list, keeping first occurrence"
                );
                continue;
            }
            positions.insert(version.clone(), index);
        }

        Self {
            versions,
            positions,
        }
    }

    /// Parse a TOML document of the form `versions = ["1.20.1", ...]`
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(strip_bom(content))
    }

    /// Parse a plain-text list: one version per line, `#` starts a comment
    pub fn from_plain_text(content: &str) -> Self {
        Self::new(
            strip_bom(content)
                .lines()
                .map(|line| line.split('#').next().unwrap_or_default().trim())
                .filter(|line| !line.is_empty()),
        )
    }

    /// Position of a version in the list, if present
    pub fn position(&self, version: &str) -> Option<usize> {
        self.positions.get(version).copied()
    }

    /// Version at the given position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.versions.get(index).map(String::as_str)
    }

    /// The entry directly after `index`, i.e. the version that would extend
    /// a run currently ending at `index`
    pub fn successor(&self, index: usize) -> Option<&str> {
        index.checked_add(1).and_then(|next| self.get(next))
    }

    /// Returns true if the version is part of the list
    pub fn contains(&self, version: &str) -> bool {
        self.positions.contains_key(version)
    }

    /// Versions of `candidates` that are not part of the list, in input order
    pub fn missing<'a, S: AsRef<str>>(&self, candidates: &'a [S]) -> Vec<&'a str> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|v| !self.contains(v))
            .collect()
    }

    /// Entries that appear more than once, each reported once
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for (index, version) in self.versions.iter().enumerate() {
            if self.positions.get(version) != Some(&index) && !seen.contains(&version.as_str()) {
                seen.push(version.as_str());
            }
        }
        seen
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Returns true if the list has no entries
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Iterate over the entries in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }
}

/// Drop a leading UTF-8 byte-order mark, which `trim` leaves in place
pub(crate) fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

impl<S: Into<String>> FromIterator<S> for ReferenceList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
