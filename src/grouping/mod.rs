//! Contiguous version range grouping
//!
//! This module provides:
//! - Partitioning of a version set into maximal runs that are contiguous in
//!   a reference list
//! - Rendering of those runs as labels (`1.20.3–1.20.1`) or joined text
//! - Shortcuts that group against the built-in game version list

pub mod sort;

use crate::domain::{game_versions, GroupedVersions, ReferenceList, VersionRun};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Groups version sets against a fixed reference list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRangeGrouper {
    reference: ReferenceList,
}

static GAME_VERSION_GROUPER: LazyLock<VersionRangeGrouper> =
    LazyLock::new(|| VersionRangeGrouper::new(game_versions().clone()));

impl VersionRangeGrouper {
    /// Create a grouper over the given canonical ordering
    pub fn new(reference: ReferenceList) -> Self {
        Self { reference }
    }

    /// The shared grouper over the built-in game version list
    pub fn game_versions() -> &'static VersionRangeGrouper {
        &GAME_VERSION_GROUPER
    }

    pub fn reference(&self) -> &ReferenceList {
        &self.reference
    }

    /// Partition `versions` into runs, see [`group_continuous_versions`]
    pub fn group<S: AsRef<str>>(&self, versions: &[S]) -> GroupedVersions {
        group_continuous_versions(versions, &self.reference)
    }

    /// One label per run, newest run first
    pub fn labels<S: AsRef<str>>(&self, versions: &[S]) -> Vec<String> {
        self.group(versions).labels()
    }

    /// Labels joined with `", "`
    pub fn format<S: AsRef<str>>(&self, versions: &[S]) -> String {
        self.group(versions).to_text()
    }
}

/// Partition versions into maximal runs that are contiguous in `reference`.
///
/// Versions are sorted newest first, then walked once: a version extends the
/// current run when it is the reference-list successor of the previous one,
/// otherwise it starts a new run. A version missing from the reference list
/// always ends up in a run of its own.
///
/// If the newest version is not in the reference list at all (or `versions`
/// is empty) the result is a single empty group.
pub fn group_continuous_versions<S: AsRef<str>>(
    versions: &[S],
    reference: &ReferenceList,
) -> GroupedVersions {
    let sorted = sort::sort_descending(versions);
    let mut remaining = sorted.into_iter();

    let Some(first) = remaining.next() else {
        return GroupedVersions::unmatched();
    };
    let Some(first_index) = reference.position(&first) else {
        warn!(
            version = %first,
            "newest version is not in the reference list, nothing grouped"
        );
        return GroupedVersions::unmatched();
    };

    debug!(count = versions.len(), newest = %first, "grouping versions");

    let mut runs = Vec::new();
    let mut current = vec![first];
    let mut ref_index = Some(first_index);

    for version in remaining {
        let expected = ref_index.and_then(|index| reference.successor(index));
        if expected == Some(version.as_str()) {
            ref_index = ref_index.map(|index| index + 1);
            current.push(version);
            continue;
        }

        debug!(len = current.len(), next = %version, "closing run");
        ref_index = reference.position(&version);
        let closed = std::mem::replace(&mut current, vec![version]);
        runs.push(VersionRun::new(closed));
    }
    runs.push(VersionRun::new(current));

    GroupedVersions::new(runs)
}

/// Labels for `versions` grouped against the built-in game version list
pub fn get_grouped_versions_list<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
    VersionRangeGrouper::game_versions().labels(versions)
}

/// Comma-joined labels for `versions` grouped against the built-in game
/// version list
pub fn format_versions_list_string<S: AsRef<str>>(versions: &[S]) -> String {
    VersionRangeGrouper::game_versions().format(versions)
}
