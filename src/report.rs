//! Grouping report for a single request
//!
//! Bundles everything the output layer needs: the raw groups, their labels,
//! the joined text and the requested versions the reference list does not
//! know about.

use crate::domain::GroupedVersions;
use crate::grouping::VersionRangeGrouper;
use tracing::{debug, warn};

/// Result of grouping one version set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingReport {
    /// Runs in descending order
    pub grouped: GroupedVersions,
    /// One label per non-empty run
    pub labels: Vec<String>,
    /// Labels joined with `", "`
    pub formatted: String,
    /// Requested versions absent from the reference list, in input order
    pub missing: Vec<String>,
}

impl GroupingReport {
    /// Group `versions` and collect the derived views
    pub fn build<S: AsRef<str>>(grouper: &VersionRangeGrouper, versions: &[S]) -> Self {
        let grouped = grouper.group(versions);
        let labels = grouped.labels();
        let formatted = labels.join(crate::domain::LIST_SEPARATOR);
        let missing: Vec<String> = grouper
            .reference()
            .missing(versions)
            .into_iter()
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            warn!(missing = ?missing, "versions not found in reference list");
        }
        debug!(runs = grouped.runs().len(), formatted = %formatted, "grouping finished");

        Self {
            grouped,
            labels,
            formatted,
            missing,
        }
    }

    /// Returns true if some requested versions are not in the reference list
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Returns true if nothing could be grouped
    pub fn is_unmatched(&self) -> bool {
        self.grouped.is_unmatched()
    }
}
