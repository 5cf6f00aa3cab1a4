//! verrange - contiguous version range library
//!
//! This library collapses a set of supported versions into compact ranges
//! against a canonical, newest-first reference list:
//! - `["1.20.1", "1.20.2", "1.20.3"]` becomes `1.20.3–1.20.1`
//! - gaps in the reference list split the output into several ranges
//! - single versions are shown as-is

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod output;
pub mod report;

pub use domain::{GroupedVersions, ReferenceList, VersionRun};
pub use grouping::sort::{compare_descending, parse_version, sort_descending};
pub use grouping::{
    format_versions_list_string, get_grouped_versions_list, group_continuous_versions,
    VersionRangeGrouper,
};
