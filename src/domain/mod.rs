//! Core domain models for verrange
//!
//! This module contains the fundamental types used throughout the application:
//! - The canonical reference list that defines version adjacency
//! - Runs of contiguous versions and the grouped result
//! - The built-in list of known game releases

mod known;
mod reference;
mod run;

pub use known::{game_versions, GAME_VERSIONS};
pub(crate) use reference::strip_bom;
pub use reference::ReferenceList;
pub use run::{GroupedVersions, VersionRun, LIST_SEPARATOR, RANGE_SEPARATOR};
