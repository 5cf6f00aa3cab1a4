//! Descending version ordering
//!
//! Versions are compared with semantic-version precedence after light
//! normalization, so that short release names such as `1.20` line up with
//! `1.20.0`. Strings that still fail to parse (snapshots like `23w13a`) sort
//! after every parsable version and compare by their numeric components.

use semver::Version;
use std::cmp::Ordering;

/// Sort key for a single version string
#[derive(Debug, Clone, PartialEq, Eq)]
enum SortKey {
    /// Parsed semantic version
    Semver(Version),
    /// Numeric components of an unparsable string
    Loose(Vec<u64>),
}

impl SortKey {
    fn of(version: &str) -> Self {
        match parse_version(version) {
            Some(parsed) => SortKey::Semver(parsed),
            None => SortKey::Loose(numeric_parts(version)),
        }
    }

    /// Ascending comparison
    fn cmp_ascending(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Build metadata does not take part in precedence
            (SortKey::Semver(a), SortKey::Semver(b)) => (a.major, a.minor, a.patch, &a.pre)
                .cmp(&(b.major, b.minor, b.patch, &b.pre)),
            (SortKey::Semver(_), SortKey::Loose(_)) => Ordering::Greater,
            (SortKey::Loose(_), SortKey::Semver(_)) => Ordering::Less,
            (SortKey::Loose(a), SortKey::Loose(b)) => compare_parts(a, b),
        }
    }
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// - strips a leading `v`
/// - pads a one or two component release with zeros (`1.20` -> `1.20.0`)
/// - keeps pre-release and build suffixes (`1.21-pre1` -> `1.21.0-pre1`)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);

    let suffix_start = version.find(['-', '+']).unwrap_or(version.len());
    let (core, suffix) = version.split_at(suffix_start);

    let normalized = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

fn numeric_parts(version: &str) -> Vec<u64> {
    let version = version.strip_prefix('v').unwrap_or(version);
    version
        .split(|c: char| !c.is_ascii_digit())
        .filter_map(|p| p.parse().ok())
        .collect()
}

fn compare_parts(a: &[u64], b: &[u64]) -> Ordering {
    for (pa, pb) in a.iter().zip(b.iter()) {
        match pa.cmp(pb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    // If all common parts are equal, the longer version is greater
    a.len().cmp(&b.len())
}

/// Compare two versions for a newest-first ordering
///
/// Returns `Ordering::Less` when `a` is newer than `b`, i.e. when `a` should
/// come first.
pub fn compare_descending(a: &str, b: &str) -> Ordering {
    SortKey::of(b).cmp_ascending(&SortKey::of(a))
}

/// Sort versions newest first
///
/// The sort is stable: versions with equal precedence (`1.20` and `1.20.0`,
/// or repeated entries) keep their input order. Original strings are
/// returned untouched.
pub fn sort_descending<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
    let mut keyed: Vec<(SortKey, &str)> = versions
        .iter()
        .map(|v| (SortKey::of(v.as_ref()), v.as_ref()))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| b.cmp_ascending(a));
    keyed.into_iter().map(|(_, v)| v.to_string()).collect()
}
