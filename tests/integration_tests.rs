//! Integration tests for verrange
//!
//! These tests verify:
//! - Grouping scenarios against an explicit reference list
//! - Structural properties of the grouped result
//! - The same properties over generated subsets of the built-in list
//! - Reference list loading from files

use std::fs;
use tempfile::TempDir;
use verrange::{
    format_versions_list_string, get_grouped_versions_list, group_continuous_versions,
    ReferenceList, VersionRangeGrouper,
};

/// Reference list used across the scenarios, newest first
fn reference() -> ReferenceList {
    ReferenceList::new(["1.20.3", "1.20.2", "1.20.1", "1.20.0", "1.19.4"])
}

mod scenarios {
    use super::*;

    #[test]
    fn test_contiguous_run_collapses_to_range() {
        let grouper = VersionRangeGrouper::new(reference());
        let versions = ["1.20.1", "1.20.2", "1.20.3"];

        assert_eq!(grouper.labels(&versions), vec!["1.20.3–1.20.1"]);
        assert_eq!(grouper.format(&versions), "1.20.3–1.20.1");
    }

    #[test]
    fn test_non_contiguous_versions_stay_separate() {
        let grouper = VersionRangeGrouper::new(reference());
        let versions = ["1.20.3", "1.19.4"];

        assert_eq!(grouper.labels(&versions), vec!["1.20.3", "1.19.4"]);
        assert_eq!(grouper.format(&versions), "1.20.3, 1.19.4");
    }

    #[test]
    fn test_unknown_version_degenerates_to_empty_group() {
        let grouper = VersionRangeGrouper::new(reference());
        let grouped = grouper.group(&["9.9.9"]);

        assert_eq!(grouped.clone().into_groups(), vec![Vec::<String>::new()]);
        assert!(grouper.labels(&["9.9.9"]).is_empty());
        assert_eq!(grouper.format(&["9.9.9"]), "");
    }

    #[test]
    fn test_single_version_is_never_a_range() {
        let grouper = VersionRangeGrouper::new(reference());
        for version in reference().iter() {
            let label = grouper.format(&[version]);
            assert_eq!(label, version);
            assert!(!label.contains('–'));
        }
    }

    #[test]
    fn test_builtin_entry_points() {
        let versions = vec![
            "1.19.2".to_string(),
            "1.19.3".to_string(),
            "1.19.4".to_string(),
            "1.18.2".to_string(),
            "1.17.1".to_string(),
            "1.17".to_string(),
        ];

        assert_eq!(
            get_grouped_versions_list(&versions),
            vec!["1.19.4–1.19.2", "1.18.2", "1.17.1–1.17"]
        );
        assert_eq!(
            format_versions_list_string(&versions),
            "1.19.4–1.19.2, 1.18.2, 1.17.1–1.17"
        );
    }
}

mod properties {
    use super::*;

    const INPUTS: &[&[&str]] = &[
        &["1.20.1", "1.20.2", "1.20.3"],
        &["1.20.3", "1.19.4"],
        &["1.19.4", "1.20.0", "1.20.2"],
        &["1.20.3", "1.20.1", "1.18", "1.20.0"],
        &["1.20.2", "1.20.2", "1.20.1"],
    ];

    #[test]
    fn test_formatting_is_idempotent() {
        let grouper = VersionRangeGrouper::new(reference());
        for &input in INPUTS {
            assert_eq!(grouper.format(input), grouper.format(input));
            assert_eq!(grouper.labels(input), grouper.labels(input));
        }
    }

    #[test]
    fn test_every_version_covered_once() {
        for &input in INPUTS {
            let grouped = group_continuous_versions(input, &reference());
            let mut flattened: Vec<String> =
                grouped.into_groups().into_iter().flatten().collect();
            let mut expected: Vec<String> = input.iter().map(|v| v.to_string()).collect();
            flattened.sort();
            expected.sort();
            assert_eq!(flattened, expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_runs_in_descending_order() {
        for &input in INPUTS {
            let grouped = group_continuous_versions(input, &reference());
            let firsts: Vec<&str> = grouped.runs().iter().filter_map(|r| r.newest()).collect();
            for pair in firsts.windows(2) {
                let a = semver::Version::parse(&pad(pair[0])).unwrap();
                let b = semver::Version::parse(&pad(pair[1])).unwrap();
                assert!(a >= b, "{} should not precede {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_runs_are_contiguous_in_reference() {
        let reference = reference();
        for &input in INPUTS {
            let grouped = group_continuous_versions(input, &reference);
            for run in grouped.runs() {
                for pair in run.versions().windows(2) {
                    let a = reference.position(&pair[0]).unwrap();
                    let b = reference.position(&pair[1]).unwrap();
                    assert_eq!(a + 1, b, "{:?} not adjacent", pair);
                }
            }
        }
    }

    fn pad(version: &str) -> String {
        match version.split('.').count() {
            2 => format!("{}.0", version),
            _ => version.to_string(),
        }
    }
}

mod generated {
    use proptest::prelude::*;
    use std::cmp::Ordering;
    use verrange::domain::{game_versions, GAME_VERSIONS};
    use verrange::{compare_descending, group_continuous_versions, VersionRangeGrouper};

    /// Non-empty subset of the built-in list in random order
    fn shuffled_subset() -> impl Strategy<Value = Vec<&'static str>> {
        proptest::sample::subsequence(GAME_VERSIONS, 1..=GAME_VERSIONS.len()).prop_shuffle()
    }

    /// Contiguous slice of the built-in list in random order
    fn shuffled_slice() -> impl Strategy<Value = Vec<&'static str>> {
        (0..GAME_VERSIONS.len())
            .prop_flat_map(|start| (Just(start), start + 1..=GAME_VERSIONS.len()))
            .prop_flat_map(|(start, end)| Just(GAME_VERSIONS[start..end].to_vec()).prop_shuffle())
    }

    proptest! {
        #[test]
        fn every_version_covered_once(input in shuffled_subset()) {
            let grouped = group_continuous_versions(&input, game_versions());
            prop_assert!(!grouped.is_unmatched());

            let mut flattened: Vec<String> = grouped.into_groups().into_iter().flatten().collect();
            let mut expected: Vec<String> = input.iter().map(|v| v.to_string()).collect();
            flattened.sort();
            expected.sort();
            prop_assert_eq!(flattened, expected);
        }

        #[test]
        fn runs_in_descending_order(input in shuffled_subset()) {
            let grouped = group_continuous_versions(&input, game_versions());
            let versions: Vec<&str> = grouped
                .runs()
                .iter()
                .flat_map(|r| r.versions().iter().map(String::as_str))
                .collect();
            for pair in versions.windows(2) {
                prop_assert_eq!(compare_descending(pair[0], pair[1]), Ordering::Less);
            }
        }

        #[test]
        fn runs_are_contiguous_and_maximal(input in shuffled_subset()) {
            let reference = game_versions();
            let grouped = group_continuous_versions(&input, reference);
            let runs = grouped.runs();

            for run in runs {
                for pair in run.versions().windows(2) {
                    let a = reference.position(&pair[0]).unwrap();
                    prop_assert_eq!(reference.successor(a), Some(pair[1].as_str()));
                }
            }
            for pair in runs.windows(2) {
                let tail = reference.position(pair[0].oldest().unwrap()).unwrap();
                prop_assert_ne!(reference.successor(tail), pair[1].newest());
            }
        }

        #[test]
        fn slice_collapses_to_one_range(input in shuffled_slice()) {
            let grouper = VersionRangeGrouper::game_versions();
            let labels = grouper.labels(&input);
            prop_assert_eq!(labels.len(), 1);
            prop_assert_eq!(labels[0].contains('–'), input.len() > 1);
        }

        #[test]
        fn format_joins_labels(input in shuffled_subset()) {
            let grouper = VersionRangeGrouper::game_versions();
            let formatted = grouper.format(&input);
            prop_assert_eq!(&formatted, &grouper.labels(&input).join(", "));
            prop_assert_eq!(formatted, grouper.format(&input));
        }
    }
}

mod reference_files {
    use super::*;
    use verrange::config::load_reference;

    #[test]
    fn test_toml_and_plain_text_agree() {
        let temp_dir = TempDir::new().unwrap();
        let toml_path = temp_dir.path().join("versions.toml");
        let text_path = temp_dir.path().join("versions.txt");

        fs::write(
            &toml_path,
            r#"versions = ["1.20.3", "1.20.2", "1.20.1", "1.20.0", "1.19.4"]"#,
        )
        .unwrap();
        fs::write(&text_path, "1.20.3\n1.20.2\n1.20.1\n1.20.0\n1.19.4\n").unwrap();

        let from_toml = load_reference(&toml_path).unwrap();
        let from_text = load_reference(&text_path).unwrap();
        assert_eq!(from_toml, from_text);
        assert_eq!(from_toml, reference());
    }

    #[test]
    fn test_duplicate_entries_use_first_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.txt");
        fs::write(&path, "1.20.2\n1.20.1\n1.20.2\n1.20.0\n").unwrap();

        let list = load_reference(&path).unwrap();
        assert_eq!(list.position("1.20.2"), Some(0));
        assert_eq!(list.duplicates(), vec!["1.20.2"]);

        let grouper = VersionRangeGrouper::new(list);
        assert_eq!(grouper.format(&["1.20.1", "1.20.2"]), "1.20.2–1.20.1");
    }
}
