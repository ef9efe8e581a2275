//! Property tests for artifact pattern matching.

use std::path::Path;

use proptest::prelude::*;

use roadie::config::CleanConfig;
use roadie::sweep::{ArtifactSet, DEFAULT_PATTERNS};

/// Path segments that cannot collide with the default artifact names:
/// lowercase alphanumerics only, so `__pycache__`, dotted names, and
/// `*.egg-info` are unreachable, and the handful of plain-word artifact
/// directories is filtered out.
fn safe_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9_-]{0,12}")
        .unwrap()
        .prop_filter("must not be a default artifact name", |s| {
            !matches!(s.as_str(), "build" | "dist" | "htmlcov")
        })
}

fn two_pattern_set() -> ArtifactSet {
    ArtifactSet::from_patterns(
        Path::new("."),
        &["cache/".to_string(), "*.log".to_string()],
    )
    .expect("patterns build")
}

fn default_set() -> ArtifactSet {
    let patterns: Vec<String> = DEFAULT_PATTERNS.iter().map(|s| s.to_string()).collect();
    ArtifactSet::from_patterns(Path::new("."), &patterns).expect("default patterns build")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A bare (file) pattern never matches a directory, and a
    /// trailing-slash (directory) pattern never matches a file.
    #[test]
    fn property_pattern_kinds_never_cross(seg in safe_segment()) {
        let set = two_pattern_set();

        let log_name = format!("{seg}.log");
        prop_assert!(set.matches_file(Path::new(&log_name)));
        prop_assert!(!set.matches_dir(Path::new(&log_name)));

        prop_assert!(set.matches_dir(Path::new("cache")));
        prop_assert!(!set.matches_file(Path::new("cache")));
    }

    /// PROPERTY: Directory patterns apply at any depth.
    #[test]
    fn property_dir_patterns_match_at_any_depth(
        parent in safe_segment(),
        child in safe_segment()
    ) {
        let set = two_pattern_set();
        let nested = format!("{parent}/{child}/cache");
        prop_assert!(set.matches_dir(Path::new(&nested)));
    }

    /// PROPERTY: The default artifact set never touches source-looking
    /// paths.
    #[test]
    fn property_defaults_never_match_sources(
        seg in safe_segment(),
        module in safe_segment()
    ) {
        let set = default_set();

        let source = format!("src/{seg}/{module}.py");
        prop_assert!(!set.matches_file(Path::new(&source)), "{source}");

        let package = format!("src/{seg}");
        prop_assert!(!set.matches_dir(Path::new(&package)), "{package}");
    }

    /// PROPERTY: The version stamp is only swept at the project root.
    #[test]
    fn property_stamp_pattern_is_rooted(seg in safe_segment()) {
        let set = ArtifactSet::for_config(
            Path::new("."),
            &CleanConfig::default(),
            "version.toml",
        )
        .expect("set builds");

        prop_assert!(set.matches_file(Path::new("version.toml")));

        let nested = format!("{seg}/version.toml");
        prop_assert!(!set.matches_file(Path::new(&nested)), "{nested}");
    }
}
