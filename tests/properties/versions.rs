//! Property tests for version parsing, bumping, and stamp persistence.

use proptest::prelude::*;

use roadie::stamp::{load_stamp, parse_describe, write_stamp, BumpLevel, Stamp, Version};

fn version_triple() -> impl Strategy<Value = (u64, u64, u64)> {
    (0..100_000u64, 0..100_000u64, 0..100_000u64)
}

fn bump_level() -> impl Strategy<Value = BumpLevel> {
    prop_oneof![
        Just(BumpLevel::Major),
        Just(BumpLevel::Minor),
        Just(BumpLevel::Patch),
    ]
}

/// git-describe style suffix: `-<distance>-g<hash>`
fn describe_suffix() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (1..2_000u32, proptest::string::string_regex("[0-9a-f]{7,12}").unwrap())
            .prop_map(|(distance, hash)| format!("-{distance}-g{hash}")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `Version` display/parse round-trips exactly.
    #[test]
    fn property_version_display_parse_round_trips(
        (major, minor, patch) in version_triple()
    ) {
        let version = Version::new(major, minor, patch);
        let rendered = version.to_string();
        let parsed: Version = rendered.parse().expect("rendered version must parse");
        prop_assert_eq!(parsed, version);
    }

    /// PROPERTY: Bumping any level produces a strictly greater version and
    /// zeroes every component below the bumped one.
    #[test]
    fn property_bump_strictly_increases(
        (major, minor, patch) in version_triple(),
        level in bump_level()
    ) {
        let version = Version::new(major, minor, patch);
        let bumped = version.bump(level);

        prop_assert!(bumped > version, "{bumped} should order above {version}");
        match level {
            BumpLevel::Major => {
                prop_assert_eq!(bumped, Version::new(major + 1, 0, 0));
            }
            BumpLevel::Minor => {
                prop_assert_eq!(bumped, Version::new(major, minor + 1, 0));
            }
            BumpLevel::Patch => {
                prop_assert_eq!(bumped, Version::new(major, minor, patch + 1));
            }
        }
    }

    /// PROPERTY: Any `[v]X.Y.Z[-N-ghash]` describe output parses to X.Y.Z.
    #[test]
    fn property_parse_describe_accepts_tag_shapes(
        (major, minor, patch) in version_triple(),
        v_prefix in proptest::bool::ANY,
        suffix in describe_suffix()
    ) {
        let prefix = if v_prefix { "v" } else { "" };
        let output = format!("{prefix}{major}.{minor}.{patch}{suffix}\n");

        let parsed = parse_describe(&output).expect("tag-shaped output must parse");
        prop_assert_eq!(parsed, Version::new(major, minor, patch));
    }

    /// PROPERTY: `parse_describe` never panics, whatever git prints.
    #[test]
    fn property_parse_describe_never_panics(
        output in proptest::string::string_regex("[ -~]{0,48}").unwrap()
    ) {
        let _ = parse_describe(&output);
    }
}

proptest! {
    // Each case touches the filesystem, so keep the count small.
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A stamp written to disk loads back identically.
    #[test]
    fn property_stamp_round_trips_through_disk(
        (major, minor, patch) in version_triple()
    ) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("version.toml");

        let stamp = Stamp {
            version: Version::new(major, minor, patch),
            stamped: chrono::Utc::now(),
        };

        write_stamp(&path, &stamp).expect("write stamp");
        let loaded = load_stamp(&path).expect("load stamp").expect("stamp exists");
        prop_assert_eq!(loaded, stamp);
    }
}
