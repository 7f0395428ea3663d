//! Property tests for destination deduplication.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use themesync::application::AssetMapBuilder;
use themesync::domain::ports::NoopEventSink;
use themesync::{resolve_targets, LocalFs, RecordingEventSink, Rule, SyncContext};
use themesync::{EventKind, SyncEvent};

fn file_names() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-e]{1,3}\\.png", 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: when two rules produce the same destination, the earlier
    /// rule keeps it and every loser is reported exactly once.
    #[test]
    fn property_earlier_rule_wins_collisions(
        first in file_names(),
        second in file_names(),
    ) {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for name in &first {
            fs::create_dir_all(root.join("src/first")).unwrap();
            fs::write(root.join("src/first").join(name), "first").unwrap();
        }
        for name in &second {
            fs::create_dir_all(root.join("src/second")).unwrap();
            fs::write(root.join("src/second").join(name), "second").unwrap();
        }

        let context = SyncContext::new(root.join("src"), root, "assets");
        let rules = resolve_targets(
            &[Rule::from("first/*.png"), Rule::from("second/*.png")],
            &context,
        )
        .unwrap()
        .rules;

        let sink = RecordingEventSink::new();
        let fs_port = LocalFs::new();
        let map = AssetMapBuilder::new(&fs_port, &sink).build(&rules);

        let union: BTreeSet<&String> = first.iter().chain(second.iter()).collect();
        prop_assert_eq!(map.len(), union.len());

        for name in &first {
            let dest = root.join("assets").join(name);
            let winner = root.join("src/first").join(name);
            prop_assert_eq!(map.claimant(&dest), Some(winner.as_path()));
        }

        let losers: BTreeSet<String> = sink
            .of_kind(EventKind::DuplicateIgnored)
            .into_iter()
            .filter_map(|event| match event {
                SyncEvent::DuplicateIgnored { path, .. } => {
                    path.file_name().map(|n| n.to_string_lossy().into_owned())
                }
                _ => None,
            })
            .collect();
        let expected: BTreeSet<String> = first.intersection(&second).cloned().collect();
        prop_assert_eq!(losers, expected);
    }

    /// PROPERTY: a map never holds two entries for one destination.
    #[test]
    fn property_destinations_are_unique(
        names in file_names(),
    ) {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for name in &names {
            fs::create_dir_all(root.join("src/img")).unwrap();
            fs::write(root.join("src/img").join(name), "x").unwrap();
        }

        let context = SyncContext::new(root.join("src"), root, "assets");
        let rules = resolve_targets(
            &[Rule::from("img/*.png"), Rule::from("img/**/*.png"), Rule::from("**/*.png")],
            &context,
        )
        .unwrap()
        .rules;

        let fs_port = LocalFs::new();
        let map = AssetMapBuilder::new(&fs_port, &NoopEventSink).build(&rules);

        prop_assert_eq!(map.len(), names.len());
        prop_assert_eq!(map.destinations().len(), map.len());
    }
}
