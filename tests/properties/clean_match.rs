//! Property tests for cleanMatch safety and the cleanup exclusion invariant.

use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use themesync::application::{AssetMapBuilder, CleanupReconciler};
use themesync::domain::ports::NoopEventSink;
use themesync::domain::value_objects::GENERIC_CLEAN_PATTERNS;
use themesync::{resolve_targets, LocalFs, Rename, Rule, SyncContext};

fn generic_pattern() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(GENERIC_CLEAN_PATTERNS)
}

fn dest_dir() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,2}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a generic cleanMatch is disabled whatever the rule says.
    #[test]
    fn property_generic_clean_match_is_always_disabled(
        pattern in generic_pattern(),
        dest in dest_dir(),
    ) {
        let context = SyncContext::new("/theme/src", "/theme", "assets");
        let resolved = resolve_targets(
            &[Rule::new("icons/*.svg").with_dest(dest).with_clean_match(pattern)],
            &context,
        )
        .unwrap();

        prop_assert!(resolved.rules[0].clean_match.is_none());
        prop_assert_eq!(resolved.warnings.len(), 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: files owned by the asset map survive cleanup even when
    /// they match the rule's cleanMatch.
    #[test]
    fn property_mapped_files_are_never_deleted(
        icons in proptest::collection::btree_set("[a-f]{1,4}", 1..6),
        strays in proptest::collection::btree_set("[g-k]{1,4}", 0..4),
    ) {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/icons")).unwrap();
        fs::create_dir_all(root.join("snippets")).unwrap();
        for icon in &icons {
            fs::write(root.join("src/icons").join(format!("icon-{icon}.svg")), icon).unwrap();
            fs::write(root.join("snippets").join(format!("icon-{icon}.liquid")), "old").unwrap();
        }
        for stray in &strays {
            fs::write(root.join("snippets").join(format!("icon-{stray}.liquid")), "").unwrap();
        }

        let context = SyncContext::new(root.join("src"), root, "assets");
        let rules = resolve_targets(
            &[Rule::new("icons/icon-*.svg")
                .with_dest("snippets")
                .with_rename(Rename::template("{stem}.liquid"))
                .with_clean_match("icon-*.liquid")],
            &context,
        )
        .unwrap()
        .rules;

        let fs_port = LocalFs::new();
        let map = AssetMapBuilder::new(&fs_port, &NoopEventSink).build(&rules);
        let result = CleanupReconciler::new(&fs_port, &NoopEventSink).delete_all(
            &CleanupReconciler::new(&fs_port, &NoopEventSink).plan(
                &context.asset_dir,
                &Default::default(),
                &map,
                &rules,
            ),
        );

        prop_assert_eq!(result.deleted.len(), strays.len());
        for icon in &icons {
            let snippet = root.join("snippets").join(format!("icon-{icon}.liquid"));
            prop_assert!(snippet.exists());
        }
    }
}
