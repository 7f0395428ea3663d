//! Property tests for asset map rebuilds.

use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;
use tempfile::tempdir;

use themesync::application::AssetMapBuilder;
use themesync::domain::entities::AssetMap;
use themesync::domain::ports::NoopEventSink;
use themesync::{resolve_targets, LocalFs, Rename, Rule, SyncContext};

fn relative_file() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap();
    let ext = prop_oneof![Just("png"), Just("js"), Just("svg"), Just("css")];
    (proptest::collection::vec(segment, 1..=3), ext)
        .prop_map(|(segments, ext)| format!("{}.{}", segments.join("/"), ext))
}

fn snapshot(map: &AssetMap) -> Vec<(PathBuf, PathBuf)> {
    map.iter()
        .map(|(source, entry)| (source.to_path_buf(), entry.dest.clone()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rebuilding over an unchanged tree yields the same map.
    #[test]
    fn property_rebuild_is_pure(
        files in proptest::collection::vec(relative_file(), 0..12),
    ) {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for file in &files {
            let path = root.join("src").join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, file).unwrap();
        }

        let context = SyncContext::new(root.join("src"), root, "assets");
        let rules = resolve_targets(
            &[
                Rule::from("**/*.png"),
                Rule::new("**/*.svg")
                    .with_dest("snippets")
                    .with_rename(Rename::template("{stem}.liquid")),
                Rule::new("**/*.js").with_dest("assets/js"),
            ],
            &context,
        )
        .unwrap()
        .rules;

        let fs_port = LocalFs::new();
        let builder = AssetMapBuilder::new(&fs_port, &NoopEventSink).with_watched_dirs(true);

        let mut map = builder.build(&rules);
        let first = snapshot(&map);
        let first_watched = map.watched_dirs().clone();

        builder.rebuild(&mut map, &rules);
        prop_assert_eq!(snapshot(&map), first);
        prop_assert_eq!(map.watched_dirs(), &first_watched);
    }
}
