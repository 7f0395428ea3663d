//! Scenario: Source Deleted While Watching
//!
//! Journey: In watch mode, a developer deletes `src/js/foo.js`.
//!
//! Success Criteria:
//! - The destination copy is removed
//! - The map no longer tracks the source
//! - Exactly one delete event, even for repeated notifications

use themesync::{EventKind, FileChangeKind, Rule, SessionOptions, SyncMode, WatchOutcome};

use crate::common::*;

/// SCENARIO D: delete notification in a long-lived mode
#[test]
fn scenario_deleted_source_removes_destination_once() {
    let fx = ThemeFixture::new();
    fx.write("src/js/foo.js", "foo");
    fx.write("src/js/bar.js", "bar");

    let (mut session, sink) = fx.session(
        &[Rule::from("js/*.js")],
        SessionOptions::new(SyncMode::Watch),
    );
    session.start_cycle();
    assert!(fx.exists("assets/foo.js"));

    fx.remove("src/js/foo.js");
    let source = fx.path("src/js/foo.js");
    let kind = session.probe_change(&source);
    assert_eq!(kind, FileChangeKind::Delete);

    let outcome = session.handle_file_change(&source, kind);
    assert!(matches!(outcome, WatchOutcome::Removed { removed: true, .. }));
    assert!(!fx.exists("assets/foo.js"));
    assert!(fx.exists("assets/bar.js"));
    assert!(!session.asset_map().contains(&source));

    // Watchers often report a removal more than once
    session.handle_file_change(&source, FileChangeKind::Delete);
    assert_eq!(sink.count(EventKind::Delete), 1);
}

/// New and changed files are picked up incrementally
#[test]
fn scenario_created_and_updated_sources_are_synced() {
    let fx = ThemeFixture::new();
    fx.write("src/js/foo.js", "v1");

    let (mut session, _sink) = fx.session(
        &[Rule::from("js/*.js")],
        SessionOptions::new(SyncMode::Serve),
    );
    session.start_cycle();

    fx.write("src/js/foo.js", "v2");
    fx.write("src/js/new.js", "new");
    for rel in ["src/js/foo.js", "src/js/new.js"] {
        let path = fx.path(rel);
        let kind = session.probe_change(&path);
        session.handle_file_change(&path, kind);
    }

    assert_eq!(fx.read("assets/foo.js"), "v2");
    assert_eq!(fx.read("assets/new.js"), "new");
    assert_eq!(session.stats().copied, 3);
}
