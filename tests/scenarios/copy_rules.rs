//! Scenario: Images Mirrored Into Assets
//!
//! Journey: A theme keeps its images under `src/images/` and wants them in
//! `assets/` next to the host's bundled output.
//!
//! Success Criteria:
//! - Both images are mapped and copied byte for byte
//! - Cleanup keeps them even though the host never emitted them
//! - A second cycle over unchanged sources succeeds again

use themesync::{EventKind, OverwritePolicy, Rule, SessionOptions, SyncMode};

use crate::common::*;

/// SCENARIO A: two matching images land in the asset directory
#[test]
fn scenario_images_are_copied_and_survive_cleanup() {
    let fx = ThemeFixture::new();
    fx.write("src/images/a.png", "png-a");
    fx.write("src/images/b.png", "png-b");
    fx.write("assets/main.js", "bundle");

    let (mut session, sink) = fx.session(
        &[Rule::new("images/*.png").with_dest("assets")],
        SessionOptions::new(SyncMode::Build),
    );
    session.start_cycle();

    let map = session.asset_map();
    assert_eq!(map.len(), 2);
    for (_, entry) in map.iter() {
        assert_eq!(entry.dest.parent(), Some(fx.path("assets").as_path()));
    }

    session.record_output(bundle(&["main.js"]));
    let cleanup = session.finish_cycle();

    assert!(cleanup.deleted.is_empty());
    assert_eq!(fx.read("assets/a.png"), "png-a");
    assert_eq!(fx.read("assets/b.png"), "png-b");
    assert!(fx.exists("assets/main.js"));
    assert_eq!(sink.count(EventKind::Create), 2);
}

/// Re-running a cycle over existing destinations reports updates
#[test]
fn scenario_second_cycle_overwrites_existing_copies() {
    let fx = ThemeFixture::new();
    fx.write("src/images/a.png", "v1");

    let (mut session, sink) =
        fx.session(&[Rule::from("images/*.png")], SessionOptions::default());
    session.start_cycle();
    fx.write("src/images/a.png", "v2");
    let report = session.start_cycle();

    assert!(report.is_success());
    assert_eq!(fx.read("assets/a.png"), "v2");
    assert_eq!(sink.count(EventKind::Update), 1);
}

/// Skip policy leaves hand-edited destinations alone
#[test]
fn scenario_skip_policy_keeps_existing_destination() {
    let fx = ThemeFixture::new();
    fx.write("src/images/a.png", "from source");
    fx.write("assets/a.png", "edited by hand");

    let (mut session, _sink) = fx.session(
        &[Rule::from("images/*.png").with_overwrite(OverwritePolicy::Skip)],
        SessionOptions::default(),
    );
    let report = session.start_cycle();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(fx.read("assets/a.png"), "edited by hand");
}

/// Ignore patterns keep matching files out of the map
#[test]
fn scenario_ignored_sources_are_not_copied() {
    let fx = ThemeFixture::new();
    fx.write("src/js/app.js", "app");
    fx.write("src/js/app.test.js", "test");

    let (mut session, _sink) = fx.session(
        &[Rule::new("js/*.js").with_ignore(["js/*.test.js"])],
        SessionOptions::default(),
    );
    session.start_cycle();

    assert!(fx.exists("assets/app.js"));
    assert!(!fx.exists("assets/app.test.js"));
}
