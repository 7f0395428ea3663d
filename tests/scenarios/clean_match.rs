//! Scenario: Generated Snippets Are Pruned
//!
//! Journey: Icons are copied into `snippets/` as `.liquid` files. An icon
//! was removed from the source tree but its snippet is still there.
//!
//! Success Criteria:
//! - The current icon's snippet is created and kept
//! - The stray snippet is deleted at cleanup
//! - Unrelated snippets are untouched

use std::path::Path;
use std::sync::Arc;

use themesync::{
    EventKind, LocalFs, RecordingEventSink, Rename, Rule, SessionOptions, SyncContext, SyncMode,
    SyncSession,
};

use crate::common::*;

fn icon_rule() -> Rule {
    Rule::new("icons/icon-*.svg")
        .with_dest("snippets")
        .with_rename(Rename::computed(|base: &str, _ext: &str, _src: &Path| {
            format!("{base}.liquid")
        }))
        .with_clean_match("icon-*.liquid")
}

/// SCENARIO C: cleanMatch removes leftovers without a source
#[test]
fn scenario_clean_match_deletes_stray_snippet() {
    let fx = ThemeFixture::new();
    fx.write("src/icons/icon-arrow.svg", "<svg/>");
    fx.write("snippets/icon-old.liquid", "stale");
    fx.write("snippets/header.liquid", "keep");

    let (mut session, sink) = fx.session(&[icon_rule()], SessionOptions::new(SyncMode::Build));
    session.start_cycle();
    session.record_output(bundle(&[]));
    let cleanup = session.finish_cycle();

    assert_eq!(fx.read("snippets/icon-arrow.svg.liquid"), "<svg/>");
    assert!(!fx.exists("snippets/icon-old.liquid"));
    assert!(fx.exists("snippets/header.liquid"));
    assert_eq!(cleanup.deleted, vec![fx.path("snippets/icon-old.liquid")]);
    assert_eq!(sink.count(EventKind::Delete), 1);
}

/// Generic cleanMatch patterns are disabled with a warning
#[test]
fn scenario_generic_clean_match_is_disabled() {
    let fx = ThemeFixture::new();
    fx.write("src/icons/icon-arrow.svg", "<svg/>");
    fx.write("snippets/header.liquid", "keep");

    let (mut session, sink) = fx.session(
        &[Rule::new("icons/*.svg")
            .with_dest("snippets")
            .with_clean_match("**/*")],
        SessionOptions::default(),
    );
    session.start_cycle();
    session.record_output(bundle(&[]));
    session.finish_cycle();

    assert!(fx.exists("snippets/header.liquid"));
    assert_eq!(sink.count(EventKind::Warning), 1);
}

/// A destination outside the theme never gets its cleanMatch enforced
#[test]
fn scenario_clean_match_outside_theme_is_disabled() {
    let fx = ThemeFixture::new();
    fx.write("theme/src/icons/icon-arrow.svg", "<svg/>");
    fx.write("outside/icon-old.liquid", "not ours");

    let sink = Arc::new(RecordingEventSink::new());
    let mut session = SyncSession::new(
        LocalFs::new(),
        &[Rule::new("icons/icon-*.svg")
            .with_dest("../outside")
            .with_clean_match("icon-*.liquid")],
        SyncContext::new(fx.path("theme/src"), fx.path("theme"), "assets"),
        SessionOptions::new(SyncMode::Build),
        sink.clone(),
    )
    .unwrap();
    session.start_cycle();
    session.record_output(bundle(&[]));
    let cleanup = session.finish_cycle();

    assert!(fx.exists("outside/icon-arrow.svg"));
    assert!(fx.exists("outside/icon-old.liquid"));
    assert!(cleanup.deleted.is_empty());
    assert_eq!(sink.count(EventKind::Delete), 0);
}
