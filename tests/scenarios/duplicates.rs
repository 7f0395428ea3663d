//! Scenario: Two Rules, One Destination
//!
//! Journey: Two rules both produce `assets/logo.png`.
//!
//! Success Criteria:
//! - The earlier rule wins
//! - Exactly one duplicate warning
//! - The losing source is never written

use themesync::{EventKind, Rule, SessionOptions, SyncEvent};

use crate::common::*;

/// SCENARIO B: destination collision across rules
#[test]
fn scenario_first_rule_claims_shared_destination() {
    let fx = ThemeFixture::new();
    fx.write("src/brand/logo.png", "brand");
    fx.write("src/legacy/logo.png", "legacy");

    let (mut session, sink) = fx.session(
        &[
            Rule::new("brand/*.png").with_dest("assets"),
            Rule::new("legacy/*.png").with_dest("assets"),
        ],
        SessionOptions::default(),
    );
    session.start_cycle();

    let map = session.asset_map();
    assert_eq!(map.len(), 1);
    assert!(map.contains(&fx.path("src/brand/logo.png")));
    assert_eq!(fx.read("assets/logo.png"), "brand");

    let duplicates = sink.of_kind(EventKind::DuplicateIgnored);
    assert_eq!(
        duplicates,
        vec![SyncEvent::DuplicateIgnored {
            path: fx.path("src/legacy/logo.png"),
            dest: fx.path("assets/logo.png"),
        }]
    );
}

/// Renames that collapse several sources onto one name keep the first
#[test]
fn scenario_fixed_rename_keeps_first_match() {
    let fx = ThemeFixture::new();
    fx.write("src/robots/a.txt", "a");
    fx.write("src/robots/b.txt", "b");

    let (mut session, sink) = fx.session(
        &[Rule::new("robots/*.txt").with_rename(themesync::Rename::fixed("robots.txt"))],
        SessionOptions::default(),
    );
    session.start_cycle();

    assert_eq!(session.asset_map().len(), 1);
    assert_eq!(fx.read("assets/robots.txt"), "a");
    assert_eq!(sink.count(EventKind::DuplicateIgnored), 1);
}
