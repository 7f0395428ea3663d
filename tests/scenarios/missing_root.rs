//! Scenario: First Run On A Fresh Checkout
//!
//! Journey: The asset directory does not exist yet.
//!
//! Success Criteria:
//! - The directory is created
//! - A warning names it
//! - No error, and the cycle completes

use themesync::{EventKind, Rule, SessionOptions, SyncEvent};

use crate::common::*;

/// SCENARIO E: missing destination root
#[test]
fn scenario_missing_destination_root_is_created_with_warning() {
    let fx = ThemeFixture::new();
    fx.write("src/fonts/body.woff2", "font");
    assert!(!fx.exists("assets"));

    let (mut session, sink) = fx.session(&[Rule::from("fonts/*.woff2")], SessionOptions::default());
    session.start_cycle();
    session.record_output(bundle(&[]));
    session.finish_cycle();
    session.shutdown();

    assert!(fx.path("assets").is_dir());
    assert!(fx.exists("assets/body.woff2"));

    let warnings = sink.of_kind(EventKind::Warning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].path(), Some(fx.path("assets").as_path()));
    assert_eq!(sink.count(EventKind::Error), 0);
    assert!(matches!(
        sink.events().last(),
        Some(SyncEvent::Shutdown)
    ));
}
