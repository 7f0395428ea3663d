//! Scenario: Cleanup Against A Host Manifest
//!
//! Journey: The host writes `.vite/manifest.json`; a previous build left
//! an old hashed bundle behind.
//!
//! Success Criteria:
//! - Files the manifest lists (directly or through imports) survive
//! - The old bundle is deleted
//! - The manifest directory itself is never touched

use themesync::{HostConfig, ManifestReader, Rule, SessionOptions};

use crate::common::*;

const MANIFEST: &str = r#"{
  "src/main.ts": {
    "file": "main-4a1b.js",
    "css": ["main-77aa.css"],
    "imports": ["_shared-91c2.js"]
  },
  "_shared-91c2.js": { "file": "shared-91c2.js" }
}"#;

#[test]
fn scenario_manifest_outputs_are_kept() {
    let fx = ThemeFixture::new();
    fx.write("src/images/logo.png", "logo");
    fx.write("assets/.vite/manifest.json", MANIFEST);
    fx.write("assets/main-4a1b.js", "");
    fx.write("assets/main-77aa.css", "");
    fx.write("assets/shared-91c2.js", "");
    fx.write("assets/main-0000.js", "old build");

    let (mut session, _sink) = fx.session(&[Rule::from("images/*.png")], SessionOptions::default());
    session.configure_host(&HostConfig::default());
    session.start_cycle();

    let output = ManifestReader::new().host_output(&fx.path("assets"), session.sink());
    session.record_output(output);
    let cleanup = session.finish_cycle();

    assert_eq!(cleanup.deleted, vec![fx.path("assets/main-0000.js")]);
    for kept in [
        "assets/main-4a1b.js",
        "assets/main-77aa.css",
        "assets/shared-91c2.js",
        "assets/logo.png",
        "assets/.vite/manifest.json",
    ] {
        assert!(fx.exists(kept), "{kept} should survive cleanup");
    }
}

#[test]
fn scenario_missing_manifest_skips_cleanup() {
    let fx = ThemeFixture::new();
    fx.write("assets/main-0000.js", "old build");

    let (mut session, _sink) = fx.session(&[Rule::from("images/*.png")], SessionOptions::default());
    session.start_cycle();
    let output = ManifestReader::new().host_output(&fx.path("assets"), session.sink());
    session.record_output(output);
    let cleanup = session.finish_cycle();

    assert!(cleanup.was_skipped());
    assert!(fx.exists("assets/main-0000.js"));
}
