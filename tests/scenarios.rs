//! Scenario tests for themesync.
//!
//! Each scenario drives a `SyncSession` through a host lifecycle against a
//! real temp directory, the way a build tool integration would.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/copy_rules.rs"]
mod copy_rules;

#[path = "scenarios/duplicates.rs"]
mod duplicates;

#[path = "scenarios/clean_match.rs"]
mod clean_match;

#[path = "scenarios/watch_delete.rs"]
mod watch_delete;

#[path = "scenarios/missing_root.rs"]
mod missing_root;

#[path = "scenarios/manifest_cleanup.rs"]
mod manifest_cleanup;
