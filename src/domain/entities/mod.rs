//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Rule` / `ResolvedRule` - declared and resolved sync targets
//! - `AssetMap` - source → destination mapping for the current cycle
//! - `HostOutput` - what the host build emitted (bundle or manifest)

mod asset_map;
mod host_output;
mod resolved_rule;
mod rule;

pub use asset_map::{AssetEntry, AssetMap, DuplicateDestination};
pub use host_output::{
    BundleItem, HostBundle, HostManifest, HostOutput, ManifestChunk, ManifestError,
};
pub use resolved_rule::{ResolvedRule, RuleMatch, SyncContext};
pub use rule::Rule;
