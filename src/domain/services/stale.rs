//! Stale file detection
//!
//! Pure set difference over a destination listing: whatever is present but
//! neither emitted by the host nor owned by the asset map is stale.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::ports::ListedEntry;
use crate::domain::value_objects::path::basename;

/// Host bookkeeping entries that are never stale: the manifest directory
/// and the flat manifest file
pub const RESERVED_NAMES: &[&str] = &[".vite", "manifest.json"];

/// Compute `listing - (outputs ∪ protected)`.
///
/// `outputs` and `protected` hold destination-relative basenames. Directory
/// entries and reserved names never appear in the result. The result keeps
/// the listing's order.
pub fn stale_entries(
    listing: &[ListedEntry],
    outputs: &BTreeSet<String>,
    protected: &BTreeSet<String>,
) -> Vec<PathBuf> {
    listing
        .iter()
        .filter(|entry| !entry.is_dir)
        .filter_map(|entry| {
            let name = basename(&entry.path);
            if RESERVED_NAMES.contains(&name.as_str())
                || outputs.contains(&name)
                || protected.contains(&name)
            {
                None
            } else {
                Some(entry.path.clone())
            }
        })
        .collect()
}
