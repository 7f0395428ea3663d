//! Asset map entity
//!
//! The authoritative mapping from source file to destination for the
//! current cycle, together with the bookkeeping sets derived from it:
//! - claimed destinations (dedup, first match wins)
//! - protected basenames (never stale during cleanup)
//! - watched directories (long-lived modes only)
//!
//! All keys are normalized paths, so two spellings of one location collide.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::resolved_rule::ResolvedRule;
use crate::domain::value_objects::path::{basename, normalize_path};

/// Destination descriptor for one source file
#[derive(Debug, Clone)]
pub struct AssetEntry {
    pub rule: Arc<ResolvedRule>,
    /// Absolute, normalized destination path
    pub dest: PathBuf,
}

impl AssetEntry {
    pub fn new(rule: Arc<ResolvedRule>, dest: impl AsRef<Path>) -> Self {
        Self {
            rule,
            dest: normalize_path(dest.as_ref()),
        }
    }

    pub fn dest_basename(&self) -> String {
        basename(&self.dest)
    }
}

/// A destination collision: the destination already belongs to `claimed_by`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDestination {
    pub dest: PathBuf,
    pub claimed_by: PathBuf,
}

/// Ordered source → destination mapping for one cycle
#[derive(Debug, Default)]
pub struct AssetMap {
    order: Vec<PathBuf>,
    entries: HashMap<PathBuf, AssetEntry>,
    /// destination → source that claimed it
    claimed: HashMap<PathBuf, PathBuf>,
    /// basename → number of entries using it
    protected: HashMap<String, usize>,
    watched_dirs: BTreeSet<PathBuf>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything; the next cycle rebuilds from scratch.
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
        self.claimed.clear();
        self.protected.clear();
        self.watched_dirs.clear();
    }

    /// Insert `source`, unless its destination is already claimed by another
    /// source. Re-inserting the same source replaces its entry.
    pub fn insert(
        &mut self,
        source: impl AsRef<Path>,
        entry: AssetEntry,
    ) -> Result<(), DuplicateDestination> {
        let source = normalize_path(source.as_ref());

        if let Some(owner) = self.claimed.get(&entry.dest) {
            if *owner != source {
                return Err(DuplicateDestination {
                    dest: entry.dest.clone(),
                    claimed_by: owner.clone(),
                });
            }
        }

        if self.entries.contains_key(&source) {
            self.release(&source);
        } else {
            self.order.push(source.clone());
        }

        self.claimed.insert(entry.dest.clone(), source.clone());
        *self.protected.entry(entry.dest_basename()).or_insert(0) += 1;
        self.entries.insert(source, entry);
        Ok(())
    }

    /// Remove `source` and release its destination and basename.
    pub fn remove(&mut self, source: &Path) -> Option<AssetEntry> {
        let source = normalize_path(source);
        let entry = self.release(&source)?;
        self.order.retain(|s| *s != source);
        Some(entry)
    }

    fn release(&mut self, source: &Path) -> Option<AssetEntry> {
        let entry = self.entries.remove(source)?;
        self.claimed.remove(&entry.dest);

        let name = entry.dest_basename();
        if let Some(count) = self.protected.get_mut(&name) {
            *count -= 1;
            if *count == 0 {
                self.protected.remove(&name);
            }
        }
        Some(entry)
    }

    pub fn get(&self, source: &Path) -> Option<&AssetEntry> {
        self.entries.get(&normalize_path(source))
    }

    pub fn contains(&self, source: &Path) -> bool {
        self.entries.contains_key(&normalize_path(source))
    }

    /// Source that currently owns `dest`, if any.
    pub fn claimant(&self, dest: &Path) -> Option<&Path> {
        self.claimed.get(&normalize_path(dest)).map(PathBuf::as_path)
    }

    pub fn is_claimed(&self, dest: &Path) -> bool {
        self.claimed.contains_key(&normalize_path(dest))
    }

    pub fn is_protected(&self, name: &str) -> bool {
        self.protected.contains_key(name)
    }

    pub fn protected_basenames(&self) -> BTreeSet<String> {
        self.protected.keys().cloned().collect()
    }

    pub fn destinations(&self) -> BTreeSet<PathBuf> {
        self.claimed.keys().cloned().collect()
    }

    pub fn watch_dir(&mut self, dir: impl AsRef<Path>) {
        self.watched_dirs.insert(normalize_path(dir.as_ref()));
    }

    pub fn is_watched_dir(&self, dir: &Path) -> bool {
        self.watched_dirs.contains(&normalize_path(dir))
    }

    pub fn watched_dirs(&self) -> &BTreeSet<PathBuf> {
        &self.watched_dirs
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &AssetEntry)> {
        self.order
            .iter()
            .filter_map(|s| self.entries.get(s).map(|e| (s.as_path(), e)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
