//! Cleanup Reconciler
//!
//! Deletes destination files no longer justified by the asset map or by
//! the host build's own output:
//! - asset directory listing minus host output and protected basenames
//! - files matched by a rule's `clean_match` that no source produces
//!
//! Anything claimed by the asset map or declared by the host is never
//! deleted.

mod reconciler;
mod result;

pub use reconciler::CleanupReconciler;
pub use result::CleanupResult;
