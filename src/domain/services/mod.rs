//! Domain Services
//!
//! Stateless logic over domain entities. No I/O.

mod clean_gate;
mod stale;
mod target_resolver;

pub use clean_gate::CleanGate;
pub use stale::{stale_entries, RESERVED_NAMES};
pub use target_resolver::{resolve_targets, ResolvedTargets};
