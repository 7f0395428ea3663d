//! Sync Session
//!
//! The long-lived object a host build drives through its lifecycle:
//! - `configure_host` - decide cleanup gate, take over copy/clean
//! - `start_cycle` - rebuild the asset map, bulk copy
//! - `record_output` - remember what the host emitted
//! - `finish_cycle` - stale-file cleanup
//! - `handle_file_change` - incremental updates in long-lived modes
//! - `shutdown` - final flush

mod options;
mod use_case;


pub use options::{CycleStats, HostConfig, HostOverrides, SessionOptions};
pub use use_case::SyncSession;
