//! Copy Engine
//!
//! Materializes asset map entries onto disk. Every file is an independent
//! unit of work: a failure is reported for that file alone and never stops
//! its siblings.

mod engine;
mod outcome;

pub use engine::CopyEngine;
pub use outcome::{CopyOutcome, CopyReport};
