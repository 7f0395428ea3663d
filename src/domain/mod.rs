//! Domain Layer
//!
//! The core of themesync: sync rules, the asset map, and the pure logic
//! around them, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Rules, resolved rules, the asset map, host output
//! - `value_objects/` - Immutable value types (patterns, rename, copy options)
//! - `services/` - Target resolution, stale detection, cleanup gate
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
