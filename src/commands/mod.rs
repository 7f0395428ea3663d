pub mod build;
pub mod common;
pub mod resolve;
pub mod watch;
