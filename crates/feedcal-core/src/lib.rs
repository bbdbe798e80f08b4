//! Shared building blocks for the feedcal workspace.
//!
//! Holds the constants every crate agrees on (the feed source tag), the
//! layered configuration loader, and the core error type.

pub mod config;
pub mod constants;
pub mod error;
