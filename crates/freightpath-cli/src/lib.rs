//! Freightpath CLI library.
//!
//! Command handlers and output formatting for the `freightpath-cli` binary.
//! The handlers are thin callers of `freightpath-lib`; no search logic lives
//! here.

pub mod commands;
pub mod output;
