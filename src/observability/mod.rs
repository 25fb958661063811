//! Structured logging for the controller and its adapters.
//!
//! All modules log through `tracing` macros and spans. This module only
//! installs the subscriber:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr
//! ```
//!
//! # Configuration
//!
//! The filter is chosen by:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` configuration option
//! 3. Default: `"info"`
//!
//! Library users who install their own subscriber never need to call
//! [`init_tracing`].

mod init;

pub use init::{filter_directive, init_tracing};
