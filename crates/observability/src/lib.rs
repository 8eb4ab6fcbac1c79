//! Shared tracing/logging setup for the loadsim binaries and tests.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use crate::tracing::{LogConfig, LogFormat, init};
