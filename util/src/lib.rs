//! Utility functions for filter bank tests and benchmarks
//!
//! This crate provides deterministic test signals and small measurement
//! helpers shared by the integration tests and the benchmarks.

pub mod error;
pub mod signals;

// Re-export commonly used functions and types
pub use error::*;
pub use signals::*;
