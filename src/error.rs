//! Error types for the analysis filter bank
//!
//! This module defines all error types used throughout the crate. Errors
//! are split by the stage that can raise them: configuration errors are
//! fatal at construction, input size errors are per call and leave the
//! analysis context untouched.

use thiserror::Error;

/// Main error type for the filter bank
#[derive(Debug, Error)]
pub enum PqfError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Frame or output buffer size errors
    #[error("Input size error: {0}")]
    InputSize(#[from] InputSizeError),
}

/// Configuration validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Subband count outside the supported range
    #[error("Unsupported subband count: {0} (expected 2..=1024)")]
    SubbandsOutOfRange(usize),

    /// Subband count must be even for the modulation folding
    #[error("Subband count must be even, got {0}")]
    OddSubbandCount(usize),

    /// Taps per subband must be a positive even number
    #[error("Invalid taps per subband: {0} (must be even, in 2..=1024)")]
    InvalidTapsPerSubband(usize),

    /// Prototype length is not a positive multiple of twice the subband count
    #[error("Prototype length {taps} is not a positive multiple of {multiple} (2 x {subbands} subbands)")]
    TapsNotDivisible {
        taps: usize,
        subbands: usize,
        multiple: usize,
    },

    /// Zero output steps per frame
    #[error("Subband size must be at least 1")]
    ZeroSubbandSize,

    /// Too many output steps per frame
    #[error("Subband size {0} exceeds the maximum of 65536")]
    SubbandSizeTooLarge(usize),

    /// Window parameter is not finite, negative or too large
    #[error("Invalid window parameter: {0}")]
    InvalidWindowParameter(f64),
}

/// Input size errors raised by the analysis context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputSizeError {
    /// Submitted frame has the wrong number of samples
    #[error("Invalid frame length: expected {expected} samples, got {actual}")]
    FrameLength { expected: usize, actual: usize },

    /// Caller-provided output buffer has the wrong number of values
    #[error("Invalid output length: expected {expected} values, got {actual}")]
    OutputLength { expected: usize, actual: usize },
}

/// Specialized result types for different modules
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type InputResult<T> = std::result::Result<T, InputSizeError>;
pub type PqfResult<T> = std::result::Result<T, PqfError>;
