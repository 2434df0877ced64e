//! Error types for utility functions
//!
//! This module defines error types used by utility functions.

use std::fmt;

/// Error type for utility operations
#[derive(Debug, Clone, PartialEq)]
pub enum UtilError {
    /// Subband index outside the bank
    SubbandOutOfRange { subband: usize, subbands: usize },
    /// Signal length is not a whole number of frames
    PartialFrame { len: usize, frame_size: usize },
}

impl fmt::Display for UtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilError::SubbandOutOfRange { subband, subbands } => {
                write!(f, "Subband {} out of range for {} subbands", subband, subbands)
            }
            UtilError::PartialFrame { len, frame_size } => {
                write!(f, "Signal of {} samples is not a multiple of {}", len, frame_size)
            }
        }
    }
}

impl std::error::Error for UtilError {}

/// Result type for utility operations
pub type UtilResult<T> = std::result::Result<T, UtilError>;
