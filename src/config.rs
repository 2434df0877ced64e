//! Configuration management for the analysis filter bank
//!
//! This module provides the design parameters of the filter bank and the
//! validation logic that keeps every `PqfConfig` value consistent. A
//! configuration can only be obtained through a validating constructor,
//! so downstream stages (prototype generation, polyphase decomposition)
//! never fail.

use crate::error::{ConfigError, ConfigResult};

#[cfg(feature = "diagnostics")]
use serde::{Deserialize, Serialize};

/// Largest supported number of subbands
pub const MAX_SUBBANDS: usize = 1024;

/// Number of subbands of the default profile
pub const DEFAULT_SUBBANDS: usize = 16;

/// Prototype taps per subband of the default profile (384 taps in total)
pub const DEFAULT_TAPS_PER_SUBBAND: usize = 24;

/// Output steps per frame of the default profile (2048 samples per frame)
pub const DEFAULT_SUBBAND_SIZE: usize = 128;

/// Kaiser beta of the default profile
pub const DEFAULT_KAISER_BETA: f64 = 9.0;

/// Largest Kaiser beta; I0(beta) overflows `f64` a little above 713
pub const MAX_KAISER_BETA: f64 = 700.0;

/// Largest prototype taps per subband
pub const MAX_TAPS_PER_SUBBAND: usize = 1024;

/// Largest number of output steps per frame
pub const MAX_SUBBAND_SIZE: usize = 1 << 16;

/// Window applied to the ideal low-pass kernel of the prototype
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "diagnostics", derive(Serialize, Deserialize))]
pub enum WindowKind {
    /// Kaiser window with the given shape parameter
    Kaiser { beta: f64 },
    /// Hann (raised cosine) window
    Hann,
    /// Hamming window
    Hamming,
    /// Three-term Blackman window
    Blackman,
}

impl Default for WindowKind {
    fn default() -> Self {
        WindowKind::Kaiser {
            beta: DEFAULT_KAISER_BETA,
        }
    }
}

impl WindowKind {
    fn validate(&self) -> ConfigResult<()> {
        match *self {
            WindowKind::Kaiser { beta } if !(0.0..=MAX_KAISER_BETA).contains(&beta) => {
                Err(ConfigError::InvalidWindowParameter(beta))
            }
            _ => Ok(()),
        }
    }
}

/// Design parameters of a pseudo-QMF analysis filter bank
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub struct PqfConfig {
    subbands: usize,
    taps_per_subband: usize,
    subband_size: usize,
    window: WindowKind,
}

impl Default for PqfConfig {
    fn default() -> Self {
        Self::atrac3plus()
    }
}

impl PqfConfig {
    /// Create a validated configuration
    ///
    /// `taps_per_subband` is the ratio between the prototype length and the
    /// number of subbands, `subband_size` the number of output steps (and
    /// subband samples per band) produced by one frame.
    pub fn new(
        subbands: usize,
        taps_per_subband: usize,
        subband_size: usize,
        window: WindowKind,
    ) -> ConfigResult<Self> {
        let config = Self {
            subbands,
            taps_per_subband,
            subband_size,
            window,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration from the total prototype length
    pub fn from_taps(
        subbands: usize,
        taps: usize,
        subband_size: usize,
        window: WindowKind,
    ) -> ConfigResult<Self> {
        validate_subbands(subbands)?;
        let multiple = 2 * subbands;
        if taps == 0 || taps % multiple != 0 {
            return Err(ConfigError::TapsNotDivisible {
                taps,
                subbands,
                multiple,
            });
        }
        Self::new(subbands, taps / subbands, subband_size, window)
    }

    /// The 16-band, 384-tap, 2048-sample profile of ATRAC3plus encoders
    pub fn atrac3plus() -> Self {
        Self {
            subbands: DEFAULT_SUBBANDS,
            taps_per_subband: DEFAULT_TAPS_PER_SUBBAND,
            subband_size: DEFAULT_SUBBAND_SIZE,
            window: WindowKind::default(),
        }
    }

    /// A profile producing one subband block per frame (`frame_size == subbands`)
    pub fn single_step(subbands: usize, taps_per_subband: usize) -> ConfigResult<Self> {
        Self::new(subbands, taps_per_subband, 1, WindowKind::default())
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        validate_subbands(self.subbands)?;
        if self.taps_per_subband < 2
            || self.taps_per_subband % 2 != 0
            || self.taps_per_subband > MAX_TAPS_PER_SUBBAND
        {
            return Err(ConfigError::InvalidTapsPerSubband(self.taps_per_subband));
        }
        if self.subband_size == 0 {
            return Err(ConfigError::ZeroSubbandSize);
        }
        if self.subband_size > MAX_SUBBAND_SIZE {
            return Err(ConfigError::SubbandSizeTooLarge(self.subband_size));
        }
        self.window.validate()
    }

    /// Replace the number of output steps per frame
    pub fn with_subband_size(self, subband_size: usize) -> ConfigResult<Self> {
        Self::new(self.subbands, self.taps_per_subband, subband_size, self.window)
    }

    /// Replace the prototype window
    pub fn with_window(self, window: WindowKind) -> ConfigResult<Self> {
        Self::new(self.subbands, self.taps_per_subband, self.subband_size, window)
    }

    /// Number of subbands (`N`)
    pub fn subbands(&self) -> usize {
        self.subbands
    }

    /// Prototype taps per subband (`TAPS / N`)
    pub fn taps_per_subband(&self) -> usize {
        self.taps_per_subband
    }

    /// Output steps per frame
    pub fn subband_size(&self) -> usize {
        self.subband_size
    }

    /// Prototype window
    pub fn window(&self) -> WindowKind {
        self.window
    }

    /// Prototype length (`TAPS`)
    pub fn taps(&self) -> usize {
        self.subbands * self.taps_per_subband
    }

    /// Samples per submitted frame
    pub fn frame_size(&self) -> usize {
        self.subbands * self.subband_size
    }

    /// Samples retained between frames
    pub fn overlap(&self) -> usize {
        self.taps() - self.subbands
    }
}

fn validate_subbands(subbands: usize) -> ConfigResult<()> {
    if !(2..=MAX_SUBBANDS).contains(&subbands) {
        return Err(ConfigError::SubbandsOutOfRange(subbands));
    }
    if subbands % 2 != 0 {
        return Err(ConfigError::OddSubbandCount(subbands));
    }
    Ok(())
}
