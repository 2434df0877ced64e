//! Unit tests for configuration validation
//!
//! Tests the presets, derived sizes and every rejection path of `PqfConfig`.

use crate::config::*;
use crate::error::ConfigError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_sizes() {
        let config = PqfConfig::default();
        assert_eq!(config, PqfConfig::atrac3plus());
        assert_eq!(config.subbands(), 16, "Default should use 16 subbands");
        assert_eq!(config.taps(), 384, "Default prototype should have 384 taps");
        assert_eq!(config.frame_size(), 2048, "Default frame should hold 2048 samples");
        assert_eq!(config.overlap(), 368, "Overlap should be TAPS - N");
        assert_eq!(config.subband_size(), 128);
        assert_eq!(config.window(), WindowKind::Kaiser { beta: DEFAULT_KAISER_BETA });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_step_profile() {
        let config = PqfConfig::single_step(16, 24).unwrap();
        assert_eq!(config.frame_size(), 16, "One block per frame means frame_size == N");
        assert_eq!(config.taps(), 384);
    }

    #[test]
    fn test_invalid_subband_counts() {
        assert_eq!(
            PqfConfig::single_step(0, 24),
            Err(ConfigError::SubbandsOutOfRange(0))
        );
        assert_eq!(
            PqfConfig::single_step(MAX_SUBBANDS + 2, 24),
            Err(ConfigError::SubbandsOutOfRange(MAX_SUBBANDS + 2))
        );
        assert_eq!(
            PqfConfig::single_step(15, 24),
            Err(ConfigError::OddSubbandCount(15))
        );
    }

    #[test]
    fn test_invalid_taps_per_subband() {
        for ratio in [0, 1, 3, 23] {
            assert_eq!(
                PqfConfig::single_step(16, ratio),
                Err(ConfigError::InvalidTapsPerSubband(ratio)),
                "ratio {} should be rejected",
                ratio
            );
        }
    }

    #[test]
    fn test_from_taps_divisibility() {
        let config = PqfConfig::from_taps(16, 384, 128, WindowKind::Hann).unwrap();
        assert_eq!(config.taps_per_subband(), 24);

        assert_eq!(
            PqfConfig::from_taps(16, 376, 128, WindowKind::Hann),
            Err(ConfigError::TapsNotDivisible {
                taps: 376,
                subbands: 16,
                multiple: 32
            })
        );
        assert!(matches!(
            PqfConfig::from_taps(16, 0, 128, WindowKind::Hann),
            Err(ConfigError::TapsNotDivisible { taps: 0, .. })
        ));
    }

    #[test]
    fn test_zero_subband_size() {
        assert_eq!(
            PqfConfig::default().with_subband_size(0),
            Err(ConfigError::ZeroSubbandSize)
        );
    }

    #[test]
    fn test_invalid_kaiser_beta() {
        let result = PqfConfig::default().with_window(WindowKind::Kaiser { beta: -1.0 });
        assert_eq!(result, Err(ConfigError::InvalidWindowParameter(-1.0)));

        let result = PqfConfig::default().with_window(WindowKind::Kaiser { beta: f64::NAN });
        assert!(matches!(result, Err(ConfigError::InvalidWindowParameter(b)) if b.is_nan()));
    }

    #[test]
    fn test_builders_keep_other_fields() {
        let config = PqfConfig::default()
            .with_window(WindowKind::Blackman)
            .and_then(|c| c.with_subband_size(4))
            .unwrap();
        assert_eq!(config.subbands(), 16);
        assert_eq!(config.taps(), 384);
        assert_eq!(config.frame_size(), 64);
        assert_eq!(config.window(), WindowKind::Blackman);
    }

    #[test]
    fn test_kaiser_beta_upper_bound() {
        for beta in [MAX_KAISER_BETA + 1.0, 1000.0, f64::INFINITY] {
            assert_eq!(
                PqfConfig::new(16, 24, 1, WindowKind::Kaiser { beta }),
                Err(ConfigError::InvalidWindowParameter(beta)),
                "beta {} should be rejected",
                beta
            );
        }
        assert!(PqfConfig::new(16, 24, 1, WindowKind::Kaiser { beta: MAX_KAISER_BETA }).is_ok());
    }

    #[test]
    fn test_subband_size_upper_bound() {
        let base = PqfConfig::single_step(16, 24).unwrap();
        for size in [MAX_SUBBAND_SIZE + 1, usize::MAX / 8, usize::MAX] {
            assert_eq!(
                base.with_subband_size(size),
                Err(ConfigError::SubbandSizeTooLarge(size))
            );
        }
        let largest = base.with_subband_size(MAX_SUBBAND_SIZE).unwrap();
        assert_eq!(largest.frame_size(), 16 * MAX_SUBBAND_SIZE);
    }

    #[test]
    fn test_taps_per_subband_upper_bound() {
        let ratio = MAX_TAPS_PER_SUBBAND + 2;
        assert_eq!(
            PqfConfig::single_step(16, ratio),
            Err(ConfigError::InvalidTapsPerSubband(ratio))
        );
        assert_eq!(
            PqfConfig::from_taps(2, usize::MAX - 3, 1, WindowKind::Hann),
            Err(ConfigError::InvalidTapsPerSubband((usize::MAX - 3) / 2))
        );
        assert!(PqfConfig::single_step(MAX_SUBBANDS, MAX_TAPS_PER_SUBBAND).is_ok());
    }
}
