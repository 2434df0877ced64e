//! Unit tests for the polyphase decomposition
//!
//! Tests the shape of the bank, the modulation matrix and the equivalence
//! between the polyphase path and the full-length modulated filters.

use crate::config::PqfConfig;
use crate::polyphase::PolyphaseBank;
use crate::tables::{default_bank, default_prototype};
use std::f64::consts::PI;

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(bank: &PolyphaseBank, window: &[f32]) -> Vec<f32> {
        let n = bank.subbands();
        let mut partial = vec![0.0; 2 * n];
        let mut folded = vec![0.0; n];
        let mut out = vec![0.0; n];
        bank.partial_sums(window, &mut partial);
        bank.modulate(&partial, &mut folded, &mut out);
        out
    }

    #[test]
    fn test_bank_shape() {
        let bank = default_bank();
        assert_eq!(bank.subbands(), 16);
        assert_eq!(bank.taps(), 384);
        assert_eq!(bank.sub_filter_len(), 24, "Each sub-filter should hold TAPS / N taps");
        for r in 0..16 {
            assert_eq!(bank.sub_filter(r).len(), 24);
            assert_eq!(bank.modulation_row(r).len(), 16);
        }
        assert_eq!(bank.prototype(), default_prototype());
    }

    #[test]
    fn test_sub_filters_are_signed_prototype_phases() {
        let bank = default_bank();
        let p = bank.prototype().coefficients();
        for r in 0..16 {
            for (i, &tap) in bank.sub_filter(r).iter().enumerate() {
                let expected = p[r + 16 * i];
                assert_eq!(tap.abs(), expected.abs());
                let sign = if (i / 2) % 2 == 0 { 1.0 } else { -1.0 };
                assert_eq!(tap, sign * expected, "Sub-filter {} tap {}", r, i);
            }
        }
    }

    #[test]
    fn test_modulation_rows_are_orthogonal() {
        let bank = default_bank();
        let n = bank.subbands();
        for a in 0..n {
            for b in 0..n {
                let dot: f64 = bank
                    .modulation_row(a)
                    .iter()
                    .zip(bank.modulation_row(b))
                    .map(|(x, y)| x * y)
                    .sum();
                let expected = if a == b { 2.0 * n as f64 } else { 0.0 };
                assert!(
                    (dot - expected).abs() < 1e-9,
                    "rows {} and {}: dot product {}",
                    a,
                    b,
                    dot
                );
            }
        }
    }

    #[test]
    fn test_polyphase_matches_direct_form() {
        for config in [
            PqfConfig::default(),
            PqfConfig::single_step(4, 8).unwrap(),
            PqfConfig::single_step(32, 16).unwrap(),
        ] {
            let bank = PolyphaseBank::new(&config);
            let window = util::noise(3, 1.0, bank.taps());
            let fast = evaluate(&bank, &window);

            for (k, &value) in fast.iter().enumerate() {
                let direct: f64 = bank
                    .modulated_filter(k)
                    .iter()
                    .zip(&window)
                    .map(|(g, &x)| g * x as f64)
                    .sum();
                assert!(
                    (value as f64 - direct).abs() < 1e-5,
                    "{} subbands, subband {}: polyphase {} vs direct {}",
                    config.subbands(),
                    k,
                    value,
                    direct
                );
            }
        }
    }

    #[test]
    fn test_impulse_response_is_reversed_filter() {
        let bank = default_bank();
        let forward = bank.modulated_filter(3);
        let mut response = bank.impulse_response(3);
        assert_eq!(response.len(), 384);
        response.reverse();
        assert_eq!(response, forward);
    }

    #[test]
    fn test_subband_filters_have_unit_gain_at_band_center() {
        let bank = default_bank();
        let n = bank.subbands();
        for k in 0..n {
            let omega = (k as f64 + 0.5) * PI / n as f64;
            let (re, im) = bank
                .impulse_response(k)
                .iter()
                .enumerate()
                .fold((0.0, 0.0), |(re, im), (t, &h)| {
                    (re + h * (omega * t as f64).cos(), im - h * (omega * t as f64).sin())
                });
            let gain = re.hypot(im);
            assert!((gain - 1.0).abs() < 1e-3, "Subband {} centre gain {}", k, gain);
        }
    }

    #[test]
    fn test_zero_window_gives_zero_output() {
        let bank = default_bank();
        let out = evaluate(&bank, &vec![0.0; bank.taps()]);
        assert!(out.iter().all(|&v| v == 0.0));
    }
}
