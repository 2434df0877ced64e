//! Deterministic test signals
//!
//! Generators for the synthetic inputs used to exercise the filter bank:
//! constants, sines centred in a subband and reproducible noise.

use crate::error::{UtilError, UtilResult};
use std::f64::consts::PI;

/// Constant signal of `len` samples
pub fn dc(amplitude: f32, len: usize) -> Vec<f32> {
    vec![amplitude; len]
}

/// Sine of `omega` radians per sample, starting at phase zero
pub fn sine(omega: f64, amplitude: f64, len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| (amplitude * (omega * n as f64).sin()) as f32)
        .collect()
}

/// Centre frequency of `subband` in radians per sample
pub fn subband_center(subband: usize, subbands: usize) -> UtilResult<f64> {
    if subband >= subbands {
        return Err(UtilError::SubbandOutOfRange { subband, subbands });
    }
    Ok((subband as f64 + 0.5) * PI / subbands as f64)
}

/// Sine centred in `subband` of an `subbands`-band filter bank
pub fn subband_sine(
    subband: usize,
    subbands: usize,
    amplitude: f64,
    len: usize,
) -> UtilResult<Vec<f32>> {
    Ok(sine(subband_center(subband, subbands)?, amplitude, len))
}

/// Uniform noise in `[-amplitude, amplitude)` from a fixed seed
pub fn noise(seed: u64, amplitude: f32, len: usize) -> Vec<f32> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 40) as f32 / (1u64 << 24) as f32;
            amplitude * (2.0 * unit - 1.0)
        })
        .collect()
}

/// Split a signal into frames of `frame_size` samples
pub fn frames(signal: &[f32], frame_size: usize) -> UtilResult<std::slice::ChunksExact<'_, f32>> {
    if frame_size == 0 || signal.len() % frame_size != 0 {
        return Err(UtilError::PartialFrame {
            len: signal.len(),
            frame_size,
        });
    }
    Ok(signal.chunks_exact(frame_size))
}

/// Sum of squares
pub fn energy(values: impl IntoIterator<Item = f32>) -> f64 {
    values.into_iter().map(|v| (v as f64) * (v as f64)).sum()
}

/// Largest absolute difference between two sequences
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x as f64 - y as f64).abs())
        .fold(0.0, f64::max)
}
