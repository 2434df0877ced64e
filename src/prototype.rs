//! Prototype low-pass filter generation
//!
//! Every subband filter of the bank is a cosine-modulated copy of a single
//! low-pass prototype. The prototype is a windowed sinc with its cutoff at
//! half the subband width (`pi / 2N`), normalized to unit DC gain, so that
//! the responses of adjacent subbands cross at -6 dB.

use crate::config::{PqfConfig, WindowKind};
use std::f64::consts::PI;

/// Low-pass prototype filter shared by all subbands
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    config: PqfConfig,
    coefficients: Vec<f64>,
}

impl Prototype {
    /// Generate the prototype for a validated configuration
    pub fn generate(config: &PqfConfig) -> Self {
        let taps = config.taps();
        let center = (taps - 1) as f64 / 2.0;
        let cutoff = PI / (2 * config.subbands()) as f64;
        let window = window_coefficients(config.window(), taps);

        // taps is even, so n - center is never zero
        let mut coefficients: Vec<f64> = window
            .iter()
            .enumerate()
            .map(|(n, w)| {
                let t = n as f64 - center;
                w * (cutoff * t).sin() / (PI * t)
            })
            .collect();

        let dc_gain: f64 = coefficients.iter().sum();
        for c in &mut coefficients {
            *c /= dc_gain;
        }

        log::debug!(
            "generated {}-tap prototype for {} subbands ({:?})",
            taps,
            config.subbands(),
            config.window()
        );

        Self {
            config: *config,
            coefficients,
        }
    }

    /// Configuration the prototype was designed for
    pub fn config(&self) -> &PqfConfig {
        &self.config
    }

    /// Prototype coefficients, oldest tap first
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of taps
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Check whether the prototype has no taps
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Magnitude of the frequency response at `omega` radians per sample
    pub fn magnitude_response(&self, omega: f64) -> f64 {
        let (re, im) = self
            .coefficients
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(re, im), (n, &c)| {
                let phase = omega * n as f64;
                (re + c * phase.cos(), im - c * phase.sin())
            });
        re.hypot(im)
    }

    /// Check the linear-phase symmetry `p[n] == p[TAPS - 1 - n]`
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        self.coefficients
            .iter()
            .zip(self.coefficients.iter().rev())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

/// Symmetric window of `len` points
pub fn window_coefficients(kind: WindowKind, len: usize) -> Vec<f64> {
    if len < 2 {
        return vec![1.0; len];
    }
    let span = (len - 1) as f64;
    let mut window = vec![0.0; len];
    // Left half only, mirrored so the window is exactly symmetric
    for n in 0..len.div_ceil(2) {
        let x = n as f64 / span;
        let w = match kind {
            WindowKind::Kaiser { beta } => {
                let r = 2.0 * x - 1.0;
                bessel_i0(beta * (1.0 - r * r).max(0.0).sqrt()) / bessel_i0(beta)
            }
            WindowKind::Hann => 0.5 - 0.5 * (2.0 * PI * x).cos(),
            WindowKind::Hamming => 0.54 - 0.46 * (2.0 * PI * x).cos(),
            WindowKind::Blackman => 0.42 - 0.5 * (2.0 * PI * x).cos() + 0.08 * (4.0 * PI * x).cos(),
        };
        window[n] = w;
        window[len - 1 - n] = w;
    }
    window
}

/// Zeroth-order modified Bessel function of the first kind (power series)
fn bessel_i0(x: f64) -> f64 {
    let half = x / 2.0;
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut k = 1.0;
    loop {
        term *= (half / k) * (half / k);
        sum += term;
        if !sum.is_finite() || term < sum * 1e-17 {
            return sum;
        }
        k += 1.0;
    }
}
