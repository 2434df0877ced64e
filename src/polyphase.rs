//! Polyphase decomposition of the prototype filter
//!
//! Subband `k` of the bank filters the chronological window `x[0..TAPS]`
//! with the cosine-modulated prototype
//!
//! ```text
//! g_k[m] = 2 p[m] cos(pi/N (k + 1/2) (m + 1/2 + N/2))
//! ```
//!
//! Evaluating that directly costs `N * TAPS` multiplications per output
//! step. The modulation term only changes sign every `2N` taps, so the
//! window is first reduced to `2N` partial sums by `N` short sub-filters
//! (sub-filter `r` reads samples `r, r + N, r + 2N, ...`), the partial
//! sums are folded to `N` values, and a fixed `N x N` cosine matrix maps
//! those to the subband outputs.

use crate::config::PqfConfig;
use crate::prototype::Prototype;
use std::f64::consts::PI;

/// Prototype reorganized into polyphase sub-filters plus the modulation matrix
///
/// The bank is immutable once built and can be shared between any number
/// of analysis contexts.
#[derive(Debug, Clone)]
pub struct PolyphaseBank {
    prototype: Prototype,
    subbands: usize,
    sub_filter_len: usize,
    /// `subbands` rows of `sub_filter_len` taps, sign of the modulation included
    sub_filters: Vec<f64>,
    /// `subbands x subbands`, row per subband
    modulation: Vec<f64>,
}

impl PolyphaseBank {
    /// Generate the prototype for `config` and decompose it
    pub fn new(config: &PqfConfig) -> Self {
        Self::from_prototype(Prototype::generate(config))
    }

    /// Decompose an existing prototype
    pub fn from_prototype(prototype: Prototype) -> Self {
        let subbands = prototype.config().subbands();
        let sub_filter_len = prototype.config().taps_per_subband();
        let p = prototype.coefficients();

        let mut sub_filters = Vec::with_capacity(subbands * sub_filter_len);
        for r in 0..subbands {
            for i in 0..sub_filter_len {
                let sign = if (i / 2) % 2 == 0 { 1.0 } else { -1.0 };
                sub_filters.push(sign * p[r + subbands * i]);
            }
        }

        let scale = PI / subbands as f64;
        let mut modulation = Vec::with_capacity(subbands * subbands);
        for k in 0..subbands {
            for n in 0..subbands {
                modulation.push(2.0 * (scale * (n as f64 + 0.5) * (k as f64 + 0.5)).cos());
            }
        }

        log::debug!(
            "built polyphase bank: {} subbands, {} sub-filter taps",
            subbands,
            sub_filter_len
        );

        Self {
            prototype,
            subbands,
            sub_filter_len,
            sub_filters,
            modulation,
        }
    }

    /// Prototype the bank was derived from
    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    /// Configuration the bank was designed for
    pub fn config(&self) -> &PqfConfig {
        self.prototype.config()
    }

    /// Number of subbands (`N`)
    pub fn subbands(&self) -> usize {
        self.subbands
    }

    /// Prototype length (`TAPS`)
    pub fn taps(&self) -> usize {
        self.subbands * self.sub_filter_len
    }

    /// Taps of each sub-filter (`TAPS / N`)
    pub fn sub_filter_len(&self) -> usize {
        self.sub_filter_len
    }

    /// Sub-filter of polyphase component `r`
    pub fn sub_filter(&self, r: usize) -> &[f64] {
        &self.sub_filters[r * self.sub_filter_len..(r + 1) * self.sub_filter_len]
    }

    /// Modulation matrix row of subband `k`
    pub fn modulation_row(&self, k: usize) -> &[f64] {
        &self.modulation[k * self.subbands..(k + 1) * self.subbands]
    }

    /// Full-length filter of subband `k` applied to the window, oldest sample first
    pub fn modulated_filter(&self, k: usize) -> Vec<f64> {
        let n = self.subbands as f64;
        let freq = PI / n * (k as f64 + 0.5);
        self.prototype
            .coefficients()
            .iter()
            .enumerate()
            .map(|(m, &p)| 2.0 * p * (freq * (m as f64 + 0.5 + n / 2.0)).cos())
            .collect()
    }

    /// Impulse response of subband `k` in convolution order
    pub fn impulse_response(&self, k: usize) -> Vec<f64> {
        let mut response = self.modulated_filter(k);
        response.reverse();
        response
    }

    /// Compute the `2N` partial sums of one window of `TAPS` samples
    ///
    /// `partial[r]` collects the even taps of sub-filter `r` and
    /// `partial[r + N]` its odd taps.
    pub fn partial_sums(&self, window: &[f32], partial: &mut [f64]) {
        debug_assert_eq!(window.len(), self.taps());
        debug_assert_eq!(partial.len(), 2 * self.subbands);

        let n = self.subbands;
        for r in 0..n {
            let taps = self.sub_filter(r);
            let mut even = 0.0f64;
            let mut odd = 0.0f64;
            let mut pos = r;
            for pair in taps.chunks_exact(2) {
                even += pair[0] * window[pos] as f64;
                odd += pair[1] * window[pos + n] as f64;
                pos += 2 * n;
            }
            partial[r] = even;
            partial[r + n] = odd;
        }
    }

    /// Fold the partial sums and apply the modulation matrix
    ///
    /// `folded` is scratch space of `N` values; `out` receives one value
    /// per subband, ascending.
    pub fn modulate(&self, partial: &[f64], folded: &mut [f64], out: &mut [f32]) {
        debug_assert_eq!(partial.len(), 2 * self.subbands);
        debug_assert_eq!(folded.len(), self.subbands);
        debug_assert_eq!(out.len(), self.subbands);

        let n = self.subbands;
        let half = n / 2;
        for i in 0..half {
            folded[i] = -partial[3 * half - 1 - i] - partial[3 * half + i];
            folded[i + half] = partial[i] - partial[n - 1 - i];
        }

        for (k, value) in out.iter_mut().enumerate() {
            let row = self.modulation_row(k);
            let acc: f64 = row.iter().zip(folded.iter()).map(|(m, u)| m * u).sum();
            *value = acc as f32;
        }
    }
}
