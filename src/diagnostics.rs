//! Prototype response reports
//!
//! This module samples the magnitude response of a prototype filter and
//! stores it, together with the coefficients and the configuration, as
//! JSON for external inspection tools.
//!
//! This module is only available when the "diagnostics" feature is enabled.

use crate::config::PqfConfig;
use crate::prototype::Prototype;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::f64::consts::PI;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Floor applied to magnitudes before conversion to dB
const MIN_MAGNITUDE: f64 = 1e-12;

/// Errors raised while writing a report
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    /// Report file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One point of the sampled magnitude response
#[derive(Debug, Clone, Serialize)]
pub struct ResponsePoint {
    /// Normalized frequency, 0.0 (DC) to 1.0 (Nyquist)
    pub frequency: f64,
    /// Magnitude in dB relative to DC
    pub magnitude_db: f64,
}

/// Snapshot of a prototype filter and its frequency response
#[derive(Debug, Clone, Serialize)]
pub struct PrototypeReport {
    pub generated_at: DateTime<Utc>,
    pub config: PqfConfig,
    pub coefficients: Vec<f64>,
    pub response: Vec<ResponsePoint>,
    /// Gain at the crossover between subband 0 and subband 1 (`pi / 2N`)
    pub crossover_gain_db: f64,
    /// Highest gain from the edge of the first neighbour band (`pi / N`) to Nyquist
    pub stopband_peak_db: f64,
}

impl PrototypeReport {
    /// Sample the response of `prototype` at `points` frequencies from DC to Nyquist
    pub fn collect(prototype: &Prototype, points: usize) -> Self {
        let subbands = prototype.config().subbands() as f64;
        let points = points.max(2);

        let response = (0..points)
            .map(|i| {
                let frequency = i as f64 / (points - 1) as f64;
                ResponsePoint {
                    frequency,
                    magnitude_db: to_db(prototype.magnitude_response(frequency * PI)),
                }
            })
            .collect();

        let stopband_start = PI / subbands;
        let stopband_peak = (0..points)
            .map(|i| stopband_start + (PI - stopband_start) * i as f64 / (points - 1) as f64)
            .map(|omega| prototype.magnitude_response(omega))
            .fold(0.0f64, f64::max);

        Self {
            generated_at: Utc::now(),
            config: *prototype.config(),
            coefficients: prototype.coefficients().to_vec(),
            response,
            crossover_gain_db: to_db(prototype.magnitude_response(PI / (2.0 * subbands))),
            stopband_peak_db: to_db(stopband_peak),
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, DiagnosticsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DiagnosticsError> {
        let json = self.to_json()?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(json.as_bytes())?;
        log::info!("Prototype report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

fn to_db(magnitude: f64) -> f64 {
    20.0 * magnitude.max(MIN_MAGNITUDE).log10()
}
