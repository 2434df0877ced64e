//! # Pseudo-QMF Analysis Filter Bank
//!
//! A pure Rust implementation of the polyphase analysis filter bank used by
//! perceptual audio encoders to split a time-domain signal into equally
//! spaced frequency subbands.
//!
//! The bank is built in three stages: a windowed-sinc low-pass prototype,
//! its polyphase decomposition with a cosine modulation matrix, and a
//! streaming context that keeps the overlap between consecutive frames.
//!
//! ```
//! use pqf_rs::{AnalysisContext, PqfConfig};
//!
//! let config = PqfConfig::single_step(16, 24).unwrap();
//! let mut ctx = AnalysisContext::new(config).unwrap();
//! let blocks = ctx.submit(&[0.0f32; 16]).unwrap();
//! assert_eq!(blocks.len(), 1);
//! assert!(blocks.block(0).iter().all(|&v| v == 0.0));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod polyphase;
pub mod prototype;
pub mod tables;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisContext, OutputLayout, SubbandBlocks};
pub use config::{PqfConfig, WindowKind};
pub use error::{ConfigError, InputSizeError, PqfError, PqfResult};
pub use polyphase::PolyphaseBank;
pub use prototype::Prototype;
pub use tables::{default_bank, default_prototype};

#[cfg(feature = "diagnostics")]
pub use diagnostics::{DiagnosticsError, PrototypeReport};
