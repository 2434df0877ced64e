//! Shared tables of the default profile
//!
//! The default prototype and its polyphase bank are computed once, on
//! first use, and then shared read-only by every context built from the
//! default configuration.

use crate::config::PqfConfig;
use crate::polyphase::PolyphaseBank;
use crate::prototype::Prototype;
use lazy_static::lazy_static;
use std::sync::Arc;

lazy_static! {
    /// Polyphase bank of `PqfConfig::default()`
    static ref DEFAULT_BANK: Arc<PolyphaseBank> = Arc::new(PolyphaseBank::new(&PqfConfig::default()));
}

/// Prototype filter of the default profile
pub fn default_prototype() -> &'static Prototype {
    DEFAULT_BANK.prototype()
}

/// Shared polyphase bank of the default profile
pub fn default_bank() -> Arc<PolyphaseBank> {
    Arc::clone(&DEFAULT_BANK)
}
