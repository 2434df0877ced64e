//! Unit tests for filter bank modules
//!
//! This module contains unit tests for individual components of the filter bank.
//! Tests are organized by module and functionality.

pub mod config_tests;
pub mod polyphase_tests;
