//! Common types and constants shared by the arithmetic units and pipelines.
//!
//! This module provides the fundamental building blocks used across the crate. It includes:
//! 1. **Constants:** The binary16 field layout, bias, and canonical bit patterns.
//! 2. **Error Handling:** The configuration error type.

/// Binary16 format constants.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{NEG_INFINITY, NEG_ZERO, POS_INFINITY, POS_ZERO};
pub use error::ConfigError;
