//! Execution units.
//!
//! This module contains the combinational arithmetic shared by every
//! pipeline stage.

/// Floating-Point Unit for binary16 operations.
pub mod fpu;
