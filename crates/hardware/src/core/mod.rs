//! Core datapath implementation.
//!
//! This module contains the combinational arithmetic units and the clocked
//! pipelines that stage them.

/// Clocked pipelines (signals, latches, MAC stage, dot-product chain).
pub mod pipeline;

/// Execution units (binary16 FPU).
pub mod units;

pub use self::pipeline::{Clocked, DotProductChain, MacStage};
pub use self::units::fpu::{FloatValue, Fpu};
