//! Half-precision multiply-accumulate pipeline model.
//!
//! This crate implements a cycle-accurate model of a binary16 MAC datapath with the following:
//! 1. **FPU:** Bit-level multiply and add over a 1/5/10 format with denormals,
//!    signed zero, infinity precedence, and single guard-bit rounding.
//! 2. **MAC Stage:** A clocked unit with independent capture registers, gated
//!    multiply and accumulate routes, and a one-cycle valid pulse.
//! 3. **Dot-Product Chain:** Four MAC stages in a weight-stationary,
//!    broadcast-input composition.
//! 4. **Support:** Configuration, activity statistics, and shared constants.

/// Common constants and error types.
pub mod common;
/// Unit configuration (forwarding policy, tracing).
pub mod config;
/// Datapath (FPU and clocked pipelines).
pub mod core;
/// Activity counters.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Clocked unit interface.
pub use crate::core::pipeline::Clocked;
/// The 4-wide dot-product unit.
pub use crate::core::pipeline::DotProductChain;
/// The multiply-accumulate stage.
pub use crate::core::pipeline::MacStage;
/// A binary16 bit pattern.
pub use crate::core::units::fpu::FloatValue;
/// Stateless binary16 arithmetic.
pub use crate::core::units::fpu::Fpu;
