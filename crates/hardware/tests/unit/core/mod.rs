//! # Core Datapath
//!
//! Tests for the combinational FPU and the clocked pipelines built on it.

/// Clocked pipeline tests (MAC stage, chain, latches).
pub mod pipeline;
