//! Clocked multiply-accumulate pipelines.
//!
//! This module contains the synchronous units built on top of the FPU:
//! 1. **Signals:** Per-cycle input and output port bundles.
//! 2. **Latches:** Register sets that persist across clock edges.
//! 3. **Traits:** The `Clocked` evaluate/tick interface.
//! 4. **MAC Stage:** One multiplier and one adder behind staged registers.
//! 5. **Chain:** Four MAC stages composed into a dot-product unit.

/// Per-cycle port bundles.
pub mod signals;

/// MAC stage registers and the chain's weight bank.
pub mod latches;

/// Clocked unit interface.
pub mod traits;

/// The multiply-accumulate stage.
pub mod mac;

/// The 4-wide dot-product chain.
pub mod chain;

pub use self::chain::DotProductChain;
pub use self::mac::MacStage;
pub use self::traits::Clocked;
