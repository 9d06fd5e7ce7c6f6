//! Cycle and event statistics for the clocked units.
//!
//! This module tracks activity counters for a MAC stage or a dot-product chain. It provides:
//! 1. **Cycles:** Clock edges applied and resets taken.
//! 2. **Register activity:** Operand captures, product latches, and valid pulses.
//! 3. **Enable misuse:** Cycles where only one of a required enable pair was asserted.
//! 4. **Chain activity:** Streamed samples and finish pulses.

use std::fmt;

use serde::Serialize;

/// Activity counters for one clocked unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UnitStats {
    /// Clock edges applied.
    pub cycles: u64,
    /// Resets taken (pulsed or asserted).
    pub resets: u64,
    /// Operand register writes (A, B, and add-operand counted separately).
    pub operand_captures: u64,
    /// Edges on which the multiply-stage register latched a product.
    pub product_latches: u64,
    /// Edges on which the output register latched a sum (valid pulses).
    pub valid_pulses: u64,
    /// Edges where exactly one of a multiply or add enable pair was high.
    pub degraded_cycles: u64,
    /// Edges with the chain's stream enable asserted.
    pub chain_samples: u64,
    /// Chain finish pulses observed.
    pub chain_finishes: u64,
}

impl UnitStats {
    /// Fraction of cycles that produced a valid pulse.
    pub fn valid_rate(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.valid_pulses as f64 / self.cycles as f64
        }
    }

    /// Serializes the counters as a JSON object.
    ///
    /// # Errors
    ///
    /// Propagates any [`serde_json::Error`] raised by the serializer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for UnitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cycles            {}", self.cycles)?;
        writeln!(f, "resets            {}", self.resets)?;
        writeln!(f, "operand captures  {}", self.operand_captures)?;
        writeln!(f, "product latches   {}", self.product_latches)?;
        writeln!(f, "valid pulses      {}", self.valid_pulses)?;
        writeln!(f, "degraded cycles   {}", self.degraded_cycles)?;
        if self.chain_samples > 0 || self.chain_finishes > 0 {
            writeln!(f, "chain samples     {}", self.chain_samples)?;
            writeln!(f, "chain finishes    {}", self.chain_finishes)?;
        }
        Ok(())
    }
}
