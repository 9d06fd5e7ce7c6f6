//! Register structures held by the clocked units.
//!
//! This module defines the state that persists across clock edges:
//! 1. **Pipeline Register Set:** A MAC stage's three operand registers, its
//!    multiply-stage register, and its output register with the valid flag.
//! 2. **Weight Bank:** The chain's four independently enabled weight registers.
//!
//! Both reset to positive zero (and `valid = false`). A register only changes
//! on an edge where its own enable is high; nothing clears it except reset.

use crate::common::constants::CHAIN_STAGES;
use crate::core::pipeline::signals::WeightEnable;
use crate::core::units::fpu::FloatValue;

/// Registers of one MAC stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineRegisterSet {
    /// Captured operand A.
    pub operand_a: FloatValue,
    /// Captured operand B.
    pub operand_b: FloatValue,
    /// Captured add-operand.
    pub operand_add: FloatValue,
    /// Multiply-stage register.
    pub product: FloatValue,
    /// Output register.
    pub output: FloatValue,
    /// One-cycle valid flag for `output`.
    pub valid: bool,
}

impl PipelineRegisterSet {
    /// All registers at positive zero, valid low.
    pub const fn new() -> Self {
        Self {
            operand_a: FloatValue::POS_ZERO,
            operand_b: FloatValue::POS_ZERO,
            operand_add: FloatValue::POS_ZERO,
            product: FloatValue::POS_ZERO,
            output: FloatValue::POS_ZERO,
            valid: false,
        }
    }
}

/// The chain's weight registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeightBank {
    weights: [FloatValue; CHAIN_STAGES],
}

impl WeightBank {
    /// All weights at positive zero.
    pub const fn new() -> Self {
        Self {
            weights: [FloatValue::POS_ZERO; CHAIN_STAGES],
        }
    }

    /// Contents after an edge: lanes set in `enable` take the offered value,
    /// the rest hold.
    pub fn capture(&self, enable: WeightEnable, offered: &[FloatValue; CHAIN_STAGES]) -> Self {
        let mut next = *self;
        for (lane, (slot, value)) in next.weights.iter_mut().zip(offered).enumerate() {
            if enable.contains(lane) {
                *slot = *value;
            }
        }
        next
    }

    /// Weight held by stage `lane`, or `None` past the chain width.
    pub fn get(&self, lane: usize) -> Option<FloatValue> {
        self.weights.get(lane).copied()
    }

    /// All weights in stage order.
    pub const fn as_array(&self) -> &[FloatValue; CHAIN_STAGES] {
        &self.weights
    }
}
