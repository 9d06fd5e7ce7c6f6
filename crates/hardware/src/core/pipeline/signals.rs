//! Per-cycle port bundles for the clocked units.
//!
//! This module defines the signals driven into and observed from the pipelines each cycle:
//! 1. **MAC Stage Ports:** Operand values, capture enables, and the two routing enable pairs.
//! 2. **Chain Ports:** The broadcast stream, the weight-enable mask, and the weight values.
//! 3. **Outputs:** Latched results and their one-cycle valid pulses.

use crate::common::constants::CHAIN_STAGES;
use crate::core::units::fpu::FloatValue;

/// Inputs to a MAC stage for one clock cycle.
///
/// Each capture enable writes its operand register on the edge. The routing
/// enables gate what the multiplier and adder see this cycle; a de-asserted
/// routing enable feeds positive zero instead of its register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MacInputs {
    /// Value offered to operand register A.
    pub op_a: FloatValue,
    /// Value offered to operand register B.
    pub op_b: FloatValue,
    /// Value offered to the add-operand register.
    pub op_add: FloatValue,
    /// Capture enable for operand A.
    pub en_a: bool,
    /// Capture enable for operand B.
    pub en_b: bool,
    /// Capture enable for the add-operand.
    pub en_add: bool,
    /// Routes operand A into the multiplier.
    pub mul_en_a: bool,
    /// Routes operand B into the multiplier.
    pub mul_en_b: bool,
    /// Routes the product path into the adder.
    pub add_en_a: bool,
    /// Routes the add-operand register into the adder.
    pub add_en_b: bool,
}

impl MacInputs {
    /// No enables asserted.
    pub const fn idle() -> Self {
        Self {
            op_a: FloatValue::POS_ZERO,
            op_b: FloatValue::POS_ZERO,
            op_add: FloatValue::POS_ZERO,
            en_a: false,
            en_b: false,
            en_add: false,
            mul_en_a: false,
            mul_en_b: false,
            add_en_a: false,
            add_en_b: false,
        }
    }

    /// Captures all three operands.
    pub const fn capture(a: FloatValue, b: FloatValue, add: FloatValue) -> Self {
        Self {
            op_a: a,
            op_b: b,
            op_add: add,
            en_a: true,
            en_b: true,
            en_add: true,
            ..Self::idle()
        }
    }

    /// Asserts both multiply-enables.
    pub const fn multiply() -> Self {
        Self {
            mul_en_a: true,
            mul_en_b: true,
            ..Self::idle()
        }
    }

    /// Asserts both add-enables.
    pub const fn accumulate() -> Self {
        Self {
            add_en_a: true,
            add_en_b: true,
            ..Self::idle()
        }
    }

    /// Both multiply-enables are high, so the product register updates.
    #[inline]
    pub const fn mul_fire(&self) -> bool {
        self.mul_en_a && self.mul_en_b
    }

    /// Both add-enables are high, so the output register updates.
    #[inline]
    pub const fn add_fire(&self) -> bool {
        self.add_en_a && self.add_en_b
    }

    /// Exactly one enable of a routing pair is high.
    #[inline]
    pub const fn is_degraded(&self) -> bool {
        self.mul_en_a != self.mul_en_b || self.add_en_a != self.add_en_b
    }
}

/// Outputs of a MAC stage after a clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MacOutputs {
    /// Contents of the output register.
    pub result: FloatValue,
    /// High only on the cycle after the output register was written.
    pub valid: bool,
}

/// 4-bit weight-enable vector; bit `i` loads stage `i`'s weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WeightEnable(u8);

impl WeightEnable {
    const MASK: u8 = (1 << CHAIN_STAGES) - 1;

    /// Builds a mask from raw bits. Bits above the chain width are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Every stage enabled.
    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// No stage enabled.
    pub const fn none() -> Self {
        Self(0)
    }

    /// Only stage `lane` enabled. Lanes past the chain width yield an empty mask.
    pub const fn lane(lane: usize) -> Self {
        if lane < CHAIN_STAGES {
            Self(1 << lane)
        } else {
            Self(0)
        }
    }

    /// Raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether stage `lane` is enabled.
    pub const fn contains(self, lane: usize) -> bool {
        lane < CHAIN_STAGES && self.0 & (1 << lane) != 0
    }
}

/// Inputs to the dot-product chain for one clock cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainInputs {
    /// Broadcast stream enable.
    pub stream_enable: bool,
    /// Broadcast stream sample.
    pub stream_value: FloatValue,
    /// Which weight registers load this cycle.
    pub weight_enable: WeightEnable,
    /// Candidate weight values, one per stage.
    pub weights: [FloatValue; CHAIN_STAGES],
}

impl ChainInputs {
    /// Nothing streamed, no weights loaded.
    pub const fn idle() -> Self {
        Self {
            stream_enable: false,
            stream_value: FloatValue::POS_ZERO,
            weight_enable: WeightEnable::none(),
            weights: [FloatValue::POS_ZERO; CHAIN_STAGES],
        }
    }

    /// Streams one sample.
    pub const fn stream(value: FloatValue) -> Self {
        Self {
            stream_enable: true,
            stream_value: value,
            ..Self::idle()
        }
    }

    /// Loads every weight register.
    pub const fn load_weights(weights: [FloatValue; CHAIN_STAGES]) -> Self {
        Self {
            weight_enable: WeightEnable::all(),
            weights,
            ..Self::idle()
        }
    }
}

/// Outputs of the dot-product chain after a clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainOutputs {
    /// Last stage's output register.
    pub result: FloatValue,
    /// Last stage's valid pulse.
    pub finish: bool,
}
