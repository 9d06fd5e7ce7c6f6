//! Multiply-accumulate stage.
//!
//! A MAC stage wraps one multiplier and one adder behind its
//! [`PipelineRegisterSet`]. Per clock edge:
//! 1. **Capture:** `en_a` / `en_b` / `en_add` each write their operand register.
//! 2. **Multiply-route:** the multiplier sees operand A and B, each replaced
//!    by positive zero unless its own multiply-enable is high. When both are
//!    high the product register latches the result.
//! 3. **Accumulate-route:** the adder sees the product path and the
//!    add-operand register, each gated by its own add-enable. When both are
//!    high the output register latches the sum and `valid` pulses for one cycle.
//!
//! Routes read the registers as they stood before the edge. Asserting only
//! one enable of a pair is not an error; the ungated side simply reads zero.
//!
//! The product path depends on [`Forwarding`]: `Pipelined` feeds the product
//! register, `Literal` feeds the live multiplier output.

use crate::config::{Config, Forwarding};
use crate::core::pipeline::latches::PipelineRegisterSet;
use crate::core::pipeline::signals::{MacInputs, MacOutputs};
use crate::core::pipeline::traits::Clocked;
use crate::core::units::fpu::FloatValue;
use crate::core::units::fpu::add::add;
use crate::core::units::fpu::multiply::multiply;
use crate::stats::UnitStats;

/// Passes `value` when `enable` is high, positive zero otherwise.
#[inline]
const fn gate(value: FloatValue, enable: bool) -> FloatValue {
    if enable { value } else { FloatValue::POS_ZERO }
}

/// Multiplier input routing: each operand is independently gated.
#[inline]
pub fn multiply_route(a: FloatValue, b: FloatValue, mul_en_a: bool, mul_en_b: bool) -> FloatValue {
    multiply(gate(a, mul_en_a), gate(b, mul_en_b))
}

/// Adder input routing: each operand is independently gated.
#[inline]
pub fn accumulate_route(
    product: FloatValue,
    addend: FloatValue,
    add_en_a: bool,
    add_en_b: bool,
) -> FloatValue {
    add(gate(product, add_en_a), gate(addend, add_en_b))
}

/// Registers after one edge, as a pure function of the registers before it.
pub fn next_registers(
    regs: &PipelineRegisterSet,
    inputs: &MacInputs,
    forwarding: Forwarding,
) -> PipelineRegisterSet {
    let live_product = multiply_route(regs.operand_a, regs.operand_b, inputs.mul_en_a, inputs.mul_en_b);
    let product_path = match forwarding {
        Forwarding::Pipelined => regs.product,
        Forwarding::Literal => live_product,
    };
    let sum = accumulate_route(product_path, regs.operand_add, inputs.add_en_a, inputs.add_en_b);

    PipelineRegisterSet {
        operand_a: if inputs.en_a { inputs.op_a } else { regs.operand_a },
        operand_b: if inputs.en_b { inputs.op_b } else { regs.operand_b },
        operand_add: if inputs.en_add { inputs.op_add } else { regs.operand_add },
        product: if inputs.mul_fire() { live_product } else { regs.product },
        output: if inputs.add_fire() { sum } else { regs.output },
        valid: inputs.add_fire(),
    }
}

/// A clocked multiply-accumulate stage.
#[derive(Debug, Clone)]
pub struct MacStage {
    regs: PipelineRegisterSet,
    forwarding: Forwarding,
    lane: usize,
    trace: bool,
    reset_held: bool,
    stats: UnitStats,
}

impl MacStage {
    /// Creates a stage in the reset state.
    pub fn new(config: &Config) -> Self {
        Self::with_lane(config, 0)
    }

    /// Creates a stage labelled with its position in a chain (used in trace output).
    pub fn with_lane(config: &Config, lane: usize) -> Self {
        Self {
            regs: PipelineRegisterSet::new(),
            forwarding: config.pipeline.forwarding,
            lane,
            trace: config.general.trace_cycles,
            reset_held: false,
            stats: UnitStats::default(),
        }
    }

    /// Current register contents.
    pub const fn registers(&self) -> &PipelineRegisterSet {
        &self.regs
    }

    /// Outputs driven by the current registers.
    pub const fn outputs(&self) -> MacOutputs {
        MacOutputs {
            result: self.regs.output,
            valid: self.regs.valid,
        }
    }

    /// Forwarding policy in effect.
    pub const fn forwarding(&self) -> Forwarding {
        self.forwarding
    }

    /// Position label.
    pub const fn lane(&self) -> usize {
        self.lane
    }

    /// Activity counters.
    pub const fn stats(&self) -> &UnitStats {
        &self.stats
    }

    /// Installs the registers computed by [`Clocked::evaluate`] for `inputs`.
    pub(crate) fn commit(&mut self, next: PipelineRegisterSet, inputs: &MacInputs) {
        self.stats.cycles += 1;
        if self.reset_held {
            return;
        }
        self.stats.operand_captures +=
            u64::from(inputs.en_a) + u64::from(inputs.en_b) + u64::from(inputs.en_add);
        if inputs.mul_fire() {
            self.stats.product_latches += 1;
        }
        if inputs.is_degraded() {
            self.stats.degraded_cycles += 1;
        }
        if next.valid {
            self.stats.valid_pulses += 1;
            tracing::debug!(lane = self.lane, result = ?next.output, "mac_valid");
        }
        if self.trace {
            tracing::trace!(
                lane = self.lane,
                cycle = self.stats.cycles,
                en = ?(inputs.en_a, inputs.en_b, inputs.en_add),
                mul_en = ?(inputs.mul_en_a, inputs.mul_en_b),
                add_en = ?(inputs.add_en_a, inputs.add_en_b),
                product = ?next.product,
                output = ?next.output,
                "mac_tick"
            );
        }
        self.regs = next;
    }
}

impl Clocked for MacStage {
    type Inputs = MacInputs;
    type Outputs = MacOutputs;
    type State = PipelineRegisterSet;

    fn evaluate(&self, inputs: &MacInputs) -> (PipelineRegisterSet, MacOutputs) {
        if self.reset_held {
            return (PipelineRegisterSet::new(), MacOutputs::default());
        }
        let next = next_registers(&self.regs, inputs, self.forwarding);
        let outputs = MacOutputs {
            result: next.output,
            valid: next.valid,
        };
        (next, outputs)
    }

    fn tick(&mut self, inputs: &MacInputs) -> MacOutputs {
        let (next, outputs) = self.evaluate(inputs);
        self.commit(next, inputs);
        outputs
    }

    fn reset(&mut self) {
        self.set_reset(true);
        self.set_reset(false);
    }

    fn set_reset(&mut self, asserted: bool) {
        if asserted && !self.reset_held {
            self.stats.resets += 1;
            tracing::debug!(lane = self.lane, "mac_reset");
        }
        if asserted {
            self.regs = PipelineRegisterSet::new();
        }
        self.reset_held = asserted;
    }

    fn in_reset(&self) -> bool {
        self.reset_held
    }
}
