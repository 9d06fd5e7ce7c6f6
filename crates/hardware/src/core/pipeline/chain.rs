//! Four-stage weight-stationary dot-product chain.
//!
//! Each [`MacStage`] holds one weight in its operand-B register (loaded
//! through its bit of the [`WeightEnable`] vector). Every cycle the same
//! stream sample and stream enable are broadcast to all four stages' operand-A
//! capture, so one sample multiplies against all four weights at once. Stage 0
//! accumulates against a fixed zero; stage `i` accumulates against stage
//! `i - 1`'s result, one cycle after stage `i - 1` fires. Stage 3's result and
//! valid pulse are the chain's output and `finish`.
//!
//! Enable wiring per [`Forwarding`]:
//!
//! | signal                   | `Literal`         | `Pipelined`                     |
//! |--------------------------|-------------------|---------------------------------|
//! | operand-A capture        | stream            | stream                          |
//! | multiply-enables         | stream            | stream delayed 1                |
//! | stage 0 add-enables      | stream            | stream delayed 2                |
//! | stage `i` add capture    | valid of `i - 1`  | stage `i - 1` firing this edge  |
//! | stage `i` add value      | output of `i - 1` | sum stage `i - 1` latches       |
//! | stage `i` add-enables    | valid of `i - 1`  | valid of `i - 1`                |
//!
//! Under `Pipelined` a sample streamed on tick `t` finishes on tick
//! `t + 5`; samples separated by four idle ticks never overlap.

use crate::common::constants::CHAIN_STAGES;
use crate::config::{Config, Forwarding};
use crate::core::pipeline::latches::{PipelineRegisterSet, WeightBank};
use crate::core::pipeline::mac::MacStage;
use crate::core::pipeline::signals::{ChainInputs, ChainOutputs, MacInputs, WeightEnable};
use crate::core::pipeline::traits::Clocked;
use crate::core::units::fpu::FloatValue;
use crate::stats::UnitStats;

/// Ticks from streaming a sample to its `finish` pulse.
pub const fn latency(forwarding: Forwarding) -> usize {
    match forwarding {
        Forwarding::Pipelined => CHAIN_STAGES + 1,
        Forwarding::Literal => CHAIN_STAGES - 1,
    }
}

/// Idle ticks required between samples for isolated results.
pub const SAMPLE_SPACING: usize = CHAIN_STAGES;

/// Registers of the whole chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainState {
    /// Per-stage registers, stage 0 first.
    pub stages: [PipelineRegisterSet; CHAIN_STAGES],
    /// Weight registers.
    pub weights: WeightBank,
    /// Stream enable delayed by one and two cycles.
    pub stream_delay: [bool; 2],
}

impl ChainState {
    /// Reset state.
    pub const fn new() -> Self {
        Self {
            stages: [PipelineRegisterSet::new(); CHAIN_STAGES],
            weights: WeightBank::new(),
            stream_delay: [false; 2],
        }
    }
}

/// A clocked 4-wide dot-product unit.
#[derive(Debug, Clone)]
pub struct DotProductChain {
    stages: [MacStage; CHAIN_STAGES],
    weights: WeightBank,
    stream_delay: [bool; 2],
    forwarding: Forwarding,
    reset_held: bool,
    stats: UnitStats,
}

impl DotProductChain {
    /// Creates a chain in the reset state.
    pub fn new(config: &Config) -> Self {
        Self {
            stages: std::array::from_fn(|lane| MacStage::with_lane(config, lane)),
            weights: WeightBank::new(),
            stream_delay: [false; 2],
            forwarding: config.pipeline.forwarding,
            reset_held: false,
            stats: UnitStats::default(),
        }
    }

    /// Weight registers.
    pub const fn weights(&self) -> &WeightBank {
        &self.weights
    }

    /// Stage `lane`, or `None` past the chain width.
    pub fn stage(&self, lane: usize) -> Option<&MacStage> {
        self.stages.get(lane)
    }

    /// Outputs driven by the current registers.
    pub const fn outputs(&self) -> ChainOutputs {
        let last = self.stages[CHAIN_STAGES - 1].outputs();
        ChainOutputs {
            result: last.result,
            finish: last.valid,
        }
    }

    /// Chain-level activity counters. Per-stage counters live on each stage.
    pub const fn stats(&self) -> &UnitStats {
        &self.stats
    }

    /// Forwarding policy in effect.
    pub const fn forwarding(&self) -> Forwarding {
        self.forwarding
    }

    /// Loads all four weights in one tick.
    pub fn load_weights(&mut self, weights: [FloatValue; CHAIN_STAGES]) -> ChainOutputs {
        self.tick(&ChainInputs::load_weights(weights))
    }

    /// Streams one sample and idles until its `finish` pulse.
    ///
    /// Returns `None` if no pulse arrives within the chain latency, which
    /// happens while reset is held.
    pub fn run_sample(&mut self, sample: FloatValue) -> Option<FloatValue> {
        let mut out = self.tick(&ChainInputs::stream(sample));
        for _ in 0..latency(self.forwarding) {
            if out.finish {
                return Some(out.result);
            }
            out = self.tick(&ChainInputs::idle());
        }
        out.finish.then_some(out.result)
    }

    /// Per-stage drive signals for this cycle, plus the resulting chain state.
    fn step(&self, inputs: &ChainInputs) -> ([MacInputs; CHAIN_STAGES], ChainState) {
        let stream = inputs.stream_enable;
        let [delayed_1, delayed_2] = self.stream_delay;
        let (mul_en, head_add_en) = match self.forwarding {
            Forwarding::Pipelined => (delayed_1, delayed_2),
            Forwarding::Literal => (stream, stream),
        };

        let mut drives = [MacInputs::idle(); CHAIN_STAGES];
        let mut next = ChainState::new();
        for (lane, stage) in self.stages.iter().enumerate() {
            let (op_add, en_add, add_en) = if lane == 0 {
                (FloatValue::POS_ZERO, head_add_en, head_add_en)
            } else {
                let upstream = self.stages[lane - 1].registers();
                match self.forwarding {
                    Forwarding::Pipelined => {
                        let fired = &next.stages[lane - 1];
                        (fired.output, fired.valid, upstream.valid)
                    }
                    Forwarding::Literal => (upstream.output, upstream.valid, upstream.valid),
                }
            };

            let drive = MacInputs {
                op_a: inputs.stream_value,
                op_b: inputs.weights[lane],
                op_add,
                en_a: stream,
                en_b: inputs.weight_enable.contains(lane),
                en_add,
                mul_en_a: mul_en,
                mul_en_b: mul_en,
                add_en_a: add_en,
                add_en_b: add_en,
            };
            next.stages[lane] = stage.evaluate(&drive).0;
            drives[lane] = drive;
        }
        next.weights = self.weights.capture(inputs.weight_enable, &inputs.weights);
        next.stream_delay = [stream, delayed_1];
        (drives, next)
    }
}

impl Clocked for DotProductChain {
    type Inputs = ChainInputs;
    type Outputs = ChainOutputs;
    type State = ChainState;

    fn evaluate(&self, inputs: &ChainInputs) -> (ChainState, ChainOutputs) {
        if self.reset_held {
            return (ChainState::new(), ChainOutputs::default());
        }
        let (_, next) = self.step(inputs);
        let last = &next.stages[CHAIN_STAGES - 1];
        let outputs = ChainOutputs {
            result: last.output,
            finish: last.valid,
        };
        (next, outputs)
    }

    fn tick(&mut self, inputs: &ChainInputs) -> ChainOutputs {
        self.stats.cycles += 1;
        if self.reset_held {
            for stage in &mut self.stages {
                let _ = stage.tick(&MacInputs::idle());
            }
            return ChainOutputs::default();
        }

        let (drives, next) = self.step(inputs);
        for ((stage, regs), drive) in self.stages.iter_mut().zip(next.stages).zip(&drives) {
            stage.commit(regs, drive);
        }
        self.weights = next.weights;
        self.stream_delay = next.stream_delay;

        if inputs.stream_enable {
            self.stats.chain_samples += 1;
        }
        if inputs.weight_enable != WeightEnable::none() {
            self.stats.operand_captures += u64::from(inputs.weight_enable.bits().count_ones());
        }
        let outputs = self.outputs();
        if outputs.finish {
            self.stats.chain_finishes += 1;
            self.stats.valid_pulses += 1;
            tracing::debug!(result = ?outputs.result, "chain_finish");
        }
        outputs
    }

    fn reset(&mut self) {
        self.set_reset(true);
        self.set_reset(false);
    }

    fn set_reset(&mut self, asserted: bool) {
        if asserted && !self.reset_held {
            self.stats.resets += 1;
            tracing::debug!("chain_reset");
        }
        if asserted {
            self.weights = WeightBank::new();
            self.stream_delay = [false; 2];
        }
        for stage in &mut self.stages {
            stage.set_reset(asserted);
        }
        self.reset_held = asserted;
    }

    fn in_reset(&self) -> bool {
        self.reset_held
    }
}
