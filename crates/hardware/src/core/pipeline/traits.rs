//! Clocked unit interface.
//!
//! Every clocked component is an explicit transition function: given the
//! current registers and this cycle's inputs, [`Clocked::evaluate`] computes
//! the registers after the edge and the outputs they drive, without touching
//! `self`. [`Clocked::tick`] applies that result atomically, so no route can
//! observe a value written on the same edge.

/// A synchronous unit advanced one clock edge at a time.
pub trait Clocked {
    /// Per-cycle input ports.
    type Inputs;
    /// Per-cycle output ports.
    type Outputs;
    /// Register state replaced on each edge.
    type State;

    /// Computes the state after the next edge and the outputs it drives.
    ///
    /// While reset is held this returns the reset state.
    fn evaluate(&self, inputs: &Self::Inputs) -> (Self::State, Self::Outputs);

    /// Applies one clock edge and returns the new outputs.
    fn tick(&mut self, inputs: &Self::Inputs) -> Self::Outputs;

    /// Pulses reset: every register returns to positive zero and valid drops.
    fn reset(&mut self);

    /// Asserts or releases reset.
    ///
    /// Asserting clears the registers immediately, regardless of clock phase,
    /// and keeps them cleared across ticks until released.
    fn set_reset(&mut self, asserted: bool);

    /// Whether reset is currently held.
    fn in_reset(&self) -> bool;
}
