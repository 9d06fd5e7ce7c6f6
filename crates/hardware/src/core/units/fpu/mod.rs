//! Half-Precision Floating-Point Unit (FPU).
//!
//! This module implements the combinational binary16 arithmetic used by the
//! MAC stages. Every operation is a pure function of its operand bit patterns:
//! no rounding-mode state, no exception flags, no NaN payloads.
//!
//! Operations are organized into submodules:
//! - [`format`]: Field codec, classification, and canonical values.
//! - [`rounding`]: Shared normalize / guard-bit round / range-clamp stage.
//! - [`multiply`]: The multiplier.
//! - [`add`]: The adder.

/// Binary16 field codec and value classification.
pub mod format;

/// Normalize, round, and clamp.
pub mod rounding;

/// Binary16 multiplication.
pub mod multiply;

/// Binary16 addition.
pub mod add;

pub use self::format::{FloatClass, FloatValue};

/// Arithmetic operation selector for [`Fpu::execute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpuOp {
    /// `a × b`.
    Mul,
    /// `a + b`.
    Add,
}

/// Floating-Point Unit for binary16 operations.
///
/// A stateless facade over [`multiply::multiply`] and [`add::add`]; it is
/// safe to call from any thread at any rate.
#[derive(Debug)]
pub struct Fpu;

impl Fpu {
    /// Executes a two-operand operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use halfmac_core::core::units::fpu::{Fpu, FpuOp, FloatValue};
    ///
    /// let two = FloatValue::from_bits(0x4000);
    /// let three = FloatValue::from_bits(0x4200);
    /// assert_eq!(Fpu::execute(FpuOp::Mul, two, three).to_bits(), 0x4600);
    /// assert_eq!(Fpu::execute(FpuOp::Add, two, three).to_bits(), 0x4500);
    /// ```
    #[inline]
    pub fn execute(op: FpuOp, a: FloatValue, b: FloatValue) -> FloatValue {
        match op {
            FpuOp::Mul => multiply::multiply(a, b),
            FpuOp::Add => add::add(a, b),
        }
    }

    /// `a × b`.
    #[inline]
    pub fn multiply(a: FloatValue, b: FloatValue) -> FloatValue {
        multiply::multiply(a, b)
    }

    /// `a + b`.
    #[inline]
    pub fn add(a: FloatValue, b: FloatValue) -> FloatValue {
        add::add(a, b)
    }

    /// `(a × b) + c` with the product rounded before the addition.
    ///
    /// This is the combinational reference a MAC stage reproduces over
    /// its capture → multiply → accumulate sequence.
    #[inline]
    pub fn mac(a: FloatValue, b: FloatValue, c: FloatValue) -> FloatValue {
        add::add(multiply::multiply(a, b), c)
    }
}
