//! Binary16 format constants.
//!
//! This module defines the fixed layout of the half-precision format used by every unit. It includes:
//! 1. **Field Layout:** Widths, shifts, and masks for the sign, exponent, and mantissa fields.
//! 2. **Exponent Range:** Bias and the effective exponent assigned to denormals.
//! 3. **Canonical Values:** Bit patterns for signed zero and signed infinity.
//! 4. **Datapath Widths:** Positions used by the shared normalize/round stage.

/// Number of stored mantissa bits.
pub const MANTISSA_BITS: u32 = 10;

/// Number of exponent bits.
pub const EXPONENT_BITS: u32 = 5;

/// Bit position of the exponent field.
pub const EXPONENT_SHIFT: u32 = MANTISSA_BITS;

/// Bit position of the sign bit.
pub const SIGN_SHIFT: u32 = 15;

/// Mask for the stored mantissa field.
pub const MANTISSA_MASK: u16 = 0x03FF;

/// Mask for the exponent field once shifted down.
pub const EXPONENT_MASK: u16 = 0x001F;

/// Mask for the sign bit in place.
pub const SIGN_MASK: u16 = 0x8000;

/// Exponent bias.
pub const EXPONENT_BIAS: i32 = 15;

/// Largest biased exponent field value (reserved for infinity).
pub const EXPONENT_MAX: u16 = 0x1F;

/// Effective exponent of every denormal (and of zero).
pub const DENORMAL_EXPONENT: i32 = 1 - EXPONENT_BIAS;

/// Implicit leading one of a normal value, placed above the stored mantissa.
pub const IMPLICIT_ONE: u32 = 1 << MANTISSA_BITS;

/// Positive zero.
pub const POS_ZERO: u16 = 0x0000;

/// Negative zero.
pub const NEG_ZERO: u16 = 0x8000;

/// Positive infinity.
pub const POS_INFINITY: u16 = 0x7C00;

/// Negative infinity.
pub const NEG_INFINITY: u16 = 0xFC00;

/// Bit index where a normalized significand keeps its leading one.
///
/// Products of two 11-bit significands and aligned sums both land in a
/// 22-bit field; after normalization the leading one sits at bit 20 and
/// the kept mantissa occupies bits 19..10.
pub const NORMALIZED_LEAD_BIT: u32 = 2 * MANTISSA_BITS;

/// Bit index of a carry out of the normalized position.
pub const CARRY_BIT: u32 = NORMALIZED_LEAD_BIT + 1;

/// Bit index of the guard bit directly below the kept mantissa.
pub const GUARD_BIT: u32 = MANTISSA_BITS - 1;

/// Saturation limit for the adder's alignment shift.
pub const MAX_ALIGN_SHIFT: u32 = NORMALIZED_LEAD_BIT + 1;

/// Number of MAC stages in the dot-product chain.
pub const CHAIN_STAGES: usize = 4;
