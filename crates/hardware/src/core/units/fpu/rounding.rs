//! Shared normalize, guard-bit round, and range-clamp stage.
//!
//! Both the multiplier and the adder hand this stage a raw significand in a
//! 22-bit field whose binary point sits below bit 20, together with the
//! unbiased exponent of that binary point. The stage:
//! 1. **Normalizes** so the leading one lands on bit 20 (shifting right once
//!    on a carry into bit 21).
//! 2. **Rounds** using only the guard bit below the kept mantissa. A set guard
//!    bit rounds up; nothing below it is inspected.
//! 3. **Clamps** the biased exponent: overflow encodes infinity, underflow
//!    shifts the rounded significand into a denormal or signed zero.

use crate::common::constants::{
    CARRY_BIT, EXPONENT_BIAS, EXPONENT_MAX, GUARD_BIT, IMPLICIT_ONE, MANTISSA_BITS, MANTISSA_MASK,
    NORMALIZED_LEAD_BIT,
};

use super::format::{FloatValue, encode};

/// Moves the leading one of `significand` onto [`NORMALIZED_LEAD_BIT`].
///
/// Returns the shifted significand and the adjusted exponent. A zero
/// significand is returned unchanged.
#[inline]
pub const fn normalize(significand: u32, exponent: i32) -> (u32, i32) {
    if significand == 0 {
        return (0, exponent);
    }
    if significand & (1 << CARRY_BIT) != 0 {
        return (significand >> 1, exponent + 1);
    }
    let lead = 31 - significand.leading_zeros();
    let shift = NORMALIZED_LEAD_BIT - lead;
    (significand << shift, exponent - shift as i32)
}

/// Extracts the 10-bit mantissa from a normalized significand, rounding up
/// when the guard bit is set.
///
/// A carry out of the mantissa wraps it to zero and bumps the exponent.
#[inline]
pub const fn round_guard(normalized: u32, exponent: i32) -> (u16, i32) {
    let mut mantissa = (normalized >> MANTISSA_BITS) & MANTISSA_MASK as u32;
    let mut exponent = exponent;
    if (normalized >> GUARD_BIT) & 1 != 0 {
        mantissa += 1;
        if mantissa > MANTISSA_MASK as u32 {
            mantissa = 0;
            exponent += 1;
        }
    }
    (mantissa as u16, exponent)
}

/// Encodes a rounded mantissa and unbiased exponent, clamping to the
/// representable range.
#[inline]
pub const fn clamp_encode(sign: bool, mantissa: u16, exponent: i32) -> FloatValue {
    let biased = exponent + EXPONENT_BIAS;
    if biased >= EXPONENT_MAX as i32 {
        return FloatValue::infinity(sign);
    }
    if biased <= 0 {
        let shift = (1 - biased) as u32;
        let significand = IMPLICIT_ONE | mantissa as u32;
        if shift > MANTISSA_BITS {
            return FloatValue::zero(sign);
        }
        return encode(sign, 0, (significand >> shift) as u16);
    }
    encode(sign, biased as u16, mantissa)
}

/// Runs the full normalize → round → clamp sequence.
///
/// A zero significand produces signed zero.
pub fn normalize_round(sign: bool, significand: u32, exponent: i32) -> FloatValue {
    if significand == 0 {
        return FloatValue::zero(sign);
    }
    let (normalized, exponent) = normalize(significand, exponent);
    let (mantissa, exponent) = round_guard(normalized, exponent);
    clamp_encode(sign, mantissa, exponent)
}
