//! Binary16 adder.
//!
//! The operand with the larger effective exponent (then the larger
//! significand, then operand A) is the *big* operand. The other one is
//! aligned to it by a right shift saturated at 21 places, so wide exponent
//! gaps flush it entirely. Both significands are placed in the same 22-bit
//! field the multiplier produces, which lets the sum reuse
//! [`normalize_round`] with the big operand's exponent as the base.
//!
//! The result sign comes from the big operand, flipped only if a
//! subtraction leaves the small side larger. That same sign is used for the
//! infinity and double-zero overrides, so `+inf + -inf` takes A's sign.

use crate::common::constants::{MANTISSA_BITS, MAX_ALIGN_SHIFT};

use super::format::{Decoded, FloatValue, decode, effective_exponent, implicit_mantissa};
use super::rounding::normalize_round;

/// Sign, significand, and unbiased exponent of one addend.
#[derive(Clone, Copy, Debug)]
struct Addend {
    sign: bool,
    significand: u32,
    exponent: i32,
}

impl From<Decoded> for Addend {
    fn from(d: Decoded) -> Self {
        Self {
            sign: d.sign,
            significand: implicit_mantissa(d.class, d.mantissa),
            exponent: effective_exponent(d.class, d.exponent),
        }
    }
}

/// Orders the addends as `(big, small)`. A wins exact ties.
fn rank(a: Addend, b: Addend) -> (Addend, Addend) {
    let b_larger = b.exponent > a.exponent
        || (b.exponent == a.exponent && b.significand > a.significand);
    if b_larger { (b, a) } else { (a, b) }
}

/// Adds two values (`a + b`). Total over all bit patterns.
pub fn add(a: FloatValue, b: FloatValue) -> FloatValue {
    let da = decode(a);
    let db = decode(b);
    let same_sign = da.sign == db.sign;
    let (big, small) = rank(Addend::from(da), Addend::from(db));

    let shift = big.exponent.abs_diff(small.exponent).min(MAX_ALIGN_SHIFT);
    let big_aligned = big.significand << MANTISSA_BITS;
    let small_aligned = (small.significand << MANTISSA_BITS) >> shift;

    let (sum, sign) = if same_sign {
        (big_aligned + small_aligned, big.sign)
    } else if big_aligned >= small_aligned {
        (big_aligned - small_aligned, big.sign)
    } else {
        (small_aligned - big_aligned, !big.sign)
    };

    if da.class.is_infinite_like() || db.class.is_infinite_like() {
        return FloatValue::infinity(sign);
    }
    if da.class.is_zero() && db.class.is_zero() {
        return FloatValue::zero(sign);
    }

    normalize_round(sign, sum, big.exponent)
}
