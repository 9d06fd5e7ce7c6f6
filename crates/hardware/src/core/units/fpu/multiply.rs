//! Binary16 multiplier.
//!
//! Special operands short-circuit in a fixed order: an infinity (or overflow
//! marker) on either side wins, even against zero, and only then does a zero
//! operand force signed zero. Everything else multiplies the 11-bit
//! significands into a 22-bit product and goes through the shared
//! [`normalize_round`] stage.

use super::format::{FloatValue, decode, effective_exponent, implicit_mantissa};
use super::rounding::normalize_round;

/// Multiplies two values. Total over all bit patterns.
pub fn multiply(a: FloatValue, b: FloatValue) -> FloatValue {
    let da = decode(a);
    let db = decode(b);
    let sign = da.sign ^ db.sign;

    if da.class.is_infinite_like() || db.class.is_infinite_like() {
        return FloatValue::infinity(sign);
    }
    if da.class.is_zero() || db.class.is_zero() {
        return FloatValue::zero(sign);
    }

    let product = implicit_mantissa(da.class, da.mantissa) * implicit_mantissa(db.class, db.mantissa);
    let exponent = effective_exponent(da.class, da.exponent) + effective_exponent(db.class, db.exponent);
    normalize_round(sign, product, exponent)
}
