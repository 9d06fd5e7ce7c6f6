//! Binary16 value representation and field codec.
//!
//! A [`FloatValue`] is an opaque 16-bit pattern laid out as
//! `{sign:1, exponent:5, mantissa:10}` with bias 15. Every pattern belongs to
//! exactly one [`FloatClass`], chosen by the exponent and mantissa fields alone:
//!
//! | exponent | mantissa | class            |
//! |----------|----------|------------------|
//! | 0        | 0        | `Zero`           |
//! | 0        | ≠0       | `Denormal`       |
//! | 1..=30   | any      | `Normal`         |
//! | 31       | 0        | `Infinity`       |
//! | 31       | ≠0       | `OverflowMarker` |
//!
//! Overflow markers are not NaNs: the arithmetic units fold them into the
//! infinity path.

use std::fmt;

use crate::common::constants::{
    DENORMAL_EXPONENT, EXPONENT_BIAS, EXPONENT_MASK, EXPONENT_MAX, EXPONENT_SHIFT, IMPLICIT_ONE,
    MANTISSA_BITS, MANTISSA_MASK, NEG_INFINITY, NEG_ZERO, POS_INFINITY, POS_ZERO, SIGN_MASK,
};

/// Classification of a binary16 bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatClass {
    /// Exponent 0, mantissa 0. Signed zero.
    Zero,
    /// Exponent 0, nonzero mantissa. `0.mantissa × 2^-14`.
    Denormal,
    /// Exponent 1..=30. `1.mantissa × 2^(exponent - 15)`.
    Normal,
    /// Exponent 31, mantissa 0.
    Infinity,
    /// Exponent 31, nonzero mantissa. Treated as infinity by all arithmetic.
    OverflowMarker,
}

impl FloatClass {
    /// Returns `true` for the classes that take the infinity path.
    #[inline]
    pub const fn is_infinite_like(self) -> bool {
        matches!(self, Self::Infinity | Self::OverflowMarker)
    }

    /// Returns `true` for signed zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }
}

/// A half-precision value identified purely by its bit pattern.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FloatValue(u16);

/// Fields of a decoded [`FloatValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Sign bit (`true` = negative).
    pub sign: bool,
    /// Stored (biased) exponent field, 0..=31.
    pub exponent: u16,
    /// Stored mantissa field, 10 bits.
    pub mantissa: u16,
    /// Class determined by `exponent` and `mantissa`.
    pub class: FloatClass,
}

impl FloatValue {
    /// Positive zero (`0x0000`).
    pub const POS_ZERO: Self = Self(POS_ZERO);
    /// Negative zero (`0x8000`).
    pub const NEG_ZERO: Self = Self(NEG_ZERO);
    /// Positive infinity (`0x7C00`).
    pub const POS_INFINITY: Self = Self(POS_INFINITY);
    /// Negative infinity (`0xFC00`).
    pub const NEG_INFINITY: Self = Self(NEG_INFINITY);

    /// Wraps a raw bit pattern. Every pattern is a valid value.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw bit pattern.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Signed zero.
    #[inline]
    pub const fn zero(negative: bool) -> Self {
        if negative { Self::NEG_ZERO } else { Self::POS_ZERO }
    }

    /// Signed infinity.
    #[inline]
    pub const fn infinity(negative: bool) -> Self {
        if negative {
            Self::NEG_INFINITY
        } else {
            Self::POS_INFINITY
        }
    }

    /// Sign bit (`true` = negative).
    #[inline]
    pub const fn sign(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Stored (biased) exponent field.
    #[inline]
    pub const fn exponent(self) -> u16 {
        (self.0 >> EXPONENT_SHIFT) & EXPONENT_MASK
    }

    /// Stored mantissa field.
    #[inline]
    pub const fn mantissa(self) -> u16 {
        self.0 & MANTISSA_MASK
    }

    /// Class of this value.
    #[inline]
    pub const fn class(self) -> FloatClass {
        classify(self.exponent(), self.mantissa())
    }

    /// Same magnitude with the sign bit flipped.
    #[inline]
    pub const fn negate(self) -> Self {
        Self(self.0 ^ SIGN_MASK)
    }

    /// Widens to `f64` exactly. Overflow markers widen to infinity.
    pub fn to_f64(self) -> f64 {
        let d = decode(self);
        let magnitude = match d.class {
            FloatClass::Zero => 0.0,
            FloatClass::Infinity | FloatClass::OverflowMarker => f64::INFINITY,
            FloatClass::Denormal | FloatClass::Normal => {
                let significand = f64::from(implicit_mantissa(d.class, d.mantissa));
                let exponent = effective_exponent(d.class, d.exponent) - MANTISSA_BITS as i32;
                significand * 2f64.powi(exponent)
            }
        };
        if d.sign { -magnitude } else { magnitude }
    }
}

impl From<u16> for FloatValue {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

impl From<FloatValue> for u16 {
    fn from(value: FloatValue) -> Self {
        value.to_bits()
    }
}

impl fmt::Debug for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatValue({:#06x} = {})", self.0, self.to_f64())
    }
}

impl fmt::Display for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl fmt::LowerHex for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Classifies a value from its exponent and mantissa fields.
#[inline]
pub const fn classify(exponent: u16, mantissa: u16) -> FloatClass {
    match (exponent, mantissa) {
        (0, 0) => FloatClass::Zero,
        (0, _) => FloatClass::Denormal,
        (EXPONENT_MAX, 0) => FloatClass::Infinity,
        (EXPONENT_MAX, _) => FloatClass::OverflowMarker,
        _ => FloatClass::Normal,
    }
}

/// Splits a value into its fields and class.
#[inline]
pub const fn decode(value: FloatValue) -> Decoded {
    let exponent = value.exponent();
    let mantissa = value.mantissa();
    Decoded {
        sign: value.sign(),
        exponent,
        mantissa,
        class: classify(exponent, mantissa),
    }
}

/// Widens the stored mantissa to its 11-bit significand.
///
/// Normal values gain the implicit leading one, denormals an implicit zero.
/// Zero yields 0 and the infinity classes are widened like normals so the
/// adder can rank them by magnitude.
#[inline]
pub const fn implicit_mantissa(class: FloatClass, mantissa: u16) -> u32 {
    match class {
        FloatClass::Zero | FloatClass::Denormal => mantissa as u32,
        FloatClass::Normal | FloatClass::Infinity | FloatClass::OverflowMarker => {
            IMPLICIT_ONE | mantissa as u32
        }
    }
}

/// Unbiased exponent of the significand returned by [`implicit_mantissa`].
///
/// Denormals (and zero) sit at −14; every other class is `exponent − 15`.
#[inline]
pub const fn effective_exponent(class: FloatClass, exponent: u16) -> i32 {
    match class {
        FloatClass::Zero | FloatClass::Denormal => DENORMAL_EXPONENT,
        FloatClass::Normal | FloatClass::Infinity | FloatClass::OverflowMarker => {
            exponent as i32 - EXPONENT_BIAS
        }
    }
}

/// Packs sign, biased exponent, and mantissa into a value.
///
/// Fields wider than their slot are truncated to it; no range clamping is
/// performed, so callers must clamp the exponent beforehand.
#[inline]
pub const fn encode(sign: bool, biased_exponent: u16, mantissa: u16) -> FloatValue {
    let sign_bit = if sign { SIGN_MASK } else { 0 };
    FloatValue(
        sign_bit
            | ((biased_exponent & EXPONENT_MASK) << EXPONENT_SHIFT)
            | (mantissa & MANTISSA_MASK),
    )
}
