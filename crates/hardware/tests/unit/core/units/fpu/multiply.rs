//! Multiplier tests.
//!
//! Covers the special-operand precedence (infinity over zero), sign
//! handling, guard-bit rounding, and both ends of the exponent range.

use halfmac_core::core::units::fpu::multiply::multiply;
use halfmac_core::core::units::fpu::{FloatValue, Fpu, FpuOp};
use rstest::rstest;

fn mul(a: u16, b: u16) -> u16 {
    multiply(FloatValue::from_bits(a), FloatValue::from_bits(b)).to_bits()
}

#[rstest]
#[case::two_times_three(0x4000, 0x4200, 0x4600)]
#[case::three_times_one_and_quarter(0x4200, 0x3D00, 0x4380)]
#[case::three_times_three_quarters(0x4200, 0x3A00, 0x4080)]
#[case::negative_operand(0xC000, 0x4200, 0xC600)]
#[case::both_negative(0xC000, 0xC200, 0x4600)]
#[case::half_of_min_normal(0x8400, 0x3800, 0x8200)]
#[case::identity(0x5555, 0x3C00, 0x5555)]
fn finite_products(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(mul(a, b), expected);
}

#[rstest]
#[case(0x3E01, 0x3E01, 0x4082)]
#[case(0x3C01, 0x3E01, 0x3E03)]
#[case(0x3C03, 0x3D55, 0x3D59)]
fn guard_bit_rounds_up(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(mul(a, b), expected);
}

#[test]
fn no_sticky_correction_below_guard() {
    // 0x3C01² = 0x100801 in the product field: guard clear, lower bits ignored.
    assert_eq!(mul(0x3C01, 0x3C01), 0x3C02);
}

#[test]
fn infinity_beats_zero() {
    assert_eq!(mul(0x7C00, 0x0000), 0x7C00);
    assert_eq!(mul(0x0000, 0xFC00), 0xFC00);
    assert_eq!(mul(0x8000, 0x7C00), 0xFC00);
}

#[test]
fn overflow_marker_is_infinity() {
    assert_eq!(mul(0x7C01, 0x0000), 0x7C00);
    assert_eq!(mul(0x7E00, 0x8000), 0xFC00);
    assert_eq!(mul(0x3C00, 0xFFFF), 0xFC00);
}

#[rstest]
#[case(0x3C00)]
#[case(0x0001)]
#[case(0xC500)]
#[case(0x7BFF)]
fn infinity_times_finite(#[case] finite: u16) {
    let sign = finite & 0x8000;
    assert_eq!(mul(0x7C00, finite), 0x7C00 ^ sign);
}

#[test]
fn zero_keeps_xor_sign() {
    assert_eq!(mul(0x0000, 0x3C00), 0x0000);
    assert_eq!(mul(0x8000, 0x3C00), 0x8000);
    assert_eq!(mul(0x8000, 0xBC00), 0x0000);
    assert_eq!(mul(0x0001, 0x8000), 0x8000);
}

#[test]
fn overflow_saturates_to_infinity() {
    assert_eq!(mul(0x7800, 0x4400), 0x7C00);
    assert_eq!(mul(0x7BFF, 0xC000), 0xFC00);
}

#[test]
fn smallest_denormal_doubles() {
    let result = mul(0x0001, 0x4000);
    assert_ne!(result, 0x0000);
    assert_eq!(result, 0x0002);
}

#[test]
fn denormal_scales_into_normal_range() {
    assert_eq!(mul(0x03FF, 0x4000), 0x07FE);
    assert_eq!(mul(0x0200, 0x3C00), 0x0200);
}

#[test]
fn underflow_flushes_to_signed_zero() {
    assert_eq!(mul(0x0400, 0x0400), 0x0000);
    assert_eq!(mul(0x0001, 0x3800), 0x0000);
    assert_eq!(mul(0x8001, 0x3800), 0x8000);
}

#[test]
fn facade_matches_free_function() {
    let a = FloatValue::from_bits(0x4248);
    let b = FloatValue::from_bits(0x3555);
    assert_eq!(Fpu::execute(FpuOp::Mul, a, b), multiply(a, b));
    assert_eq!(Fpu::multiply(a, b), multiply(a, b));
}
