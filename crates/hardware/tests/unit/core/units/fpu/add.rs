//! Adder tests.
//!
//! Covers operand ranking (exponent, then magnitude, then A), alignment
//! flush, cancellation, denormal carries, and the infinity and double-zero
//! overrides that reuse the magnitude-based sign rule.

use halfmac_core::core::units::fpu::add::add;
use halfmac_core::core::units::fpu::{FloatValue, Fpu, FpuOp};
use rstest::rstest;

fn sum(a: u16, b: u16) -> u16 {
    add(FloatValue::from_bits(a), FloatValue::from_bits(b)).to_bits()
}

#[rstest]
#[case::six_plus_half(0x4600, 0x3800, 0x4680)]
#[case::one_plus_half(0x3C00, 0x3800, 0x3E00)]
#[case::two_plus_three(0x4000, 0x4200, 0x4500)]
#[case::thirty_two_plus_one(0x5000, 0x3C00, 0x5020)]
#[case::zero_plus_one(0x0000, 0x3C00, 0x3C00)]
#[case::repeating_mantissa(0x3555, 0x3555, 0x3955)]
fn same_sign_sums(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(sum(a, b), expected);
}

#[rstest]
#[case::one_minus_two(0x3C00, 0xC000, 0xBC00)]
#[case::minus_one_plus_two(0xBC00, 0x4000, 0x3C00)]
#[case::near_total_cancellation(0x4000, 0xBFFF, 0x1400)]
#[case::one_ulp_difference(0x3C01, 0xBC00, 0x1400)]
#[case::normal_minus_denormal(0x0400, 0x8001, 0x03FF)]
fn opposite_sign_differences(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(sum(a, b), expected);
}

#[test]
fn exact_cancellation_is_positive_zero() {
    assert_eq!(sum(0x3C00, 0xBC00), 0x0000);
}

#[test]
fn cancellation_sign_follows_operand_a() {
    // Equal magnitudes: A is the big operand, so its sign survives.
    assert_eq!(sum(0xBC00, 0x3C00), 0x8000);
}

#[test]
fn denormals_carry_into_normal_range() {
    assert_eq!(sum(0x0001, 0x0001), 0x0002);
    assert_eq!(sum(0x03FF, 0x0001), 0x0400);
}

#[test]
fn wide_gap_flushes_small_operand() {
    assert_eq!(sum(0x3C00, 0x0001), 0x3C00);
    assert_eq!(sum(0x6000, 0x0400), 0x6000);
}

#[test]
fn overflow_saturates_to_infinity() {
    assert_eq!(sum(0x7BFF, 0x7BFF), 0x7C00);
    assert_eq!(sum(0xFBFF, 0xFBFF), 0xFC00);
}

#[rstest]
#[case(0x4000)]
#[case(0xC000)]
#[case(0x0001)]
#[case(0x0000)]
#[case(0x7BFF)]
fn negative_infinity_absorbs_finite(#[case] finite: u16) {
    assert_eq!(sum(0xFC00, finite), 0xFC00);
    assert_eq!(sum(finite, 0xFC00), 0xFC00);
}

#[test]
fn opposing_infinities_take_operand_a_sign() {
    assert_eq!(sum(0x7C00, 0xFC00), 0x7C00);
    assert_eq!(sum(0xFC00, 0x7C00), 0xFC00);
}

#[test]
fn overflow_marker_ranks_above_infinity() {
    // The marker's nonzero mantissa makes it the big operand, so its sign wins.
    assert_eq!(sum(0x7C00, 0xFE00), 0xFC00);
    assert_eq!(sum(0xFE00, 0x7C00), 0xFC00);
    assert_eq!(sum(0x7C00, 0x7E00), 0x7C00);
}

#[test]
fn double_zero_sign_rule() {
    assert_eq!(sum(0x0000, 0x0000), 0x0000);
    assert_eq!(sum(0x8000, 0x8000), 0x8000);
    assert_eq!(sum(0x8000, 0x0000), 0x8000);
    assert_eq!(sum(0x0000, 0x8000), 0x0000);
}

#[test]
fn facade_matches_free_function() {
    let a = FloatValue::from_bits(0x4248);
    let b = FloatValue::from_bits(0xB555);
    assert_eq!(Fpu::execute(FpuOp::Add, a, b), add(a, b));
    assert_eq!(Fpu::add(a, b), add(a, b));
}

#[test]
fn mac_reference_rounds_twice() {
    let mac = Fpu::mac(
        FloatValue::from_bits(0x4000),
        FloatValue::from_bits(0x4200),
        FloatValue::from_bits(0x3800),
    );
    assert_eq!(mac.to_bits(), 0x4680);
}
