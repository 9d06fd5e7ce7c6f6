//! Register structure tests.

use halfmac_core::core::pipeline::latches::{PipelineRegisterSet, WeightBank};
use halfmac_core::core::pipeline::signals::WeightEnable;
use halfmac_core::FloatValue;

use crate::common::fv;

#[test]
fn register_set_resets_to_positive_zero() {
    let regs = PipelineRegisterSet::new();
    assert_eq!(regs, PipelineRegisterSet::default());
    assert_eq!(regs.product, FloatValue::POS_ZERO);
    assert_eq!(regs.output, FloatValue::POS_ZERO);
    assert!(!regs.valid);
}

#[test]
fn weight_bank_captures_enabled_lanes_only() {
    let offered = [fv(0x3C00), fv(0x3800), fv(0x4000), fv(0x4200)];
    let bank = WeightBank::new().capture(WeightEnable::from_bits(0b0101), &offered);

    assert_eq!(bank.get(0), Some(fv(0x3C00)));
    assert_eq!(bank.get(1), Some(FloatValue::POS_ZERO));
    assert_eq!(bank.get(2), Some(fv(0x4000)));
    assert_eq!(bank.get(3), Some(FloatValue::POS_ZERO));
    assert_eq!(bank.get(4), None);
}

#[test]
fn weight_bank_holds_without_enable() {
    let offered = [fv(0x3C00); 4];
    let bank = WeightBank::new().capture(WeightEnable::all(), &offered);
    let held = bank.capture(WeightEnable::none(), &[fv(0x7C00); 4]);
    assert_eq!(held.as_array(), &offered);
}
