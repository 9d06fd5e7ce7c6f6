//! # Statistics Tests
//!
//! Counter defaults, derived rates, and the JSON and text renderings.

use halfmac_core::config::Forwarding;
use halfmac_core::stats::UnitStats;

use crate::common::MacContext;

#[test]
fn test_default_is_zeroed() {
    let stats = UnitStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.valid_pulses, 0);
    assert!(stats.valid_rate().abs() < f64::EPSILON);
}

#[test]
fn test_valid_rate() {
    let stats = UnitStats {
        cycles: 8,
        valid_pulses: 2,
        ..UnitStats::default()
    };
    assert!((stats.valid_rate() - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_to_json_lists_every_counter() {
    let stats = UnitStats {
        cycles: 3,
        product_latches: 1,
        ..UnitStats::default()
    };
    let json = stats.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cycles"], 3);
    assert_eq!(value["product_latches"], 1);
    assert_eq!(value["chain_finishes"], 0);
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(8));
}

#[test]
fn test_display_hides_chain_counters_for_a_stage() {
    let mut ctx = MacContext::new(Forwarding::Pipelined);
    let _ = ctx.run_mac(0x4000, 0x4200, 0x3800);

    let text = ctx.stage.stats().to_string();
    assert!(text.contains("cycles            3"));
    assert!(text.contains("valid pulses      1"));
    assert!(!text.contains("chain samples"));
}

#[test]
fn test_display_shows_chain_counters() {
    let stats = UnitStats {
        chain_samples: 4,
        chain_finishes: 4,
        ..UnitStats::default()
    };
    let text = stats.to_string();
    assert!(text.contains("chain samples     4"));
    assert!(text.contains("chain finishes    4"));
}
