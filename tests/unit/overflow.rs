//! Length ceiling of the DP table, and costs that outgrow the index type.
//!
//! The default `u32` index cannot be exhausted in a test, so these run the same
//! code path with a `u16` index, whose ceiling is 65 535 units.

use super::common::alnum_whitelist;
use weighted_leven::{CharClassConfig, ClassMode, DistanceError, WeightedLevenshtein, MAX_OPERAND_LEN};

const OVER_U16: usize = u16::MAX as usize + 1;

#[test]
fn longer_operand_over_ceiling_fails() {
    let engine = WeightedLevenshtein::default();
    let a = vec![b'a'; OVER_U16];
    let b = b"b".to_vec();

    let result = engine.distance_in::<u16, u8>(&a, &b);
    assert_eq!(
        result,
        Err(DistanceError::LengthOverflow {
            len: OVER_U16,
            max: u64::from(u16::MAX),
        })
    );
}

#[test]
fn overflow_is_checked_before_empty_shortcut() {
    // The shorter side is empty, but the answer itself is above the ceiling.
    let engine = WeightedLevenshtein::default();
    let a = vec![b'a'; OVER_U16];

    assert!(matches!(
        engine.distance_in::<u16, u8>(&a, &[]),
        Err(DistanceError::LengthOverflow { .. })
    ));
}

#[test]
fn ceiling_applies_after_trimming() {
    let engine = WeightedLevenshtein::new(alnum_whitelist());
    let shared = vec![b'z'; OVER_U16];

    let mut a = shared.clone();
    a.extend_from_slice(b";tail");
    let mut b = shared;
    b.extend_from_slice(b":tail");

    assert_eq!(engine.distance_in::<u16, u8>(&a, &b), Ok(2));
}

#[test]
fn exactly_at_ceiling_is_accepted() {
    let engine = WeightedLevenshtein::default();
    let a = vec![b'a'; u16::MAX as usize];

    assert_eq!(engine.distance_in::<u16, u8>(&a, &[]), Ok(u64::from(u16::MAX)));
}

#[test]
fn wider_index_accepts_what_narrow_index_rejects() {
    let engine = WeightedLevenshtein::default();
    let a = vec![b'a'; OVER_U16];

    assert_eq!(engine.distance_in::<u32, u8>(&a, &[]), Ok(OVER_U16 as u64));
    assert_eq!(engine.distance_in::<u64, u8>(&a, b"b"), Ok(OVER_U16 as u64));
}

#[test]
fn wide_index_types_share_the_u32_ceiling() {
    let engine = WeightedLevenshtein::default();
    assert_eq!(MAX_OPERAND_LEN, u64::from(u32::MAX));
    assert_eq!(engine.distance_in::<u64, u8>(b"ab", b"cd"), Ok(2));
    assert_eq!(engine.distance_in::<usize, u8>(b"ab", b"cd"), Ok(2));
}

#[test]
fn huge_penalty_is_not_clamped() {
    // Empty whitelist: every unit is penalized.
    let config = CharClassConfig::new()
        .with_mode(ClassMode::Whitelist)
        .with_penalty(u32::MAX)
        .unwrap();
    let engine = WeightedLevenshtein::new(config);

    assert_eq!(engine.distance_str("ab", "cd"), Ok(8_589_934_590));
    assert_eq!(engine.distance_in::<u16, u8>(b"ab", b"cd"), Ok(8_589_934_590));
}

#[test]
fn penalized_cost_can_exceed_narrow_index() {
    // 300 penalized substitutions at 1000 each: far above u16::MAX, yet valid.
    let config = CharClassConfig::new()
        .with_mode(ClassMode::Blacklist)
        .with_blacklist(['x'])
        .with_penalty(1000)
        .unwrap();
    let engine = WeightedLevenshtein::new(config);
    let a = vec![b'x'; 300];
    let b = vec![b'y'; 300];

    assert_eq!(engine.distance_in::<u16, u8>(&a, &b), Ok(300_000));
}

#[test]
fn error_message_names_lengths() {
    let err = DistanceError::LengthOverflow {
        len: 70_000,
        max: 65_535,
    };
    assert_eq!(
        err.to_string(),
        "sequence of length 70000 exceeds the maximum table index 65535"
    );
}
