//! Configuration loading and per-unit classification.

use super::common::alnum_whitelist;
use weighted_leven::{CharClassConfig, ClassMode, ConfigError, WeightedLevenshtein};

#[test]
fn json_config_drives_distance() {
    let config = CharClassConfig::from_json(
        r##"{ "mode": "blacklist", "blacklistChars": "#@", "penalty": 3 }"##,
    )
    .unwrap();
    let engine = WeightedLevenshtein::new(config);

    assert_eq!(engine.distance_str("a#b", "a@b"), Ok(3));
    assert_eq!(engine.distance_str("a;b", "a:b"), Ok(1));
}

#[test]
fn json_rejects_unknown_mode() {
    let err = CharClassConfig::from_json(r#"{ "mode": "greylist" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn json_rejects_zero_penalty() {
    assert!(CharClassConfig::from_json(r#"{ "penalty": 0 }"#).is_err());
}

#[test]
fn none_mode_ignores_sets_and_penalty() {
    let config = CharClassConfig::default_blacklist()
        .with_penalty(9)
        .unwrap()
        .with_mode(ClassMode::None);
    let engine = WeightedLevenshtein::new(config);
    assert_eq!(engine.distance_str("a;b", "a,b"), Ok(1));
}

#[test]
fn byte_units_match_char_units_on_ascii() {
    let engine = WeightedLevenshtein::new(alnum_whitelist());
    for (a, b) in [("a;", "a:"), ("kitten", "sitting"), ("x-y_z", "x+y=z")] {
        assert_eq!(
            engine.distance_bytes(a.as_bytes(), b.as_bytes()),
            engine.distance_str(a, b)
        );
    }
}

#[test]
fn utf16_units_classify_by_scalar() {
    let engine = WeightedLevenshtein::new(alnum_whitelist());
    let a: Vec<u16> = "café".encode_utf16().collect();
    let b: Vec<u16> = "cafe".encode_utf16().collect();
    assert_eq!(engine.distance(&a, &b), Ok(2));
}

#[test]
fn lone_surrogate_is_outside_every_class() {
    let white = WeightedLevenshtein::new(alnum_whitelist());
    let black = WeightedLevenshtein::new(CharClassConfig::default_blacklist());
    let a: [u16; 2] = [0x61, 0xD800];
    let b: [u16; 2] = [0x61, 0x62];

    assert_eq!(white.distance(&a, &b), Ok(2));
    assert_eq!(black.distance(&a, &b), Ok(1));
}

#[test]
fn utf8_bytes_of_multibyte_char_are_separate_units() {
    // 'é' is two bytes, neither of which is in the ASCII whitelist.
    let engine = WeightedLevenshtein::new(alnum_whitelist());
    assert_eq!(engine.distance_bytes("é".as_bytes(), b"e"), Ok(3));
}
