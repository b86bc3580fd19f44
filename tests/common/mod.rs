//! Shared test utilities and fixtures.

#![allow(dead_code)]

use weighted_leven::{CharClassConfig, ClassMode};

// ============================================================================
// CONFIG FIXTURES
// ============================================================================

/// Whitelist of ASCII letters and digits.
pub fn alnum_whitelist() -> CharClassConfig {
    CharClassConfig::new()
        .with_mode(ClassMode::Whitelist)
        .with_whitelist(('a'..='z').chain('A'..='Z').chain('0'..='9'))
}

/// Blacklist of the stock punctuation with a custom penalty.
pub fn punct_blacklist(penalty: u32) -> CharClassConfig {
    CharClassConfig::default_blacklist()
        .with_penalty(penalty)
        .expect("penalty must be non-zero")
}

/// Both rules at once over small, overlapping sets.
pub fn both_modes() -> CharClassConfig {
    CharClassConfig::new()
        .with_mode(ClassMode::Both)
        .with_blacklist([';', ':', 'x'])
        .with_whitelist(('a'..='z').chain(['.']))
}

/// One config per mode, for tests that must hold regardless of configuration.
pub fn all_configs() -> Vec<CharClassConfig> {
    vec![
        CharClassConfig::new(),
        punct_blacklist(2),
        punct_blacklist(7),
        alnum_whitelist(),
        CharClassConfig::default_whitelist(),
        both_modes(),
    ]
}
