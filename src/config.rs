// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character-class configuration: which edits get the penalty weight.
//!
//! A config is a mode selector, two character sets and a penalty. It is built once
//! and never mutated while a distance is being computed, so one value can be shared
//! by any number of concurrent calls.
//!
//! # Classification
//!
//! | Mode        | `c` is penalized when               |
//! |-------------|-------------------------------------|
//! | `None`      | never                               |
//! | `Blacklist` | `c` is in the blacklist             |
//! | `Whitelist` | `c` is not in the whitelist         |
//! | `Both`      | either of the two rules above holds |
//!
//! In `Both` mode each rule reads its own set. The whitelist rule is applied last,
//! but since it can only raise the weight to the penalty (never reset it to 1), the
//! combined rule is a plain OR.
//!
//! # JSON surface
//!
//! ```json
//! { "mode": "whitelist", "whitelistChars": "abc123", "blacklistChars": "", "penalty": 2 }
//! ```
//!
//! Every field is optional; missing fields take the defaults of [`CharClassConfig::new`].

use crate::error::ConfigError;
use crate::units::CodeUnit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Punctuation that costs extra to edit in the stock blacklist.
pub const DEFAULT_BLACKLIST: &str = ";:,'";

/// Characters that are cheap to edit in the stock whitelist: ASCII letters, digits,
/// and the separators commonly found in URLs and identifiers.
///
/// `W` and `w` are absent, so edits touching them cost the penalty. Build a config
/// with [`CharClassConfig::with_whitelist`] for the full alphabet.
pub const DEFAULT_WHITELIST: &str =
    "ABCDEFGHIJKLMNOPQRSTUVXYZabcdefghijklmnopqrstuvxyz1234567890&=/_-?. ";

/// Penalty applied when no other weight is configured.
pub const DEFAULT_PENALTY: NonZeroU32 = NonZeroU32::MIN.saturating_add(1);

/// Which classification rule is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassMode {
    /// Every edit costs 1.
    #[default]
    None,
    /// Edits touching a blacklisted character cost the penalty.
    Blacklist,
    /// Edits touching a character outside the whitelist cost the penalty.
    Whitelist,
    /// Both rules, each against its own set.
    Both,
}

impl ClassMode {
    pub const ALL: [ClassMode; 4] = [
        ClassMode::None,
        ClassMode::Blacklist,
        ClassMode::Whitelist,
        ClassMode::Both,
    ];

    fn uses_blacklist(self) -> bool {
        matches!(self, ClassMode::Blacklist | ClassMode::Both)
    }

    fn uses_whitelist(self) -> bool {
        matches!(self, ClassMode::Whitelist | ClassMode::Both)
    }
}

impl fmt::Display for ClassMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassMode::None => "none",
            ClassMode::Blacklist => "blacklist",
            ClassMode::Whitelist => "whitelist",
            ClassMode::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for ClassMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ClassMode::None),
            "blacklist" => Ok(ClassMode::Blacklist),
            "whitelist" => Ok(ClassMode::Whitelist),
            "both" => Ok(ClassMode::Both),
            other => Err(format!(
                "unknown mode '{}' (expected none, blacklist, whitelist or both)",
                other
            )),
        }
    }
}

/// Immutable character-class configuration.
///
/// Fields are private so a penalty of zero can never be constructed; deserializing
/// `"penalty": 0` fails the same way [`CharClassConfig::with_penalty`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharClassConfig {
    mode: ClassMode,
    #[serde(with = "char_set")]
    blacklist_chars: BTreeSet<char>,
    #[serde(with = "char_set")]
    whitelist_chars: BTreeSet<char>,
    penalty: NonZeroU32,
}

impl Default for CharClassConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CharClassConfig {
    /// Unweighted: mode `None`, empty sets, penalty 2.
    pub fn new() -> Self {
        Self {
            mode: ClassMode::None,
            blacklist_chars: BTreeSet::new(),
            whitelist_chars: BTreeSet::new(),
            penalty: DEFAULT_PENALTY,
        }
    }

    /// Blacklist mode over [`DEFAULT_BLACKLIST`].
    pub fn default_blacklist() -> Self {
        Self::new()
            .with_mode(ClassMode::Blacklist)
            .with_blacklist(DEFAULT_BLACKLIST.chars())
    }

    /// Whitelist mode over [`DEFAULT_WHITELIST`].
    pub fn default_whitelist() -> Self {
        Self::new()
            .with_mode(ClassMode::Whitelist)
            .with_whitelist(DEFAULT_WHITELIST.chars())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_mode(mut self, mode: ClassMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the blacklist set.
    pub fn with_blacklist(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.blacklist_chars = chars.into_iter().collect();
        self
    }

    /// Replace the whitelist set.
    pub fn with_whitelist(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.whitelist_chars = chars.into_iter().collect();
        self
    }

    pub fn with_penalty(mut self, penalty: u32) -> Result<Self, ConfigError> {
        self.penalty = NonZeroU32::new(penalty).ok_or(ConfigError::ZeroPenalty)?;
        Ok(self)
    }

    pub fn mode(&self) -> ClassMode {
        self.mode
    }

    pub fn blacklist(&self) -> &BTreeSet<char> {
        &self.blacklist_chars
    }

    pub fn whitelist(&self) -> &BTreeSet<char> {
        &self.whitelist_chars
    }

    pub fn penalty(&self) -> u32 {
        self.penalty.get()
    }

    /// Does an edit touching `unit` cost the penalty?
    ///
    /// Units without a character value are members of neither set.
    pub fn is_penalized<C: CodeUnit>(&self, unit: C) -> bool {
        let c = unit.as_char();
        let mut penalized = false;

        if self.mode.uses_blacklist() {
            penalized |= c.is_some_and(|c| self.blacklist_chars.contains(&c));
        }
        if self.mode.uses_whitelist() {
            penalized |= !c.is_some_and(|c| self.whitelist_chars.contains(&c));
        }

        penalized
    }

    /// Weight of an edit between `a` and `b`: the penalty if either side is
    /// penalized, otherwise 1.
    pub fn weight<C: CodeUnit>(&self, a: C, b: C) -> u32 {
        if self.is_penalized(a) || self.is_penalized(b) {
            self.penalty()
        } else {
            1
        }
    }
}

/// Character sets travel as plain strings: `"abc"` rather than `["a","b","c"]`.
mod char_set {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeSet;

    pub fn serialize<S: Serializer>(set: &BTreeSet<char>, s: S) -> Result<S::Ok, S::Error> {
        let chars: String = set.iter().collect();
        s.serialize_str(&chars)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<char>, D::Error> {
        let chars = String::deserialize(d)?;
        Ok(chars.chars().collect())
    }
}
