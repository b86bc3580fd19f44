// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted edit distance.
//!
//! [`WeightedLevenshtein`] is the reusable engine; [`distance`] and
//! [`distance_str`] are one-shot wrappers for callers holding a config by reference.

mod engine;
mod table;
mod trim;

pub use engine::WeightedLevenshtein;
pub use table::{TableCell, MAX_OPERAND_LEN};
pub use trim::{common_prefix_len, common_suffix_len, trim_common_affixes};

use crate::config::CharClassConfig;
use crate::error::DistanceError;
use crate::units::CodeUnit;

/// Weighted distance between two code-unit slices under `config`.
pub fn distance<C: CodeUnit>(
    a: &[C],
    b: &[C],
    config: &CharClassConfig,
) -> Result<u64, DistanceError> {
    engine::weighted_distance::<u32, C>(config, a, b)
}

/// Weighted distance between two strings under `config`, one unit per `char`.
pub fn distance_str(a: &str, b: &str, config: &CharClassConfig) -> Result<u64, DistanceError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    engine::weighted_distance::<u32, char>(config, &a, &b)
}
