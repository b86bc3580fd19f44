// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weighted DP itself.
//!
//! Classic Wagner-Fischer over two rolling rows, with one twist: a mismatched cell
//! costs `w + min(left, up, diagonal)` where `w` is the penalty if either unit at
//! that cell is penalized by the config, else 1. The weight applies uniformly to
//! whichever of the three edits wins. The row-0 and column-0 boundaries stay
//! unweighted, as in the textbook base case.
//!
//! Steps, in order:
//! 1. Put the shorter operand on the row axis (table width is `min(m, n) + 1`)
//! 2. Trim the shared prefix, then the shared suffix
//! 3. Reject lengths above the ceiling of the index type
//! 4. Empty shorter operand: the answer is the longer length
//! 5. Run the recurrence

use super::table::{Rows, TableCell, MAX_OPERAND_LEN};
use super::trim::trim_common_affixes;
use crate::config::CharClassConfig;
use crate::contracts;
use crate::error::DistanceError;
use crate::units::CodeUnit;

/// A reusable distance engine bound to one configuration.
///
/// Holds no scratch state between calls, so one engine can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedLevenshtein {
    config: CharClassConfig,
}

impl WeightedLevenshtein {
    pub fn new(config: CharClassConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CharClassConfig {
        &self.config
    }

    /// Distance between two code-unit slices, with `u32` as the index type.
    pub fn distance<C: CodeUnit>(&self, a: &[C], b: &[C]) -> Result<u64, DistanceError> {
        self.distance_in::<u32, C>(a, b)
    }

    /// Distance between two strings, one unit per `char`.
    pub fn distance_str(&self, a: &str, b: &str) -> Result<u64, DistanceError> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.distance(&a, &b)
    }

    /// Distance between two byte strings, one unit per byte.
    pub fn distance_bytes(&self, a: &[u8], b: &[u8]) -> Result<u64, DistanceError> {
        self.distance(a, b)
    }

    /// Distance with an explicit index type `T`.
    ///
    /// `T` only bounds operand lengths, to `T::MAX` or [`MAX_OPERAND_LEN`], whichever
    /// is smaller. Costs are always accumulated in `u64`.
    pub fn distance_in<T: TableCell, C: CodeUnit>(
        &self,
        a: &[C],
        b: &[C],
    ) -> Result<u64, DistanceError> {
        weighted_distance::<T, C>(&self.config, a, b)
    }
}

pub(crate) fn weighted_distance<T: TableCell, C: CodeUnit>(
    config: &CharClassConfig,
    a: &[C],
    b: &[C],
) -> Result<u64, DistanceError> {
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };
    let (a, b) = trim_common_affixes(a, b);
    contracts::check_trimmed(a, b);

    let ceiling = T::MAX.to_u64().min(MAX_OPERAND_LEN);
    let longer = checked_len(b.len(), ceiling)?;
    checked_len(a.len(), ceiling)?;

    if a.is_empty() {
        log::trace!("shorter operand empty after trimming, distance {}", longer);
        return Ok(longer);
    }

    let distance = fill(config, a, b);
    contracts::check_distance_bounds(distance, a.len(), b.len(), config.penalty());
    Ok(distance)
}

/// Run the recurrence over trimmed, non-empty operands with `a.len() <= b.len()`.
///
/// Both lengths are at most [`MAX_OPERAND_LEN`], so every cell stays at or below
/// `penalty * MAX_OPERAND_LEN < u64::MAX` and the additions cannot overflow.
fn fill<C: CodeUnit>(config: &CharClassConfig, a: &[C], b: &[C]) -> u64 {
    // Classify each unit once instead of once per cell.
    let penalized_a: Vec<bool> = a.iter().map(|&c| config.is_penalized(c)).collect();
    let penalized_b: Vec<bool> = b.iter().map(|&c| config.is_penalized(c)).collect();
    let penalty = u64::from(config.penalty());

    let mut rows = Rows::<u64>::new(a.len());
    let mut boundary = 0u64;

    for (&bj, &bj_penalized) in b.iter().zip(&penalized_b) {
        boundary += 1;
        let (prev, cur) = rows.split();
        cur[0] = boundary;

        for i in 1..=a.len() {
            cur[i] = if a[i - 1] == bj {
                prev[i - 1]
            } else {
                let w = if bj_penalized || penalized_a[i - 1] {
                    penalty
                } else {
                    1
                };
                cur[i - 1].min(prev[i]).min(prev[i - 1]) + w
            };
        }

        rows.advance();
    }

    rows.last_completed()
}

fn checked_len(len: usize, max: u64) -> Result<u64, DistanceError> {
    u64::try_from(len)
        .ok()
        .filter(|&l| l <= max)
        .ok_or_else(|| {
            log::debug!("operand length {} exceeds table limit {}", len, max);
            DistanceError::LengthOverflow { len, max }
        })
}
