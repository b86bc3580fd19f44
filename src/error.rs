// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The distance routine has exactly one way to fail: an operand too long for the
//! DP table's cell type. Everything else (empty inputs, identical inputs, fully
//! disjoint inputs) is a valid computation. Configuration problems surface earlier,
//! when the config is built or loaded, never in the middle of a distance call.

use thiserror::Error;

/// Failure of a distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// A trimmed operand does not fit in the table's cell type.
    #[error("sequence of length {len} exceeds the maximum table index {max}")]
    LengthOverflow { len: usize, max: u64 },
}

/// Invalid character-class configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Penalty weights start at 1 (an unpenalized edit).
    #[error("penalty must be at least 1")]
    ZeroPenalty,

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
