// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance routine.
//!
//! Debug-mode assertions for the properties the DP relies on. They compile to
//! nothing in release builds and fail loudly during development.
//!
//! | Contract Function         | Property                                        |
//! |---------------------------|-------------------------------------------------|
//! | `check_trimmed`           | no shared first/last unit, shorter on the rows  |
//! | `check_base_row`          | row 0 is `[0, 1, ..., m]`                       |
//! | `check_distance_bounds`   | `n - m <= d <= penalty * n`                     |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Trimming must leave operands whose first and last units differ, or the table
//! does work for free matches and the overflow ceiling is applied to the wrong
//! lengths.

use crate::distance::TableCell;

// ============================================================================
// TRIMMING CONTRACTS
// ============================================================================

/// Check that trimming left no shared affix and kept `a` as the shorter operand.
///
/// # Panics (debug builds only)
/// Panics if both operands are non-empty and share their first or last unit, or
/// if `a` is longer than `b`.
#[inline]
pub fn check_trimmed<C: Eq>(a: &[C], b: &[C]) {
    debug_assert!(
        a.len() <= b.len(),
        "Contract violation: shorter operand must index the row - {} > {}",
        a.len(),
        b.len()
    );

    if let (Some(a_first), Some(b_first)) = (a.first(), b.first()) {
        debug_assert!(
            a_first != b_first,
            "Contract violation: common prefix survived trimming"
        );
    }

    if let (Some(a_last), Some(b_last)) = (a.last(), b.last()) {
        debug_assert!(
            a_last != b_last,
            "Contract violation: common suffix survived trimming"
        );
    }
}

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that a freshly built row is the unweighted base case.
///
/// # Panics (debug builds only)
/// Panics if `row[i] != i` for any `i`.
#[inline]
pub fn check_base_row<T: TableCell>(row: &[T]) {
    for (i, cell) in row.iter().enumerate() {
        debug_assert!(
            cell.to_u64() == i as u64,
            "Contract violation: base row cell {} holds {}",
            i,
            cell
        );
    }
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a computed distance is within its trivial bounds.
///
/// Every edit costs at least 1, so the length difference is a lower bound.
/// Substituting all `m` units and inserting the other `n - m`, each at most at the
/// penalty, is an upper bound. Saturated narrow cells stay under that bound.
///
/// # Panics (debug builds only)
/// Panics if `distance` falls outside `[n - m, penalty * n]`.
#[inline]
pub fn check_distance_bounds(distance: u64, m: usize, n: usize, penalty: u32) {
    let lower = n.abs_diff(m) as u64;
    let upper = u64::from(penalty).saturating_mul(m.max(n) as u64);

    debug_assert!(
        distance >= lower,
        "Contract violation: distance {} below length difference {}",
        distance,
        lower
    );
    debug_assert!(
        distance <= upper,
        "Contract violation: distance {} above penalty * length {}",
        distance,
        upper
    );
}
