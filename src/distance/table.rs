// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two rolling rows of the DP table and the index types that bound them.
//!
//! An index type caps how long a trimmed operand may be. `u32` is the default;
//! narrower types exist mostly so the overflow path can be exercised without
//! allocating gigabytes. No index type lifts the cap above [`MAX_OPERAND_LEN`],
//! which keeps every weighted cost representable in the `u64` cells.

use crate::contracts;
use std::fmt;

/// Longest trimmed operand any index type accepts.
pub const MAX_OPERAND_LEN: u64 = u32::MAX as u64;

/// An unsigned integer usable as a table index (and as a row cell).
pub trait TableCell: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// `len` as a cell, if it fits.
    fn from_len(len: usize) -> Option<Self>;

    fn to_u64(self) -> u64;

    fn saturating_add(self, rhs: Self) -> Self;
}

macro_rules! impl_table_cell {
    ($($t:ty),*) => {
        $(
            impl TableCell for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn from_len(len: usize) -> Option<Self> {
                    <$t>::try_from(len).ok()
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
            }
        )*
    };
}

impl_table_cell!(u16, u32, u64, usize);

/// Previous and current row, each `width + 1` cells, swapped after every row.
pub(crate) struct Rows<T> {
    prev: Vec<T>,
    cur: Vec<T>,
}

impl<T: TableCell> Rows<T> {
    /// Rows for a shorter operand of `width` units, with the previous row set to the
    /// base case `[0, 1, ..., width]`.
    pub(crate) fn new(width: usize) -> Self {
        let mut prev = Vec::with_capacity(width + 1);
        let mut cost = T::ZERO;
        for _ in 0..=width {
            prev.push(cost);
            cost = cost.saturating_add(T::ONE);
        }
        contracts::check_base_row(&prev);

        Self {
            prev,
            cur: vec![T::ZERO; width + 1],
        }
    }

    /// Read-only previous row alongside the writable current row.
    #[inline]
    pub(crate) fn split(&mut self) -> (&[T], &mut [T]) {
        (&self.prev, &mut self.cur)
    }

    /// The current row becomes the previous one.
    #[inline]
    pub(crate) fn advance(&mut self) {
        std::mem::swap(&mut self.prev, &mut self.cur);
    }

    /// Last cell of the most recently completed row.
    pub(crate) fn last_completed(&self) -> T {
        self.prev[self.prev.len() - 1]
    }
}
