// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared prefix and suffix removal.
//!
//! Matches are free under every configuration, so a shared prefix or suffix never
//! contributes to the distance. Trimming uses raw unit equality only.

/// Number of leading units `a` and `b` share.
#[inline]
pub fn common_prefix_len<C: Eq>(a: &[C], b: &[C]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Number of trailing units `a` and `b` share.
#[inline]
pub fn common_suffix_len<C: Eq>(a: &[C], b: &[C]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Strip the common prefix, then the common suffix of what remains.
///
/// Prefix first matters when the operands overlap with themselves: for `"aa"` vs
/// `"a"` the prefix takes the shared `a` and the suffix pass sees `"a"` vs `""`.
pub fn trim_common_affixes<'a, C: Eq>(a: &'a [C], b: &'a [C]) -> (&'a [C], &'a [C]) {
    let prefix = common_prefix_len(a, b);
    let (a, b) = (&a[prefix..], &b[prefix..]);

    let suffix = common_suffix_len(a, b);
    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}
