// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the weighted distance.
//!
//! Arbitrary byte strings and an arbitrary configuration. Checks the properties
//! that hold under every configuration: identity, symmetry, the empty base case,
//! and the bounds `unweighted <= weighted <= penalty * unweighted`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use weighted_leven::{CharClassConfig, ClassMode, WeightedLevenshtein};

/// Fuzz input for distance invariants
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: Vec<u8>,
    b: Vec<u8>,
    /// 0 = none, 1 = blacklist, 2 = whitelist, 3 = both
    mode: u8,
    blacklist: Vec<u8>,
    whitelist: Vec<u8>,
    penalty: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts (the DP is quadratic)
    let a = &input.a[..input.a.len().min(256)];
    let b = &input.b[..input.b.len().min(256)];

    let mode = ClassMode::ALL[usize::from(input.mode % 4)];
    let penalty = u32::from(input.penalty.max(1));
    let scale = u64::from(penalty);
    let config = match CharClassConfig::new()
        .with_mode(mode)
        .with_blacklist(input.blacklist.iter().map(|&u| char::from(u)))
        .with_whitelist(input.whitelist.iter().map(|&u| char::from(u)))
        .with_penalty(penalty)
    {
        Ok(config) => config,
        Err(_) => return,
    };

    let engine = WeightedLevenshtein::new(config);
    let plain = WeightedLevenshtein::default();

    let d = engine.distance_bytes(a, b).expect("short inputs never overflow");

    // INVARIANT 1: Symmetry
    assert_eq!(Ok(d), engine.distance_bytes(b, a), "asymmetric for a={:?} b={:?}", a, b);

    // INVARIANT 2: Identity
    assert_eq!(engine.distance_bytes(a, a), Ok(0));

    // INVARIANT 3: Empty operand costs its partner's length
    assert_eq!(engine.distance_bytes(a, &[]), Ok(a.len() as u64));

    // INVARIANT 4: Weighting only ever scales edits between 1 and the penalty
    let unweighted = plain.distance_bytes(a, b).expect("short inputs never overflow");
    assert!(unweighted <= d, "weighted {} below unweighted {}", d, unweighted);
    assert!(
        d <= scale * unweighted,
        "weighted {} above penalty {} * unweighted {}",
        d,
        penalty,
        unweighted
    );
});
