// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for set algebra.
//!
//! Results of distinct/union/intersect/except must be duplicate-free, keep
//! source order, and partition the left operand between intersect and except.

#![no_main]

use arbitrary::Arbitrary;
use fixedseq::{ImmutableList, Sequence};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct Input {
    left: Vec<u8>,
    right: Vec<u8>,
}

fn duplicate_free(values: &[u8]) -> bool {
    let mut seen = HashSet::new();
    values.iter().all(|v| seen.insert(*v))
}

fuzz_target!(|input: Input| {
    let left: ImmutableList<u8> = input.left.iter().copied().collect();
    let right = input.right;

    let distinct: Vec<u8> = left.distinct().copied().collect();
    let union: Vec<u8> = left.union(&right).copied().collect();
    let intersect: Vec<u8> = left.intersect(&right).copied().collect();
    let except: Vec<u8> = left.except(&right).copied().collect();

    for result in [&distinct, &union, &intersect, &except] {
        assert!(duplicate_free(result));
    }
    assert!(union.starts_with(&distinct));
    assert_eq!(intersect.len() + except.len(), distinct.len());
    assert!(intersect.iter().all(|v| right.contains(v)));
    assert!(except.iter().all(|v| !right.contains(v)));
});
