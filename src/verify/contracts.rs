// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode invariant checks.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract function              | Invariant                                          |
//! |--------------------------------|----------------------------------------------------|
//! | `check_slice_within_parent`    | `offset + len <= parent.len()`                     |
//! | `check_window_within`          | `start <= end <= length` after strict resolution   |
//! | `check_stable_order`           | sorted output is ordered, ties in source order     |
//! | `check_chunk_shape`            | every chunk but the last has exactly `size` items  |
//! | `check_comparer_consistent`    | `equals(a, b)` implies `hash(a) == hash(b)`        |
//!
//! # Usage
//!
//! ```ignore
//! use fixedseq::verify::contracts::*;
//!
//! // Panics in debug builds if the slice escapes its parent.
//! check_slice_within_parent(offset, len, parent.len());
//! ```

use crate::compare::{Comparer, EqualityComparer};
use std::cmp::Ordering;
use std::ops::Range;

// ============================================================================
// STORAGE CONTRACTS
// ============================================================================

/// Check that a slice view stays inside its parent.
///
/// # Panics (debug builds only)
/// Panics if `offset + len` overflows or exceeds `parent_len`.
#[inline]
pub fn check_slice_within_parent(offset: usize, len: usize, parent_len: usize) {
    debug_assert!(
        offset.checked_add(len).is_some_and(|end| end <= parent_len),
        "Contract violation: Slice.WithinParent - offset {} + len {} > parent.len() {}",
        offset,
        len,
        parent_len
    );
}

/// Check that a strictly resolved window fits its sequence.
#[inline]
pub fn check_window_within(window: &Range<usize>, length: usize) {
    debug_assert!(
        window.start <= window.end && window.end <= length,
        "Contract violation: Window.Strict - {}..{} does not fit length {}",
        window.start,
        window.end,
        length
    );
}

// ============================================================================
// ORDERING CONTRACTS
// ============================================================================

/// Check that `sorted` is ordered by `comparer` and that ties kept source order.
///
/// Each entry is `(source position, element)`.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair that is out of order, or that compares
/// equal while its source positions are inverted.
#[inline]
pub fn check_stable_order<T: ?Sized, C: Comparer<T> + ?Sized>(
    sorted: &[(usize, &T)],
    comparer: &C,
) {
    if cfg!(debug_assertions) {
        for (i, pair) in sorted.windows(2).enumerate() {
            let (prev_pos, prev) = pair[0];
            let (curr_pos, curr) = pair[1];
            match comparer.compare(prev, curr) {
                Ordering::Less => {}
                Ordering::Equal => debug_assert!(
                    prev_pos < curr_pos,
                    "Contract violation: Order.Stable - equal elements at sorted[{}], sorted[{}] \
                     came from source positions {} and {}",
                    i,
                    i + 1,
                    prev_pos,
                    curr_pos
                ),
                Ordering::Greater => debug_assert!(
                    false,
                    "Contract violation: Order.Sorted - sorted[{}] > sorted[{}]",
                    i,
                    i + 1
                ),
            }
        }
    }
}

// ============================================================================
// PARTITION CONTRACTS
// ============================================================================

/// Check one chunk of a chunked partition.
///
/// `remaining` is the number of elements still unconsumed after this chunk.
#[inline]
pub fn check_chunk_shape(chunk_len: usize, size: usize, remaining: usize) {
    debug_assert!(
        chunk_len >= 1 && chunk_len <= size,
        "Contract violation: Chunk.Shape - chunk of {} with size {}",
        chunk_len,
        size
    );
    debug_assert!(
        remaining == 0 || chunk_len == size,
        "Contract violation: Chunk.Shape - short chunk of {} with {} elements left",
        chunk_len,
        remaining
    );
}

// ============================================================================
// COMPARER CONTRACTS
// ============================================================================

/// Check that two elements the comparer calls equal also hash equal.
///
/// Hash tables built from an inconsistent comparer silently split groups, so
/// this is checked wherever a table finds a match.
#[inline]
pub fn check_comparer_consistent<T: ?Sized, C: EqualityComparer<T> + ?Sized>(
    comparer: &C,
    a: &T,
    b: &T,
) {
    debug_assert!(
        !comparer.equals(a, b) || comparer.hash(a) == comparer.hash(b),
        "Contract violation: Comparer.HashConsistent - equal elements hash differently"
    );
}
