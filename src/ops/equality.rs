// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence equality and the structural hash that agrees with it.
//!
//! Two sequences are equal when they have the same length and equal elements
//! pairwise. When both sides know their length up front a mismatch returns
//! before either side is enumerated.
//!
//! The hash folds element hashes left to right. Equal sequences feed the fold
//! the same values in the same order, so they always hash equal.

use crate::compare::{EqualityComparer, hash_one};
use crate::contract::Sequence;
use std::borrow::Borrow;
use std::hash::Hash;

const SEED: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME: u64 = 0x0100_0000_01b3;

#[inline]
fn combine(hashes: impl Iterator<Item = u64>) -> u64 {
    hashes.fold(SEED, |acc, h| (acc.rotate_left(5) ^ h).wrapping_mul(PRIME))
}

fn lengths_differ<S, O>(source: &S, other: &O) -> bool
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
{
    matches!(
        (source.try_get_non_enumerated_count(), other.try_get_non_enumerated_count()),
        (Some(a), Some(b)) if a != b
    )
}

pub fn sequence_equal<S, O>(source: &S, other: &O) -> bool
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    O::Item: Borrow<S::Item>,
    S::Item: PartialEq,
{
    sequence_equal_by(source, other, |a, b| a == b)
}

pub fn sequence_equal_with<S, O, C>(source: &S, other: &O, comparer: C) -> bool
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    O::Item: Borrow<S::Item>,
    C: EqualityComparer<S::Item>,
{
    sequence_equal_by(source, other, |a, b| comparer.equals(a, b))
}

fn sequence_equal_by<S, O, E>(source: &S, other: &O, equals: E) -> bool
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    O::Item: Borrow<S::Item>,
    E: Fn(&S::Item, &S::Item) -> bool,
{
    if lengths_differ(source, other) {
        return false;
    }
    let mut left = source.iter();
    let mut right = other.iter().map(<O::Item as Borrow<S::Item>>::borrow);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if equals(a, b) => {}
            _ => return false,
        }
    }
}

pub fn sequence_hash<S>(source: &S) -> u64
where
    S: Sequence + ?Sized,
    S::Item: Hash,
{
    combine(source.iter().map(hash_one))
}

pub fn sequence_hash_with<S, C>(source: &S, comparer: C) -> u64
where
    S: Sequence + ?Sized,
    C: EqualityComparer<S::Item>,
{
    combine(source.iter().map(|item| comparer.hash(item)))
}
