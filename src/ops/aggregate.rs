// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Folds, sums, averages and extremes.
//!
//! # Empty and missing input
//!
//! | Operator                 | Empty input      | All missing      |
//! |--------------------------|------------------|------------------|
//! | `aggregate`              | `EmptySequence`  | n/a              |
//! | `aggregate_seeded`       | the seed         | n/a              |
//! | `sum*`                   | zero             | zero             |
//! | `average`, `average_by`  | `EmptySequence`  | n/a              |
//! | `average_*nullable`      | `None`           | `None`           |
//! | `min`, `min_of`, `min_by_key` | `EmptySequence` | n/a         |
//! | `min_nullable`, `min_of_nullable` | `None`  | `None`           |
//!
//! `max` mirrors `min`. Ties keep the first element in source order.

use crate::compare::{Comparer, ComparerFn, DefaultOrder, Referenced};
use crate::contract::Sequence;
use crate::error::{Result, SeqError};
use crate::numeric::{Nullable, Number, checked_total};
use std::cmp::Ordering;

const SUM: &str = "sum";

/// Left fold seeded with the first element.
pub fn aggregate<S, F>(source: &S, func: F) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(S::Item, &S::Item) -> S::Item,
{
    let mut items = source.iter();
    let first = items.next().ok_or(SeqError::EmptySequence)?.clone();
    Ok(items.fold(first, func))
}

pub fn aggregate_seeded<S, A, F>(source: &S, seed: A, func: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item) -> A,
{
    source.iter().fold(seed, func)
}

pub fn aggregate_seeded_select<S, A, R, F, P>(source: &S, seed: A, func: F, select: P) -> R
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item) -> A,
    P: FnOnce(A) -> R,
{
    select(aggregate_seeded(source, seed, func))
}

// ============================================================================
// SUM / AVERAGE
// ============================================================================

pub fn sum<S>(source: &S) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Number,
{
    checked_total(source.iter().copied()).ok_or(SeqError::Overflow { operation: SUM })
}

/// Missing elements count as zero.
pub fn sum_nullable<S, N>(source: &S) -> Result<N>
where
    S: Sequence + ?Sized,
    S::Item: Nullable<Value = N>,
    N: Number,
{
    checked_total(source.iter().filter_map(|item| item.value().copied()))
        .ok_or(SeqError::Overflow { operation: SUM })
}

pub fn sum_by<S, N, F>(source: &S, selector: F) -> Result<N>
where
    S: Sequence + ?Sized,
    N: Number,
    F: FnMut(&S::Item) -> N,
{
    checked_total(source.iter().map(selector)).ok_or(SeqError::Overflow { operation: SUM })
}

pub fn sum_by_nullable<S, N, F>(source: &S, selector: F) -> Result<N>
where
    S: Sequence + ?Sized,
    N: Number,
    F: FnMut(&S::Item) -> Option<N>,
{
    checked_total(source.iter().filter_map(selector)).ok_or(SeqError::Overflow { operation: SUM })
}

pub fn average<S>(source: &S) -> Result<<S::Item as Number>::Mean>
where
    S: Sequence + ?Sized,
    S::Item: Number,
{
    <S::Item as Number>::mean(source.iter().copied()).ok_or(SeqError::EmptySequence)
}

/// Mean of the present elements; `None` when there are none.
pub fn average_nullable<S, N>(source: &S) -> Option<N::Mean>
where
    S: Sequence + ?Sized,
    S::Item: Nullable<Value = N>,
    N: Number,
{
    N::mean(source.iter().filter_map(|item| item.value().copied()))
}

pub fn average_by<S, N, F>(source: &S, selector: F) -> Result<N::Mean>
where
    S: Sequence + ?Sized,
    N: Number,
    F: FnMut(&S::Item) -> N,
{
    N::mean(source.iter().map(selector)).ok_or(SeqError::EmptySequence)
}

pub fn average_by_nullable<S, N, F>(source: &S, selector: F) -> Option<N::Mean>
where
    S: Sequence + ?Sized,
    N: Number,
    F: FnMut(&S::Item) -> Option<N>,
{
    N::mean(source.iter().filter_map(selector))
}

// ============================================================================
// EXTREMES
// ============================================================================

/// The extreme value under `comparer`. A challenger replaces the incumbent
/// only when it compares strictly `wanted`, so ties keep the first.
fn best<V, C>(values: impl Iterator<Item = V>, comparer: &C, wanted: Ordering) -> Option<V>
where
    C: Comparer<V> + ?Sized,
{
    values.fold(None, |incumbent, value| match incumbent {
        Some(current) if comparer.compare(&value, &current) != wanted => Some(current),
        _ => Some(value),
    })
}

fn extreme<S, C>(source: &S, comparer: C, wanted: Ordering) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    C: Comparer<S::Item>,
{
    best(source.iter(), &Referenced(comparer), wanted).ok_or(SeqError::EmptySequence)
}

fn extreme_nullable<'s, S, N, C>(source: &'s S, comparer: C, wanted: Ordering) -> Option<&'s N>
where
    S: Sequence + ?Sized,
    S::Item: Nullable<Value = N>,
    N: 's,
    C: Comparer<N>,
{
    let present = source.iter().filter_map(Nullable::value);
    best(present, &Referenced(comparer), wanted)
}

fn extreme_by_key<'s, S, K, F, C>(
    source: &'s S,
    mut key: F,
    comparer: C,
    wanted: Ordering,
) -> Result<&'s S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: Comparer<K>,
{
    let compare_keys = |a: &(K, &S::Item), b: &(K, &S::Item)| comparer.compare(&a.0, &b.0);
    let by_key = ComparerFn(compare_keys);
    best(source.iter().map(|item| (key(item), item)), &by_key, wanted)
        .map(|(_, item)| item)
        .ok_or(SeqError::EmptySequence)
}

pub fn min<S>(source: &S) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    extreme(source, DefaultOrder, Ordering::Less)
}

pub fn min_with<S, C>(source: &S, comparer: C) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    C: Comparer<S::Item>,
{
    extreme(source, comparer, Ordering::Less)
}

/// Smallest present value; `None` on empty or all-missing input.
pub fn min_nullable<S, N>(source: &S) -> Option<&N>
where
    S: Sequence + ?Sized,
    S::Item: Nullable<Value = N>,
    N: Ord,
{
    extreme_nullable(source, DefaultOrder, Ordering::Less)
}

pub fn min_nullable_with<S, N, C>(source: &S, comparer: C) -> Option<&N>
where
    S: Sequence + ?Sized,
    S::Item: Nullable<Value = N>,
    C: Comparer<N>,
{
    extreme_nullable(source, comparer, Ordering::Less)
}

pub fn min_of<'s, S, K, F>(source: &'s S, selector: F) -> Result<K>
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&'s S::Item) -> K,
{
    min_of_with(source, selector, DefaultOrder)
}

pub fn min_of_with<'s, S, K, F, C>(source: &'s S, selector: F, comparer: C) -> Result<K>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: Comparer<K>,
{
    best(source.iter().map(selector), &comparer, Ordering::Less).ok_or(SeqError::EmptySequence)
}

pub fn min_of_nullable<'s, S, K, F>(source: &'s S, selector: F) -> Option<K>
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&'s S::Item) -> Option<K>,
{
    let present = source.iter().filter_map(selector);
    best(present, &DefaultOrder, Ordering::Less)
}

/// The element with the smallest key.
pub fn min_by_key<'s, S, K, F>(source: &'s S, key: F) -> Result<&'s S::Item>
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&'s S::Item) -> K,
{
    extreme_by_key(source, key, DefaultOrder, Ordering::Less)
}

pub fn min_by_key_with<'s, S, K, F, C>(source: &'s S, key: F, comparer: C) -> Result<&'s S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: Comparer<K>,
{
    extreme_by_key(source, key, comparer, Ordering::Less)
}

pub fn max<S>(source: &S) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    extreme(source, DefaultOrder, Ordering::Greater)
}

pub fn max_with<S, C>(source: &S, comparer: C) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    C: Comparer<S::Item>,
{
    extreme(source, comparer, Ordering::Greater)
}

pub fn max_nullable<S, N>(source: &S) -> Option<&N>
where
    S: Sequence + ?Sized,
    S::Item: Nullable<Value = N>,
    N: Ord,
{
    extreme_nullable(source, DefaultOrder, Ordering::Greater)
}

pub fn max_nullable_with<S, N, C>(source: &S, comparer: C) -> Option<&N>
where
    S: Sequence + ?Sized,
    S::Item: Nullable<Value = N>,
    C: Comparer<N>,
{
    extreme_nullable(source, comparer, Ordering::Greater)
}

pub fn max_of<'s, S, K, F>(source: &'s S, selector: F) -> Result<K>
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&'s S::Item) -> K,
{
    max_of_with(source, selector, DefaultOrder)
}

pub fn max_of_with<'s, S, K, F, C>(source: &'s S, selector: F, comparer: C) -> Result<K>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: Comparer<K>,
{
    best(source.iter().map(selector), &comparer, Ordering::Greater).ok_or(SeqError::EmptySequence)
}

pub fn max_of_nullable<'s, S, K, F>(source: &'s S, selector: F) -> Option<K>
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&'s S::Item) -> Option<K>,
{
    let present = source.iter().filter_map(selector);
    best(present, &DefaultOrder, Ordering::Greater)
}

/// The element with the largest key.
pub fn max_by_key<'s, S, K, F>(source: &'s S, key: F) -> Result<&'s S::Item>
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&'s S::Item) -> K,
{
    extreme_by_key(source, key, DefaultOrder, Ordering::Greater)
}

pub fn max_by_key_with<'s, S, K, F, C>(source: &'s S, key: F, comparer: C) -> Result<&'s S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: Comparer<K>,
{
    extreme_by_key(source, key, comparer, Ordering::Greater)
}
