// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Set algebra in source order.
//!
//! All four operators yield each retained element from the left operand (or
//! from the left then the right, for `union`) at most once, in the order it was
//! first seen. They differ only in how the membership table starts out:
//!
//! | Operator    | Table starts with | Element kept when            |
//! |-------------|-------------------|------------------------------|
//! | `distinct`  | nothing           | it is new to the table       |
//! | `union`     | nothing           | it is new (left, then right) |
//! | `except`    | the other operand | it is new to the table       |
//! | `intersect` | the other operand | it can be removed from it    |
//!
//! The `_by` forms put derived keys in the table instead of elements and still
//! yield the elements. For `except_by` and `intersect_by` the other operand is
//! already a collection of keys.
//!
//! Tables over the other operand are built on the first poll, never at call time.

use super::deferred;
use crate::compare::{EqualityComparer, Referenced};
use crate::contract::Sequence;
use crate::set::KeyedSet;
use std::borrow::Borrow;
use tracing::trace;

pub fn distinct_with<S, C>(source: &S, comparer: C) -> impl Iterator<Item = &S::Item>
where
    S: Sequence + ?Sized,
    C: EqualityComparer<S::Item>,
{
    let mut seen = KeyedSet::with_comparer(Referenced(comparer));
    source.iter().filter(move |&item| seen.insert(item))
}

pub fn distinct_by_with<'s, S, K, F, C>(
    source: &'s S,
    mut key: F,
    comparer: C,
) -> impl Iterator<Item = &'s S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: EqualityComparer<K>,
{
    let mut seen = KeyedSet::with_comparer(comparer);
    source.iter().filter(move |&item| seen.insert(key(item)))
}

pub fn union_with<'s, S, O, C>(
    source: &'s S,
    other: &'s O,
    comparer: C,
) -> impl Iterator<Item = &'s S::Item>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    O::Item: Borrow<S::Item>,
    C: EqualityComparer<S::Item>,
{
    let mut seen = KeyedSet::with_comparer(Referenced(comparer));
    source
        .iter()
        .chain(other.iter().map(<O::Item as Borrow<S::Item>>::borrow))
        .filter(move |&item| seen.insert(item))
}

pub fn union_by_with<'s, S, O, K, F, C>(
    source: &'s S,
    other: &'s O,
    mut key: F,
    comparer: C,
) -> impl Iterator<Item = &'s S::Item>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    O::Item: Borrow<S::Item>,
    F: FnMut(&'s S::Item) -> K,
    C: EqualityComparer<K>,
{
    let mut seen = KeyedSet::with_comparer(comparer);
    source
        .iter()
        .chain(other.iter().map(<O::Item as Borrow<S::Item>>::borrow))
        .filter(move |&item| seen.insert(key(item)))
}

pub fn except_with<'s, S, O, C>(
    source: &'s S,
    other: &'s O,
    comparer: C,
) -> impl Iterator<Item = &'s S::Item>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    O::Item: Borrow<S::Item>,
    C: EqualityComparer<S::Item>,
{
    deferred(move || {
        let mut seen = KeyedSet::with_comparer(Referenced(comparer));
        seen.extend(other.iter().map(<O::Item as Borrow<S::Item>>::borrow));
        trace!(excluded = seen.len(), "except table built");
        source.iter().filter(move |&item| seen.insert(item))
    })
}

pub fn except_by_with<'s, S, K, F, C>(
    source: &'s S,
    keys: impl IntoIterator<Item = K>,
    mut key: F,
    comparer: C,
) -> impl Iterator<Item = &'s S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: EqualityComparer<K>,
{
    deferred(move || {
        let mut seen = KeyedSet::with_comparer(comparer);
        seen.extend(keys);
        trace!(excluded = seen.len(), "except_by table built");
        source.iter().filter(move |&item| seen.insert(key(item)))
    })
}

pub fn intersect_with<'s, S, O, C>(
    source: &'s S,
    other: &'s O,
    comparer: C,
) -> impl Iterator<Item = &'s S::Item>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    O::Item: Borrow<S::Item>,
    C: EqualityComparer<S::Item>,
{
    deferred(move || {
        let mut pending = KeyedSet::with_comparer(Referenced(comparer));
        pending.extend(other.iter().map(<O::Item as Borrow<S::Item>>::borrow));
        trace!(candidates = pending.len(), "intersect table built");
        source.iter().filter(move |&item| pending.remove(&item))
    })
}

pub fn intersect_by_with<'s, S, K, F, C>(
    source: &'s S,
    keys: impl IntoIterator<Item = K>,
    mut key: F,
    comparer: C,
) -> impl Iterator<Item = &'s S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: EqualityComparer<K>,
{
    deferred(move || {
        let mut pending = KeyedSet::with_comparer(comparer);
        pending.extend(keys);
        trace!(candidates = pending.len(), "intersect_by table built");
        source
            .iter()
            .filter(move |&item| pending.remove(&key(item)))
    })
}
