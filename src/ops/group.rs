// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grouping, lookups and joins.
//!
//! Everything here is built on [`Lookup`]: one pass over the keyed side into a
//! table of groups in first-encounter order. `to_lookup` returns the table
//! itself, right away. The other operators build it on the first poll and then
//! stream from it.
//!
//! `join` walks the outer sequence and, for each outer element, the inner
//! elements with an equal key, so rows come out outer-major and inner-minor.
//! `group_join` emits exactly one row per outer element, matched or not.

use super::deferred;
use crate::compare::EqualityComparer;
use crate::contract::Sequence;
use crate::grouping::{Grouping, Lookup};

/// Immediate: group `(key, element)` projections of every item.
pub fn to_lookup_select_with<'s, S, K, V, F, E, C>(
    source: &'s S,
    mut key: F,
    mut element: E,
    comparer: C,
) -> Lookup<K, V, C>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    E: FnMut(&'s S::Item) -> V,
    C: EqualityComparer<K>,
{
    let pairs = source.iter().map(|item| (key(item), element(item)));
    Lookup::from_pairs_with(pairs, comparer)
}

pub fn to_lookup_with<'s, S, K, F, C>(
    source: &'s S,
    key: F,
    comparer: C,
) -> Lookup<K, &'s S::Item, C>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: EqualityComparer<K>,
{
    to_lookup_select_with(source, key, |item| item, comparer)
}

pub fn group_by_select_with<'s, S, K, V, F, E, C>(
    source: &'s S,
    key: F,
    element: E,
    comparer: C,
) -> impl Iterator<Item = Grouping<K, V>>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    E: FnMut(&'s S::Item) -> V,
    C: EqualityComparer<K>,
{
    deferred(move || to_lookup_select_with(source, key, element, comparer))
}

/// One `result(key, members)` per group.
pub fn group_by_result_with<'s, S, K, R, F, G, C>(
    source: &'s S,
    key: F,
    mut result: G,
    comparer: C,
) -> impl Iterator<Item = R>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    G: FnMut(&K, &[&'s S::Item]) -> R,
    C: EqualityComparer<K>,
{
    deferred(move || to_lookup_with(source, key, comparer))
        .map(move |group| result(group.key(), group.elements()))
}

/// Inner equi-join.
pub fn join_with<'s, S, O, K, R, F, G, H, C>(
    outer: &'s S,
    inner: &'s O,
    mut outer_key: F,
    inner_key: G,
    mut result: H,
    comparer: C,
) -> impl Iterator<Item = R>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    G: FnMut(&'s O::Item) -> K,
    H: FnMut(&'s S::Item, &'s O::Item) -> R,
    C: EqualityComparer<K>,
{
    deferred(move || {
        let lookup = to_lookup_with(inner, inner_key, comparer);
        let mut rows = outer.iter();
        // (outer element, its group's slot, next member to emit)
        let mut pending: Option<(&'s S::Item, usize, usize)> = None;
        std::iter::from_fn(move || {
            loop {
                if let Some((item, slot, next)) = pending.as_mut() {
                    let member = lookup
                        .group(*slot)
                        .and_then(|group| group.elements().get(*next));
                    if let Some(&member) = member {
                        *next += 1;
                        return Some(result(*item, member));
                    }
                }
                let item = rows.next()?;
                pending = lookup.slot(&outer_key(item)).map(|slot| (item, slot, 0));
            }
        })
    })
}

/// One row per outer element with all inner matches, possibly none.
pub fn group_join_with<'s, S, O, K, R, F, G, H, C>(
    outer: &'s S,
    inner: &'s O,
    mut outer_key: F,
    inner_key: G,
    mut result: H,
    comparer: C,
) -> impl Iterator<Item = R>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    G: FnMut(&'s O::Item) -> K,
    H: FnMut(&'s S::Item, &[&'s O::Item]) -> R,
    C: EqualityComparer<K>,
{
    deferred(move || {
        let lookup = to_lookup_with(inner, inner_key, comparer);
        outer.iter().map(move |item| {
            let key = outer_key(item);
            result(item, lookup.get_or_empty(&key))
        })
    })
}

/// `(key, number of elements with that key)` in first-encounter order.
pub fn count_by_with<'s, S, K, F, C>(
    source: &'s S,
    key: F,
    comparer: C,
) -> impl Iterator<Item = (K, usize)>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> K,
    C: EqualityComparer<K>,
{
    deferred(move || to_lookup_select_with(source, key, |_| (), comparer)).map(|group| {
        let (key, members) = group.into_parts();
        (key, members.len())
    })
}

/// A seeded fold per key. Every group starts from its own copy of `seed`.
pub fn aggregate_by_with<'s, S, K, A, F, G, C>(
    source: &'s S,
    key: F,
    seed: A,
    mut func: G,
    comparer: C,
) -> impl Iterator<Item = (K, A)>
where
    S: Sequence + ?Sized,
    A: Clone,
    F: FnMut(&'s S::Item) -> K,
    G: FnMut(A, &'s S::Item) -> A,
    C: EqualityComparer<K>,
{
    deferred(move || to_lookup_with(source, key, comparer)).map(move |group| {
        let (key, members) = group.into_parts();
        let acc = members.into_iter().fold(seed.clone(), &mut func);
        (key, acc)
    })
}
