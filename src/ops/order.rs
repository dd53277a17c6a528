// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stable ordering with secondary keys.
//!
//! [`Ordered`] holds the source and a comparer. Nothing is sorted until the
//! first call to `next`, so `then_by` can keep refining the comparer for free.
//! Each `then_by` wraps the current comparer in [`Then`], so the left-most key
//! decides and later keys only break its ties. Elements that compare equal
//! under the whole chain come out in source order.

use crate::compare::{Comparer, DefaultOrder, Descending, KeyOrder, Then};
use crate::contract::Sequence;
use crate::verify::contracts::check_stable_order;
use std::iter::FusedIterator;
use std::vec;
use tracing::debug;

type Entry<'a, T> = (usize, &'a T);

/// `Ordered` under a derived key.
pub type OrderedBy<'a, T, I, F, K, C = DefaultOrder> = Ordered<'a, T, I, KeyOrder<F, K, C>>;

/// `Ordered` under a derived key, largest first.
pub type OrderedByDescending<'a, T, I, F, K, C = DefaultOrder> =
    Ordered<'a, T, I, KeyOrder<F, K, Descending<C>>>;

/// `Ordered` with one more key breaking the ties of `C`.
pub type ThenBy<'a, T, I, C, F, K, D = DefaultOrder> =
    Ordered<'a, T, I, Then<C, KeyOrder<F, K, D>>>;

/// A lazily sorted view of a sequence.
pub struct Ordered<'a, T, I, C> {
    source: Option<I>,
    sorted: Option<vec::IntoIter<Entry<'a, T>>>,
    comparer: C,
}

fn sort_entries<'a, T, C: Comparer<T>>(
    mut entries: Vec<Entry<'a, T>>,
    comparer: &C,
) -> Vec<Entry<'a, T>> {
    // `sort_by` is a stable merge sort.
    entries.sort_by(|a, b| comparer.compare(a.1, b.1));
    check_stable_order(&entries, comparer);
    debug!(elements = entries.len(), "stable sort");
    entries
}

impl<'a, T, I, C> Ordered<'a, T, I, C>
where
    I: Iterator<Item = &'a T>,
    C: Comparer<T>,
{
    pub(crate) fn new(source: I, comparer: C) -> Self {
        Self {
            source: Some(source),
            sorted: None,
            comparer,
        }
    }

    /// Break remaining ties by `key`, ascending.
    pub fn then_by<K, F>(self, key: F) -> ThenBy<'a, T, I, C, F, K>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.then(KeyOrder::new(key))
    }

    pub fn then_by_with<K, F, D>(self, key: F, comparer: D) -> ThenBy<'a, T, I, C, F, K, D>
    where
        F: Fn(&T) -> K,
        D: Comparer<K>,
    {
        self.then(KeyOrder::with(key, comparer))
    }

    /// Break remaining ties by `key`, descending.
    pub fn then_by_descending<K, F>(
        self,
        key: F,
    ) -> ThenBy<'a, T, I, C, F, K, Descending<DefaultOrder>>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.then(KeyOrder::with(key, Descending(DefaultOrder)))
    }

    pub fn then_by_descending_with<K, F, D>(
        self,
        key: F,
        comparer: D,
    ) -> ThenBy<'a, T, I, C, F, K, Descending<D>>
    where
        F: Fn(&T) -> K,
        D: Comparer<K>,
    {
        self.then(KeyOrder::with(key, Descending(comparer)))
    }

    fn then<N: Comparer<T>>(self, next: N) -> Ordered<'a, T, I, Then<C, N>> {
        let comparer = Then(self.comparer, next);
        // Already started: re-sort what is left. Equal under the new chain
        // implies equal under the old one, so ties are still in source order.
        let sorted = self
            .sorted
            .map(|rest| sort_entries(rest.collect(), &comparer).into_iter());
        Ordered {
            source: self.source,
            sorted,
            comparer,
        }
    }
}

impl<'a, T, I, C> Iterator for Ordered<'a, T, I, C>
where
    I: Iterator<Item = &'a T>,
    C: Comparer<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.sorted.is_none() {
            let source = self.source.take().into_iter().flatten();
            let entries: Vec<Entry<'a, T>> = source.enumerate().collect();
            self.sorted = Some(sort_entries(entries, &self.comparer).into_iter());
        }
        self.sorted.as_mut()?.next().map(|(_, item)| item)
    }
}

impl<'a, T, I, C> FusedIterator for Ordered<'a, T, I, C>
where
    I: Iterator<Item = &'a T>,
    C: Comparer<T>,
{
}

pub fn order_with<'s, S, C>(
    source: &'s S,
    comparer: C,
) -> Ordered<'s, S::Item, impl Iterator<Item = &'s S::Item>, C>
where
    S: Sequence + ?Sized,
    C: Comparer<S::Item>,
{
    Ordered::new(source.iter(), comparer)
}

pub fn order_by_with<'s, S, K, F, C>(
    source: &'s S,
    key: F,
    comparer: C,
) -> OrderedBy<'s, S::Item, impl Iterator<Item = &'s S::Item>, F, K, C>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> K,
    C: Comparer<K>,
{
    Ordered::new(source.iter(), KeyOrder::with(key, comparer))
}
