// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The operator contract: one trait, one method per operator.
//!
//! A representation implements [`Sequence::iter`] and, if it can, the O(1)
//! hooks `try_get_non_enumerated_count` and `get_at`. Every operator is a
//! provided method that forwards to `ops`, so all representations share one
//! implementation of each operator and the verification suites can be written
//! once as generic functions over `S: Sequence`.
//!
//! # Conventions
//!
//! - Methods returning `impl Iterator` are deferred. Calling one does nothing;
//!   polling the result runs the pipeline. Calling the method again builds a
//!   fresh pipeline over the same source.
//! - Everything else is immediate.
//! - `_with` takes a comparer. The plain form is the `_with` form called with
//!   `DefaultEquality` or `DefaultOrder`. `None::<C>` is also the default.
//! - Where a second sequence may hold a "derived" element type, it is bounded
//!   by `O::Item: Borrow<Self::Item>` rather than requiring the same type.
//!
//! `FixedArray` and `Slice` have inherent `chunk` methods that yield sub-slices.
//! Method syntax on those types picks the inherent one; generic code gets the
//! `Vec`-yielding form below.

use crate::array::{FixedArray, Slice};
use crate::compare::{Comparer, DefaultEquality, DefaultOrder, Descending, EqualityComparer};
use crate::error::Result;
use crate::grouping::{Grouping, Lookup};
use crate::index::{LongRange, Position, Range};
use crate::list::ImmutableList;
use crate::numeric::{Nullable, Number};
use crate::ops::order::{Ordered, OrderedBy, OrderedByDescending};
use crate::ops::{
    aggregate, convert, element, equality, group, order, partition, project, quantify, set, shape,
};
use crate::set::KeyedSet;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A finite, re-iterable sequence and every query operator over it.
pub trait Sequence {
    type Item;

    /// Iterate the elements in order. May be called any number of times.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// The length, when it is known without enumerating.
    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        None
    }

    /// The element at a resolved offset.
    fn get_at(&self, offset: usize) -> Option<&Self::Item> {
        self.iter().nth(offset)
    }

    // ========================================================================
    // AGGREGATION
    // ========================================================================

    /// Fails with `EmptySequence` on empty input.
    fn aggregate<F>(&self, func: F) -> Result<Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item) -> Self::Item,
    {
        aggregate::aggregate(self, func)
    }

    /// Returns `seed` untouched on empty input.
    fn aggregate_seeded<A, F>(&self, seed: A, func: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        aggregate::aggregate_seeded(self, seed, func)
    }

    fn aggregate_seeded_select<A, R, F, P>(&self, seed: A, func: F, select: P) -> R
    where
        F: FnMut(A, &Self::Item) -> A,
        P: FnOnce(A) -> R,
    {
        aggregate::aggregate_seeded_select(self, seed, func, select)
    }

    fn sum(&self) -> Result<Self::Item>
    where
        Self::Item: Number,
    {
        aggregate::sum(self)
    }

    fn sum_nullable<N>(&self) -> Result<N>
    where
        Self::Item: Nullable<Value = N>,
        N: Number,
    {
        aggregate::sum_nullable(self)
    }

    fn sum_by<N, F>(&self, selector: F) -> Result<N>
    where
        N: Number,
        F: FnMut(&Self::Item) -> N,
    {
        aggregate::sum_by(self, selector)
    }

    fn sum_by_nullable<N, F>(&self, selector: F) -> Result<N>
    where
        N: Number,
        F: FnMut(&Self::Item) -> Option<N>,
    {
        aggregate::sum_by_nullable(self, selector)
    }

    fn average(&self) -> Result<<Self::Item as Number>::Mean>
    where
        Self::Item: Number,
    {
        aggregate::average(self)
    }

    /// `None` when no element is present.
    fn average_nullable<N>(&self) -> Option<N::Mean>
    where
        Self::Item: Nullable<Value = N>,
        N: Number,
    {
        aggregate::average_nullable(self)
    }

    fn average_by<N, F>(&self, selector: F) -> Result<N::Mean>
    where
        N: Number,
        F: FnMut(&Self::Item) -> N,
    {
        aggregate::average_by(self, selector)
    }

    fn average_by_nullable<N, F>(&self, selector: F) -> Option<N::Mean>
    where
        N: Number,
        F: FnMut(&Self::Item) -> Option<N>,
    {
        aggregate::average_by_nullable(self, selector)
    }

    fn min(&self) -> Result<&Self::Item>
    where
        Self::Item: Ord,
    {
        aggregate::min(self)
    }

    fn min_with<C>(&self, comparer: C) -> Result<&Self::Item>
    where
        C: Comparer<Self::Item>,
    {
        aggregate::min_with(self, comparer)
    }

    fn min_nullable<N>(&self) -> Option<&N>
    where
        Self::Item: Nullable<Value = N>,
        N: Ord,
    {
        aggregate::min_nullable(self)
    }

    fn min_nullable_with<N, C>(&self, comparer: C) -> Option<&N>
    where
        Self::Item: Nullable<Value = N>,
        C: Comparer<N>,
    {
        aggregate::min_nullable_with(self, comparer)
    }

    fn min_of<'s, K, F>(&'s self, selector: F) -> Result<K>
    where
        K: Ord,
        F: FnMut(&'s Self::Item) -> K,
    {
        aggregate::min_of(self, selector)
    }

    fn min_of_with<'s, K, F, C>(&'s self, selector: F, comparer: C) -> Result<K>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: Comparer<K>,
    {
        aggregate::min_of_with(self, selector, comparer)
    }

    fn min_of_nullable<'s, K, F>(&'s self, selector: F) -> Option<K>
    where
        K: Ord,
        F: FnMut(&'s Self::Item) -> Option<K>,
    {
        aggregate::min_of_nullable(self, selector)
    }

    fn min_by_key<'s, K, F>(&'s self, key: F) -> Result<&'s Self::Item>
    where
        K: Ord,
        F: FnMut(&'s Self::Item) -> K,
    {
        aggregate::min_by_key(self, key)
    }

    fn min_by_key_with<'s, K, F, C>(&'s self, key: F, comparer: C) -> Result<&'s Self::Item>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: Comparer<K>,
    {
        aggregate::min_by_key_with(self, key, comparer)
    }

    fn max(&self) -> Result<&Self::Item>
    where
        Self::Item: Ord,
    {
        aggregate::max(self)
    }

    fn max_with<C>(&self, comparer: C) -> Result<&Self::Item>
    where
        C: Comparer<Self::Item>,
    {
        aggregate::max_with(self, comparer)
    }

    fn max_nullable<N>(&self) -> Option<&N>
    where
        Self::Item: Nullable<Value = N>,
        N: Ord,
    {
        aggregate::max_nullable(self)
    }

    fn max_nullable_with<N, C>(&self, comparer: C) -> Option<&N>
    where
        Self::Item: Nullable<Value = N>,
        C: Comparer<N>,
    {
        aggregate::max_nullable_with(self, comparer)
    }

    fn max_of<'s, K, F>(&'s self, selector: F) -> Result<K>
    where
        K: Ord,
        F: FnMut(&'s Self::Item) -> K,
    {
        aggregate::max_of(self, selector)
    }

    fn max_of_with<'s, K, F, C>(&'s self, selector: F, comparer: C) -> Result<K>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: Comparer<K>,
    {
        aggregate::max_of_with(self, selector, comparer)
    }

    fn max_of_nullable<'s, K, F>(&'s self, selector: F) -> Option<K>
    where
        K: Ord,
        F: FnMut(&'s Self::Item) -> Option<K>,
    {
        aggregate::max_of_nullable(self, selector)
    }

    fn max_by_key<'s, K, F>(&'s self, key: F) -> Result<&'s Self::Item>
    where
        K: Ord,
        F: FnMut(&'s Self::Item) -> K,
    {
        aggregate::max_by_key(self, key)
    }

    fn max_by_key_with<'s, K, F, C>(&'s self, key: F, comparer: C) -> Result<&'s Self::Item>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: Comparer<K>,
    {
        aggregate::max_by_key_with(self, key, comparer)
    }

    // ========================================================================
    // QUANTIFIERS
    // ========================================================================

    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        quantify::all(self, predicate)
    }

    fn any(&self) -> bool {
        quantify::any(self)
    }

    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        quantify::any_where(self, predicate)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        quantify::contains(self, value)
    }

    fn contains_with<C>(&self, value: &Self::Item, comparer: C) -> bool
    where
        C: EqualityComparer<Self::Item>,
    {
        quantify::contains_with(self, value, comparer)
    }

    fn count(&self) -> usize {
        quantify::count(self)
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        quantify::count_where(self, predicate)
    }

    fn long_count(&self) -> u64 {
        quantify::long_count(self)
    }

    fn long_count_where<P>(&self, predicate: P) -> u64
    where
        P: FnMut(&Self::Item) -> bool,
    {
        quantify::long_count_where(self, predicate)
    }

    // ========================================================================
    // FILTERING AND PROJECTION
    // ========================================================================

    fn filter<P>(&self, predicate: P) -> impl Iterator<Item = &Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        project::filter(self, predicate)
    }

    fn filter_indexed<P>(&self, predicate: P) -> impl Iterator<Item = &Self::Item>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        project::filter_indexed(self, predicate)
    }

    fn select<'s, R, F>(&'s self, selector: F) -> impl Iterator<Item = R>
    where
        F: FnMut(&'s Self::Item) -> R,
    {
        project::select(self, selector)
    }

    fn select_indexed<'s, R, F>(&'s self, selector: F) -> impl Iterator<Item = R>
    where
        F: FnMut(&'s Self::Item, usize) -> R,
    {
        project::select_indexed(self, selector)
    }

    fn select_many<'s, U, F>(&'s self, selector: F) -> impl Iterator<Item = U::Item>
    where
        U: IntoIterator,
        F: FnMut(&'s Self::Item) -> U,
    {
        project::select_many(self, selector)
    }

    fn select_many_indexed<'s, U, F>(&'s self, selector: F) -> impl Iterator<Item = U::Item>
    where
        U: IntoIterator,
        F: FnMut(&'s Self::Item, usize) -> U,
    {
        project::select_many_indexed(self, selector)
    }

    fn select_many_with<'s, U, R, F, G>(
        &'s self,
        collection: F,
        result: G,
    ) -> impl Iterator<Item = R>
    where
        U: IntoIterator,
        F: FnMut(&'s Self::Item) -> U,
        G: FnMut(&'s Self::Item, U::Item) -> R,
    {
        project::select_many_with(self, collection, result)
    }

    // ========================================================================
    // SET ALGEBRA
    // ========================================================================

    fn distinct(&self) -> impl Iterator<Item = &Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        set::distinct_with(self, DefaultEquality)
    }

    fn distinct_with<C>(&self, comparer: C) -> impl Iterator<Item = &Self::Item>
    where
        C: EqualityComparer<Self::Item>,
    {
        set::distinct_with(self, comparer)
    }

    fn distinct_by<'s, K, F>(&'s self, key: F) -> impl Iterator<Item = &'s Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
    {
        set::distinct_by_with(self, key, DefaultEquality)
    }

    fn distinct_by_with<'s, K, F, C>(
        &'s self,
        key: F,
        comparer: C,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        set::distinct_by_with(self, key, comparer)
    }

    fn except<'s, O>(&'s self, other: &'s O) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        Self::Item: Eq + Hash,
    {
        set::except_with(self, other, DefaultEquality)
    }

    fn except_with<'s, O, C>(
        &'s self,
        other: &'s O,
        comparer: C,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        set::except_with(self, other, comparer)
    }

    fn except_by<'s, K, F>(
        &'s self,
        keys: impl IntoIterator<Item = K>,
        key: F,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
    {
        set::except_by_with(self, keys, key, DefaultEquality)
    }

    fn except_by_with<'s, K, F, C>(
        &'s self,
        keys: impl IntoIterator<Item = K>,
        key: F,
        comparer: C,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        set::except_by_with(self, keys, key, comparer)
    }

    fn intersect<'s, O>(&'s self, other: &'s O) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        Self::Item: Eq + Hash,
    {
        set::intersect_with(self, other, DefaultEquality)
    }

    fn intersect_with<'s, O, C>(
        &'s self,
        other: &'s O,
        comparer: C,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        set::intersect_with(self, other, comparer)
    }

    fn intersect_by<'s, K, F>(
        &'s self,
        keys: impl IntoIterator<Item = K>,
        key: F,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
    {
        set::intersect_by_with(self, keys, key, DefaultEquality)
    }

    fn intersect_by_with<'s, K, F, C>(
        &'s self,
        keys: impl IntoIterator<Item = K>,
        key: F,
        comparer: C,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        set::intersect_by_with(self, keys, key, comparer)
    }

    fn union<'s, O>(&'s self, other: &'s O) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        Self::Item: Eq + Hash,
    {
        set::union_with(self, other, DefaultEquality)
    }

    fn union_with<'s, O, C>(
        &'s self,
        other: &'s O,
        comparer: C,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        set::union_with(self, other, comparer)
    }

    fn union_by<'s, O, K, F>(&'s self, other: &'s O, key: F) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
    {
        set::union_by_with(self, other, key, DefaultEquality)
    }

    fn union_by_with<'s, O, K, F, C>(
        &'s self,
        other: &'s O,
        key: F,
        comparer: C,
    ) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        F: FnMut(&'s Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        set::union_by_with(self, other, key, comparer)
    }

    // ========================================================================
    // ORDERING
    // ========================================================================

    fn order(&self) -> Ordered<'_, Self::Item, impl Iterator<Item = &Self::Item>, DefaultOrder>
    where
        Self::Item: Ord,
    {
        order::order_with(self, DefaultOrder)
    }

    fn order_with<C>(
        &self,
        comparer: C,
    ) -> Ordered<'_, Self::Item, impl Iterator<Item = &Self::Item>, C>
    where
        C: Comparer<Self::Item>,
    {
        order::order_with(self, comparer)
    }

    fn order_descending(
        &self,
    ) -> Ordered<'_, Self::Item, impl Iterator<Item = &Self::Item>, Descending<DefaultOrder>>
    where
        Self::Item: Ord,
    {
        order::order_with(self, Descending(DefaultOrder))
    }

    fn order_descending_with<C>(
        &self,
        comparer: C,
    ) -> Ordered<'_, Self::Item, impl Iterator<Item = &Self::Item>, Descending<C>>
    where
        C: Comparer<Self::Item>,
    {
        order::order_with(self, Descending(comparer))
    }

    fn order_by<K, F>(
        &self,
        key: F,
    ) -> OrderedBy<'_, Self::Item, impl Iterator<Item = &Self::Item>, F, K>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        order::order_by_with(self, key, DefaultOrder)
    }

    fn order_by_with<K, F, C>(
        &self,
        key: F,
        comparer: C,
    ) -> OrderedBy<'_, Self::Item, impl Iterator<Item = &Self::Item>, F, K, C>
    where
        F: Fn(&Self::Item) -> K,
        C: Comparer<K>,
    {
        order::order_by_with(self, key, comparer)
    }

    fn order_by_descending<K, F>(
        &self,
        key: F,
    ) -> OrderedByDescending<'_, Self::Item, impl Iterator<Item = &Self::Item>, F, K>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        order::order_by_with(self, key, Descending(DefaultOrder))
    }

    fn order_by_descending_with<K, F, C>(
        &self,
        key: F,
        comparer: C,
    ) -> OrderedByDescending<'_, Self::Item, impl Iterator<Item = &Self::Item>, F, K, C>
    where
        F: Fn(&Self::Item) -> K,
        C: Comparer<K>,
    {
        order::order_by_with(self, key, Descending(comparer))
    }

    // ========================================================================
    // PARTITIONING
    // ========================================================================

    /// Negative counts skip nothing.
    fn skip(&self, count: isize) -> impl Iterator<Item = &Self::Item> {
        partition::skip(self, count)
    }

    /// Negative counts take nothing; counts past the end take everything.
    fn take(&self, count: isize) -> impl Iterator<Item = &Self::Item> {
        partition::take(self, count)
    }

    /// Clamps `range` to the sequence instead of failing.
    fn take_range(&self, range: Range) -> impl Iterator<Item = &Self::Item> {
        partition::take_range(self, range)
    }

    fn take_long_range(&self, range: LongRange) -> impl Iterator<Item = &Self::Item> {
        partition::take_range(self, range)
    }

    fn skip_while<P>(&self, predicate: P) -> impl Iterator<Item = &Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        partition::skip_while(self, predicate)
    }

    fn skip_while_indexed<P>(&self, predicate: P) -> impl Iterator<Item = &Self::Item>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        partition::skip_while_indexed(self, predicate)
    }

    fn take_while<P>(&self, predicate: P) -> impl Iterator<Item = &Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        partition::take_while(self, predicate)
    }

    fn take_while_indexed<P>(&self, predicate: P) -> impl Iterator<Item = &Self::Item>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        partition::take_while_indexed(self, predicate)
    }

    fn skip_last(&self, count: isize) -> impl Iterator<Item = &Self::Item> {
        partition::skip_last(self, count)
    }

    fn take_last(&self, count: isize) -> impl Iterator<Item = &Self::Item> {
        partition::take_last(self, count)
    }

    /// Fails at call time, before enumeration, when `size < 1`.
    fn chunk(&self, size: isize) -> Result<impl Iterator<Item = Vec<&Self::Item>>> {
        partition::chunk(self, size)
    }

    // ========================================================================
    // GROUPING AND JOIN
    // ========================================================================

    fn group_by<'s, K, F>(&'s self, key: F) -> impl Iterator<Item = Grouping<K, &'s Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
    {
        group::group_by_select_with(self, key, |item| item, DefaultEquality)
    }

    fn group_by_with<'s, K, F, C>(
        &'s self,
        key: F,
        comparer: C,
    ) -> impl Iterator<Item = Grouping<K, &'s Self::Item>>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        group::group_by_select_with(self, key, |item| item, comparer)
    }

    fn group_by_select<'s, K, V, F, E>(
        &'s self,
        key: F,
        element: E,
    ) -> impl Iterator<Item = Grouping<K, V>>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
        E: FnMut(&'s Self::Item) -> V,
    {
        group::group_by_select_with(self, key, element, DefaultEquality)
    }

    fn group_by_select_with<'s, K, V, F, E, C>(
        &'s self,
        key: F,
        element: E,
        comparer: C,
    ) -> impl Iterator<Item = Grouping<K, V>>
    where
        F: FnMut(&'s Self::Item) -> K,
        E: FnMut(&'s Self::Item) -> V,
        C: EqualityComparer<K>,
    {
        group::group_by_select_with(self, key, element, comparer)
    }

    fn group_by_result<'s, K, R, F, G>(&'s self, key: F, result: G) -> impl Iterator<Item = R>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(&K, &[&'s Self::Item]) -> R,
    {
        group::group_by_result_with(self, key, result, DefaultEquality)
    }

    fn group_by_result_with<'s, K, R, F, G, C>(
        &'s self,
        key: F,
        result: G,
        comparer: C,
    ) -> impl Iterator<Item = R>
    where
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(&K, &[&'s Self::Item]) -> R,
        C: EqualityComparer<K>,
    {
        group::group_by_result_with(self, key, result, comparer)
    }

    /// Immediate counterpart of `group_by`.
    fn to_lookup<'s, K, F>(&'s self, key: F) -> Lookup<K, &'s Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
    {
        group::to_lookup_with(self, key, DefaultEquality)
    }

    fn to_lookup_with<'s, K, F, C>(&'s self, key: F, comparer: C) -> Lookup<K, &'s Self::Item, C>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        group::to_lookup_with(self, key, comparer)
    }

    fn to_lookup_select<'s, K, V, F, E>(&'s self, key: F, element: E) -> Lookup<K, V>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
        E: FnMut(&'s Self::Item) -> V,
    {
        group::to_lookup_select_with(self, key, element, DefaultEquality)
    }

    fn join<'s, O, K, R, F, G, H>(
        &'s self,
        inner: &'s O,
        outer_key: F,
        inner_key: G,
        result: H,
    ) -> impl Iterator<Item = R>
    where
        O: Sequence + ?Sized,
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(&'s O::Item) -> K,
        H: FnMut(&'s Self::Item, &'s O::Item) -> R,
    {
        group::join_with(self, inner, outer_key, inner_key, result, DefaultEquality)
    }

    fn join_with<'s, O, K, R, F, G, H, C>(
        &'s self,
        inner: &'s O,
        outer_key: F,
        inner_key: G,
        result: H,
        comparer: C,
    ) -> impl Iterator<Item = R>
    where
        O: Sequence + ?Sized,
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(&'s O::Item) -> K,
        H: FnMut(&'s Self::Item, &'s O::Item) -> R,
        C: EqualityComparer<K>,
    {
        group::join_with(self, inner, outer_key, inner_key, result, comparer)
    }

    fn group_join<'s, O, K, R, F, G, H>(
        &'s self,
        inner: &'s O,
        outer_key: F,
        inner_key: G,
        result: H,
    ) -> impl Iterator<Item = R>
    where
        O: Sequence + ?Sized,
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(&'s O::Item) -> K,
        H: FnMut(&'s Self::Item, &[&'s O::Item]) -> R,
    {
        group::group_join_with(self, inner, outer_key, inner_key, result, DefaultEquality)
    }

    fn group_join_with<'s, O, K, R, F, G, H, C>(
        &'s self,
        inner: &'s O,
        outer_key: F,
        inner_key: G,
        result: H,
        comparer: C,
    ) -> impl Iterator<Item = R>
    where
        O: Sequence + ?Sized,
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(&'s O::Item) -> K,
        H: FnMut(&'s Self::Item, &[&'s O::Item]) -> R,
        C: EqualityComparer<K>,
    {
        group::group_join_with(self, inner, outer_key, inner_key, result, comparer)
    }

    fn count_by<'s, K, F>(&'s self, key: F) -> impl Iterator<Item = (K, usize)>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
    {
        group::count_by_with(self, key, DefaultEquality)
    }

    fn count_by_with<'s, K, F, C>(&'s self, key: F, comparer: C) -> impl Iterator<Item = (K, usize)>
    where
        F: FnMut(&'s Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        group::count_by_with(self, key, comparer)
    }

    fn aggregate_by<'s, K, A, F, G>(
        &'s self,
        key: F,
        seed: A,
        func: G,
    ) -> impl Iterator<Item = (K, A)>
    where
        K: Eq + Hash,
        A: Clone,
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(A, &'s Self::Item) -> A,
    {
        group::aggregate_by_with(self, key, seed, func, DefaultEquality)
    }

    fn aggregate_by_with<'s, K, A, F, G, C>(
        &'s self,
        key: F,
        seed: A,
        func: G,
        comparer: C,
    ) -> impl Iterator<Item = (K, A)>
    where
        A: Clone,
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(A, &'s Self::Item) -> A,
        C: EqualityComparer<K>,
    {
        group::aggregate_by_with(self, key, seed, func, comparer)
    }

    // ========================================================================
    // ELEMENT ACCESS
    // ========================================================================

    /// Accepts `usize`, `i32`, `Index`, `LongIndex`, ...
    fn element_at(&self, index: impl Position) -> Result<&Self::Item> {
        element::element_at(self, index)
    }

    fn element_at_or_default(&self, index: impl Position) -> Self::Item
    where
        Self::Item: Clone + Default,
    {
        element::element_at_or_default(self, index)
    }

    fn first(&self) -> Result<&Self::Item> {
        element::first(self)
    }

    fn first_where<P>(&self, predicate: P) -> Result<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        element::first_where(self, predicate)
    }

    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Clone + Default,
    {
        element::first_or_default(self)
    }

    fn first_where_or_default<P>(&self, predicate: P) -> Self::Item
    where
        Self::Item: Clone + Default,
        P: FnMut(&Self::Item) -> bool,
    {
        element::first_where_or_default(self, predicate)
    }

    fn last(&self) -> Result<&Self::Item> {
        element::last(self)
    }

    fn last_where<P>(&self, predicate: P) -> Result<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        element::last_where(self, predicate)
    }

    fn last_or_default(&self) -> Self::Item
    where
        Self::Item: Clone + Default,
    {
        element::last_or_default(self)
    }

    fn last_where_or_default<P>(&self, predicate: P) -> Self::Item
    where
        Self::Item: Clone + Default,
        P: FnMut(&Self::Item) -> bool,
    {
        element::last_where_or_default(self, predicate)
    }

    fn single(&self) -> Result<&Self::Item> {
        element::single(self)
    }

    fn single_where<P>(&self, predicate: P) -> Result<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        element::single_where(self, predicate)
    }

    fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Clone + Default,
    {
        element::single_or_default(self)
    }

    fn single_where_or_default<P>(&self, predicate: P) -> Result<Self::Item>
    where
        Self::Item: Clone + Default,
        P: FnMut(&Self::Item) -> bool,
    {
        element::single_where_or_default(self, predicate)
    }

    // ========================================================================
    // CONVERSION
    // ========================================================================

    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        convert::to_vec(self)
    }

    fn to_fixed_array(&self) -> FixedArray<Self::Item>
    where
        Self::Item: Clone,
    {
        convert::to_fixed_array(self)
    }

    fn to_immutable_list(&self) -> ImmutableList<Self::Item>
    where
        Self::Item: Clone,
    {
        convert::to_immutable_list(self)
    }

    fn to_hash_set(&self) -> HashSet<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        convert::to_hash_set(self)
    }

    fn to_hash_set_with<C>(&self, comparer: C) -> KeyedSet<Self::Item, C>
    where
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        convert::to_hash_set_with(self, comparer)
    }

    fn to_dictionary<'s, K, V, F, G>(&'s self, key: F, value: G) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash,
        F: FnMut(&'s Self::Item) -> K,
        G: FnMut(&'s Self::Item) -> V,
    {
        convert::to_dictionary(self, key, value)
    }

    // ========================================================================
    // EQUALITY AND HASHING
    // ========================================================================

    fn sequence_equal<O>(&self, other: &O) -> bool
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        Self::Item: PartialEq,
    {
        equality::sequence_equal(self, other)
    }

    fn sequence_equal_with<O, C>(&self, other: &O, comparer: C) -> bool
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        equality::sequence_equal_with(self, other, comparer)
    }

    /// Agrees with `sequence_equal`: equal sequences hash equal.
    fn sequence_hash(&self) -> u64
    where
        Self::Item: Hash,
    {
        equality::sequence_hash(self)
    }

    fn sequence_hash_with<C>(&self, comparer: C) -> u64
    where
        C: EqualityComparer<Self::Item>,
    {
        equality::sequence_hash_with(self, comparer)
    }

    // ========================================================================
    // SHAPING
    // ========================================================================

    fn append<'s>(&'s self, value: &'s Self::Item) -> impl Iterator<Item = &'s Self::Item> {
        shape::append(self, value)
    }

    fn prepend<'s>(&'s self, value: &'s Self::Item) -> impl Iterator<Item = &'s Self::Item> {
        shape::prepend(self, value)
    }

    fn concat<'s, O>(&'s self, other: &'s O) -> impl Iterator<Item = &'s Self::Item>
    where
        O: Sequence + ?Sized,
        O::Item: Borrow<Self::Item>,
    {
        shape::concat(self, other)
    }

    fn reverse(&self) -> impl Iterator<Item = &Self::Item> {
        shape::reverse(self)
    }

    fn default_if_empty<'s>(
        &'s self,
        default: &'s Self::Item,
    ) -> impl Iterator<Item = &'s Self::Item> {
        shape::default_if_empty(self, default)
    }

    fn zip<'s, O>(&'s self, other: &'s O) -> impl Iterator<Item = (&'s Self::Item, &'s O::Item)>
    where
        O: Sequence + ?Sized,
    {
        shape::zip(self, other)
    }

    fn zip3<'s, O, P>(
        &'s self,
        second: &'s O,
        third: &'s P,
    ) -> impl Iterator<Item = (&'s Self::Item, &'s O::Item, &'s P::Item)>
    where
        O: Sequence + ?Sized,
        P: Sequence + ?Sized,
    {
        shape::zip3(self, second, third)
    }

    fn zip_with<'s, O, R, F>(&'s self, other: &'s O, result: F) -> impl Iterator<Item = R>
    where
        O: Sequence + ?Sized,
        F: FnMut(&'s Self::Item, &'s O::Item) -> R,
    {
        shape::zip_with(self, other, result)
    }

    fn index(&self) -> impl Iterator<Item = (usize, &Self::Item)> {
        shape::index(self)
    }
}

// ============================================================================
// REPRESENTATIONS
// ============================================================================

impl<T> Sequence for FixedArray<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        FixedArray::iter(self)
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get_at(&self, offset: usize) -> Option<&T> {
        self.as_ref().get(offset)
    }

    fn reverse(&self) -> impl Iterator<Item = &T> {
        FixedArray::iter(self).rev()
    }
}

impl<T> Sequence for Slice<'_, T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.items().iter()
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get_at(&self, offset: usize) -> Option<&T> {
        self.items().get(offset)
    }

    fn reverse(&self) -> impl Iterator<Item = &T> {
        self.items().iter().rev()
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn get_at(&self, offset: usize) -> Option<&T> {
        self.as_slice().get(offset)
    }

    fn reverse(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter().rev()
    }
}

/// No random access: `get_at` walks the list.
impl<T> Sequence for ImmutableList<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        ImmutableList::iter(self)
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = &S::Item> {
        (**self).iter()
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        (**self).try_get_non_enumerated_count()
    }

    fn get_at(&self, offset: usize) -> Option<&S::Item> {
        (**self).get_at(offset)
    }
}
