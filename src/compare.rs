// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pluggable equality and ordering.
//!
//! Every operator that compares elements comes in a default form and a `_with`
//! form taking one of these strategies. The default forms are literally the
//! `_with` forms called with [`DefaultEquality`] or [`DefaultOrder`], so there is
//! one code path per operator.
//!
//! `Option<C>` is itself a comparer: `Some(c)` delegates to `c` and `None` falls
//! back to the default. Passing `None` is therefore indistinguishable from
//! calling the default overload.
//!
//! # Consistency
//!
//! An [`EqualityComparer`] used for hashing operators (distinct, set algebra,
//! grouping, join, lookup) must satisfy `equals(a, b) => hash(a) == hash(b)`.
//! A [`Comparer`] must be a total order. Neither is checked at runtime outside
//! the debug contracts in `contracts`.

use std::cmp::Ordering;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::marker::PhantomData;

/// Equality plus a hash consistent with it.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
    fn hash(&self, value: &T) -> u64;
}

/// A total order.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Hash a value with the crate's fixed-key hasher.
///
/// `DefaultHasher::new()` uses fixed keys, so two sequences hash the same way in
/// the same process no matter which table or operator computed the hash.
#[inline]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// `Eq` + `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for DefaultEquality {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        hash_one(value)
    }
}

/// `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultOrder;

impl<T: Ord + ?Sized> Comparer<T> for DefaultOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &C {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T, C> EqualityComparer<T> for Option<C>
where
    T: Eq + Hash + ?Sized,
    C: EqualityComparer<T>,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        match self {
            Some(comparer) => comparer.equals(a, b),
            None => DefaultEquality.equals(a, b),
        }
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        match self {
            Some(comparer) => comparer.hash(value),
            None => DefaultEquality.hash(value),
        }
    }
}

impl<T, C> Comparer<T> for Option<C>
where
    T: Ord + ?Sized,
    C: Comparer<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Some(comparer) => comparer.compare(a, b),
            None => a.cmp(b),
        }
    }
}

/// Reverses another order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Descending<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Lifts a comparer over `T` to one over `&T`.
///
/// Set operators hash borrowed elements; this keeps user comparers written
/// against the element type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Referenced<C>(pub C);

impl<'a, T: ?Sized, C: EqualityComparer<T>> EqualityComparer<&'a T> for Referenced<C> {
    #[inline]
    fn equals(&self, a: &&'a T, b: &&'a T) -> bool {
        self.0.equals(a, b)
    }

    #[inline]
    fn hash(&self, value: &&'a T) -> u64 {
        self.0.hash(value)
    }
}

impl<'a, T: ?Sized, C: Comparer<T>> Comparer<&'a T> for Referenced<C> {
    #[inline]
    fn compare(&self, a: &&'a T, b: &&'a T) -> Ordering {
        self.0.compare(a, b)
    }
}

/// Equality from a pair of closures.
///
/// ```
/// use fixedseq::{EqualityComparer, EqualityFn};
///
/// let parity = EqualityFn::new(|a: &i32, b: &i32| a % 2 == b % 2, |v: &i32| (v % 2) as u64);
/// assert!(parity.equals(&3, &7));
/// ```
#[derive(Clone, Copy)]
pub struct EqualityFn<E, H> {
    eq: E,
    hash: H,
}

impl<E, H> EqualityFn<E, H> {
    pub fn new(eq: E, hash: H) -> Self {
        Self { eq, hash }
    }
}

impl<T: ?Sized, E, H> EqualityComparer<T> for EqualityFn<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// An order from a closure.
#[derive(Clone, Copy)]
pub struct ComparerFn<F>(pub F);

impl<T: ?Sized, F> Comparer<T> for ComparerFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Equality on a projected key.
///
/// Symmetric by construction: both sides go through the same projection.
pub struct KeyEquality<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyEquality<F, K> {
    pub fn new(key: F) -> Self {
        Self {
            key,
            _key: PhantomData,
        }
    }
}

impl<T: ?Sized, F, K> EqualityComparer<T> for KeyEquality<F, K>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        hash_one(&(self.key)(value))
    }
}

/// Order on a projected key, compared with `C`.
///
/// `KeyOrder::new(key)` uses the key's own `Ord`; `KeyOrder::with(key, comparer)`
/// injects a comparer for the key type.
pub struct KeyOrder<F, K, C = DefaultOrder> {
    key: F,
    comparer: C,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyOrder<F, K> {
    pub fn new(key: F) -> Self {
        Self::with(key, DefaultOrder)
    }
}

impl<F, K, C> KeyOrder<F, K, C> {
    pub fn with(key: F, comparer: C) -> Self {
        Self {
            key,
            comparer,
            _key: PhantomData,
        }
    }
}

impl<T: ?Sized, F, K, C> Comparer<T> for KeyOrder<F, K, C>
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparer.compare(&(self.key)(a), &(self.key)(b))
    }
}

/// Lexicographic composition: `A` decides, `B` breaks its ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct Then<A, B>(pub A, pub B);

impl<T: ?Sized, A: Comparer<T>, B: Comparer<T>> Comparer<T> for Then<A, B> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).then_with(|| self.1.compare(a, b))
    }
}

/// Case-insensitive string equality and order (Unicode lowercase folding).
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitive;

impl CaseInsensitive {
    fn folded(value: &str) -> impl Iterator<Item = char> + '_ {
        value.chars().flat_map(char::to_lowercase)
    }
}

impl<T: AsRef<str> + ?Sized> EqualityComparer<T> for CaseInsensitive {
    fn equals(&self, a: &T, b: &T) -> bool {
        Self::folded(a.as_ref()).eq(Self::folded(b.as_ref()))
    }

    fn hash(&self, value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        for c in Self::folded(value.as_ref()) {
            c.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<T: AsRef<str> + ?Sized> Comparer<T> for CaseInsensitive {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Self::folded(a.as_ref()).cmp(Self::folded(b.as_ref()))
    }
}
