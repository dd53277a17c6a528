//! Fixtures shared by unit tests, the contract suites and the benches.
//!
//! This module is always compiled but hidden from documentation.
//!
//! A [`Representation`] names one concrete sequence type. The contract suites
//! are written once as generic functions over `R: Representation` and then
//! instantiated for every representation, so an operator that behaves
//! differently on two backings fails on exactly one of them.

#![doc(hidden)]

use crate::array::FixedArray;
use crate::compare::{Comparer, EqualityComparer};
use crate::contract::Sequence;
use crate::list::ImmutableList;
use std::borrow::Borrow;
use std::cell::Cell;
use std::cmp::Ordering;

// ============================================================================
// REPRESENTATIONS
// ============================================================================

/// A family of sequence types, one per element type.
pub trait Representation {
    /// Shown in assertion messages.
    const NAME: &'static str;

    type Seq<T>: Sequence<Item = T> + FromIterator<T>;

    fn build<T>(items: impl IntoIterator<Item = T>) -> Self::Seq<T> {
        items.into_iter().collect()
    }

    fn empty() -> Self::Seq<i32> {
        Self::build(std::iter::empty())
    }

    /// `0..=9`
    fn first_ten() -> Self::Seq<i32> {
        Self::build(0..10)
    }

    /// `0..=99`: sum 4950, average 49.5.
    fn first_hundred() -> Self::Seq<i32> {
        Self::build(0..100)
    }

    /// `0..=99` with every multiple of five missing: 80 present values, sum 4000.
    fn first_hundred_every_fifth_missing() -> Self::Seq<Option<i32>> {
        Self::build((0..100).map(|v| (v % 5 != 0).then_some(v)))
    }

    /// 100 missing values.
    fn all_missing() -> Self::Seq<Option<i32>> {
        Self::build(std::iter::repeat_n(None, 100))
    }
}

pub struct FixedArrays;

impl Representation for FixedArrays {
    const NAME: &'static str = "FixedArray";
    type Seq<T> = FixedArray<T>;
}

pub struct Vecs;

impl Representation for Vecs {
    const NAME: &'static str = "Vec";
    type Seq<T> = Vec<T>;
}

pub struct ImmutableLists;

impl Representation for ImmutableLists {
    const NAME: &'static str = "ImmutableList";
    type Seq<T> = ImmutableList<T>;
}

// ============================================================================
// PULL COUNTERS
// ============================================================================

/// Wraps a sequence and counts how many elements have been pulled from it.
///
/// Deferred operators must leave the count at zero until polled.
pub struct PullCounter<S> {
    inner: S,
    pulled: Cell<usize>,
}

impl<S> PullCounter<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pulled: Cell::new(0),
        }
    }

    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }

    pub fn reset(&self) {
        self.pulled.set(0);
    }
}

impl<S: Sequence> Sequence for PullCounter<S> {
    type Item = S::Item;

    fn iter(&self) -> impl Iterator<Item = &S::Item> {
        self.inner
            .iter()
            .inspect(move |_| self.pulled.set(self.pulled.get() + 1))
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        self.inner.try_get_non_enumerated_count()
    }
}

// ============================================================================
// COMPARERS
// ============================================================================

/// Values are equal when they agree modulo `self.0`.
#[derive(Debug, Clone, Copy)]
pub struct ModuloEquality(pub i32);

impl EqualityComparer<i32> for ModuloEquality {
    fn equals(&self, a: &i32, b: &i32) -> bool {
        a.rem_euclid(self.0) == b.rem_euclid(self.0)
    }

    fn hash(&self, value: &i32) -> u64 {
        value.rem_euclid(self.0) as u64
    }
}

/// Orders by absolute value, so `-3` and `3` tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteOrder;

impl Comparer<i32> for AbsoluteOrder {
    fn compare(&self, a: &i32, b: &i32) -> Ordering {
        a.unsigned_abs().cmp(&b.unsigned_abs())
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// The "parent" element type for mixed-element operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    pub id: i32,
    pub name: &'static str,
}

impl Shape {
    pub fn new(id: i32, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// A "child" of [`Shape`]: usable wherever a `Shape` operand is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Square {
    pub shape: Shape,
    pub side: u32,
}

impl Square {
    pub fn new(id: i32, name: &'static str, side: u32) -> Self {
        Self {
            shape: Shape::new(id, name),
            side,
        }
    }
}

impl Borrow<Shape> for Square {
    fn borrow(&self) -> &Shape {
        &self.shape
    }
}

/// A named person, for join and grouping scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Person {
    pub name: &'static str,
    pub age: u32,
}

impl Person {
    pub fn new(name: &'static str, age: u32) -> Self {
        Self { name, age }
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("Ada", 36),
        Person::new("Grace", 45),
        Person::new("Alan", 41),
        Person::new("Edsger", 36),
        Person::new("Barbara", 45),
    ]
}
