//! Quantifiers and counts.
//!
//! `any_where` stops at the first match and `all` at the first failure.
//! `count` never enumerates a representation that knows its length.

use super::len_of;
use crate::compare::EqualityComparer;
use crate::contract::Sequence;

/// Vacuously true on empty input.
pub fn all<S, P>(source: &S, predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source.iter().all(predicate)
}

pub fn any<S: Sequence + ?Sized>(source: &S) -> bool {
    match source.try_get_non_enumerated_count() {
        Some(len) => len > 0,
        None => source.iter().next().is_some(),
    }
}

pub fn any_where<S, P>(source: &S, predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source.iter().any(predicate)
}

pub fn contains<S>(source: &S, value: &S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    source.iter().any(|item| item == value)
}

pub fn contains_with<S, C>(source: &S, value: &S::Item, comparer: C) -> bool
where
    S: Sequence + ?Sized,
    C: EqualityComparer<S::Item>,
{
    source.iter().any(|item| comparer.equals(item, value))
}

pub fn count<S: Sequence + ?Sized>(source: &S) -> usize {
    len_of(source)
}

pub fn count_where<S, P>(source: &S, mut predicate: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source.iter().filter(|item| predicate(item)).count()
}

pub fn long_count<S: Sequence + ?Sized>(source: &S) -> u64 {
    len_of(source) as u64
}

pub fn long_count_where<S, P>(source: &S, mut predicate: P) -> u64
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source
        .iter()
        .fold(0u64, |n, item| if predicate(item) { n + 1 } else { n })
}
