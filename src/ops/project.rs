// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filtering and projection.
//!
//! Indexed forms pass each element's position in *this operator's* input,
//! counting from zero, so `skip(3).filter_indexed(..)` sees 0, 1, 2, ...

use crate::contract::Sequence;

pub fn filter<S, P>(source: &S, mut predicate: P) -> impl Iterator<Item = &S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source.iter().filter(move |&item| predicate(item))
}

pub fn filter_indexed<S, P>(source: &S, mut predicate: P) -> impl Iterator<Item = &S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .iter()
        .enumerate()
        .filter_map(move |(position, item)| predicate(item, position).then_some(item))
}

pub fn select<'s, S, R, F>(source: &'s S, selector: F) -> impl Iterator<Item = R>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item) -> R,
{
    source.iter().map(selector)
}

pub fn select_indexed<'s, S, R, F>(source: &'s S, mut selector: F) -> impl Iterator<Item = R>
where
    S: Sequence + ?Sized,
    F: FnMut(&'s S::Item, usize) -> R,
{
    source
        .iter()
        .enumerate()
        .map(move |(position, item)| selector(item, position))
}

pub fn select_many<'s, S, U, F>(source: &'s S, selector: F) -> impl Iterator<Item = U::Item>
where
    S: Sequence + ?Sized,
    U: IntoIterator,
    F: FnMut(&'s S::Item) -> U,
{
    source.iter().flat_map(selector)
}

pub fn select_many_indexed<'s, S, U, F>(
    source: &'s S,
    mut selector: F,
) -> impl Iterator<Item = U::Item>
where
    S: Sequence + ?Sized,
    U: IntoIterator,
    F: FnMut(&'s S::Item, usize) -> U,
{
    source
        .iter()
        .enumerate()
        .flat_map(move |(position, item)| selector(item, position))
}

/// Flatten, then combine each inner value with the element it came from.
pub fn select_many_with<'s, S, U, R, F, G>(
    source: &'s S,
    mut collection: F,
    mut result: G,
) -> impl Iterator<Item = R>
where
    S: Sequence + ?Sized,
    U: IntoIterator,
    F: FnMut(&'s S::Item) -> U,
    G: FnMut(&'s S::Item, U::Item) -> R,
{
    let mut outer = source.iter();
    let mut current: Option<(&'s S::Item, U::IntoIter)> = None;
    std::iter::from_fn(move || {
        loop {
            if let Some((item, inner)) = current.as_mut() {
                if let Some(value) = inner.next() {
                    return Some(result(*item, value));
                }
            }
            let item = outer.next()?;
            current = Some((item, collection(item).into_iter()));
        }
    })
}
