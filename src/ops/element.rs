// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-element reductions.
//!
//! The plain forms fail; the `_or_default` forms fall back to
//! `Default::default()`. Every `single` form still fails on a second match,
//! because "more than one" is never a default-value situation.

use super::len_of;
use crate::contract::Sequence;
use crate::error::{Result, SeqError};
use crate::index::Position;

/// Element access. Resolving `index` against the length is strict: an index
/// that falls outside `[0, length)` fails.
pub fn element_at<S, P>(source: &S, index: P) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    P: Position,
{
    let offset = match source.try_get_non_enumerated_count() {
        Some(len) => index.resolve(len),
        // A from-start index does not need the length to resolve.
        None if !index.is_from_end() => usize::try_from(index.offset(0)).ok(),
        None => index.resolve(len_of(source)),
    };
    offset
        .and_then(|offset| source.get_at(offset))
        .ok_or_else(|| SeqError::index(index, len_of(source)))
}

pub fn element_at_or_default<S, P>(source: &S, index: P) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: Position,
{
    element_at(source, index).ok().cloned().unwrap_or_default()
}

pub fn first<S: Sequence + ?Sized>(source: &S) -> Result<&S::Item> {
    source.iter().next().ok_or(SeqError::EmptySequence)
}

pub fn first_where<S, P>(source: &S, mut predicate: P) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source
        .iter()
        .find(|&item| predicate(item))
        .ok_or(SeqError::NoMatch)
}

pub fn last<S: Sequence + ?Sized>(source: &S) -> Result<&S::Item> {
    let found = match source.try_get_non_enumerated_count() {
        Some(len) => len.checked_sub(1).and_then(|offset| source.get_at(offset)),
        None => source.iter().last(),
    };
    found.ok_or(SeqError::EmptySequence)
}

pub fn last_where<S, P>(source: &S, mut predicate: P) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source
        .iter()
        .filter(|&item| predicate(item))
        .last()
        .ok_or(SeqError::NoMatch)
}

pub fn single<S: Sequence + ?Sized>(source: &S) -> Result<&S::Item> {
    let mut items = source.iter();
    let only = items.next().ok_or(SeqError::EmptySequence)?;
    match items.next() {
        Some(_) => Err(SeqError::MoreThanOneElement),
        None => Ok(only),
    }
}

pub fn single_where<S, P>(source: &S, mut predicate: P) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut matches = source.iter().filter(|&item| predicate(item));
    let only = matches.next().ok_or(SeqError::NoMatch)?;
    match matches.next() {
        Some(_) => Err(SeqError::MoreThanOneMatch),
        None => Ok(only),
    }
}

/// Turn "no element" into the default value and keep every other error.
fn or_default<T: Clone + Default>(found: Result<&T>) -> Result<T> {
    match found {
        Ok(item) => Ok(item.clone()),
        Err(SeqError::EmptySequence | SeqError::NoMatch) => Ok(T::default()),
        Err(err) => Err(err),
    }
}

pub fn first_or_default<S>(source: &S) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    first(source).ok().cloned().unwrap_or_default()
}

pub fn first_where_or_default<S, P>(source: &S, predicate: P) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: FnMut(&S::Item) -> bool,
{
    first_where(source, predicate)
        .ok()
        .cloned()
        .unwrap_or_default()
}

pub fn last_or_default<S>(source: &S) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    last(source).ok().cloned().unwrap_or_default()
}

pub fn last_where_or_default<S, P>(source: &S, predicate: P) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: FnMut(&S::Item) -> bool,
{
    last_where(source, predicate)
        .ok()
        .cloned()
        .unwrap_or_default()
}

/// Default on empty input; still `MoreThanOneElement` on two or more.
pub fn single_or_default<S>(source: &S) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    or_default(single(source))
}

pub fn single_where_or_default<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: FnMut(&S::Item) -> bool,
{
    or_default(single_where(source, predicate))
}
