//! Concatenation, reversal, zipping and friends.

use super::deferred;
use crate::contract::Sequence;
use std::borrow::Borrow;
use std::iter;

pub fn append<'s, S: Sequence + ?Sized>(
    source: &'s S,
    value: &'s S::Item,
) -> impl Iterator<Item = &'s S::Item> {
    source.iter().chain(iter::once(value))
}

pub fn prepend<'s, S: Sequence + ?Sized>(
    source: &'s S,
    value: &'s S::Item,
) -> impl Iterator<Item = &'s S::Item> {
    iter::once(value).chain(source.iter())
}

pub fn concat<'s, S, O>(source: &'s S, other: &'s O) -> impl Iterator<Item = &'s S::Item>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    O::Item: Borrow<S::Item>,
{
    source
        .iter()
        .chain(other.iter().map(<O::Item as Borrow<S::Item>>::borrow))
}

/// Buffers the whole source on the first poll.
pub fn reverse<S: Sequence + ?Sized>(source: &S) -> impl Iterator<Item = &S::Item> {
    deferred(move || {
        let items: Vec<&S::Item> = source.iter().collect();
        items.into_iter().rev()
    })
}

/// The source, or `default` alone when the source is empty.
pub fn default_if_empty<'s, S: Sequence + ?Sized>(
    source: &'s S,
    default: &'s S::Item,
) -> impl Iterator<Item = &'s S::Item> {
    deferred(move || {
        let mut items = source.iter().peekable();
        let fallback = items.peek().is_none().then_some(default);
        items.chain(fallback)
    })
}

/// Pairs until either side runs out.
pub fn zip<'s, S, O>(
    source: &'s S,
    other: &'s O,
) -> impl Iterator<Item = (&'s S::Item, &'s O::Item)>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
{
    source.iter().zip(other.iter())
}

pub fn zip3<'s, S, O, P>(
    source: &'s S,
    second: &'s O,
    third: &'s P,
) -> impl Iterator<Item = (&'s S::Item, &'s O::Item, &'s P::Item)>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    P: Sequence + ?Sized,
{
    source
        .iter()
        .zip(second.iter())
        .zip(third.iter())
        .map(|((a, b), c)| (a, b, c))
}

pub fn zip_with<'s, S, O, R, F>(
    source: &'s S,
    other: &'s O,
    mut result: F,
) -> impl Iterator<Item = R>
where
    S: Sequence + ?Sized,
    O: Sequence + ?Sized,
    F: FnMut(&'s S::Item, &'s O::Item) -> R,
{
    source
        .iter()
        .zip(other.iter())
        .map(move |(a, b)| result(a, b))
}

/// `(position, element)` pairs.
pub fn index<S: Sequence + ?Sized>(source: &S) -> impl Iterator<Item = (usize, &S::Item)> {
    source.iter().enumerate()
}
