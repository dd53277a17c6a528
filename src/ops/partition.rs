//! Skip, take and chunk.
//!
//! Counts are signed and clamp silently: a negative count means zero and a
//! count past the end means "all of it". Only `chunk` rejects its argument.

use super::{deferred, len_of};
use crate::contract::Sequence;
use crate::error::{Result, SeqError};
use crate::index::Window;

#[inline]
fn clamp_count(count: isize) -> usize {
    usize::try_from(count).unwrap_or(0)
}

pub fn skip<S: Sequence + ?Sized>(source: &S, count: isize) -> impl Iterator<Item = &S::Item> {
    source.iter().skip(clamp_count(count))
}

pub fn take<S: Sequence + ?Sized>(source: &S, count: isize) -> impl Iterator<Item = &S::Item> {
    source.iter().take(clamp_count(count))
}

/// The part of `window` that overlaps the sequence, resolved by clamping.
pub fn take_range<S, W>(source: &S, window: W) -> impl Iterator<Item = &S::Item>
where
    S: Sequence + ?Sized,
    W: Window,
{
    deferred(move || {
        let range = window.clamp(len_of(source));
        source.iter().skip(range.start).take(range.len())
    })
}

pub fn skip_while<S, P>(source: &S, mut predicate: P) -> impl Iterator<Item = &S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source.iter().skip_while(move |&item| predicate(item))
}

pub fn skip_while_indexed<S, P>(source: &S, mut predicate: P) -> impl Iterator<Item = &S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .iter()
        .enumerate()
        .skip_while(move |&(position, item)| predicate(item, position))
        .map(|(_, item)| item)
}

pub fn take_while<S, P>(source: &S, mut predicate: P) -> impl Iterator<Item = &S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source.iter().take_while(move |&item| predicate(item))
}

pub fn take_while_indexed<S, P>(source: &S, mut predicate: P) -> impl Iterator<Item = &S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .iter()
        .enumerate()
        .take_while(move |&(position, item)| predicate(item, position))
        .map(|(_, item)| item)
}

/// Everything but the last `count` elements.
pub fn skip_last<S: Sequence + ?Sized>(source: &S, count: isize) -> impl Iterator<Item = &S::Item> {
    deferred(move || {
        let keep = len_of(source).saturating_sub(clamp_count(count));
        source.iter().take(keep)
    })
}

/// The last `count` elements, or all of them when there are fewer.
pub fn take_last<S: Sequence + ?Sized>(source: &S, count: isize) -> impl Iterator<Item = &S::Item> {
    deferred(move || {
        let skip = len_of(source).saturating_sub(clamp_count(count));
        source.iter().skip(skip)
    })
}

/// Consecutive groups of `size`; the last may be shorter. Fails when `size < 1`.
pub fn chunk<S: Sequence + ?Sized>(
    source: &S,
    size: isize,
) -> Result<impl Iterator<Item = Vec<&S::Item>>> {
    if size < 1 {
        return Err(SeqError::argument("size", size as i64));
    }
    let size = size as usize;
    let mut items = source.iter();
    Ok(std::iter::from_fn(move || {
        let chunk: Vec<&S::Item> = items.by_ref().take(size).collect();
        (!chunk.is_empty()).then_some(chunk)
    }))
}
