//! Sequence sources that do not start from a collection.

use crate::error::{Result, SeqError};
use std::iter::{self, Empty, RepeatN};

/// `count` consecutive integers starting at `start`.
///
/// Fails when `count` is negative or the last value would pass `i32::MAX`.
pub fn range(
    start: i32,
    count: i32,
) -> Result<impl DoubleEndedIterator<Item = i32> + ExactSizeIterator> {
    if count < 0 || i64::from(start) + i64::from(count) - 1 > i64::from(i32::MAX) {
        return Err(SeqError::argument("count", i64::from(count)));
    }
    Ok((0..count).map(move |step| start + step))
}

/// `value`, `count` times. Fails when `count` is negative.
pub fn repeat<T: Clone>(value: T, count: i32) -> Result<RepeatN<T>> {
    let count = usize::try_from(count).map_err(|_| SeqError::argument("count", i64::from(count)))?;
    Ok(iter::repeat_n(value, count))
}

pub fn empty<T>() -> Empty<T> {
    iter::empty()
}
