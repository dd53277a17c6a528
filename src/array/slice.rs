// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Borrowed windows into a [`FixedArray`].
//!
//! A `Slice` is a parent reference plus an offset and a length. It never owns
//! or copies elements, and the borrow checker keeps it from outliving the
//! array it points into.

use super::FixedArray;
use crate::error::{Result, SeqError};
use crate::index::{Offsets, Position, Window};
use crate::verify::contracts::{check_chunk_shape, check_slice_within_parent, check_window_within};
use std::fmt;
use std::iter::FusedIterator;

/// A contiguous sub-range of a [`FixedArray`].
pub struct Slice<'a, T> {
    parent: &'a FixedArray<T>,
    offset: usize,
    len: usize,
}

impl<'a, T> Slice<'a, T> {
    pub(crate) fn whole(parent: &'a FixedArray<T>) -> Self {
        Self::within(parent, 0, parent.len())
    }

    fn within(parent: &'a FixedArray<T>, offset: usize, len: usize) -> Self {
        check_slice_within_parent(offset, len, parent.len());
        Self {
            parent,
            offset,
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start of this view within the parent.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn parent(&self) -> &'a FixedArray<T> {
        self.parent
    }

    /// The viewed elements.
    #[inline]
    pub fn items(&self) -> &'a [T] {
        self.parent
            .as_ref()
            .get(self.offset..self.offset + self.len)
            .unwrap_or_default()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items().iter()
    }

    pub fn get(&self, index: impl Position) -> Option<&'a T> {
        index
            .resolve(self.len)
            .and_then(|offset| self.items().get(offset))
    }

    pub fn at(&self, index: impl Position) -> Result<&'a T> {
        self.get(index)
            .ok_or_else(|| SeqError::index(index, self.len))
    }

    /// A narrower view, with `window` resolved strictly against this slice.
    pub fn slice(&self, window: impl Window) -> Result<Slice<'a, T>> {
        let range = window.resolve(self.len)?;
        check_window_within(&range, self.len);
        let offset = self.offset + range.start;
        Ok(Self::within(self.parent, offset, range.len()))
    }

    /// Consecutive sub-slices of `size` elements. Fails when `size < 1`.
    pub fn chunk(&self, size: isize) -> Result<Chunks<'a, T>> {
        if size < 1 {
            return Err(SeqError::argument("size", size as i64));
        }
        Ok(Chunks {
            rest: *self,
            size: size as usize,
        })
    }

    /// Copy the viewed elements into a new array.
    pub fn to_fixed_array(&self) -> FixedArray<T>
    where
        T: Clone,
    {
        FixedArray::from(self.items())
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

/// Same parent storage, same offset, same length.
impl<T> PartialEq for Slice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.parent.same_storage(other.parent)
            && self.offset == other.offset
            && self.len == other.len
    }
}

impl<T> Eq for Slice<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items()).finish()
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items().iter()
    }
}

/// Iterator over the chunks of a slice.
pub struct Chunks<'a, T> {
    rest: Slice<'a, T>,
    size: usize,
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = Slice<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let take = self.size.min(self.rest.len);
        let chunk = self.rest.slice(Offsets(0, take)).ok()?;
        self.rest = self.rest.slice(Offsets(take, self.rest.len)).ok()?;
        check_chunk_shape(chunk.len, self.size, self.rest.len);
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.len.div_ceil(self.size);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> FusedIterator for Chunks<'_, T> {}
