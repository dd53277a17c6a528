// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed-length, immutable backing sequence.
//!
//! A [`FixedArray`] copies its input once into shared storage and never changes
//! it again. Cloning shares the storage, and `==` asks whether two arrays share
//! it: equality here is identity. Element-wise comparison is a separate
//! operator (`Sequence::sequence_equal`).
//!
//! There is no `&mut` access anywhere, so any number of pipelines can read one
//! array at the same time without coordination.

mod slice;

pub use slice::{Chunks, Slice};

use crate::error::{Result, SeqError};
use crate::index::{Position, Window};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable array whose length is fixed at construction.
pub struct FixedArray<T> {
    items: Arc<[T]>,
}

impl<T> FixedArray<T> {
    /// Copy `items` into new storage.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect()
    }

    pub fn empty() -> Self {
        Self::from(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, or `None` if it does not resolve.
    #[inline]
    pub fn get(&self, index: impl Position) -> Option<&T> {
        index
            .resolve(self.len())
            .and_then(|offset| self.items.get(offset))
    }

    /// The element at `index`, or `IndexOutOfRange`.
    pub fn at(&self, index: impl Position) -> Result<&T> {
        self.get(index)
            .ok_or_else(|| SeqError::index(index, self.len()))
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The whole array as a [`Slice`].
    pub fn as_slice(&self) -> Slice<'_, T> {
        Slice::whole(self)
    }

    /// A view of `window`, resolved strictly. Never copies.
    pub fn slice(&self, window: impl Window) -> Result<Slice<'_, T>> {
        self.as_slice().slice(window)
    }

    /// Split into consecutive slices of `size`; the last may be shorter.
    ///
    /// This shadows the generic `Sequence::chunk`, which yields `Vec`s.
    pub fn chunk(&self, size: isize) -> Result<Chunks<'_, T>> {
        self.as_slice().chunk(size)
    }

    /// True when both arrays share the same storage.
    #[inline]
    pub fn same_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> Clone for FixedArray<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for FixedArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> PartialEq for FixedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_storage(other)
    }
}

impl<T> Eq for FixedArray<T> {}

impl<T: fmt::Debug> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> From<Vec<T>> for FixedArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T: Clone> From<&[T]> for FixedArray<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> FromIterator<T> for FixedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for FixedArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> std::ops::Index<usize> for FixedArray<T> {
    type Output = T;

    fn index(&self, offset: usize) -> &T {
        &self.items[offset]
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for FixedArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for FixedArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(FixedArray::from)
    }
}
