// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A hash set whose notion of equality is a runtime value.
//!
//! `std::collections::HashSet` ties equality to the element's `Eq` impl.
//! Set algebra with an injected comparer needs the table to ask the comparer
//! instead, so this wraps `hashbrown::HashTable`, which takes the hash and the
//! equality check from the caller on every operation.
//!
//! Iteration order is the table's order, which is unspecified. Operators that
//! promise source order (distinct, union, ...) only use the set for membership.

use crate::compare::{DefaultEquality, EqualityComparer};
use crate::verify::contracts::check_comparer_consistent;
use hashbrown::HashTable;
use std::fmt;
use std::hash::Hash;

/// Hash set keyed by an [`EqualityComparer`].
pub struct KeyedSet<T, C = DefaultEquality> {
    table: HashTable<T>,
    comparer: C,
}

impl<T: Eq + Hash> KeyedSet<T> {
    pub fn new() -> Self {
        Self::with_comparer(DefaultEquality)
    }
}

impl<T: Eq + Hash> Default for KeyedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: EqualityComparer<T>> KeyedSet<T, C> {
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            table: HashTable::new(),
            comparer,
        }
    }

    /// Insert `value`. Returns `false` (and drops `value`) if an equal element is present.
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.comparer.hash(&value);
        let comparer = &self.comparer;
        let present = self
            .table
            .find(hash, |existing| {
                let equal = comparer.equals(existing, &value);
                if equal {
                    check_comparer_consistent(comparer, existing, &value);
                }
                equal
            })
            .is_some();
        if present {
            return false;
        }
        self.table
            .insert_unique(hash, value, |existing| comparer.hash(existing));
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let hash = self.comparer.hash(value);
        self.table
            .find(hash, |existing| self.comparer.equals(existing, value))
            .is_some()
    }

    /// Remove the element equal to `value`. Returns whether one was present.
    pub fn remove(&mut self, value: &T) -> bool {
        let hash = self.comparer.hash(value);
        let comparer = &self.comparer;
        match self
            .table
            .find_entry(hash, |existing| comparer.equals(existing, value))
        {
            Ok(entry) => {
                entry.remove();
                true
            }
            Err(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Elements in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.table.iter()
    }

    pub fn comparer(&self) -> &C {
        &self.comparer
    }
}

impl<T, C: EqualityComparer<T>> Extend<T> for KeyedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for KeyedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = KeyedSet::new();
        set.extend(iter);
        set
    }
}

impl<T: fmt::Debug, C> fmt::Debug for KeyedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.iter()).finish()
    }
}
