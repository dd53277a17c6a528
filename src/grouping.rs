// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Groups and the multi-map that holds them.
//!
//! A [`Lookup`] is built in one pass and never changes afterwards. Groups come
//! out in the order their key was first seen, and values inside a group in
//! source order. When a comparer merges two distinct key values, the group
//! keeps the first one.
//!
//! Group membership is decided by an [`EqualityComparer`] over the key. The
//! table stores group positions, not keys, so each key is stored exactly once,
//! inside its `Grouping`.

use crate::compare::{DefaultEquality, EqualityComparer};
use hashbrown::HashTable;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// One key and the values that share it, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, V> {
    key: K,
    elements: Vec<V>,
}

impl<K, V> Grouping<K, V> {
    pub fn new(key: K, elements: Vec<V>) -> Self {
        Self { key, elements }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[V] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.elements.iter()
    }

    pub fn into_parts(self) -> (K, Vec<V>) {
        (self.key, self.elements)
    }
}

impl<K, V> IntoIterator for Grouping<K, V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'g, K, V> IntoIterator for &'g Grouping<K, V> {
    type Item = &'g V;
    type IntoIter = std::slice::Iter<'g, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Immutable multi-map from key to [`Grouping`], in first-encounter key order.
pub struct Lookup<K, V, C = DefaultEquality> {
    groups: Vec<Grouping<K, V>>,
    table: HashTable<usize>,
    comparer: C,
}

impl<K, V, C: EqualityComparer<K>> Lookup<K, V, C> {
    /// Group `(key, value)` pairs under `comparer`.
    pub fn from_pairs_with(pairs: impl IntoIterator<Item = (K, V)>, comparer: C) -> Self {
        let mut groups: Vec<Grouping<K, V>> = Vec::new();
        let mut table = HashTable::new();
        let mut elements = 0usize;

        for (key, value) in pairs {
            elements += 1;
            let hash = comparer.hash(&key);
            let same_key = |&slot: &usize| comparer.equals(&groups[slot].key, &key);
            match table.find(hash, same_key) {
                Some(&slot) => groups[slot].elements.push(value),
                None => {
                    let slot = groups.len();
                    groups.push(Grouping::new(key, vec![value]));
                    table.insert_unique(hash, slot, |&existing: &usize| {
                        comparer.hash(&groups[existing].key)
                    });
                }
            }
        }

        debug!(groups = groups.len(), elements, "lookup built");
        Self {
            groups,
            table,
            comparer,
        }
    }

    /// Position of `key`'s group, stable for the lifetime of the lookup.
    pub(crate) fn slot(&self, key: &K) -> Option<usize> {
        let hash = self.comparer.hash(key);
        let same_key = |&slot: &usize| self.comparer.equals(&self.groups[slot].key, key);
        self.table.find(hash, same_key).copied()
    }

    pub(crate) fn group(&self, slot: usize) -> Option<&Grouping<K, V>> {
        self.groups.get(slot)
    }

    pub fn get(&self, key: &K) -> Option<&Grouping<K, V>> {
        self.slot(key).map(|slot| &self.groups[slot])
    }

    /// Values for `key`, or an empty slice when the key is absent.
    pub fn get_or_empty(&self, key: &K) -> &[V] {
        self.get(key).map(Grouping::elements).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.slot(key).is_some()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grouping<K, V>> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(Grouping::key)
    }

    pub fn into_groups(self) -> Vec<Grouping<K, V>> {
        self.groups
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Lookup<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Lookup::from_pairs_with(iter, DefaultEquality)
    }
}

impl<K, V, C> IntoIterator for Lookup<K, V, C> {
    type Item = Grouping<K, V>;
    type IntoIter = std::vec::IntoIter<Grouping<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'l, K, V, C> IntoIterator for &'l Lookup<K, V, C> {
    type Item = &'l Grouping<K, V>;
    type IntoIter = std::slice::Iter<'l, Grouping<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Lookup<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.groups.iter().map(|g| (&g.key, &g.elements)))
            .finish()
    }
}
