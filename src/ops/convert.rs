//! Materializing conversions.
//!
//! These run immediately and copy elements out in source order. The hash-set
//! forms lose order and keep the first of each run of equal elements.

use crate::array::FixedArray;
use crate::compare::EqualityComparer;
use crate::contract::Sequence;
use crate::error::{Result, SeqError};
use crate::list::ImmutableList;
use crate::set::KeyedSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use tracing::trace;

/// `ToArray` and `ToList` alike.
pub fn to_vec<S>(source: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let items: Vec<S::Item> = source.iter().cloned().collect();
    trace!(elements = items.len(), "materialized vec");
    items
}

pub fn to_fixed_array<S>(source: &S) -> FixedArray<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    FixedArray::from(to_vec(source))
}

pub fn to_immutable_list<S>(source: &S) -> ImmutableList<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    source.iter().cloned().collect()
}

pub fn to_hash_set<S>(source: &S) -> HashSet<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Eq + Hash,
{
    source.iter().cloned().collect()
}

pub fn to_hash_set_with<S, C>(source: &S, comparer: C) -> KeyedSet<S::Item, C>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    C: EqualityComparer<S::Item>,
{
    let mut set = KeyedSet::with_comparer(comparer);
    set.extend(source.iter().cloned());
    trace!(elements = set.len(), "materialized hash set");
    set
}

/// A map from `key(item)` to `value(item)`. A repeated key is `DuplicateKey`.
pub fn to_dictionary<'s, S, K, V, F, G>(
    source: &'s S,
    mut key: F,
    mut value: G,
) -> Result<HashMap<K, V>>
where
    S: Sequence + ?Sized,
    K: Eq + Hash,
    F: FnMut(&'s S::Item) -> K,
    G: FnMut(&'s S::Item) -> V,
{
    let mut map = HashMap::with_capacity(source.try_get_non_enumerated_count().unwrap_or(0));
    for item in source.iter() {
        match map.entry(key(item)) {
            Entry::Occupied(_) => return Err(SeqError::DuplicateKey),
            Entry::Vacant(slot) => {
                slot.insert(value(item));
            }
        }
    }
    trace!(entries = map.len(), "materialized dictionary");
    Ok(map)
}
