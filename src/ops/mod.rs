// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The operator catalog, one module per family.
//!
//! Every function here takes the source as `&S where S: Sequence` and is
//! reachable as a method through [`Sequence`](crate::Sequence). Operators that
//! return an iterator do no work until it is first polled. Operators that
//! return anything else run to completion before returning.
//!
//! | Module      | Operators                                                        |
//! |-------------|------------------------------------------------------------------|
//! | `aggregate` | aggregate, sum, average, min, max and their keyed forms          |
//! | `quantify`  | all, any, contains, count, long_count                            |
//! | `project`   | filter, select, select_many (plain and indexed)                  |
//! | `set`       | distinct, except, intersect, union (plain and `_by`)             |
//! | `order`     | order, order_by, then_by (stable)                                |
//! | `partition` | skip, take, take_range, `_while`, `_last`, chunk                 |
//! | `group`     | group_by, to_lookup, join, group_join, count_by, aggregate_by    |
//! | `element`   | element_at, first, last, single                                  |
//! | `convert`   | to_vec, to_fixed_array, to_immutable_list, to_hash_set, ...      |
//! | `equality`  | sequence_equal, sequence_hash                                    |
//! | `shape`     | append, prepend, concat, reverse, zip, default_if_empty, index   |
//! | `generate`  | range, repeat, empty                                             |

pub mod aggregate;
pub mod convert;
pub mod element;
pub mod equality;
pub mod generate;
pub mod group;
pub mod order;
pub mod partition;
pub mod project;
pub mod quantify;
pub mod set;
pub mod shape;

use crate::contract::Sequence;

/// Defer `build` until the first call to `next`.
///
/// Operators that must set up state (a hash table over the other operand, the
/// sequence length) put the setup in here so calling them stays free.
#[inline]
pub(crate) fn deferred<I, F>(build: F) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    F: FnOnce() -> I,
{
    std::iter::once_with(build).flatten()
}

/// Length of `source`, enumerating only when the representation cannot say.
#[inline]
pub(crate) fn len_of<S: Sequence + ?Sized>(source: &S) -> usize {
    source
        .try_get_non_enumerated_count()
        .unwrap_or_else(|| source.iter().count())
}
