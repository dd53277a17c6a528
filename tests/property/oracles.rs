//! Reference oracles for differential testing.
//!
//! Each oracle is written directly against `std` with no cleverness, so when an
//! operator and its oracle disagree the oracle is right.

use std::collections::HashSet;
use std::hash::Hash;

// =============================================================================
// SET ALGEBRA
// =============================================================================

/// First occurrence of each value, in source order.
pub fn oracle_distinct<T: Clone + Eq + Hash>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|v| seen.insert((*v).clone()))
        .cloned()
        .collect()
}

pub fn oracle_union<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    let both: Vec<T> = left.iter().chain(right).cloned().collect();
    oracle_distinct(&both)
}

/// Distinct values of `left` that also occur in `right`.
pub fn oracle_intersect<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    oracle_distinct(left)
        .into_iter()
        .filter(|v| right.contains(v))
        .collect()
}

/// Distinct values of `left` that never occur in `right`.
pub fn oracle_except<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    oracle_distinct(left)
        .into_iter()
        .filter(|v| !right.contains(v))
        .collect()
}

// =============================================================================
// PARTITIONING
// =============================================================================

/// Negative counts behave like zero; counts past the end take everything.
fn clamp_count(count: isize, len: usize) -> usize {
    count.clamp(0, len as isize) as usize
}

pub fn oracle_take<T: Clone>(values: &[T], count: isize) -> Vec<T> {
    values[..clamp_count(count, values.len())].to_vec()
}

pub fn oracle_skip<T: Clone>(values: &[T], count: isize) -> Vec<T> {
    values[clamp_count(count, values.len())..].to_vec()
}

pub fn oracle_take_last<T: Clone>(values: &[T], count: isize) -> Vec<T> {
    values[values.len() - clamp_count(count, values.len())..].to_vec()
}

pub fn oracle_skip_last<T: Clone>(values: &[T], count: isize) -> Vec<T> {
    values[..values.len() - clamp_count(count, values.len())].to_vec()
}

/// `[start, end)` with each endpoint given as (magnitude, from_end), clamped.
pub fn oracle_take_range<T: Clone>(values: &[T], start: (u32, bool), end: (u32, bool)) -> Vec<T> {
    let len = values.len() as i64;
    let offset = |(value, from_end): (u32, bool)| {
        let value = i64::from(value);
        let raw = if from_end { len - value } else { value };
        raw.clamp(0, len) as usize
    };
    let (start, end) = (offset(start), offset(end));
    if start >= end {
        Vec::new()
    } else {
        values[start..end].to_vec()
    }
}

/// Offset of an element position, or `None` when it names no element.
pub fn oracle_position(len: usize, value: u32, from_end: bool) -> Option<usize> {
    let value = value as usize;
    if from_end {
        (value >= 1 && value <= len).then(|| len - value)
    } else {
        (value < len).then_some(value)
    }
}

// =============================================================================
// ORDERING AND GROUPING
// =============================================================================

/// `std`'s `sort_by_key` is stable, which is exactly the contract.
pub fn oracle_order_by<T: Clone, K: Ord>(values: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| key(v));
    sorted
}

/// Groups in first-seen key order, members in source order.
pub fn oracle_group_by<T: Clone, K: Eq>(values: &[T], key: impl Fn(&T) -> K) -> Vec<(K, Vec<T>)> {
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for value in values {
        let k = key(value);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(value.clone()),
            None => groups.push((k, vec![value.clone()])),
        }
    }
    groups
}

// =============================================================================
// AGGREGATION
// =============================================================================

/// `None` on overflow.
pub fn oracle_checked_sum(values: &[i32]) -> Option<i32> {
    values.iter().try_fold(0i32, |acc, v| acc.checked_add(*v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracles_agree_with_hand_examples() {
        assert_eq!(oracle_distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(oracle_intersect(&[1, 2, 2, 3], &[2, 3, 4]), vec![2, 3]);
        assert_eq!(oracle_except(&[1, 2, 2, 3], &[3]), vec![1, 2]);
        assert_eq!(
            oracle_take_range(&[0, 1, 2, 3], (1, false), (1, true)),
            vec![1, 2]
        );
        assert_eq!(oracle_position(10, 1, true), Some(9));
        assert_eq!(oracle_position(10, 0, true), None);
        assert_eq!(oracle_checked_sum(&[i32::MAX, 1]), None);
    }
}
