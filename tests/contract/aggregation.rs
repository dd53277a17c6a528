//! aggregate, sum, average, min, max.

use crate::common::{Representation, assert_kind};
use fixedseq::testing::AbsoluteOrder;
use fixedseq::{ErrorKind, Sequence};

fn sum_and_average_of_first_hundred<R: Representation>() {
    let values = R::first_hundred();
    assert_eq!(values.sum(), Ok(4950), "{}", R::NAME);
    assert_eq!(values.average(), Ok(49.5), "{}", R::NAME);
    assert_eq!(values.sum_by(|v| i64::from(*v) * 2), Ok(9900));
    assert_eq!(values.average_by(|v| f64::from(*v) / 2.0), Ok(24.75));
}

fn nullable_reduction_skips_missing<R: Representation>() {
    let values = R::first_hundred_every_fifth_missing();
    assert_eq!(values.sum_nullable(), Ok(4000));
    assert_eq!(values.average_nullable(), Some(50.0));
    assert_eq!(values.sum_by_nullable(|v| v.map(i64::from)), Ok(4000));
    assert_eq!(
        values.average_by_nullable(|v| v.map(|x| x * 2)),
        Some(100.0)
    );
    assert_eq!(values.min_nullable(), Some(&1));
    assert_eq!(values.max_nullable(), Some(&99));
}

fn all_missing_reduces_to_nothing<R: Representation>() {
    let values = R::all_missing();
    assert_eq!(values.sum_nullable(), Ok(0));
    assert_eq!(values.average_nullable(), None);
    assert_eq!(values.min_nullable(), None);
    assert_eq!(values.max_nullable(), None);
    assert_eq!(values.min_nullable_with(AbsoluteOrder), None);
    assert_eq!(values.max_of_nullable(|v| *v), None);
}

fn empty_input_failures<R: Representation>() {
    let values = R::empty();
    assert_eq!(values.sum(), Ok(0));
    assert_kind(values.average(), ErrorKind::InvalidOperation);
    assert_kind(values.min(), ErrorKind::InvalidOperation);
    assert_kind(values.max_with(AbsoluteOrder), ErrorKind::InvalidOperation);
    assert_kind(values.min_by_key(|v| *v), ErrorKind::InvalidOperation);
    assert_kind(
        values.aggregate(|acc, v| acc + v),
        ErrorKind::InvalidOperation,
    );
    assert_eq!(values.aggregate_seeded(7, |acc, v| acc + v), 7);
}

fn checked_sum_overflows<R: Representation>() {
    let values = R::build([i32::MAX, 1]);
    assert_kind(values.sum(), ErrorKind::Overflow);
    // The mean widens instead.
    let values = R::build([i32::MAX, i32::MAX]);
    assert_eq!(values.average(), Ok(f64::from(i32::MAX)));
}

fn folds_left_to_right<R: Representation>() {
    let digits = R::first_ten();
    assert_eq!(digits.aggregate(|acc, v| acc * 10 + v), Ok(123_456_789));
    let joined = digits.aggregate_seeded(String::new(), |mut acc, v| {
        acc.push_str(&v.to_string());
        acc
    });
    assert_eq!(joined, "0123456789");
    let length = digits.aggregate_seeded_select(Vec::new(), |mut acc, v| {
        acc.push(*v);
        acc
    }, |acc| acc.len());
    assert_eq!(length, 10);
}

fn extremes<R: Representation>() {
    let values = R::first_hundred();
    assert_eq!(values.min(), Ok(&0));
    assert_eq!(values.max(), Ok(&99));
    assert_eq!(values.min_of(|v| v % 7), Ok(0));
    assert_eq!(values.max_of(|v| v % 7), Ok(6));
    assert_eq!(values.min_by_key(|v| (v - 50).abs()), Ok(&50));
}

fn extremes_keep_the_first_tie<R: Representation>() {
    let values = R::build([3, -7, 1, -1, 7, 5]);
    assert_eq!(values.min_with(AbsoluteOrder), Ok(&1));
    assert_eq!(values.max_with(AbsoluteOrder), Ok(&-7));
    assert_eq!(values.max_by_key(|v| v.abs()), Ok(&-7));
    assert_eq!(values.min_by_key_with(|v| *v, AbsoluteOrder), Ok(&1));
    assert_eq!(values.max_of_with(|v| v * 2, AbsoluteOrder), Ok(-14));
}

fn nullable_selectors<R: Representation>() {
    let values = R::first_hundred_every_fifth_missing();
    assert_eq!(values.min_of_nullable(|v| v.map(|x| x * 2)), Some(2));
    assert_eq!(values.max_of_nullable(|v| v.map(|x| x * 2)), Some(198));
    let signed = R::build([Some(-4), None, Some(2), Some(3)]);
    assert_eq!(signed.min_nullable_with(AbsoluteOrder), Some(&2));
    assert_eq!(signed.max_nullable_with(AbsoluteOrder), Some(&-4));
}

for_each_representation!(
    sum_and_average_of_first_hundred,
    nullable_reduction_skips_missing,
    all_missing_reduces_to_nothing,
    empty_input_failures,
    checked_sum_overflows,
    folds_left_to_right,
    extremes,
    extremes_keep_the_first_tie,
    nullable_selectors,
);
