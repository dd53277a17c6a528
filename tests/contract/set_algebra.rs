//! distinct, except, intersect, union and their `_by` forms.

use crate::common::{Representation, owned};
use fixedseq::testing::{ModuloEquality, Shape, Square};
use fixedseq::{CaseInsensitive, Sequence};

fn distinct_keeps_first_occurrence<R: Representation>() {
    let values = R::build([1, 2, 2, 3, 1, 4, 3]);
    assert_eq!(owned(values.distinct()), vec![1, 2, 3, 4]);
    assert_eq!(
        owned(R::first_ten().distinct_with(ModuloEquality(3))),
        vec![0, 1, 2]
    );
    assert_eq!(
        owned(R::first_ten().distinct_by(|v| v / 3)),
        vec![0, 3, 6, 9]
    );
    // Keys 0, 2, 4, 6, ... collapse to two classes modulo 4.
    assert_eq!(
        owned(R::first_ten().distinct_by_with(|v| v * 2, ModuloEquality(4))),
        vec![0, 1]
    );
}

fn distinct_is_idempotent<R: Representation>() {
    let values = R::build([5, 1, 5, 2, 1, 9]);
    let once = R::build(values.distinct().copied());
    assert_eq!(owned(once.distinct()), owned(values.distinct()));
}

fn except_removes_and_dedups<R: Representation>() {
    let values = R::build([0, 1, 1, 2, 3, 4, 5, 5]);
    let removed = R::build([2, 4, 6]);
    assert_eq!(owned(values.except(&removed)), vec![0, 1, 3, 5]);
    assert_eq!(owned(values.except(&R::empty())), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(
        owned(values.except_with(&removed, ModuloEquality(2))),
        vec![1]
    );
    assert_eq!(owned(values.except_by([0, 1], |v| v % 3)), vec![2]);
    assert_eq!(
        owned(values.except_by_with([3], |v| *v, ModuloEquality(3))),
        vec![1, 2]
    );
}

fn intersect_yields_each_match_once<R: Representation>() {
    let values = R::build([4, 1, 4, 2, 9, 1]);
    let other = R::build([1, 4, 7, 4]);
    assert_eq!(owned(values.intersect(&other)), vec![4, 1]);
    assert_eq!(owned(values.intersect(&R::empty())), Vec::<i32>::new());
    assert_eq!(
        owned(values.intersect_with(&R::build([11]), ModuloEquality(5))),
        vec![1]
    );
    assert_eq!(owned(values.intersect_by([0], |v| v % 2)), vec![4]);
    assert_eq!(
        owned(values.intersect_by_with([5, 9], |v| *v, ModuloEquality(4))),
        vec![1]
    );
}

fn union_keeps_left_then_right<R: Representation>() {
    let left = R::build([3, 1, 3]);
    let right = R::build([2, 1, 4, 2]);
    assert_eq!(owned(left.union(&right)), vec![3, 1, 2, 4]);
    assert_eq!(
        owned(left.union_with(&right, ModuloEquality(2))),
        vec![3, 2]
    );
    assert_eq!(owned(left.union_by(&right, |v| v / 2)), vec![3, 1, 4]);
    assert_eq!(
        owned(left.union_by_with(&right, |v| *v, ModuloEquality(3))),
        vec![3, 1, 2]
    );
}

fn comparer_merges_distinct_elements<R: Representation>() {
    let left = R::build(["Rust", "go"]);
    let right = R::build(["RUST", "Zig", "GO"]);
    assert_eq!(
        owned(left.union_with(&right, CaseInsensitive)),
        vec!["Rust", "go", "Zig"]
    );
    assert_eq!(
        owned(left.intersect_with(&right, CaseInsensitive)),
        vec!["Rust", "go"]
    );
    assert_eq!(
        owned(right.except_with(&left, CaseInsensitive)),
        vec!["Zig"]
    );
    assert_eq!(
        owned(left.union_with(&right, None::<CaseInsensitive>)).len(),
        5
    );
}

fn derived_elements_join_parent_operands<R: Representation>() {
    let shapes = R::build([
        Shape::new(1, "circle"),
        Shape::new(2, "square"),
        Shape::new(3, "hexagon"),
    ]);
    let squares = R::build([Square::new(2, "square", 4), Square::new(9, "square", 1)]);
    let kept: Vec<i32> = shapes.except(&squares).map(|s| s.id).collect();
    assert_eq!(kept, vec![1, 3]);
    let common: Vec<i32> = shapes.intersect(&squares).map(|s| s.id).collect();
    assert_eq!(common, vec![2]);
    let all: Vec<i32> = shapes.union(&squares).map(|s| s.id).collect();
    assert_eq!(all, vec![1, 2, 3, 9]);
}

for_each_representation!(
    distinct_keeps_first_occurrence,
    distinct_is_idempotent,
    except_removes_and_dedups,
    intersect_yields_each_match_once,
    union_keeps_left_then_right,
    comparer_merges_distinct_elements,
    derived_elements_join_parent_operands,
);
