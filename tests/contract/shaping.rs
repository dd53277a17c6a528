//! append, prepend, concat, reverse, default_if_empty, zip, index, generators.

use crate::common::{Representation, assert_kind, owned};
use fixedseq::testing::{Shape, Square};
use fixedseq::{ErrorKind, Sequence};

fn append_and_prepend<R: Representation>() {
    let values = R::build([1, 2]);
    assert_eq!(owned(values.append(&3)), vec![1, 2, 3]);
    assert_eq!(owned(values.prepend(&0)), vec![0, 1, 2]);
    assert_eq!(owned(R::empty().append(&5)), vec![5]);
}

fn concat_keeps_both_orders<R: Representation>() {
    let left = R::build([3, 1]);
    let right = R::build([1, 2]);
    assert_eq!(owned(left.concat(&right)), vec![3, 1, 1, 2]);
    assert_eq!(owned(R::empty().concat(&right)), vec![1, 2]);

    let shapes = R::build([Shape::new(1, "circle")]);
    let squares = R::build([Square::new(2, "square", 5)]);
    let ids: Vec<i32> = shapes.concat(&squares).map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

fn reverse_runs_back_to_front<R: Representation>() {
    assert_eq!(
        owned(R::first_ten().reverse()),
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]
    );
    assert_eq!(owned(R::empty().reverse()), Vec::<i32>::new());
}

fn default_if_empty_fills_only_empty_input<R: Representation>() {
    assert_eq!(owned(R::empty().default_if_empty(&-1)), vec![-1]);
    assert_eq!(owned(R::build([4]).default_if_empty(&-1)), vec![4]);
    // Missing values are still elements.
    assert_eq!(R::all_missing().default_if_empty(&Some(1)).count(), 100);
}

fn zips_stop_at_the_shortest<R: Representation>() {
    let numbers = R::build([1, 2, 3]);
    let letters = R::build(['a', 'b']);
    let pairs: Vec<(i32, char)> = numbers.zip(&letters).map(|(n, c)| (*n, *c)).collect();
    assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);

    let flags = R::build([true, false, true, true]);
    let triples: Vec<(i32, char, bool)> = numbers
        .zip3(&letters, &flags)
        .map(|(n, c, f)| (*n, *c, *f))
        .collect();
    assert_eq!(triples, vec![(1, 'a', true), (2, 'b', false)]);

    let tens = R::build([10, 20, 30, 40]);
    let sums: Vec<i32> = numbers.zip_with(&tens, |a, b| a + b).collect();
    assert_eq!(sums, vec![11, 22, 33]);
    assert_eq!(numbers.zip(&R::empty()).count(), 0);
}

fn index_pairs_positions<R: Representation>() {
    let values = R::build(['x', 'y', 'z']);
    let indexed: Vec<(usize, char)> = values.index().map(|(i, c)| (i, *c)).collect();
    assert_eq!(indexed, vec![(0, 'x'), (1, 'y'), (2, 'z')]);
}

fn generators<R: Representation>() {
    let counted = R::build(fixedseq::range(5, 4).unwrap());
    assert_eq!(counted.to_vec(), vec![5, 6, 7, 8]);
    assert_eq!(R::build(fixedseq::range(0, 0).unwrap()).count(), 0);
    assert_kind(
        fixedseq::range(0, -1).map(Iterator::count),
        ErrorKind::OutOfRange,
    );
    assert_kind(
        fixedseq::range(i32::MAX, 2).map(Iterator::count),
        ErrorKind::OutOfRange,
    );

    let repeated = R::build(fixedseq::repeat("ab", 3).unwrap());
    assert_eq!(repeated.to_vec(), vec!["ab", "ab", "ab"]);
    assert_kind(
        fixedseq::repeat(1, -2).map(Iterator::count),
        ErrorKind::OutOfRange,
    );
    assert!(R::build(fixedseq::empty::<i32>()).sequence_equal(&R::empty()));
}

for_each_representation!(
    append_and_prepend,
    concat_keeps_both_orders,
    reverse_runs_back_to_front,
    default_if_empty_fills_only_empty_input,
    zips_stop_at_the_shortest,
    index_pairs_positions,
    generators,
);
