//! sequence_equal and the structural hash.

use crate::common::Representation;
use fixedseq::testing::{ModuloEquality, Shape, Square};
use fixedseq::{CaseInsensitive, FixedArray, ImmutableList, Sequence};

fn sequence_equal_is_reflexive_and_symmetric<R: Representation>() {
    let a = R::first_ten();
    let b = R::build(0..10);
    assert!(a.sequence_equal(&a));
    assert!(a.sequence_equal(&b) && b.sequence_equal(&a));
    assert!(R::empty().sequence_equal(&R::empty()));
}

fn sequence_equal_short_circuits<R: Representation>() {
    let a = R::first_ten();
    assert!(!a.sequence_equal(&R::build(0..9)));
    assert!(!a.sequence_equal(&R::build(0..11)));
    assert!(!a.sequence_equal(&R::build([0, 1, 2, 99, 4, 5, 6, 7, 8, 9])));
}

fn sequence_equal_across_representations<R: Representation>() {
    let values = R::first_ten();
    assert!(values.sequence_equal(&FixedArray::new(0..10)));
    assert!(values.sequence_equal(&(0..10).collect::<Vec<i32>>()));
    assert!(values.sequence_equal(&(0..10).collect::<ImmutableList<i32>>()));
}

fn sequence_equal_with_comparer<R: Representation>() {
    let a = R::build([1, 12, 23]);
    let b = R::build([31, 2, 3]);
    assert!(!a.sequence_equal(&b));
    assert!(a.sequence_equal_with(&b, ModuloEquality(10)));
    assert!(a.sequence_equal_with(&a, None::<ModuloEquality>));

    let words = R::build(["Rust", "go"]);
    assert!(words.sequence_equal_with(&R::build(["RUST", "GO"]), CaseInsensitive));
}

fn equal_sequences_hash_equal<R: Representation>() {
    let a = R::first_hundred();
    let b = R::build(0..100);
    assert_eq!(a.sequence_hash(), b.sequence_hash());
    assert_ne!(a.sequence_hash(), R::build(1..101).sequence_hash());
    // Hash agrees with the representation-independent value.
    assert_eq!(
        a.sequence_hash(),
        (0..100).collect::<Vec<i32>>().sequence_hash()
    );

    let x = R::build([1, 12, 23]);
    let y = R::build([31, 2, 3]);
    assert_eq!(
        x.sequence_hash_with(ModuloEquality(10)),
        y.sequence_hash_with(ModuloEquality(10))
    );
}

fn derived_elements_compare_as_parents<R: Representation>() {
    let shapes = R::build([Shape::new(1, "square"), Shape::new(2, "square")]);
    let squares = R::build([Square::new(1, "square", 3), Square::new(2, "square", 8)]);
    assert!(shapes.sequence_equal(&squares));
    assert!(!shapes.sequence_equal(&R::build([Square::new(1, "square", 3)])));
}

for_each_representation!(
    sequence_equal_is_reflexive_and_symmetric,
    sequence_equal_short_circuits,
    sequence_equal_across_representations,
    sequence_equal_with_comparer,
    equal_sequences_hash_equal,
    derived_elements_compare_as_parents,
);
