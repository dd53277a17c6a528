//! FixedArray storage semantics and Slice views.

use crate::common::{assert_kind, owned};
use fixedseq::{ErrorKind, FixedArray, Index, Range, SeqError, Sequence, Slice};

fn digits() -> FixedArray<i32> {
    FixedArray::new(0..10)
}

#[test]
fn test_clone_shares_storage() {
    let array = digits();
    let copy = array.clone();
    assert!(copy.same_storage(&array));
    assert_eq!(copy, array);
    // Equal contents in separate storage are not the same array.
    assert_ne!(digits(), array);
    assert!(digits().sequence_equal(&array));
}

#[test]
fn test_direct_access() {
    let array = digits();
    assert_eq!(array[3], 3);
    assert_eq!(array.get(Index::from_end(1)), Some(&9));
    assert_eq!(array.get(10usize), None);
    assert_kind(array.at(Index::END), ErrorKind::OutOfRange);
    assert_eq!(FixedArray::<u8>::empty().len(), 0);
    assert_eq!(FixedArray::from([1, 2]).as_slice().items(), &[1, 2]);
}

#[test]
fn test_slicing_is_strict_and_never_copies() {
    let array = digits();
    let window = array.slice(Range::from(2..5)).unwrap();
    assert_eq!(window.len(), 3);
    assert_eq!(window.offset(), 2);
    assert!(window.parent().same_storage(&array));
    assert_eq!(window.items(), &[2, 3, 4]);

    assert_kind(array.slice(Range::from(5..11)), ErrorKind::OutOfRange);
    assert_kind(array.slice(Range::from(6..5)), ErrorKind::OutOfRange);
    let too_long = Range::new(Index::from_end(11), Index::END);
    let err = array.slice(too_long).unwrap_err();
    assert_eq!(
        err,
        SeqError::RangeOutOfBounds {
            range: "^11..^0".into(),
            length: 10,
        }
    );
    // An empty window at the very end is in bounds.
    assert!(array.slice(Range::from(10..10)).unwrap().is_empty());
    let at_end = Range::new(Index::END, Index::END);
    assert!(array.slice(at_end).unwrap().is_empty());
    assert!(array.slice(Range::from(3..3)).unwrap().is_empty());
}

#[test]
fn test_slice_of_slice_is_relative() {
    let array = digits();
    let outer = array.slice(Range::from(3..9)).unwrap();
    let trimmed = Range::new(Index::from_start(1), Index::from_end(1));
    let inner = outer.slice(trimmed).unwrap();
    assert_eq!(inner.offset(), 4);
    assert_eq!(owned(inner.iter()), vec![4, 5, 6, 7]);
    assert_kind(outer.slice(Range::from(0..7)), ErrorKind::OutOfRange);
    assert_eq!(inner.get(Index::from_end(1)), Some(&7));
    assert_kind(inner.at(4usize), ErrorKind::OutOfRange);
}

#[test]
fn test_slice_identity() {
    let array = digits();
    let a = array.slice(Range::from(1..4)).unwrap();
    let b = array.as_slice().slice(Range::from(1..4)).unwrap();
    assert_eq!(a, b);
    let other = digits();
    assert_ne!(a, other.slice(Range::from(1..4)).unwrap());
    assert_ne!(a, array.slice(Range::from(1..3)).unwrap());
}

#[test]
fn test_inherent_chunk_yields_views() {
    let array = digits();
    let chunks: Vec<Slice<'_, i32>> = array.chunk(3).unwrap().collect();
    let shape: Vec<(usize, usize)> = chunks.iter().map(|c| (c.offset(), c.len())).collect();
    assert_eq!(shape, vec![(0, 3), (3, 3), (6, 3), (9, 1)]);
    assert!(chunks.iter().all(|c| c.parent().same_storage(&array)));
    assert_eq!(array.chunk(4).unwrap().len(), 3);
    assert_kind(array.chunk(0).map(|c| c.count()), ErrorKind::OutOfRange);

    let window = array.slice(Range::from(1..8)).unwrap();
    let inner: Vec<Vec<i32>> = window
        .chunk(5)
        .unwrap()
        .map(|c| c.iter().copied().collect())
        .collect();
    assert_eq!(inner, vec![vec![1, 2, 3, 4, 5], vec![6, 7]]);
}

#[test]
fn test_generic_chunk_yields_vecs() {
    let array = digits();
    let chunks: Vec<Vec<&i32>> = Sequence::chunk(&array, 4).unwrap().collect();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[2], vec![&8, &9]);
}

#[test]
fn test_operators_run_over_slices() {
    let array = FixedArray::new(0..100);
    let last_ten = Range::starting_at(Index::from_end(10));
    let tail = array.slice(last_ten).unwrap();
    assert_eq!(tail.try_get_non_enumerated_count(), Some(10));
    assert_eq!(tail.sum(), Ok(945));
    assert_eq!(tail.element_at(Index::from_end(1)), Ok(&99));
    assert_eq!(tail.element_at(0), Ok(&90));
    assert_kind(tail.element_at(10), ErrorKind::OutOfRange);
    assert_eq!(tail.first(), Ok(&90));
    assert_eq!(tail.last(), Ok(&99));
    assert_eq!(owned(tail.filter(|v| *v % 4 == 0)), vec![92, 96]);
    assert_eq!(owned(Sequence::reverse(&tail).take(2)), vec![99, 98]);
    assert_eq!(owned(tail.take_range(Range::from(8..20))), vec![98, 99]);
    assert!(tail.sequence_equal(&(90..100).collect::<Vec<i32>>()));
}

#[test]
fn test_to_fixed_array_copies_the_view() {
    let array = digits();
    let window = array.slice(Range::from(7..10)).unwrap();
    let copied = window.to_fixed_array();
    assert!(!copied.same_storage(&array));
    assert_eq!(copied.len(), 3);
    assert!(copied.sequence_equal(&window));
    assert!(Sequence::to_fixed_array(&window).sequence_equal(&copied));
}

#[test]
fn test_arrays_from_other_shapes() {
    let from_vec = FixedArray::from(vec!['a', 'b']);
    let from_slice = FixedArray::from(&['a', 'b'][..]);
    let collected: FixedArray<char> = "ab".chars().collect();
    assert!(from_vec.sequence_equal(&from_slice));
    assert!(from_slice.sequence_equal(&collected));
    let total: i32 = (&FixedArray::new([1, 2, 3])).into_iter().sum();
    assert_eq!(total, 6);
}
