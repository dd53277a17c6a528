//! order, order_by, then_by: stable sorts.

use crate::common::{Representation, owned};
use fixedseq::testing::{AbsoluteOrder, Person, people};
use fixedseq::{CaseInsensitive, Sequence};

fn names<'a>(people: impl Iterator<Item = &'a Person>) -> Vec<&'static str> {
    people.map(|p| p.name).collect()
}

fn order_sorts_ascending_and_descending<R: Representation>() {
    let values = R::build([5, 3, 8, 3, 1]);
    assert_eq!(owned(values.order()), vec![1, 3, 3, 5, 8]);
    assert_eq!(owned(values.order_descending()), vec![8, 5, 3, 3, 1]);
    assert_eq!(owned(R::empty().order()), Vec::<i32>::new());
}

fn equal_keys_keep_source_order<R: Representation>() {
    let people = R::build(people());
    assert_eq!(
        names(people.order_by(|p| p.age)),
        ["Ada", "Edsger", "Alan", "Grace", "Barbara"]
    );
    assert_eq!(
        names(people.order_by_descending(|p| p.age)),
        ["Grace", "Barbara", "Alan", "Ada", "Edsger"]
    );
}

fn comparer_ties_keep_source_order<R: Representation>() {
    let values = R::build([3, -1, -3, 1, 2]);
    assert_eq!(
        owned(values.order_with(AbsoluteOrder)),
        vec![-1, 1, 2, 3, -3]
    );
    assert_eq!(
        owned(values.order_descending_with(AbsoluteOrder)),
        vec![3, -3, 2, -1, 1]
    );
    assert_eq!(
        owned(values.order_by_with(|v| v * 10, AbsoluteOrder)),
        vec![-1, 1, 2, 3, -3]
    );
    assert_eq!(
        owned(values.order_by_descending_with(|v| *v, AbsoluteOrder)),
        vec![3, -3, 2, -1, 1]
    );
}

fn secondary_keys_break_ties<R: Representation>() {
    let people = R::build(people());
    assert_eq!(
        names(people.order_by(|p| p.age).then_by(|p| p.name)),
        ["Ada", "Edsger", "Alan", "Barbara", "Grace"]
    );
    assert_eq!(
        names(people.order_by(|p| p.age).then_by_descending(|p| p.name)),
        ["Edsger", "Ada", "Alan", "Grace", "Barbara"]
    );
    assert_eq!(
        names(
            people
                .order_by_descending(|p| p.age)
                .then_by_with(|p| p.name, CaseInsensitive)
        ),
        ["Barbara", "Grace", "Alan", "Ada", "Edsger"]
    );
    assert_eq!(
        names(
            people
                .order_by(|p| p.name.len())
                .then_by_descending_with(|p| p.age, fixedseq::DefaultOrder)
        ),
        ["Ada", "Alan", "Grace", "Edsger", "Barbara"]
    );
}

fn then_by_after_first_poll_sorts_the_rest<R: Representation>() {
    let values = R::build([(1, 'b'), (0, 'z'), (1, 'a'), (0, 'y')]);
    let mut ordered = values.order_by(|pair| pair.0);
    assert_eq!(ordered.next(), Some(&(0, 'z')));
    let rest: Vec<(i32, char)> = ordered.then_by(|pair| pair.1).copied().collect();
    assert_eq!(rest, vec![(0, 'y'), (1, 'a'), (1, 'b')]);
}

fn ordering_by_string_comparer<R: Representation>() {
    let words = R::build(["banana", "Apple", "cherry", "apple"]);
    assert_eq!(
        owned(words.order()),
        vec!["Apple", "apple", "banana", "cherry"]
    );
    assert_eq!(
        owned(words.order_with(CaseInsensitive)),
        vec!["Apple", "apple", "banana", "cherry"]
    );
    assert_eq!(
        owned(words.order_descending_with(CaseInsensitive)),
        vec!["cherry", "banana", "Apple", "apple"]
    );
}

for_each_representation!(
    order_sorts_ascending_and_descending,
    equal_keys_keep_source_order,
    comparer_ties_keep_source_order,
    secondary_keys_break_ties,
    then_by_after_first_poll_sorts_the_rest,
    ordering_by_string_comparer,
);
