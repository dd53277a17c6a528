//! all, any, contains, count.

use crate::common::Representation;
use fixedseq::testing::ModuloEquality;
use fixedseq::{CaseInsensitive, Sequence};

fn all_is_vacuously_true<R: Representation>() {
    assert!(R::empty().all(|_| false));
    assert!(R::first_ten().all(|v| *v < 10));
    assert!(!R::first_ten().all(|v| *v < 9));
}

fn any_and_contains<R: Representation>() {
    let values = R::first_ten();
    assert!(values.any());
    assert!(!R::empty().any());
    assert!(values.any_where(|v| *v == 9));
    assert!(!values.any_where(|v| *v > 9));
    assert!(values.contains(&3));
    assert!(!values.contains(&10));
    assert!(values.contains_with(&13, ModuloEquality(10)));
    assert!(!R::empty().contains_with(&0, ModuloEquality(10)));
}

fn contains_with_string_comparer<R: Representation>() {
    let words = R::build(["alpha", "Beta"]);
    assert!(!words.contains(&"beta"));
    assert!(words.contains_with(&"beta", CaseInsensitive));
    assert!(words.contains_with(&"beta", None::<CaseInsensitive>) == words.contains(&"beta"));
}

fn counts<R: Representation>() {
    let values = R::first_hundred();
    assert_eq!(values.count(), 100);
    assert_eq!(values.long_count(), 100);
    assert_eq!(values.count_where(|v| v % 3 == 0), 34);
    assert_eq!(values.long_count_where(|v| *v >= 90), 10);
    assert_eq!(R::empty().count(), 0);
}

fn counts_are_known_without_enumerating<R: Representation>() {
    assert_eq!(R::first_hundred().try_get_non_enumerated_count(), Some(100));
    assert_eq!(R::empty().try_get_non_enumerated_count(), Some(0));
}

fn quantifiers_short_circuit<R: Representation>() {
    let values = R::first_hundred();
    let mut tested = 0;
    assert!(values.any_where(|v| {
        tested += 1;
        *v == 4
    }));
    assert_eq!(tested, 5);

    tested = 0;
    assert!(!values.all(|v| {
        tested += 1;
        *v < 2
    }));
    assert_eq!(tested, 3);
}

for_each_representation!(
    all_is_vacuously_true,
    any_and_contains,
    contains_with_string_comparer,
    counts,
    counts_are_known_without_enumerating,
    quantifiers_short_circuit,
);
