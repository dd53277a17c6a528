//! Deferred operators do no work until polled and redo it when called again.

use crate::common::Representation;
use fixedseq::Sequence;
use fixedseq::testing::PullCounter;

fn deferred_operators_pull_nothing<R: Representation>() {
    let counter = PullCounter::new(R::first_ten());
    let other = PullCounter::new(R::build([1, 2]));
    let _filtered = counter.filter(|v| *v > 2);
    let _selected = counter.select(|v| v * 2);
    let _ordered = counter.order_by(|v| -v);
    let _reversed = counter.reverse();
    let _grouped = counter.group_by(|v| v % 2);
    let _joined = counter.join(&other, |v| *v, |v| *v, |a, b| a + b);
    let _trailing = counter.take_last(2);
    let _excepted = counter.except(&other);
    let _chunks = counter.chunk(3);
    let _counted = counter.count_by(|v| v % 3);
    assert_eq!(counter.pulled(), 0);
    assert_eq!(other.pulled(), 0);
}

fn polling_pulls_only_what_it_needs<R: Representation>() {
    let counter = PullCounter::new(R::first_hundred());
    assert_eq!(counter.filter(|v| *v > 4).next(), Some(&5));
    assert_eq!(counter.pulled(), 6);

    counter.reset();
    assert_eq!(counter.take(3).count(), 3);
    assert_eq!(counter.pulled(), 3);

    counter.reset();
    assert_eq!(counter.take_while(|v| *v < 2).count(), 2);
    assert_eq!(counter.pulled(), 3);
}

fn calling_again_reruns_the_pipeline<R: Representation>() {
    let counter = PullCounter::new(R::first_ten());
    let evens = || counter.filter(|v| v % 2 == 0).count();
    assert_eq!(evens(), 5);
    assert_eq!(evens(), 5);
    assert_eq!(counter.pulled(), 20);
}

fn known_counts_skip_enumeration<R: Representation>() {
    let counter = PullCounter::new(R::first_hundred());
    assert_eq!(counter.count(), 100);
    assert_eq!(counter.long_count(), 100);
    assert!(counter.any());
    assert_eq!(counter.try_get_non_enumerated_count(), Some(100));
    assert_eq!(counter.pulled(), 0);
}

fn immediate_operators_run_before_returning<R: Representation>() {
    let counter = PullCounter::new(R::first_ten());
    let lookup = counter.to_lookup(|v| v % 3);
    assert_eq!(counter.pulled(), 10);
    assert_eq!(lookup.len(), 3);

    counter.reset();
    assert_eq!(counter.sum(), Ok(45));
    assert_eq!(counter.pulled(), 10);
}

fn fallible_operators_fail_before_enumerating<R: Representation>() {
    let counter = PullCounter::new(R::first_ten());
    assert!(counter.chunk(0).is_err());
    assert_eq!(counter.pulled(), 0);
}

for_each_representation!(
    deferred_operators_pull_nothing,
    polling_pulls_only_what_it_needs,
    calling_again_reruns_the_pipeline,
    known_counts_skip_enumeration,
    immediate_operators_run_before_returning,
    fallible_operators_fail_before_enumerating,
);
