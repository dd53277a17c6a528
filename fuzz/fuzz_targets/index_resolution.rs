// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index and window resolution.
//!
//! Every read of a `FixedArray` or `Slice` goes through `Position::resolve` or
//! `Window::resolve`. Neither may panic, whatever the magnitudes, and a strict
//! window that resolves must agree with the clamping one.

#![no_main]

use arbitrary::Arbitrary;
use fixedseq::{FixedArray, LongIndex, LongRange, Sequence, Window};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    len: u8,
    start: (u64, bool),
    end: (u64, bool),
}

fuzz_target!(|input: Input| {
    let array = FixedArray::new(0..u32::from(input.len));
    let start = LongIndex::new(input.start.0, input.start.1);
    let end = LongIndex::new(input.end.0, input.end.1);

    // Element access never panics and agrees with the array.
    if let Ok(value) = array.element_at(start) {
        assert_eq!(array.get(start), Some(value));
    } else {
        assert_eq!(array.get(start), None);
    }

    let window = LongRange::new(start, end);
    let clamped = window.clamp(array.len());
    assert!(clamped.start <= clamped.end && clamped.end <= array.len());

    // A strict window that resolves is exactly its clamped form.
    if let Ok(strict) = window.resolve(array.len()) {
        assert_eq!(strict, clamped);
        let view = array.slice(window).expect("resolved window must slice");
        assert_eq!(view.len(), strict.len());
    }

    let taken = array.take_long_range(window).count();
    assert_eq!(taken, clamped.len());
});
