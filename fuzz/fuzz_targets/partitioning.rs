// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for count-based partitioning and chunking.
//!
//! Counts are signed and clamp silently, so no count may panic. Take and skip
//! must split the source cleanly, and chunks must flatten back to it.

#![no_main]

use arbitrary::Arbitrary;
use fixedseq::{FixedArray, Sequence};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<u8>,
    count: isize,
    size: i8,
}

fuzz_target!(|input: Input| {
    let array = FixedArray::from(input.values.clone());

    let mut split: Vec<u8> = array.take(input.count).copied().collect();
    split.extend(array.skip(input.count).copied());
    assert_eq!(split, input.values);

    let mut from_end: Vec<u8> = array.skip_last(input.count).copied().collect();
    from_end.extend(array.take_last(input.count).copied());
    assert_eq!(from_end, input.values);

    let size = isize::from(input.size);
    match Sequence::chunk(&array, size) {
        Ok(chunks) => {
            assert!(size >= 1);
            let flattened: Vec<u8> = chunks.flatten().copied().collect();
            assert_eq!(flattened, input.values);
        }
        Err(_) => assert!(size < 1),
    }
    match array.chunk(size) {
        Ok(views) => assert_eq!(views.map(|view| view.len()).sum::<usize>(), array.len()),
        Err(_) => assert!(size < 1),
    }
});
