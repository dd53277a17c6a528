// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positions and windows that can be measured from either end.
//!
//! An `Index` is a magnitude plus a flag saying which end it counts from. `^2`
//! (from the end) against a length of 100 is offset 98. `LongIndex` is the same
//! thing with a 64-bit magnitude.
//!
//! A `Range` pairs two of them, start inclusive and end exclusive. Windows
//! resolve under one of two policies, and both live here and nowhere else:
//!
//! - **strict** (`Window::resolve`): `0 <= start <= end <= length` or fail.
//!   Used for slicing.
//! - **clamping** (`Window::clamp`): both endpoints are pulled into `[0, length]`
//!   and an inverted window becomes empty. Used by `take_range`.
//!
//! Element access is stricter still: `Position::resolve` wants an offset in
//! `[0, length)`, so `^0` never resolves.
//!
//! All arithmetic is done in `i128`, so a `u64` magnitude measured against a
//! `usize` length can never wrap.

use crate::error::{Result, SeqError};
use std::fmt;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The one place an index becomes a signed offset.
#[inline]
fn signed_offset(magnitude: u64, from_end: bool, length: usize) -> i128 {
    if from_end {
        length as i128 - i128::from(magnitude)
    } else {
        i128::from(magnitude)
    }
}

/// Anything that can name a single element of a sequence of known length.
pub trait Position: Copy + fmt::Display {
    /// Signed offset from the start. May fall outside the sequence.
    fn offset(self, length: usize) -> i128;

    /// Absolute offset in `[0, length)`, or `None`.
    #[inline]
    fn resolve(self, length: usize) -> Option<usize> {
        let offset = self.offset(length);
        (offset >= 0 && offset < length as i128).then_some(offset as usize)
    }

    /// True when this position needs the length to resolve at all.
    #[inline]
    fn is_from_end(self) -> bool {
        false
    }
}

macro_rules! plain_position {
    ($($ty:ty),*) => {
        $(
            impl Position for $ty {
                #[inline]
                fn offset(self, _length: usize) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

plain_position!(usize, u32, u64, i32, i64, isize);

macro_rules! index_type {
    ($(#[$meta:meta])* $name:ident, $magnitude:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name {
            value: $magnitude,
            from_end: bool,
        }

        impl $name {
            /// The first position.
            pub const START: Self = Self {
                value: 0,
                from_end: false,
            };
            /// One past the last position (`^0`).
            pub const END: Self = Self {
                value: 0,
                from_end: true,
            };

            #[inline]
            pub const fn new(value: $magnitude, from_end: bool) -> Self {
                Self { value, from_end }
            }

            #[inline]
            pub const fn from_start(value: $magnitude) -> Self {
                Self {
                    value,
                    from_end: false,
                }
            }

            /// `^value`.
            #[inline]
            pub const fn from_end(value: $magnitude) -> Self {
                Self {
                    value,
                    from_end: true,
                }
            }

            #[inline]
            pub const fn value(self) -> $magnitude {
                self.value
            }

            #[inline]
            pub const fn is_from_end(self) -> bool {
                self.from_end
            }
        }

        impl Position for $name {
            #[inline]
            fn offset(self, length: usize) -> i128 {
                signed_offset(self.value as u64, self.from_end, length)
            }

            #[inline]
            fn is_from_end(self) -> bool {
                self.from_end
            }
        }

        impl From<$magnitude> for $name {
            fn from(value: $magnitude) -> Self {
                Self::from_start(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.from_end {
                    write!(f, "^{}", self.value)
                } else {
                    write!(f, "{}", self.value)
                }
            }
        }
    };
}

index_type!(
    /// A 32-bit position counted from the start or from the end.
    Index,
    u32
);

index_type!(
    /// A 64-bit position counted from the start or from the end.
    LongIndex,
    u64
);

impl From<Index> for LongIndex {
    fn from(index: Index) -> Self {
        LongIndex::new(u64::from(index.value()), index.is_from_end())
    }
}

/// A sub-window that resolves against a length.
pub trait Window: Copy + fmt::Display {
    /// Signed `(start, end)` offsets, each resolved independently.
    fn bounds(self, length: usize) -> (i128, i128);

    /// Strict resolution: fails unless `0 <= start <= end <= length`.
    fn resolve(self, length: usize) -> Result<ops::Range<usize>> {
        let (start, end) = self.bounds(length);
        if start >= 0 && start <= end && end <= length as i128 {
            Ok(start as usize..end as usize)
        } else {
            Err(SeqError::range(self, length))
        }
    }

    /// Clamping resolution: `[max(0, start), min(length, end))`, never fails.
    fn clamp(self, length: usize) -> ops::Range<usize> {
        let (start, end) = self.bounds(length);
        let limit = length as i128;
        let start = start.clamp(0, limit);
        let end = end.clamp(0, limit).max(start);
        start as usize..end as usize
    }
}

macro_rules! range_type {
    ($(#[$meta:meta])* $name:ident, $index:ident, $magnitude:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name {
            pub start: $index,
            pub end: $index,
        }

        impl $name {
            #[inline]
            pub const fn new(start: $index, end: $index) -> Self {
                Self { start, end }
            }

            /// `..`: the whole sequence.
            #[inline]
            pub const fn all() -> Self {
                Self::new($index::START, $index::END)
            }

            /// `start..`
            #[inline]
            pub const fn starting_at(start: $index) -> Self {
                Self::new(start, $index::END)
            }

            /// `..end`
            #[inline]
            pub const fn ending_at(end: $index) -> Self {
                Self::new($index::START, end)
            }
        }

        impl Window for $name {
            #[inline]
            fn bounds(self, length: usize) -> (i128, i128) {
                (self.start.offset(length), self.end.offset(length))
            }
        }

        impl From<ops::Range<$magnitude>> for $name {
            fn from(range: ops::Range<$magnitude>) -> Self {
                Self::new(
                    $index::from_start(range.start),
                    $index::from_start(range.end),
                )
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}..{}", self.start, self.end)
            }
        }
    };
}

range_type!(
    /// A window between two 32-bit positions.
    Range,
    Index,
    u32
);

range_type!(
    /// A window between two 64-bit positions.
    LongRange,
    LongIndex,
    u64
);

impl From<Range> for LongRange {
    fn from(range: Range) -> Self {
        LongRange::new(range.start.into(), range.end.into())
    }
}

/// Plain `start..end` offsets from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offsets(pub usize, pub usize);

impl Window for Offsets {
    fn bounds(self, _length: usize) -> (i128, i128) {
        (self.0 as i128, self.1 as i128)
    }
}

impl fmt::Display for Offsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.0, self.1)
    }
}
