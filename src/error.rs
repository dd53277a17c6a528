// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything an operator can refuse to do.
//!
//! Failures fall into three classes, and every variant belongs to exactly one:
//!
//! | Kind               | Variants                                                  |
//! |--------------------|-----------------------------------------------------------|
//! | `OutOfRange`       | `IndexOutOfRange`, `RangeOutOfBounds`, `ArgumentOutOfRange` |
//! | `InvalidOperation` | `EmptySequence`, `NoMatch`, `MoreThanOneElement`, `MoreThanOneMatch`, `DuplicateKey` |
//! | `Overflow`         | `Overflow`                                                |
//!
//! None of these are transient. They all mean the caller asked for something the
//! input cannot give, so nothing here is ever retried or swallowed.
//!
//! There is no argument-null class. Selectors, comparers and sequences are taken by
//! value or by reference, and a reference cannot be null. An absent comparer is
//! spelled `None::<C>` and behaves exactly like the default comparer.

use thiserror::Error;

/// Result alias used by every fallible operator.
pub type Result<T> = std::result::Result<T, SeqError>;

/// Error returned by fallible operators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// An element-access index does not resolve inside `[0, length)`.
    #[error("index {index} is out of range for a sequence of length {length}")]
    IndexOutOfRange { index: String, length: usize },

    /// A strict window (slicing) does not fit inside `[0, length]`.
    #[error("range {range} is out of bounds for a sequence of length {length}")]
    RangeOutOfBounds { range: String, length: usize },

    /// A numeric argument is outside its accepted domain (chunk size, repeat count).
    #[error("argument `{argument}` is out of range: {value}")]
    ArgumentOutOfRange { argument: &'static str, value: i64 },

    /// The operator needs at least one element.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// No element satisfied the predicate.
    #[error("sequence contains no matching element")]
    NoMatch,

    /// `single` found a second element.
    #[error("sequence contains more than one element")]
    MoreThanOneElement,

    /// `single_where` found a second match.
    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,

    /// `to_dictionary` met the same key twice.
    #[error("an element with the same key has already been added")]
    DuplicateKey,

    /// Checked integer arithmetic overflowed.
    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

/// Coarse failure class, the unit the verification harness compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OutOfRange,
    InvalidOperation,
    Overflow,
}

impl SeqError {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeqError::IndexOutOfRange { .. }
            | SeqError::RangeOutOfBounds { .. }
            | SeqError::ArgumentOutOfRange { .. } => ErrorKind::OutOfRange,
            SeqError::EmptySequence
            | SeqError::NoMatch
            | SeqError::MoreThanOneElement
            | SeqError::MoreThanOneMatch
            | SeqError::DuplicateKey => ErrorKind::InvalidOperation,
            SeqError::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    pub(crate) fn index(index: impl std::fmt::Display, length: usize) -> Self {
        SeqError::IndexOutOfRange {
            index: index.to_string(),
            length,
        }
    }

    pub(crate) fn range(range: impl std::fmt::Display, length: usize) -> Self {
        SeqError::RangeOutOfBounds {
            range: range.to_string(),
            length,
        }
    }

    pub(crate) fn argument(argument: &'static str, value: i64) -> Self {
        SeqError::ArgumentOutOfRange { argument, value }
    }
}
