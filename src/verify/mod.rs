// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts.
//!
//! Every structural invariant the operators rely on (slice bounds, stable
//! ordering, chunk shape, comparer/hash agreement) has a check here. The checks
//! are `debug_assert!`s: free in release builds, loud in tests.
//!
//! The type system already carries most of the load. A `Slice` can only be
//! built through a resolved window, and a `FixedArray` has no `&mut` API at all.
//! The contracts catch the algorithmic mistakes the types cannot.

pub mod contracts;
