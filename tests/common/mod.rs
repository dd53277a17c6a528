//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use fixedseq::{ErrorKind, Result};
use std::fmt::Debug;

// Re-export canonical fixtures from fixedseq::testing
pub use fixedseq::testing::{FixedArrays, ImmutableLists, Representation, Vecs};

// ============================================================================
// INSTANTIATION
// ============================================================================

/// Instantiate generic suites once per representation.
///
/// Each listed function must be generic over `R: Representation` and take no
/// arguments. The macro emits one `#[test]` per (function, representation).
#[allow(unused_macros)]
macro_rules! for_each_representation {
    ($($suite:ident),* $(,)?) => {
        mod fixed_array {
            $(
                #[test]
                fn $suite() {
                    super::$suite::<$crate::common::FixedArrays>();
                }
            )*
        }

        mod vec {
            $(
                #[test]
                fn $suite() {
                    super::$suite::<$crate::common::Vecs>();
                }
            )*
        }

        mod immutable_list {
            $(
                #[test]
                fn $suite() {
                    super::$suite::<$crate::common::ImmutableLists>();
                }
            )*
        }
    };
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `result` failed with an error of the given class.
#[track_caller]
pub fn assert_kind<T: Debug>(result: Result<T>, kind: ErrorKind) {
    match result {
        Ok(value) => panic!("expected a {kind:?} failure, got Ok({value:?})"),
        Err(err) => assert_eq!(err.kind(), kind, "unexpected error: {err}"),
    }
}

/// Clone borrowed elements out of an operator result.
pub fn owned<'a, T: Clone + 'a>(iter: impl Iterator<Item = &'a T>) -> Vec<T> {
    iter.cloned().collect()
}
