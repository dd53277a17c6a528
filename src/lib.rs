//! Query operators over fixed-length immutable sequences.
//!
//! [`FixedArray`] is an immutable, random-access sequence with shared storage,
//! and [`Slice`] is a borrowed window into one. Every query operator
//! (filtering, projection, aggregation, set algebra, stable ordering,
//! grouping and joins, partitioning, zipping) is a method of the [`Sequence`]
//! trait, implemented once and shared by every representation: `FixedArray`,
//! `Slice`, `Vec` and the persistent [`ImmutableList`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │  index.rs   │   │ compare.rs  │   │ numeric.rs  │
//! │ (Index, ^n, │   │ (equality,  │   │ (checked    │
//! │  Range)     │   │  ordering)  │   │  sum, mean) │
//! └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!        ▼                 ▼                 ▼
//! ┌──────────────────────────────────────────────────┐
//! │          ops/* (one module per family)           │
//! └────────────────────────┬─────────────────────────┘
//!                          ▼
//! ┌──────────────────────────────────────────────────┐
//! │   contract.rs: Sequence (one method / operator)  │
//! └───────┬───────────────┬───────────────┬──────────┘
//!         ▼               ▼               ▼
//!   array/ (FixedArray,  list.rs        Vec<T>
//!          Slice)        (ImmutableList)
//! ```
//!
//! # Evaluation
//!
//! | Returns             | When the work happens                        |
//! |---------------------|----------------------------------------------|
//! | `impl Iterator`     | while iterating; calling again re-runs it    |
//! | `Ordered`           | on first poll (one stable sort)              |
//! | `Result<impl ...>`  | arguments checked now, elements on poll      |
//! | anything else       | before the call returns                      |
//!
//! # Usage
//!
//! ```
//! use fixedseq::prelude::*;
//!
//! let values = FixedArray::new([5, 3, 8, 3, 1]);
//! let sorted: Vec<i32> = values.order().copied().collect();
//! assert_eq!(sorted, vec![1, 3, 3, 5, 8]);
//!
//! assert_eq!(*values.element_at(Index::from_end(1)).unwrap(), 1);
//! assert_eq!(values.sum().unwrap(), 20);
//!
//! let window = values.slice(Range::from(1..4)).unwrap();
//! assert_eq!(window.to_vec(), vec![3, 8, 3]);
//! ```

pub mod array;
pub mod compare;
pub mod contract;
pub mod error;
pub mod grouping;
pub mod index;
pub mod list;
pub mod numeric;
pub mod ops;
pub mod set;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use array::{Chunks, FixedArray, Slice};
pub use compare::{
    CaseInsensitive, Comparer, ComparerFn, DefaultEquality, DefaultOrder, Descending,
    EqualityComparer, EqualityFn, KeyEquality, KeyOrder, Then,
};
pub use contract::Sequence;
pub use error::{ErrorKind, Result, SeqError};
pub use grouping::{Grouping, Lookup};
pub use index::{Index, LongIndex, LongRange, Position, Range, Window};
pub use list::ImmutableList;
pub use numeric::{Nullable, Number};
pub use ops::generate::{empty, range, repeat};
pub use ops::order::{Ordered, OrderedBy, OrderedByDescending, ThenBy};
pub use set::KeyedSet;

/// Everything needed to call operators as methods.
pub mod prelude {
    pub use crate::{
        Comparer, DefaultEquality, DefaultOrder, EqualityComparer, FixedArray, ImmutableList,
        Index, LongIndex, LongRange, Range, SeqError, Sequence, Slice,
    };
}
