//
// Copyright (c) 2025 Nathan Fiedler
//

//! An array-like [`Sequence`] whose elements are stored in a sparse map from
//! position to value, together with binary search routines that work over any
//! randomly indexable, sorted collection.
//!
//! # Sequence
//!
//! [`Sequence`] offers the familiar dynamic array operations (indexed access
//! and assignment, push and pop at the back, shift and unshift at the front,
//! insertion and deletion anywhere, reversal and linear search). The backing
//! store is a `HashMap` rather than a contiguous buffer, and every operation
//! keeps positions `0..len()` occupied with no gaps, so the map behaves like
//! an array from the outside.
//!
//! ```
//! use mapseq::Sequence;
//!
//! let mut seq: Sequence<i32> = Sequence::from([3, 2, 5, 7, 1]);
//! seq.push(9);
//! seq.unshift(15).insert(3, 8);
//! assert_eq!(seq.inspect(), "[15, 3, 2, 8, 5, 7, 1, 9]");
//! assert_eq!(seq.delete_at(4), Some(5));
//! ```
//!
//! # Searching
//!
//! The [`search`] module provides equality and lower-bound binary searches in
//! both iterative and recursive forms, written against the [`RandomAccess`]
//! trait.
//!
//! ```
//! use mapseq::{binary_search, lower_bound, Sequence};
//!
//! let arr = [1, 2, 4, 4, 8];
//! assert_eq!(binary_search(&arr, &8), Some(4));
//! assert_eq!(lower_bound(&arr, |v| *v >= 3), Some(2));
//!
//! // a sequence is searched by slot, where holes sort first
//! let seq: Sequence<i32> = arr.into_iter().collect();
//! assert_eq!(binary_search(&seq, &Some(2)), Some(1));
//! ```
//!
//! # Logging
//!
//! Operations report through the [`log`] facade: the linear time shifting
//! paths and the searches at `trace` level, padding with holes at `debug`
//! level. No logger is installed by this crate.

pub mod search;
pub mod sequence;

pub use search::{
    RandomAccess, binary_search, binary_search_recursive, lower_bound, lower_bound_recursive,
};
pub use sequence::{IntoIter, Iter, Sequence};
