//
// Copyright (c) 2025 Nathan Fiedler
//

//! Binary search over sorted, randomly indexable sequences.
//!
//! Two families are provided, each in an iterative and a recursive form that
//! produce identical results for every input:
//!
//! * [`binary_search`] and [`binary_search_recursive`] locate an element equal
//!   to a target value.
//! * [`lower_bound`] and [`lower_bound_recursive`] locate the first element
//!   for which a monotonic predicate holds.
//!
//! The algorithms are written against the [`RandomAccess`] trait rather than
//! any particular container, so slices, arrays, vectors, deques and
//! [`Sequence`](crate::Sequence) can all be searched.
//!
//! Neither family verifies that the input is sorted, nor that the predicate
//! flips from false to true exactly once. Violating either contract yields an
//! unspecified index (or `None`), but the search always terminates.

use log::trace;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// A collection with a known length that supports constant time lookup by a
/// zero-based position.
pub trait RandomAccess {
    /// Type of the elements being searched.
    type Item;

    /// Return the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection has a length of 0.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieve a reference to the element at the given offset.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index` is not less than `len()`; the
    /// search functions never ask for such an index.
    fn at(&self, index: usize) -> &Self::Item;
}

impl<T> RandomAccess for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

/// Returns the index of an element equal to `target` within the sorted
/// sequence, or `None` if there is no such element.
///
/// If several elements compare equal to `target`, any one of their indices
/// may be returned.
///
/// # Time complexity
///
/// O(log n)
///
/// # Examples
///
/// ```
/// use mapseq::binary_search;
///
/// let arr = [1, 2, 3, 5, 7];
/// assert_eq!(binary_search(&arr, &5), Some(3));
/// assert_eq!(binary_search(&arr, &4), None);
/// ```
pub fn binary_search<S>(seq: &S, target: &S::Item) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    if seq.is_empty() {
        return None;
    }
    // the window is [low, high], inclusive at both ends
    let mut low = 0;
    let mut high = seq.len() - 1;
    let mut probes = 0;
    while low <= high {
        let mid = low + (high - low) / 2;
        probes += 1;
        match target.cmp(seq.at(mid)) {
            Ordering::Equal => {
                trace!("binary_search: found at {mid} after {probes} probes");
                return Some(mid);
            }
            Ordering::Less => {
                // high would drop below zero, the window is now empty
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
            Ordering::Greater => low = mid + 1,
        }
    }
    trace!("binary_search: not found after {probes} probes");
    None
}

/// Recursive form of [`binary_search`], returning the same result for every
/// input.
///
/// # Time complexity
///
/// O(log n), with recursion depth bounded by log2(n) + 1.
pub fn binary_search_recursive<S>(seq: &S, target: &S::Item) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    if seq.is_empty() {
        return None;
    }
    let result = search_window(seq, target, 0, seq.len() - 1);
    trace!("binary_search_recursive: {result:?}");
    result
}

fn search_window<S>(seq: &S, target: &S::Item, low: usize, high: usize) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    if high < low {
        return None;
    }
    let mid = low + (high - low) / 2;
    match target.cmp(seq.at(mid)) {
        Ordering::Equal => Some(mid),
        Ordering::Less => {
            let high = mid.checked_sub(1)?;
            search_window(seq, target, low, high)
        }
        Ordering::Greater => search_window(seq, target, mid + 1, high),
    }
}

/// Returns the index of the first element for which `predicate` returns true,
/// or `None` if it returns false for every element.
///
/// The predicate must be false for some (possibly empty) prefix of the
/// sequence and true for the remainder. The predicate is never called for an
/// empty sequence.
///
/// # Time complexity
///
/// O(log n) calls to the predicate.
///
/// # Examples
///
/// ```
/// use mapseq::lower_bound;
///
/// let arr = [1, 2, 4, 4, 8];
/// assert_eq!(lower_bound(&arr, |v| *v >= 3), Some(2));
/// assert_eq!(lower_bound(&arr, |v| *v > 8), None);
/// ```
pub fn lower_bound<S, F>(seq: &S, mut predicate: F) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    let len = seq.len();
    // the window is [left, right), right is one past the end
    let mut left = 0;
    let mut right = len;
    let mut probes = 0;
    while left < right {
        let mid = left + (right - left) / 2;
        probes += 1;
        if predicate(seq.at(mid)) {
            right = mid;
        } else {
            left = mid + 1;
        }
    }
    trace!("lower_bound: settled at {left} of {len} after {probes} probes");
    if left == len { None } else { Some(left) }
}

/// Recursive form of [`lower_bound`], returning the same result for every
/// input.
///
/// # Time complexity
///
/// O(log n) calls to the predicate, with recursion depth of the same order.
pub fn lower_bound_recursive<S, F>(seq: &S, mut predicate: F) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    let len = seq.len();
    let left = bound_window(seq, &mut predicate, 0, len);
    trace!("lower_bound_recursive: settled at {left} of {len}");
    if left == len { None } else { Some(left) }
}

fn bound_window<S, F>(seq: &S, predicate: &mut F, left: usize, right: usize) -> usize
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    if left >= right {
        return left;
    }
    let mid = left + (right - left) / 2;
    if predicate(seq.at(mid)) {
        bound_window(seq, predicate, left, mid)
    } else {
        bound_window(seq, predicate, mid + 1, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_found() {
        let sut = [1, 3, 5, 7, 9, 11, 13];
        for (idx, value) in sut.iter().enumerate() {
            assert_eq!(binary_search(&sut, value), Some(idx));
            assert_eq!(binary_search_recursive(&sut, value), Some(idx));
        }
    }

    #[test]
    fn test_binary_search_missing() {
        let sut = [1, 3, 5, 7, 9, 11, 13];
        for value in [0, 2, 4, 6, 8, 10, 12, 14] {
            assert!(binary_search(&sut, &value).is_none(), "{value} found");
            assert!(binary_search_recursive(&sut, &value).is_none());
        }
    }

    #[test]
    fn test_binary_search_empty() {
        let sut: Vec<i32> = vec![];
        assert!(binary_search(&sut, &1).is_none());
        assert!(binary_search_recursive(&sut, &1).is_none());
    }

    #[test]
    fn test_binary_search_single() {
        let sut = [42];
        assert_eq!(binary_search(&sut, &42), Some(0));
        assert_eq!(binary_search_recursive(&sut, &42), Some(0));
        // less than the only element drives high below zero
        assert!(binary_search(&sut, &41).is_none());
        assert!(binary_search_recursive(&sut, &41).is_none());
        assert!(binary_search(&sut, &43).is_none());
        assert!(binary_search_recursive(&sut, &43).is_none());
    }

    #[test]
    fn test_binary_search_duplicates() {
        let sut = vec![1, 2, 2, 2, 2, 3];
        let idx = binary_search(&sut, &2).unwrap();
        assert_eq!(sut[idx], 2);
        assert_eq!(binary_search_recursive(&sut, &2), Some(idx));
    }

    #[test]
    fn test_binary_search_strings() {
        let inputs = [
            "eight", "five", "four", "nine", "one", "seven", "six", "three", "two",
        ];
        let sut: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        assert_eq!(binary_search(&sut, &"one".to_owned()), Some(4));
        assert_eq!(binary_search_recursive(&sut, &"two".to_owned()), Some(8));
        assert!(binary_search(&sut, &"ten".to_owned()).is_none());
    }

    #[test]
    fn test_binary_search_slice_and_deque() {
        let values: Vec<u32> = (0..100).map(|v| v * 2).collect();
        assert_eq!(binary_search(&values[10..20], &30), Some(5));
        let sut: VecDeque<u32> = values.into_iter().collect();
        assert_eq!(binary_search(&sut, &198), Some(99));
        assert!(binary_search_recursive(&sut, &199).is_none());
    }

    #[test]
    fn test_binary_search_forms_agree() {
        // every sorted sequence of up to 12 elements drawn from a small
        // domain, probing values inside and outside of it
        for len in 0..12usize {
            let sut: Vec<usize> = (0..len).map(|v| v / 2).collect();
            for target in 0..len + 2 {
                assert_eq!(
                    binary_search(&sut, &target),
                    binary_search_recursive(&sut, &target),
                    "len {len} target {target}"
                );
            }
        }
    }

    #[test]
    fn test_lower_bound_basic() {
        let sut = [1, 2, 4, 4, 4, 8, 9];
        assert_eq!(lower_bound(&sut, |v| *v >= 0), Some(0));
        assert_eq!(lower_bound(&sut, |v| *v >= 3), Some(2));
        assert_eq!(lower_bound(&sut, |v| *v >= 4), Some(2));
        assert_eq!(lower_bound(&sut, |v| *v > 4), Some(5));
        assert_eq!(lower_bound(&sut, |v| *v >= 9), Some(6));
        assert!(lower_bound(&sut, |v| *v > 9).is_none());
        assert_eq!(lower_bound_recursive(&sut, |v| *v >= 3), Some(2));
        assert_eq!(lower_bound_recursive(&sut, |v| *v > 4), Some(5));
        assert!(lower_bound_recursive(&sut, |v| *v > 9).is_none());
    }

    #[test]
    fn test_lower_bound_empty_never_calls() {
        let sut: [u8; 0] = [];
        assert!(lower_bound(&sut, |_| panic!("should not be called")).is_none());
        assert!(lower_bound_recursive(&sut, |_| panic!("should not be called")).is_none());
    }

    #[test]
    fn test_lower_bound_counts_probes() {
        let sut: Vec<u32> = (0..1024).collect();
        let mut calls = 0;
        let result = lower_bound(&sut, |v| {
            calls += 1;
            *v >= 700
        });
        assert_eq!(result, Some(700));
        assert_eq!(calls, 10);
        let mut calls = 0;
        let result = lower_bound_recursive(&sut, |v| {
            calls += 1;
            *v >= 700
        });
        assert_eq!(result, Some(700));
        assert_eq!(calls, 10);
    }

    #[test]
    fn test_lower_bound_forms_agree() {
        for len in 0..16usize {
            let sut: Vec<usize> = (0..len).collect();
            for split in 0..=len {
                let expected = if split == len { None } else { Some(split) };
                assert_eq!(lower_bound(&sut, |v| *v >= split), expected);
                assert_eq!(lower_bound_recursive(&sut, |v| *v >= split), expected);
            }
        }
    }

    #[test]
    fn test_lower_bound_non_monotonic_terminates() {
        // the result is unspecified but must be in range or None
        let sut: Vec<u32> = (0..50).collect();
        if let Some(idx) = lower_bound(&sut, |v| v % 3 == 0) {
            assert!(idx < sut.len());
        }
        if let Some(idx) = lower_bound_recursive(&sut, |v| v % 3 == 0) {
            assert!(idx < sut.len());
        }
    }
}
