//
// Copyright (c) 2025 Nathan Fiedler
//

//! An ordered, index-addressable collection whose elements live in a sparse
//! map from position to value rather than in a contiguous buffer.
//!
//! # Holes
//!
//! Assigning or inserting past the end pads the sequence with empty slots
//! ("holes") so that positions `0..len()` always form a contiguous run. A hole
//! reads back as `None` from [`Sequence::get`], while [`Sequence::slot`]
//! distinguishes a hole (`Some(None)`) from a position beyond the end
//! (`None`).
//!
//! # Performance
//!
//! Access, assignment, push and pop are constant time (amortized, given the
//! hashing). Anything that opens or closes a gap before the end (unshift,
//! insert, shift, delete) moves every later element by one position and is
//! therefore linear in the length of the sequence.

use crate::search::RandomAccess;
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Growable sequence backed by a map from position to element.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    /// number of positions in the sequence, holes included
    n: usize,
    /// one entry for every position in 0..n, `None` marks a hole
    slots: HashMap<usize, Option<T>>,
}

impl<T> Sequence<T> {
    /// Return an empty sequence.
    pub fn new() -> Self {
        Self {
            n: 0,
            slots: HashMap::new(),
        }
    }

    /// Return the number of positions in the sequence, including holes.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns true if the sequence has a length of 0.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Retrieve a reference to the element at the given offset, or `None` if
    /// the offset is beyond the end or refers to a hole.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot(index).flatten()
    }

    /// Retrieve the slot at the given offset: `None` beyond the end,
    /// `Some(None)` for a hole, and `Some(Some(value))` otherwise.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn slot(&self, index: usize) -> Option<Option<&T>> {
        if index >= self.n {
            None
        } else {
            self.slots.get(&index).map(Option::as_ref)
        }
    }

    /// Returns a mutable reference to an element, or `None` if the offset is
    /// beyond the end or refers to a hole.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.n {
            None
        } else {
            self.slots.get_mut(&index).and_then(Option::as_mut)
        }
    }

    /// Stores `value` at the given offset and returns the element it
    /// replaced, if any.
    ///
    /// When `index` is at or beyond the end, the positions between the
    /// current end and `index` are filled with holes and the length becomes
    /// `index + 1`.
    ///
    /// # Time complexity
    ///
    /// Constant time when `index <= len()`, otherwise linear in the size of
    /// the gap being filled.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        if index < self.n {
            self.slots.insert(index, Some(value)).flatten()
        } else {
            self.pad_to(index);
            self.push_slot(Some(value));
            None
        }
    }

    /// Appends an element to the back of the sequence.
    ///
    /// # Time complexity
    ///
    /// Constant time (amortized).
    pub fn push(&mut self, value: T) -> &mut Self {
        self.push_slot(Some(value));
        self
    }

    /// Removes the last element from the sequence and returns it, or `None`
    /// if it is empty or the last position is a hole.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn pop(&mut self) -> Option<T> {
        if self.n > 0 {
            self.n -= 1;
            self.slots.remove(&self.n).flatten()
        } else {
            None
        }
    }

    /// Inserts an element at the front, moving every element up by one.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn unshift(&mut self, value: T) -> &mut Self {
        self.shift_up(0, Some(value));
        self
    }

    /// Inserts an element at the given position, moving every element at or
    /// after that position up by one.
    ///
    /// A negative `index` is treated as its absolute value, so `-2` inserts
    /// at position 2 (not two from the end). If the position lies beyond the
    /// end, the gap is first filled with holes.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn insert(&mut self, index: isize, value: T) -> &mut Self {
        let at = index.unsigned_abs();
        self.pad_to(at);
        self.shift_up(at, Some(value));
        self
    }

    /// Removes the first element and returns it, moving every remaining
    /// element down by one. Returns `None` if the sequence is empty or the
    /// first position is a hole.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn shift(&mut self) -> Option<T> {
        self.delete_at(0)
    }

    /// Removes the element at the given position and returns it, moving every
    /// later element down by one. Does nothing and returns `None` when the
    /// position is beyond the end.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn delete_at(&mut self, index: usize) -> Option<T> {
        if index < self.n {
            self.shift_down(index)
        } else {
            None
        }
    }

    /// Returns an iterator over the slots of the sequence, from first to last.
    ///
    /// Holes are yielded as `None`. Each call returns a new, independent
    /// cursor.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            index: 0,
        }
    }

    /// Clears the sequence, removing and dropping all values.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.slots.clear();
        self.n = 0;
    }

    /// Reverses the order of the slots in place by swapping pairs from both
    /// ends toward the middle.
    ///
    /// # Time complexity
    ///
    /// O(n), using constant extra space.
    pub fn reverse_in_place(&mut self) -> &mut Self {
        if self.n < 2 {
            return self;
        }
        let mut low = 0;
        let mut high = self.n - 1;
        while low < high {
            let front = self.slots.remove(&low);
            let back = self.slots.remove(&high);
            if let (Some(front), Some(back)) = (front, back) {
                self.slots.insert(low, back);
                self.slots.insert(high, front);
            }
            low += 1;
            high -= 1;
        }
        self
    }

    /// Pad the sequence with holes until its length is `end`.
    fn pad_to(&mut self, end: usize) {
        if end > self.n {
            debug!("padding {} holes from {} to {end}", end - self.n, self.n);
            while self.n < end {
                self.push_slot(None);
            }
        }
    }

    fn push_slot(&mut self, slot: Option<T>) {
        self.slots.insert(self.n, slot);
        self.n += 1;
    }

    /// Open a gap at position `at` (which must be `<= n`) by moving every
    /// slot from the last down to `at` one position higher, then fill the gap
    /// with `slot`.
    fn shift_up(&mut self, at: usize, slot: Option<T>) {
        trace!("shift_up: moving {} slots to open {at}", self.n - at);
        // highest first so nothing is overwritten before it has been moved
        let mut index = self.n;
        while index > at {
            index -= 1;
            if let Some(moved) = self.slots.remove(&index) {
                self.slots.insert(index + 1, moved);
            }
        }
        self.slots.insert(at, slot);
        self.n += 1;
    }

    /// Remove the slot at position `at` (which must be `< n`) and close the
    /// gap by moving every later slot one position lower, lowest first. The
    /// old highest position ends up vacant.
    fn shift_down(&mut self, at: usize) -> Option<T> {
        trace!("shift_down: moving {} slots to close {at}", self.n - at - 1);
        let removed = self.slots.remove(&at).flatten();
        for index in at + 1..self.n {
            if let Some(moved) = self.slots.remove(&index) {
                self.slots.insert(index - 1, moved);
            }
        }
        self.n -= 1;
        removed
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns the position of the first element equal to `value`, or `None`
    /// if there is no such element. Holes never match.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn find_index(&self, value: &T) -> Option<usize> {
        self.iter().position(|slot| slot == Some(value))
    }

    /// Returns true if an element equal to `value` is present.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn contains(&self, value: &T) -> bool {
        self.find_index(value).is_some()
    }

    /// Removes the first element equal to `value` and returns it, moving
    /// every later element down by one. Does nothing and returns `None` if
    /// there is no such element.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let index = self.find_index(value)?;
        self.shift_down(index)
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a new sequence with the slots of this one in reverse order,
    /// leaving this sequence unchanged.
    ///
    /// # Time complexity
    ///
    /// O(n)
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new();
        for index in (0..self.n).rev() {
            reversed.push_slot(self.slots.get(&index).cloned().flatten());
        }
        reversed
    }
}

impl<T: Ord> Sequence<T> {
    /// Sorts the elements in ascending order; holes sort before all values.
    ///
    /// # Time complexity
    ///
    /// O(n log n)
    pub fn sort_in_place(&mut self) -> &mut Self {
        let mut sorted: Vec<Option<T>> = (0..self.n)
            .map(|index| self.slots.remove(&index).flatten())
            .collect();
        sorted.sort();
        for (index, slot) in sorted.into_iter().enumerate() {
            self.slots.insert(index, slot);
        }
        self
    }
}

impl<T: fmt::Display> Sequence<T> {
    /// Return a human-readable rendering such as `[3, 2, 5, 7, 1]`, with
    /// holes shown as `nil`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, slot) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(value) => write!(f, "{value}")?,
                None => write!(f, "nil")?,
            }
        }
        write!(f, "]")
    }
}

/// Renders a slot by its value, or `nil` for a hole.
struct SlotDebug<'a, T>(Option<&'a T>);

impl<T: fmt::Debug> fmt::Debug for SlotDebug<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Debug::fmt(value, f),
            None => write!(f, "nil"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(SlotDebug)).finish()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.slot(index) {
            Some(Some(item)) => item,
            Some(None) => panic!("empty slot at index: {}", index),
            None => panic!("index out of bounds: {}", index),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.n {
            panic!("index out of bounds: {}", index);
        }
        let Some(item) = self.get_mut(index) else {
            panic!("empty slot at index: {}", index);
        };
        item
    }
}

impl<T> RandomAccess for Sequence<T> {
    type Item = Option<T>;

    fn len(&self) -> usize {
        self.n
    }

    fn at(&self, index: usize) -> &Option<T> {
        let Some(slot) = self.slots.get(&index) else {
            panic!("index out of bounds: {}", index);
        };
        slot
    }
}

impl<A> FromIterator<A> for Sequence<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut seq: Sequence<A> = Sequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Immutable sequence iterator.
pub struct Iter<'a, T> {
    seq: &'a Sequence<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.seq.slot(self.index)?;
        self.index += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.n.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            cursor: 0,
            n: self.n,
            slots: self.slots,
        }
    }
}

/// An iterator that moves out of a sequence, yielding holes as `None`.
pub struct IntoIter<T> {
    /// offset into the sequence
    cursor: usize,
    /// count of slots in the sequence
    n: usize,
    slots: HashMap<usize, Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor < self.n {
            let slot = self.slots.remove(&self.cursor).flatten();
            self.cursor += 1;
            Some(slot)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
