//! The matched block returned by a range search query.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Range;
use core::slice;

/// A read-only view of the contiguous block of items matching one query.
///
/// The view borrows the index's backing slice and delimits `[start, end)`.
/// Items are in the order the index was sorted in, which is not a relevance
/// ranking; use [`MatchResult::sorted_by`] or [`MatchResult::top_by`] for that.
pub struct MatchResult<'a, T> {
    items: &'a [T],
    start: usize,
    end: usize,
}

impl<'a, T> MatchResult<'a, T> {
    #[inline]
    pub(crate) fn new(items: &'a [T], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= items.len(), "invalid match range");
        Self { items, start, end }
    }

    #[inline]
    pub(crate) fn empty(items: &'a [T]) -> Self {
        Self::new(items, 0, 0)
    }

    /// Number of matched items.
    #[inline]
    pub fn count(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// First matched position in the backing slice (inclusive).
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last matched position (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched items, borrowed from the index.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.items[self.start..self.end]
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Copy the matched items into a new vector, in backing order.
    pub fn unsorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Copy the matched items and stable-sort the copy with `cmp`.
    pub fn sorted_by<C>(&self, cmp: C) -> Vec<T>
    where
        T: Clone,
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut out = self.unsorted();
        out.sort_by(cmp);
        out
    }

    /// The `k` smallest matched items under `cmp`, in order.
    ///
    /// Selection is O(count) before sorting only the kept items.
    pub fn top_by<C>(&self, k: usize, mut cmp: C) -> Vec<T>
    where
        T: Clone,
        C: FnMut(&T, &T) -> Ordering,
    {
        if k == 0 {
            return Vec::new();
        }

        let mut out = self.unsorted();
        if k < out.len() {
            out.select_nth_unstable_by(k - 1, &mut cmp);
            out.truncate(k);
        }
        out.sort_by(cmp);
        out
    }
}

impl<T> Clone for MatchResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatchResult<'_, T> {}

impl<T: PartialEq> PartialEq for MatchResult<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for MatchResult<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for MatchResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchResult")
            .field("range", &self.range())
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<'a, T> IntoIterator for MatchResult<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
