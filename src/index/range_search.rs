//! Sort-once, binary-search-many range index.
//!
//! The index owns a slice sorted so that, for every query the caller issues,
//! the matcher classifies it as a run of `Less`, then `Equal`, then `Greater`.
//! A query finds the `Equal` run with two binary searches.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use crate::error::{Argument, Error};
use crate::index::Builder;
use crate::index::matcher::Matcher;
use crate::index::result::MatchResult;
use crate::util::search::{end_of_matches, first_match, is_partitioned};

/// A range search index over owned items.
///
/// # Type Parameters
///
/// - `T`: the stored item type.
/// - `U`: the query key type; may be unsized (`str`, `[u8]`).
/// - `M`: the [`Matcher`] classifying items against a query.
///
/// The index never mutates its items after construction, so it can be shared
/// across threads for concurrent queries whenever `T` and `M` are `Sync`.
///
/// # Example
///
/// ```
/// use binrange::RangeSearch;
/// use binrange::index::matcher::prefix;
///
/// let words = vec!["cdef", "ba", "aaa", "bzb", "abc"];
/// let index: RangeSearch<&str, str, _> =
///     RangeSearch::for_unsorted(words, |a, b| a.cmp(b), |w: &&str, p: &str| prefix(*w, p));
///
/// let result = index.find_all_matches("b");
/// assert_eq!(result.range(), 2..4);
/// assert_eq!(result.unsorted(), vec!["ba", "bzb"]);
/// assert_eq!(index.find_all_matches("x").count(), 0);
/// ```
pub struct RangeSearch<T, U: ?Sized, M> {
    items: Vec<T>,
    matcher: M,
    _query: PhantomData<fn(&U)>,
}

impl<T, U, M> RangeSearch<T, U, M>
where
    U: ?Sized,
    M: Matcher<T, U>,
{
    /// Sort `items` with `sort_by` (stable) and build the index.
    ///
    /// Takes ownership of the items; use [`RangeSearch::into_inner`] to get
    /// them back.
    pub fn for_unsorted<C>(items: Vec<T>, sort_by: C, matcher: M) -> Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        Builder::new().build(items, sort_by, matcher)
    }

    /// Build the index over items the caller already sorted.
    ///
    /// The ordering is not checked; queries on a slice that is not
    /// partitioned for the matcher return unspecified ranges.
    pub fn from_sorted(items: Vec<T>, matcher: M) -> Self {
        Self::assemble(items, matcher, false)
    }

    /// Validating form of [`RangeSearch::for_unsorted`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the comparator, the matcher, the
    /// item array or any item is missing. Nothing is built on error.
    pub fn try_for_unsorted<C>(
        items: Option<Vec<Option<T>>>,
        sort_by: Option<C>,
        matcher: Option<M>,
    ) -> Result<Self, Error>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        Builder::new().try_build(items, sort_by, matcher)
    }

    /// Validating form of [`RangeSearch::from_sorted`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the matcher, the item array or
    /// any item is missing.
    pub fn try_from_sorted(
        items: Option<Vec<Option<T>>>,
        matcher: Option<M>,
    ) -> Result<Self, Error> {
        let matcher = matcher.ok_or(Error::InvalidArgument(Argument::Matcher))?;
        let items = collect_items(items)?;
        Ok(Self::from_sorted(items, matcher))
    }

    /// Sort `items` on the rayon pool and build the index.
    #[cfg(feature = "parallel")]
    pub fn for_unsorted_parallel<C>(items: Vec<T>, sort_by: C, matcher: M) -> Self
    where
        T: Send,
        C: Fn(&T, &T) -> Ordering + Sync,
    {
        Builder::new().build_parallel(items, sort_by, matcher)
    }

    pub(crate) fn assemble(items: Vec<T>, matcher: M, sorted: bool) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = items.len(), sorted, "range search index built");
        #[cfg(not(feature = "tracing"))]
        let _ = sorted;

        Self {
            items,
            matcher,
            _query: PhantomData,
        }
    }

    /// Find the contiguous block of items the matcher classifies as `Equal`.
    ///
    /// Runs in O(log n). A query with no match returns an empty result
    /// anchored at position 0.
    pub fn find_all_matches(&self, query: &U) -> MatchResult<'_, T> {
        let classify = |item: &T| self.matcher.classify(item, query);

        let result = match first_match(&self.items, classify) {
            Some(start) => {
                let end = end_of_matches(&self.items, start, classify);
                MatchResult::new(&self.items, start, end)
            }
            None => MatchResult::empty(&self.items),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            start = result.start(),
            end = result.end(),
            "range search query"
        );

        result
    }

    /// Validating form of [`RangeSearch::find_all_matches`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `query` is `None`.
    pub fn try_find_all_matches(&self, query: Option<&U>) -> Result<MatchResult<'_, T>, Error> {
        let query = query.ok_or(Error::InvalidArgument(Argument::Query))?;
        Ok(self.find_all_matches(query))
    }

    /// Check in O(n) that the stored items are partitioned for `query`.
    pub fn is_partitioned_for(&self, query: &U) -> bool {
        is_partitioned(&self.items, |item| self.matcher.classify(item, query))
    }
}

impl<T, U: ?Sized, M> RangeSearch<T, U, M> {
    /// Number of stored items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The stored items in index order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Give the items back, consuming the index.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone, U: ?Sized, M: Clone> Clone for RangeSearch<T, U, M> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            matcher: self.matcher.clone(),
            _query: PhantomData,
        }
    }
}

impl<T: fmt::Debug, U: ?Sized, M> fmt::Debug for RangeSearch<T, U, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSearch")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Unwrap a nullable item array, rejecting the first missing item.
pub(crate) fn collect_items<T>(items: Option<Vec<Option<T>>>) -> Result<Vec<T>, Error> {
    let items = items.ok_or(Error::InvalidArgument(Argument::Items))?;
    items
        .into_iter()
        .enumerate()
        .map(|(pos, item)| item.ok_or(Error::InvalidArgument(Argument::Item(pos))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::matcher::prefix;
    use alloc::vec;

    type StrMatcher = fn(&&'static str, &str) -> Ordering;
    type Bucket = fn(&u32, &u32) -> Ordering;
    type Cmp = fn(&u32, &u32) -> Ordering;

    fn word_matcher(word: &&'static str, p: &str) -> Ordering {
        prefix(*word, p)
    }

    fn bucket(item: &u32, query: &u32) -> Ordering {
        (item / 10).cmp(query)
    }

    fn ascending(a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }

    fn words() -> RangeSearch<&'static str, str, StrMatcher> {
        let items = vec!["cdef", "bzb", "aaa", "ba", "abc"];
        RangeSearch::for_unsorted(items, |a, b| a.cmp(b), word_matcher as StrMatcher)
    }

    fn buckets(items: Vec<u32>) -> RangeSearch<u32, u32, Bucket> {
        RangeSearch::from_sorted(items, bucket as Bucket)
    }

    #[test]
    fn test_prefix_scenario() {
        let index = words();
        assert_eq!(index.as_slice(), &["aaa", "abc", "ba", "bzb", "cdef"]);

        let result = index.find_all_matches("b");
        assert_eq!(result.range(), 2..4);
        assert_eq!(result.count(), 2);

        let mut found = result.unsorted();
        found.sort();
        assert_eq!(found, vec!["ba", "bzb"]);
    }

    #[test]
    fn test_no_match() {
        let index = words();
        let result = index.find_all_matches("x");
        assert_eq!(result.count(), 0);
        assert_eq!(result.range(), 0..0);
        assert!(result.unsorted().is_empty());

        let before_all = index.find_all_matches("0");
        assert_eq!(before_all.range(), 0..0);

        let between = index.find_all_matches("bb");
        assert_eq!(between.count(), 0);
    }

    #[test]
    fn test_first_and_last_blocks() {
        let index = words();
        assert_eq!(index.find_all_matches("a").range(), 0..2);
        assert_eq!(index.find_all_matches("c").range(), 4..5);
        assert_eq!(index.find_all_matches("").range(), 0..5);
    }

    #[test]
    fn test_empty_index() {
        let index = buckets(Vec::new());
        assert!(index.is_empty());

        let result = index.find_all_matches(&3);
        assert_eq!(result.range(), 0..0);
        assert!(result.unsorted().is_empty());
    }

    #[test]
    fn test_single_element() {
        let index = buckets(vec![42]);
        assert_eq!(index.find_all_matches(&4).range(), 0..1);
        assert_eq!(index.find_all_matches(&5).range(), 0..0);
        assert_eq!(index.find_all_matches(&3).range(), 0..0);
    }

    #[test]
    fn test_all_matching() {
        let index = buckets(vec![30, 31, 35, 39]);
        let result = index.find_all_matches(&3);
        assert_eq!(result.range(), 0..4);
        assert_eq!(result.count(), index.len());
    }

    #[test]
    fn test_idempotent() {
        let index: RangeSearch<u32, u32, Bucket> =
            RangeSearch::for_unsorted(vec![5, 17, 11, 3, 25, 14], ascending, bucket as Bucket);

        assert_eq!(index.find_all_matches(&1), index.find_all_matches(&1));
        assert_eq!(index.find_all_matches(&1).unsorted(), vec![11, 14, 17]);
    }

    #[test]
    fn test_is_partitioned_for() {
        let sorted = buckets(vec![1, 12, 15, 31]);
        assert!(sorted.is_partitioned_for(&1));

        let unsorted = buckets(vec![12, 1, 15, 31]);
        assert!(!unsorted.is_partitioned_for(&1));
    }

    #[test]
    fn test_try_for_unsorted() {
        let items = Some(vec![Some(21u32), Some(3), Some(12)]);
        let index = RangeSearch::<u32, u32, Bucket>::try_for_unsorted(
            items,
            Some(ascending as Cmp),
            Some(bucket),
        )
        .unwrap();

        assert_eq!(index.as_slice(), &[3, 12, 21]);
        assert_eq!(index.find_all_matches(&1).unsorted(), vec![12]);
    }

    #[test]
    fn test_try_rejects_missing_arguments() {
        let cmp: Cmp = ascending;

        let err = RangeSearch::<u32, u32, Bucket>::try_for_unsorted(None, Some(cmp), Some(bucket))
            .unwrap_err();
        assert_eq!(err, Error::InvalidArgument(Argument::Items));

        let items = Some(vec![Some(1u32), None, Some(3)]);
        let err = RangeSearch::<u32, u32, Bucket>::try_for_unsorted(items, Some(cmp), Some(bucket))
            .unwrap_err();
        assert_eq!(err, Error::InvalidArgument(Argument::Item(1)));

        let items = Some(vec![Some(1u32)]);
        let err =
            RangeSearch::<u32, u32, Bucket>::try_for_unsorted(items, None::<Cmp>, Some(bucket))
                .unwrap_err();
        assert_eq!(err, Error::InvalidArgument(Argument::Comparator));

        let items = Some(vec![Some(1u32)]);
        let err = RangeSearch::<u32, u32, Bucket>::try_for_unsorted(items, Some(cmp), None)
            .unwrap_err();
        assert_eq!(err, Error::InvalidArgument(Argument::Matcher));
    }

    #[test]
    fn test_try_from_sorted() {
        let index =
            RangeSearch::<u32, u32, Bucket>::try_from_sorted(Some(vec![Some(1), Some(2)]), Some(bucket))
                .unwrap();
        assert_eq!(index.len(), 2);

        let err = RangeSearch::<u32, u32, Bucket>::try_from_sorted(Some(vec![None]), Some(bucket))
            .unwrap_err();
        assert_eq!(err, Error::InvalidArgument(Argument::Item(0)));

        let err = RangeSearch::<u32, u32, Bucket>::try_from_sorted(Some(vec![Some(1)]), None)
            .unwrap_err();
        assert_eq!(err, Error::InvalidArgument(Argument::Matcher));
    }

    #[test]
    fn test_try_find_all_matches() {
        let index = buckets(vec![1, 12, 15, 31]);
        assert_eq!(index.try_find_all_matches(Some(&1)).unwrap().count(), 2);
        assert_eq!(
            index.try_find_all_matches(None).unwrap_err(),
            Error::InvalidArgument(Argument::Query)
        );
    }

    #[test]
    fn test_into_inner() {
        let index: RangeSearch<u32, u32, Bucket> =
            RangeSearch::for_unsorted(vec![3, 1, 2], ascending, bucket as Bucket);
        assert_eq!(index.into_inner(), vec![1, 2, 3]);
    }
}
