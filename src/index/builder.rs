use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::{Argument, Error};
use crate::index::Matcher;
use crate::index::range_search::{RangeSearch, collect_items};
use crate::util::sort::sort_items;

/// Builder for constructing range search indices with custom parameters.
///
/// # Example
///
/// ```
/// use binrange::index::{Builder, RangeSearch};
///
/// let scores = vec![(3u32, "c"), (1, "a"), (3, "b"), (2, "d")];
/// let by_score = |item: &(u32, &str), score: &u32| item.0.cmp(score);
///
/// let index: RangeSearch<_, u32, _> = Builder::new()
///     .stable(true)
///     .build(scores, |a, b| a.0.cmp(&b.0), by_score);
///
/// // stable sort keeps "c" ahead of "b"
/// assert_eq!(index.find_all_matches(&3).unsorted(), vec![(3, "c"), (3, "b")]);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    stable: bool,
    presorted: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            stable: true,
            presorted: false,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a stable sort (the default) or an unstable one at construction.
    pub fn stable(mut self, stable: bool) -> Self {
        self.stable = stable;
        self
    }

    /// Trust the caller's order and skip sorting.
    pub fn presorted(mut self, presorted: bool) -> Self {
        self.presorted = presorted;
        self
    }

    pub fn build<T, U, C, M>(
        &self,
        mut items: Vec<T>,
        sort_by: C,
        matcher: M,
    ) -> RangeSearch<T, U, M>
    where
        U: ?Sized,
        C: FnMut(&T, &T) -> Ordering,
        M: Matcher<T, U>,
    {
        if !self.presorted {
            sort_items(&mut items, sort_by, self.stable);
        }
        RangeSearch::assemble(items, matcher, !self.presorted)
    }

    /// Validating form of [`Builder::build`].
    ///
    /// The comparator may be `None` only for a presorted builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the first missing input,
    /// checked in the order comparator, matcher, item array, items.
    pub fn try_build<T, U, C, M>(
        &self,
        items: Option<Vec<Option<T>>>,
        sort_by: Option<C>,
        matcher: Option<M>,
    ) -> Result<RangeSearch<T, U, M>, Error>
    where
        U: ?Sized,
        C: FnMut(&T, &T) -> Ordering,
        M: Matcher<T, U>,
    {
        if sort_by.is_none() && !self.presorted {
            return Err(Error::InvalidArgument(Argument::Comparator));
        }
        let matcher = matcher.ok_or(Error::InvalidArgument(Argument::Matcher))?;
        let mut items = collect_items(items)?;

        match sort_by {
            Some(sort_by) if !self.presorted => {
                sort_items(&mut items, sort_by, self.stable);
                Ok(RangeSearch::assemble(items, matcher, true))
            }
            _ => Ok(RangeSearch::assemble(items, matcher, false)),
        }
    }

    #[cfg(feature = "parallel")]
    pub fn build_parallel<T, U, C, M>(
        &self,
        mut items: Vec<T>,
        sort_by: C,
        matcher: M,
    ) -> RangeSearch<T, U, M>
    where
        T: Send,
        U: ?Sized,
        C: Fn(&T, &T) -> Ordering + Sync,
        M: Matcher<T, U>,
    {
        use crate::util::sort::par_sort_items;

        if !self.presorted {
            par_sort_items(&mut items, sort_by, self.stable);
        }
        RangeSearch::assemble(items, matcher, !self.presorted)
    }
}
