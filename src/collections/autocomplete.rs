//! Prefix autocomplete over weighted terms.
//!
//! `Autocomplete` owns its terms sorted by query and finds every term
//! starting with a prefix in O(log n), then ranks only the matches.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::index::RangeSearch;
use crate::term::Term;

type PrefixMatcher = fn(&Term, &str) -> Ordering;

/// Search-as-you-type lookup over [`Term`]s.
///
/// # Example
///
/// ```
/// use binrange::{Autocomplete, Term};
///
/// let terms = vec![
///     Term::new("seattle", 737_015),
///     Term::new("seaside", 6_440),
///     Term::new("spokane", 228_989),
///     Term::new("sea-tac", 29_000),
/// ];
/// let autocomplete = Autocomplete::new(terms);
///
/// assert_eq!(autocomplete.count_matches("sea"), 3);
///
/// let top = autocomplete.top_matches("sea", 2);
/// assert_eq!(top[0].query(), "seattle");
/// assert_eq!(top[1].query(), "sea-tac");
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Term>", into = "Vec<Term>"))]
pub struct Autocomplete {
    index: RangeSearch<Term, str, PrefixMatcher>,
}

impl Autocomplete {
    pub fn new(terms: Vec<Term>) -> Self {
        Self {
            index: RangeSearch::for_unsorted(
                terms,
                Term::query_order,
                Term::matches_prefix as PrefixMatcher,
            ),
        }
    }

    /// Number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of terms whose query starts with `prefix`.
    #[inline]
    pub fn count_matches(&self, prefix: &str) -> usize {
        self.index.find_all_matches(prefix).count()
    }

    /// Every term starting with `prefix`, heaviest first; equal weights are
    /// ordered by query.
    pub fn all_matches(&self, prefix: &str) -> Vec<Term> {
        self.index.find_all_matches(prefix).sorted_by(rank)
    }

    /// The `k` heaviest terms starting with `prefix`.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<Term> {
        self.index.find_all_matches(prefix).top_by(k, rank)
    }

    /// All terms in query order.
    #[inline]
    pub fn as_slice(&self) -> &[Term] {
        self.index.as_slice()
    }

    pub fn into_vec(self) -> Vec<Term> {
        self.index.into_inner()
    }
}

fn rank(a: &Term, b: &Term) -> Ordering {
    a.reverse_weight_order(b).then_with(|| a.query_order(b))
}

impl From<Vec<Term>> for Autocomplete {
    fn from(terms: Vec<Term>) -> Self {
        Self::new(terms)
    }
}

impl From<Autocomplete> for Vec<Term> {
    fn from(autocomplete: Autocomplete) -> Self {
        autocomplete.into_vec()
    }
}

impl FromIterator<Term> for Autocomplete {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for Autocomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
