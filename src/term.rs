//! Weighted query terms for autocomplete.

use alloc::string::String;
use core::cmp::Ordering;

use crate::index::matcher;

/// A query string with a popularity weight.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use binrange::Term;
///
/// let term = Term::new("seattle", 3_500_000);
/// assert_eq!(term.matches_prefix("sea"), Ordering::Equal);
/// assert_eq!(term.matches_prefix("tac"), Ordering::Less);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    query: String,
    weight: u64,
}

impl Term {
    pub fn new(query: impl Into<String>, weight: u64) -> Self {
        Self {
            query: query.into(),
            weight,
        }
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Lexicographic (byte) order by query.
    #[inline]
    pub fn query_order(&self, other: &Term) -> Ordering {
        self.query.cmp(&other.query)
    }

    /// Heaviest first.
    #[inline]
    pub fn reverse_weight_order(&self, other: &Term) -> Ordering {
        other.weight.cmp(&self.weight)
    }

    /// `Equal` if the query starts with `prefix`, otherwise the query's order
    /// relative to `prefix`. Agrees with [`Term::query_order`].
    #[inline]
    pub fn matches_prefix(&self, prefix: &str) -> Ordering {
        matcher::prefix(&self.query, prefix)
    }
}
