//! The range search index.
//!
//! - [`RangeSearch`]: owns a sorted array and answers "which contiguous block
//!   matches this key" with two binary searches
//! - [`MatchResult`]: the borrowed view of one query's matching block
//! - [`Builder`]: construction options (sort stability, presorted input)
//!
//! ## Traits
//!
//! - [`Matcher`]: three-way classification of an item against a query key

pub(crate) mod builder;
pub mod matcher;
pub mod range_search;
pub mod result;

pub use builder::Builder;
pub use matcher::Matcher;
pub use range_search::RangeSearch;
pub use result::MatchResult;
