//! # binrange
//!
//! Range search over a sorted slice: given items and a three-way matcher,
//! find the contiguous block of items that match a query key with two binary
//! searches instead of a linear scan.
//!
//! ## Quick Start
//!
//! ```rust
//! use binrange::RangeSearch;
//! use binrange::index::matcher::prefix;
//!
//! // Sort once by string order, then match by prefix.
//! let words = vec!["cdef", "aaa", "bzb", "abc", "ba"];
//! let index: RangeSearch<&str, str, _> =
//!     RangeSearch::for_unsorted(words, |a, b| a.cmp(b), |w: &&str, p: &str| prefix(*w, p));
//!
//! let result = index.find_all_matches("b");
//! assert_eq!(result.count(), 2);
//! assert_eq!(result.as_slice(), &["ba", "bzb"]);
//! ```
//!
//! For search-as-you-type over weighted terms, use [`Autocomplete`]:
//!
//! ```rust
//! use binrange::{Autocomplete, Term};
//!
//! let ac: Autocomplete = vec![Term::new("rust", 90), Term::new("ruby", 70), Term::new("go", 80)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(ac.top_matches("ru", 1)[0].query(), "rust");
//! ```
//!
//! ## Ordering contract
//!
//! The sort order and the matcher must agree: for every query issued, the
//! sorted items classify as all `Less`, then all `Equal`, then all `Greater`.
//! [`RangeSearch::is_partitioned_for`] checks this for one query.
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`]
//! - `parallel`: sorts large inputs on the rayon pool
//! - `serde`: serialization for [`Term`] and [`Autocomplete`]
//! - `rkyv`: zero-copy serialization for [`Term`]
//! - `tracing`: debug/trace events for index builds and queries
//!
//! ## Performance
//!
//! Construction sorts once in O(n log n); each query is O(log n).

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod collections;
pub mod error;
pub mod index;
pub mod term;
pub mod util;

// Primary exports
pub use collections::Autocomplete;
pub use index::{Builder, MatchResult, Matcher, RangeSearch};
pub use term::Term;

pub use error::{Argument, Error};
