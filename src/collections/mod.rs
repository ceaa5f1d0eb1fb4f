//! Owned collections built on [`crate::index::RangeSearch`].

pub mod autocomplete;

pub use autocomplete::Autocomplete;
