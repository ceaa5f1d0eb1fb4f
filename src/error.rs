use core::fmt;

/// The input rejected by an [`Error::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The item array itself was missing.
    Items,
    /// The item at this position was missing.
    Item(usize),
    /// No comparator was supplied for an unsorted array.
    Comparator,
    /// No matcher was supplied.
    Matcher,
    /// No query key was supplied.
    Query,
}

/// Errors raised at the nullable boundary (`try_*` constructors and queries).
///
/// These are programming errors: fix the caller rather than handling them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidArgument(Argument),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Items => write!(f, "item array is missing"),
            Argument::Item(pos) => write!(f, "item at position {pos} is missing"),
            Argument::Comparator => write!(f, "comparator is missing"),
            Argument::Matcher => write!(f, "matcher is missing"),
            Argument::Query => write!(f, "query key is missing"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(arg) => write!(f, "invalid argument: {arg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
