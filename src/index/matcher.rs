use core::cmp::Ordering;

/// Three-way classification of a stored item against a query key.
///
/// `Less` means the item sorts before the block matching `query`, `Equal`
/// means it is in the block and `Greater` means it sorts after it. Any
/// `Fn(&T, &U) -> Ordering` is a matcher.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use binrange::index::Matcher;
///
/// let tens = |item: &u32, bucket: &u32| (item / 10).cmp(bucket);
/// assert_eq!(tens.classify(&42, &4), Ordering::Equal);
/// assert_eq!(tens.classify(&42, &5), Ordering::Less);
/// ```
pub trait Matcher<T: ?Sized, U: ?Sized> {
    fn classify(&self, item: &T, query: &U) -> Ordering;
}

impl<T, U, F> Matcher<T, U> for F
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T, &U) -> Ordering,
{
    #[inline]
    fn classify(&self, item: &T, query: &U) -> Ordering {
        self(item, query)
    }
}

/// Prefix classification for string items.
///
/// `Equal` when `item` starts with `prefix`, otherwise the byte-wise order of
/// `item` against `prefix`. Items sorted with `str::cmp` are partitioned for
/// every prefix under this matcher.
#[inline]
pub fn prefix<S: AsRef<str> + ?Sized>(item: &S, prefix: &str) -> Ordering {
    let item = item.as_ref();
    if item.starts_with(prefix) {
        Ordering::Equal
    } else {
        item.cmp(prefix)
    }
}
