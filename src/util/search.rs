//! Boundary searches over a slice classified by a three-way closure.
//!
//! The slice must be partitioned for the classifier: every `Less` first,
//! then every `Equal`, then every `Greater`.

use core::cmp::Ordering;

/// Find the first position classified as `Equal`.
///
/// Returns `None` when no item is `Equal`, including for an empty slice.
#[inline]
pub fn first_match<T, F>(items: &[T], mut classify: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if items.is_empty() {
        return None;
    }

    let mut lo = 0usize;
    let mut hi = items.len() - 1;
    let mut seen = false;

    while lo != hi {
        let mid = lo + (hi - lo) / 2;
        match classify(&items[mid]) {
            Ordering::Equal => {
                seen = true;
                hi = mid;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    if seen || classify(&items[hi]).is_eq() {
        Some(hi)
    } else {
        None
    }
}

/// Find the first position after `start` that is no longer `Equal`.
///
/// `start` should be the position returned by [`first_match`]; the result is
/// one past the last `Equal` item and never exceeds `items.len()`.
#[inline]
pub fn end_of_matches<T, F>(items: &[T], start: usize, mut classify: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    if start >= items.len() {
        return items.len();
    }

    let mut lo = start;
    let mut hi = items.len() - 1;

    while lo != hi {
        let mid = lo + (hi - lo) / 2;
        if classify(&items[mid]).is_eq() {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    if classify(&items[hi]).is_eq() {
        hi + 1
    } else {
        hi
    }
}

/// Check that classifying the slice in order never steps backwards
/// (`Less` -> `Equal` -> `Greater`).
pub fn is_partitioned<T, F>(items: &[T], mut classify: F) -> bool
where
    F: FnMut(&T) -> Ordering,
{
    let mut prev = Ordering::Less;
    for item in items {
        let current = classify(item);
        if current < prev {
            return false;
        }
        prev = current;
    }
    true
}
