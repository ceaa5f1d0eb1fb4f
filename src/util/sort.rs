use core::cmp::Ordering;

/// Sort items in place, stable or unstable.
#[inline]
pub fn sort_items<T, C>(items: &mut [T], sort_by: C, stable: bool)
where
    C: FnMut(&T, &T) -> Ordering,
{
    if stable {
        items.sort_by(sort_by);
    } else {
        items.sort_unstable_by(sort_by);
    }
}

#[cfg(feature = "parallel")]
pub fn par_sort_items<T, C>(items: &mut [T], sort_by: C, stable: bool)
where
    T: Send,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    use rayon::prelude::*;

    const PARALLEL_THRESHOLD: usize = 100_000;

    if items.len() < PARALLEL_THRESHOLD {
        return sort_items(items, sort_by, stable);
    }

    if stable {
        items.par_sort_by(sort_by);
    } else {
        items.par_sort_unstable_by(sort_by);
    }
}
