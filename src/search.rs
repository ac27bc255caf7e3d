//! Binary search over sorted slices.
//!
//! All lookups return `Result<usize, usize>`: `Ok(i)` holds the leftmost position whose element
//! compares `Equal` to the target, `Err(i)` the position at which the target could be inserted
//! while keeping the slice sorted. If the slice is not sorted under the given comparator, the
//! result is unspecified but always in `0..=len`.

use core::cmp::Ordering;

/// Returns the index of the first element for which `pred` returns `false`.
///
/// The slice must be partitioned by `pred`, i.e. all elements for which it returns `true` come
/// before all elements for which it returns `false`. Returns `v.len()` if `pred` holds for every
/// element. Performs `ceil(log2(len + 1))` calls to `pred`.
pub fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // There are v.len() + 1 possible outcomes of our search.
    // Invariant: [i+1, i+1+n) contains our desired result.
    let mut n = v.len() + 1;
    let mut i = usize::MAX;

    while n > 1 {
        // n only ever shrinks by floor(n/2), so it ends at exactly 1. i and mid grow by at most
        // the amount n shrinks, so mid stays within -1 + v.len() and the indexing can't fail.
        let mid = i.wrapping_add(n / 2);

        // [i+1, i+1+n-floor(n/2)) and [i+1+floor(n/2), i+1+n) together cover the original range.
        // If pred(v[mid]) holds the result lies in the latter.
        if pred(&v[mid]) {
            i = mid;
        }
        n -= n / 2;
    }

    // [i+1, i+1+n) contains our result, and n == 1.
    i.wrapping_add(1)
}

/// Searches the sorted slice `v` for `target`.
///
/// For `[2, 4, 7]`, searching `4` yields `Ok(1)` and searching `5` yields `Err(2)`.
#[inline]
pub fn binary_search<T>(v: &[T], target: &T) -> Result<usize, usize>
where
    T: Ord,
{
    binary_search_by(v, target, |a, b| a.cmp(b))
}

/// Searches the slice `v`, sorted ascending under `compare`, for an element that compares `Equal`
/// to `target`.
///
/// `compare` is always called with a slice element as first and `target` as second argument.
pub fn binary_search_by<T, F>(v: &[T], target: &T, mut compare: F) -> Result<usize, usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pos = partition_point(v, |elem| compare(elem, target) == Ordering::Less);

    match v.get(pos) {
        Some(elem) if compare(elem, target) == Ordering::Equal => Ok(pos),
        _ => Err(pos),
    }
}

/// Searches the slice `v`, sorted ascending by the key extracted with `f`, for `key`.
pub fn binary_search_by_key<T, K, F>(v: &[T], key: &K, mut f: F) -> Result<usize, usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let pos = partition_point(v, |elem| f(elem) < *key);

    match v.get(pos) {
        Some(elem) if f(elem) == *key => Ok(pos),
        _ => Err(pos),
    }
}
