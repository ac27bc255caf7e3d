//! Unstable in-place sort, quicksort with heapsort fallback.

use core::cmp::Ordering;
use core::mem;

use crate::find_streak;
use crate::smallsort::insertion_sort_shift_left;

mod heapsort;
mod pivot;
mod quicksort;

sort_impl!("comparator_sort_unstable");

/// Slices up to this length are sorted with insertion sort.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 12;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Quicksort with median-of-three pivot selection and a bound on the number of imbalanced
/// partitions. Once that bound is exceeded, the remaining sub-slice is sorted with heapsort, which
/// guarantees the worst case even for adversarial inputs. Small sub-slices use insertion sort.
/// Inputs with many duplicates are handled in linear time, and fully ascending or descending
/// inputs are recognized up-front.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a strict weak ordering for the elements in the slice. If
/// it doesn't, the resulting order is unspecified, but the call still returns after a bounded
/// number of comparisons and all original elements remain in `v`. If `compare` panics, the panic
/// is propagated and `v` is left in an unspecified order holding all of its original elements.
///
/// [`compare`](crate::compare::compare) can be used for floats as long as the slice doesn't
/// contain NaN.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called *O*(*n* \* log(*n*)) times, cache expensive keys in the elements if
/// that is a concern.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    unstable_sort(v, |a, b| f(a).lt(&f(b)));
}

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();

    // These inputs are always sorted.
    if len < 2 {
        return;
    }

    if len <= SMALL_SORT_THRESHOLD {
        insertion_sort_shift_left(v, 1, &mut is_less);
    } else {
        sort_large(v, &mut is_less);
    }
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn sort_large<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let (streak_end, was_reversed) = find_streak(v, is_less);
    if streak_end == len {
        if was_reversed {
            v.reverse();
        }

        return;
    }

    // Limit the number of imbalanced partitions to `2 * floor(log2(len))`.
    // The binary OR by one is used to eliminate the zero-check in the logarithm.
    let limit = 2 * (len | 1).ilog2();

    quicksort::quicksort(v, is_less, None, limit);
}
