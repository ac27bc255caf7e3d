//! Stable sort, natural merge sort with a `len / 2` sized buffer.

use core::cmp::Ordering;
use core::mem;

use crate::find_streak;
use crate::smallsort::insertion_sort_shift_left;

mod merge;

sort_impl!("comparator_sort_stable");

/// Slices up to this length are sorted with insertion sort, without allocating.
const MAX_INSERTION: usize = 20;

/// Runs shorter than this are extended with insertion sort before merging.
const MIN_RUN: usize = 10;

/// Sorts the slice, preserving the initial order of equal elements.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case. It allocates a temporary buffer of half the size of `v`.
///
/// # Current implementation
///
/// A natural merge sort: the input is split into ascending and strictly descending runs, short
/// runs are extended with insertion sort, and runs are merged following the TimSort stack
/// invariants. It is very fast on inputs that consist of a few concatenated sorted sequences.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, preserving the initial order of equal elements.
///
/// Elements for which `compare` returns `Equal` keep their relative order, ties are only ever
/// broken by position in the input. This makes it possible to sort by one key after another, or to
/// sort records that already are in a meaningful order by a secondary key.
///
/// The comparator function must define a strict weak ordering for the elements in the slice. If
/// it doesn't, the resulting order is unspecified, but the call still returns and all original
/// elements remain in `v`. If `compare` panics, the panic is propagated and `v` is left in an
/// unspecified order holding all of its original elements.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, preserving the initial order of equal elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    stable_sort(v, |a, b| f(a).lt(&f(b)));
}

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
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

    if len <= MAX_INSERTION {
        insertion_sort_shift_left(v, 1, &mut is_less);
        return;
    }

    merge_sort(v, &mut is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // The shorter of two merged runs is at most half of `len`. Only the spare capacity is used,
    // the vector itself stays empty so dropping it never drops any `T`.
    let mut buf = Vec::<T>::with_capacity(len / 2);
    let scratch = buf.spare_capacity_mut();

    let mut runs: Vec<Run> = Vec::new();

    let mut start = 0;

    // Scan forward, finding runs and merging them as soon as the stack invariants demand it.
    while start < len {
        let (streak_len, was_reversed) = find_streak(&v[start..], is_less);
        let mut end = start + streak_len;

        // A strictly descending streak contains no equal elements, so reversing it is stable.
        if was_reversed {
            v[start..end].reverse();
        }

        // Extend short runs with insertion sort. `end - start >= 1` holds as `v[start..]` is not
        // empty.
        if end < len && end - start < MIN_RUN {
            let new_end = (start + MIN_RUN).min(len);
            insertion_sort_shift_left(&mut v[start..new_end], end - start, is_less);
            end = new_end;
        }

        runs.push(Run {
            start,
            len: end - start,
        });
        start = end;

        while let Some(r) = collapse(&runs, len) {
            runs[r] = merge::merge_runs(v, runs[r], runs[r + 1], scratch, is_less);
            runs.remove(r + 1);
        }
    }

    // Finally, exactly one run must remain in the stack.
    debug_assert!(runs.len() == 1 && runs[0].start == 0 && runs[0].len == len);
}

/// Examines the stack of runs and identifies the next pair of runs to merge. More specifically,
/// if `Some(r)` is returned, that means `runs[r]` and `runs[r + 1]` must be merged next. If the
/// algorithm should continue building a new run instead, `None` is returned.
///
/// The invariants are checked for the top four runs, checking only the top three is not sufficient
/// to ensure that they hold for *all* runs in the stack. See
/// http://envisage-project.eu/timsort-specification-and-verification/
///
/// If the top run ends at `stop`, a merge is always demanded until the stack is fully collapsed.
#[inline]
fn collapse(runs: &[Run], stop: usize) -> Option<usize> {
    let n = runs.len();
    if n >= 2
        && (runs[n - 1].start + runs[n - 1].len == stop
            || runs[n - 2].len <= runs[n - 1].len
            || (n >= 3 && runs[n - 3].len <= runs[n - 2].len + runs[n - 1].len)
            || (n >= 4 && runs[n - 4].len <= runs[n - 3].len + runs[n - 2].len))
    {
        if n >= 3 && runs[n - 3].len < runs[n - 1].len {
            Some(n - 3)
        } else {
            Some(n - 2)
        }
    } else {
        None
    }
}

/// A sorted run `v[start..start + len]`.
#[derive(Clone, Copy, Debug)]
struct Run {
    start: usize,
    len: usize,
}
