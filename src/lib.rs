//! Comparator driven sorting and searching over slices.
//!
//! - [`unstable`] sorts in-place without allocating, but may reorder equal elements.
//! - [`stable`] preserves the relative order of equal elements, using a `len / 2` buffer.
//! - [`search`] finds elements and insertion points in sorted slices.
//! - [`compare`] provides the three-way primitive comparator and comparator adapters.
//!
//! All sorts accept any `FnMut(&T, &T) -> Ordering`. The guarantees only hold if the comparator
//! implements a strict weak ordering. If it doesn't, the resulting order is unspecified, but the
//! sort still terminates, doesn't panic by itself and the slice retains its original set of
//! elements. Composite orderings are built by chaining [`Ordering::then_with`], e.g. grade
//! descending then name ascending is
//! `|a, b| b.grade.cmp(&a.grade).then_with(|| a.name.cmp(&b.name))`.
//!
//! [`Ordering::then_with`]: core::cmp::Ordering::then_with

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

mod smallsort;

pub mod compare;
pub mod search;
pub mod stable;
pub mod unstable;

pub use compare::{compare, reversed};
pub use search::{binary_search, binary_search_by, binary_search_by_key, partition_point};

/// Finds a streak of presorted elements starting at the beginning of the slice. Returns the first
/// value that is not part of said streak, and a bool denoting whether the streak was reversed.
/// Streaks can be increasing or strictly decreasing.
pub(crate) fn find_streak<T, F>(v: &[T], is_less: &mut F) -> (usize, bool)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return (len, false);
    }

    let mut end = 2;

    // We checked that len >= 2, so 0 and 1 are valid indices.
    let assume_reverse = is_less(&v[1], &v[0]);

    // end >= 2 and end < len, so v[end] and v[end - 1] are in bounds.
    if assume_reverse {
        while end < len && is_less(&v[end], &v[end - 1]) {
            end += 1;
        }

        (end, true)
    } else {
        while end < len && !is_less(&v[end], &v[end - 1]) {
            end += 1;
        }

        (end, false)
    }
}
