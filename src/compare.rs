//! Three-way comparison primitives and comparator adapters.
//!
//! A comparator is any `FnMut(&T, &T) -> Ordering`. Reverse order is expressed by swapping the
//! operands, see [`reversed`]. Multi-key orderings chain the keys with
//! [`Ordering::then_with`], the first key that doesn't compare `Equal` decides.

use core::cmp::Ordering;

/// Compares `x` and `y`, returning `Less` if `x < y`, `Greater` if `x > y` and `Equal` otherwise.
///
/// Works with anything that implements [`PartialOrd`], integers, floats, `str` and slices included,
/// and can be passed directly as comparator, e.g. `unstable::sort_by(&mut v, compare)`.
///
/// # Unordered values
///
/// Values that are neither less nor greater than each other compare `Equal`. For floating point
/// this means a NaN compares `Equal` to every value, which is not transitive. Sorting a slice that
/// contains NaN with this comparator yields an unspecified order. Filter NaN beforehand or use
/// `f64::total_cmp` if a total order is required.
#[inline]
pub fn compare<T>(x: &T, y: &T) -> Ordering
where
    T: PartialOrd + ?Sized,
{
    if x < y {
        Ordering::Less
    } else if x > y {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns a comparator that orders elements the opposite way of `compare`.
///
/// The operands are swapped rather than the result negated, so ties stay ties and a stable sort
/// keeps equal elements in their original order.
#[inline]
pub fn reversed<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(b, a)
}

/// Converts `ord` into the `-1`, `0`, `+1` encoding used by C-style comparators.
#[inline]
pub const fn to_sign(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Converts the result of a C-style comparator into an `Ordering`.
///
/// Only the sign matters, `-7` is `Less` and `42` is `Greater`.
#[inline]
pub const fn from_sign(val: i32) -> Ordering {
    if val < 0 {
        Ordering::Less
    } else if val > 0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Checks that every adjacent pair in `v` compares `Less` or `Equal`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}
