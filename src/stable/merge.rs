use core::mem::MaybeUninit;
use core::ptr;

use super::Run;

/// Merges the adjacent sorted runs `left` and `right` of `v` into a single sorted run and returns
/// it.
///
/// The shorter run is moved into `scratch` first, which must be able to hold it. Ties are resolved
/// in favor of `left`, so merging keeps equal elements in their original order.
pub(super) fn merge_runs<T, F>(
    v: &mut [T],
    left: Run,
    right: Run,
    scratch: &mut [MaybeUninit<T>],
    is_less: &mut F,
) -> Run
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(left.start + left.len, right.start);

    let merged = Run {
        start: left.start,
        len: left.len + right.len,
    };

    if left.len != 0 && right.len != 0 {
        merge(
            &mut v[merged.start..merged.start + merged.len],
            left.len,
            scratch,
            is_less,
        );
    }

    merged
}

/// Merges the sorted halves `v[..mid]` and `v[mid..]` in place.
fn merge<T, F>(v: &mut [T], mid: usize, scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(mid <= len);
    let right_len = len - mid;

    // Everything below relies on this, a violation would write out of bounds.
    assert!(mid.min(right_len) <= scratch.len());

    let base = v.as_mut_ptr();
    let scratch = scratch.as_mut_ptr().cast::<T>();

    // Elements are only ever moved between `v` and `scratch`, one at a time. At any point exactly
    // one gap exists in `v`, and it is exactly as long as the part of `scratch` that still holds
    // live elements. `gap` owns that part and moves it into the gap once dropped, which happens
    // at the end of this function, or while unwinding if `is_less` panics.
    let mut gap;

    if mid <= right_len {
        // SAFETY: `v[..mid]` is in bounds and `scratch` holds at least `mid` elements. The copy
        // leaves `v[..mid]` logically uninitialized, `gap` takes ownership of the values.
        unsafe { ptr::copy_nonoverlapping(base, scratch, mid) };
        gap = Gap {
            scratch,
            base,
            live: 0..mid,
            dest: 0,
        };

        // Fill the gap from the front. `dest == live.start + (right - mid)`, so `dest < right`
        // as long as `scratch` holds anything and the slot written is always part of the gap.
        let mut right = mid;
        while !gap.live.is_empty() && right < len {
            // SAFETY: `v[right]` and `scratch[live.start]` are live, `v[dest]` is in the gap and
            // distinct from both.
            unsafe {
                let from_right = is_less(&*base.add(right), &*scratch.add(gap.live.start));
                let src = if from_right {
                    right += 1;
                    base.add(right - 1)
                } else {
                    gap.live.start += 1;
                    scratch.add(gap.live.start - 1)
                };
                ptr::copy_nonoverlapping(src, base.add(gap.dest), 1);
            }
            gap.dest += 1;
        }
    } else {
        // SAFETY: `v[mid..]` is in bounds and `scratch` holds at least `right_len` elements.
        unsafe { ptr::copy_nonoverlapping(base.add(mid), scratch, right_len) };
        gap = Gap {
            scratch,
            base,
            live: 0..right_len,
            dest: mid,
        };

        // Fill the gap from the back. `gap.dest` marks the end of the live left part, and the gap
        // spans `v[dest..dest + live.len()]`.
        while !gap.live.is_empty() && gap.dest > 0 {
            let out = gap.dest + gap.live.len() - 1;

            // SAFETY: `v[dest - 1]` and `scratch[live.end - 1]` are live, `v[out]` is the last
            // slot of the gap.
            unsafe {
                let from_left =
                    is_less(&*scratch.add(gap.live.end - 1), &*base.add(gap.dest - 1));
                let src = if from_left {
                    gap.dest -= 1;
                    base.add(gap.dest)
                } else {
                    gap.live.end -= 1;
                    scratch.add(gap.live.end)
                };
                ptr::copy_nonoverlapping(src, base.add(out), 1);
            }
        }
    }
}

/// Owns `scratch[live]` and moves it into `base[dest..]` when dropped.
struct Gap<T> {
    scratch: *mut T,
    base: *mut T,
    live: core::ops::Range<usize>,
    dest: usize,
}

impl<T> Drop for Gap<T> {
    fn drop(&mut self) {
        // SAFETY: `scratch[live]` holds initialized values that exist nowhere else and
        // `base[dest..dest + live.len()]` is the gap they belong into.
        unsafe {
            ptr::copy_nonoverlapping(
                self.scratch.add(self.live.start),
                self.base.add(self.dest),
                self.live.len(),
            );
        }
    }
}
