use core::mem;

use crate::unstable::SMALL_SORT_THRESHOLD;

/// Chooses a pivot in `v` and returns its index.
///
/// Takes the median of three elements spread over the slice. For longer slices each of the three
/// candidates is itself the median of its direct neighborhood, which makes it a lot harder to
/// construct inputs that consistently yield bad pivots.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Minimum length to choose the median-of-medians method.
    // Shorter slices use the simple median-of-three method.
    const SHORTEST_MEDIAN_OF_MEDIANS: usize = 50;

    let len = v.len();

    // It's a logic bug if this gets called on a slice that would be small-sorted. The neighborhood
    // of `len / 4` is only guaranteed to be in-bounds for longer slices.
    debug_assert!(len > SMALL_SORT_THRESHOLD);

    // Three indices near which we are going to choose a pivot.
    let len_div_4 = len / 4;
    let mut a = len_div_4;
    let mut b = len_div_4 * 2;
    let mut c = len_div_4 * 3;

    // Swaps indices so that `v[a] <= v[b]`.
    let mut sort2_idx = |a: &mut usize, b: &mut usize| {
        if is_less(&v[*b], &v[*a]) {
            mem::swap(a, b);
        }
    };

    // Swaps indices so that `v[a] <= v[b] <= v[c]`.
    let mut sort3_idx = |a: &mut usize, b: &mut usize, c: &mut usize| {
        sort2_idx(a, b);
        sort2_idx(b, c);
        sort2_idx(a, b);
    };

    if len >= SHORTEST_MEDIAN_OF_MEDIANS {
        // Finds the median of `v[a - 1], v[a], v[a + 1]` and stores the index into `a`.
        let mut sort_adjacent = |a: &mut usize| {
            let tmp = *a;
            sort3_idx(&mut (tmp - 1), a, &mut (tmp + 1));
        };

        sort_adjacent(&mut a);
        sort_adjacent(&mut b);
        sort_adjacent(&mut c);
    }

    sort3_idx(&mut a, &mut b, &mut c);

    b
}
