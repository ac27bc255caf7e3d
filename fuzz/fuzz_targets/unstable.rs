#![no_main]

use libfuzzer_sys::fuzz_target;

use comparator_sort::unstable as test_sort;
use comparator_sort_fuzz::{bytes_as_i32, check_sorted_permutation};

fuzz_target!(|data: &[u8]| {
    let original = bytes_as_i32(data);

    let mut v = original.clone();
    test_sort::sort(&mut v);
    check_sorted_permutation(&original, &v);

    // Invalid comparators must neither panic nor lose elements. The first byte drives the
    // comparison results.
    let mut v = original.clone();
    let mut state = data.first().copied().unwrap_or(0) as u32;
    test_sort::sort_by(&mut v, |a, b| {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        comparator_sort::compare::from_sign((state >> 16) as i32 % 3 - 1).then(a.cmp(b))
    });
    v.sort_unstable();
    check_sorted_permutation(&original, &v);
});
