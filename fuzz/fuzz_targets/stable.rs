#![no_main]

use libfuzzer_sys::fuzz_target;

use comparator_sort::stable as test_sort;
use comparator_sort_fuzz::{bytes_as_i32, check_sorted_permutation};

fuzz_target!(|data: &[u8]| {
    let original = bytes_as_i32(data);

    let mut v = original.clone();
    test_sort::sort(&mut v);
    check_sorted_permutation(&original, &v);

    // Sort on a narrow key only, the original index must stay ascending within equal keys.
    let mut tagged = original
        .iter()
        .enumerate()
        .map(|(i, val)| (val.rem_euclid(16), i))
        .collect::<Vec<_>>();
    test_sort::sort_by(&mut tagged, |a, b| a.0.cmp(&b.0));
    assert!(comparator_sort::compare::is_sorted_by(&tagged, comparator_sort::compare));
});
