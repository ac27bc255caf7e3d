#![no_main]

use libfuzzer_sys::fuzz_target;

use comparator_sort::{binary_search, unstable};
use comparator_sort_fuzz::bytes_as_i32;

fuzz_target!(|data: &[u8]| {
    let mut v = bytes_as_i32(data);
    let Some(target) = v.pop() else {
        return;
    };

    unstable::sort(&mut v);

    match binary_search(&v, &target) {
        Ok(i) => {
            assert_eq!(v[i], target);
            assert!(i == 0 || v[i - 1] < target);
        }
        Err(i) => {
            assert!(i == 0 || v[i - 1] < target);
            assert!(i == v.len() || v[i] > target);
        }
    }
});
