use std::hint::black_box;

use criterion::Criterion;

use rand::prelude::*;

use crate::modules::util::bench_fn;

#[inline(never)]
fn bench_impl<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    search_fn: fn(&[T], &T) -> Result<usize, usize>,
) {
    let search_pattern_provider = |len: usize| -> Vec<i32> {
        // Limit the val to somewhere in the range of the ascending pattern.
        let rand_val = (rand::thread_rng().gen::<u32>() % (len as u32).max(1)) as i32;

        // Inject the last value as the random value we will look for.
        let mut v = pattern_provider(len);
        v.push(rand_val);

        v
    };

    let search_test_fn = |v: &mut [T]| {
        let end = v.len() - 1;
        let target = &v[end];

        let _ = black_box(search_fn(&v[..end], target));
    };

    bench_fn(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        search_pattern_provider,
        bench_name,
        search_test_fn,
    )
}

pub fn bench<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if pattern_name != "ascending" {
        // We need sorted inputs.
        return;
    }

    bench_impl(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "comparator_sort_binary_search",
        |v, target| comparator_sort::binary_search(v, target),
    );

    bench_impl(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "std_binary_search",
        |v, target| v.binary_search(target),
    );
}
