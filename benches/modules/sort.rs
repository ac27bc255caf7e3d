use std::env;

use criterion::{black_box, Criterion};

use sort_test_tools::Sort;

use comparator_sort::{stable, unstable};

use crate::modules::util;

/// Reference implementations from the standard library, to put the numbers into perspective.
mod std_stable {
    pub struct SortImpl;

    impl sort_test_tools::Sort for SortImpl {
        fn name() -> String {
            "std_stable".into()
        }

        fn sort<T: Ord>(arr: &mut [T]) {
            arr.sort();
        }

        fn sort_by<T, F: FnMut(&T, &T) -> std::cmp::Ordering>(arr: &mut [T], compare: F) {
            arr.sort_by(compare);
        }
    }
}

mod std_unstable {
    pub struct SortImpl;

    impl sort_test_tools::Sort for SortImpl {
        fn name() -> String {
            "std_unstable".into()
        }

        fn sort<T: Ord>(arr: &mut [T]) {
            arr.sort_unstable();
        }

        fn sort_by<T, F: FnMut(&T, &T) -> std::cmp::Ordering>(arr: &mut [T], compare: F) {
            arr.sort_unstable_by(compare);
        }
    }
}

fn measure_comp_count<S: Sort, T: Ord + std::fmt::Debug>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else if test_len < 100_000 {
        1000
    } else if test_len < 1_000_000 {
        100
    } else {
        10
    };

    let mut comp_count = 0u64;

    // Instrument via sort_by to ensure the type properties such as Copy of the type
    // that is being sorted doesn't change. And we get representative numbers.
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    // Less than one comparison on average rounds down to zero.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

pub fn bench_fn<S: Sort, T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!(
            "{}-comp-{}-{}-{}",
            bench_name, transform_name, pattern_name, test_len
        );

        if util::should_run_benchmark(&name) {
            measure_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
        }
    } else {
        util::bench_fn(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

pub fn bench<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_inst {
        ($sort_impl_path:path) => {{
            use $sort_impl_path::*;

            bench_fn::<SortImpl, T>(
                c,
                test_len,
                transform_name,
                transform,
                pattern_name,
                pattern_provider,
            );
        }};
    }

    // --- Stable sorts ---

    bench_inst!(stable);
    bench_inst!(std_stable);

    // --- Unstable sorts ---

    bench_inst!(unstable);
    bench_inst!(std_unstable);
}
