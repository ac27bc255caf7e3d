use std::env;

use regex::Regex;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id_2) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id_2);
            }

            affinity_already_set.set(true);
        }
    });
}

/// Returns true if `name` matches the `CUSTOM_BENCH_REGEX` env var, or if it is not set.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    let filter_regex = FILTER_REGEX.get_or_init(|| {
        env::var("CUSTOM_BENCH_REGEX").ok().map(|filter_regex| {
            Regex::new(&filter_regex).unwrap_or_else(|err| {
                panic!("Invalid CUSTOM_BENCH_REGEX '{filter_regex}': {err}")
            })
        })
    });

    filter_regex
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}

/// Runs a chunk of data dependent branches, to leave the branch predictor in a state unrelated to
/// the benchmarked code.
#[cfg(feature = "cold_benchmarks")]
#[inline(never)]
fn trash_prediction_state(seed: i32) -> i32 {
    let mut x = (seed as u32) | 1;
    let mut acc = 0i32;

    for _ in 0..10_000 {
        // xorshift32
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;

        if x % 3 == 0 {
            acc = acc.wrapping_add(x as i32);
        } else if x % 5 == 0 {
            acc ^= x as i32;
        } else {
            acc = acc.rotate_left(1);
        }
    }

    black_box(acc);
    seed
}

#[inline(never)]
pub fn bench_fn<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    bench_name: &str,
    test_fn: impl Fn(&mut [T]),
) {
    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads, which greatly impacts overall benchmark
    // throughput.
    pin_thread_to_core();

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    let bench_name_hot = format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_len}");
    if should_run_benchmark(&bench_name_hot) {
        c.bench_function(&bench_name_hot, |b| {
            b.iter_batched_ref(
                || transform(pattern_provider(test_len)),
                |test_data| {
                    test_fn(black_box(test_data.as_mut_slice()));
                    black_box(test_data); // side-effect
                },
                batch_size,
            )
        });
    }

    #[cfg(feature = "cold_benchmarks")]
    {
        let bench_name_cold =
            format!("{bench_name}-cold-{transform_name}-{pattern_name}-{test_len}");
        if should_run_benchmark(&bench_name_cold) {
            c.bench_function(&bench_name_cold, |b| {
                b.iter_batched_ref(
                    || {
                        let mut test_ints = pattern_provider(test_len);

                        if test_ints.is_empty() {
                            return transform(test_ints);
                        }

                        // Try as best as possible to trash all prediction state in the CPU, to
                        // simulate calling the benchmark function as part of a larger program.
                        // Caveat, memory caches. We don't want to benchmark how expensive it is to
                        // load something from main memory.
                        let first_val =
                            black_box(trash_prediction_state(black_box(test_ints[0])));

                        // Tie the output to the test input, so the optimizer can't drop the call.
                        test_ints[0] = first_val;

                        transform(test_ints)
                    },
                    |test_data| {
                        test_fn(black_box(test_data.as_mut_slice()));
                        black_box(test_data); // side-effect
                    },
                    BatchSize::PerIteration,
                )
            });
        }
    }
}
