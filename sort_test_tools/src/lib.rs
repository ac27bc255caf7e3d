//! Shared test and benchmark tooling for the sorts in `comparator_sort`.

/// Uniform interface over a sort implementation, so the same test suite and benchmarks can be
/// instantiated for every implementation.
pub trait Sort {
    /// Name used in diagnostics. Names containing `unstable` skip the stability tests.
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
