//! Helpers shared by the fuzz targets.

/// Interprets `data` as little endian `i32` values, trailing bytes are ignored.
pub fn bytes_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Panics if `sorted` is not the sorted permutation of `original`.
pub fn check_sorted_permutation(original: &[i32], sorted: &[i32]) {
    let mut expected = original.to_vec();
    expected.sort_unstable();

    assert_eq!(expected, sorted);
}
