/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// This is the cold fallback of quicksort, keep it out of line.
#[inline(never)]
pub(crate) fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Nodes at len / 2 and above are leaves and trivially satisfy the heap property.
    for node in (0..len / 2).rev() {
        sift_down(v, node, is_less);
    }

    // Move the current maximum behind the shrinking heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}

/// Restores the max-heap property `parent >= child` for the subtree rooted at `node`.
fn sift_down<T, F>(heap: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = heap.len();

    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            return;
        }

        if child + 1 < len && is_less(&heap[child], &heap[child + 1]) {
            child += 1;
        }

        if !is_less(&heap[node], &heap[child]) {
            return;
        }

        heap.swap(node, child);
        node = child;
    }
}
