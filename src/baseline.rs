//! Whole-string baseline sorts.
//!
//! Neither sort here knows anything about shared prefixes: every comparison
//! walks both keys from byte zero. They exist as the correctness oracle the
//! prefix-aware sorts must agree with, and as the comparison-count reference
//! point. One unit of work is charged per key pair compared.

/// Stable top-down merge sort using whole-string comparisons.
///
/// Returns the number of key comparisons performed.
pub fn merge_sort<T: AsRef<[u8]> + Clone>(data: &mut [T]) -> u64 {
    let mut comparisons = 0;
    merge_sort_range(data, 0, data.len(), &mut comparisons);
    comparisons
}

fn merge_sort_range<T: AsRef<[u8]> + Clone>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    comparisons: &mut u64,
) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort_range(data, lo, mid, comparisons);
    merge_sort_range(data, mid, hi, comparisons);
    merge(data, lo, mid, hi, comparisons);
}

fn merge<T: AsRef<[u8]> + Clone>(
    data: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    comparisons: &mut u64,
) {
    let left = data[lo..mid].to_vec();
    let right = data[mid..hi].to_vec();

    let (mut i, mut j, mut k) = (0, 0, lo);
    while i < left.len() && j < right.len() {
        *comparisons += 1;
        if left[i].as_ref() <= right[j].as_ref() {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        data[k] = left[i].clone();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        data[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

/// Quicksort with a Lomuto partition around the last key of each range.
///
/// Returns the number of key comparisons performed.
pub fn quick_sort<T: AsRef<[u8]>>(data: &mut [T]) -> u64 {
    let mut comparisons = 0;
    quick_sort_range(data, 0, data.len(), &mut comparisons);
    comparisons
}

fn quick_sort_range<T: AsRef<[u8]>>(
    data: &mut [T],
    mut lo: usize,
    mut hi: usize,
    comparisons: &mut u64,
) {
    // Recurse into the smaller side and loop on the larger one, keeping the
    // call stack logarithmic even on adversarial inputs.
    while hi - lo > 1 {
        let p = lomuto_partition(data, lo, hi, comparisons);
        if p - lo < hi - (p + 1) {
            quick_sort_range(data, lo, p, comparisons);
            lo = p + 1;
        } else {
            quick_sort_range(data, p + 1, hi, comparisons);
            hi = p;
        }
    }
}

fn lomuto_partition<T: AsRef<[u8]>>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    comparisons: &mut u64,
) -> usize {
    let pivot = hi - 1;
    let mut boundary = lo;
    for j in lo..pivot {
        *comparisons += 1;
        if data[j].as_ref() <= data[pivot].as_ref() {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, pivot);
    boundary
}
