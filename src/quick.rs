//! Three-way string quicksort partitioning on one byte position at a time.
//!
//! Each step first extracts keys exhausted at the current depth to the front
//! of the range, then runs a Dutch-national-flag partition of the remaining
//! keys around the byte a randomly chosen pivot carries at that depth. The
//! equal zone agrees through the pivot byte and moves on to the next depth;
//! the less/greater zones still need this byte position resolved among
//! themselves and stay at the same depth.

use crate::core::partition_exhausted;
use rand::Rng;

/// Sorts `data` with a randomized ternary string quicksort.
///
/// Returns the number of byte comparisons performed.
pub fn ternary_quick_sort<T: AsRef<[u8]>>(data: &mut [T]) -> u64 {
    ternary_quick_sort_with(data, &mut rand::rng())
}

/// Same as [`ternary_quick_sort`], but draws pivot positions from the supplied
/// random source. Sorted output is invariant to pivot choice; a seeded
/// generator additionally makes the comparison count reproducible.
pub fn ternary_quick_sort_with<T: AsRef<[u8]>, R: Rng>(data: &mut [T], rng: &mut R) -> u64 {
    let mut comparisons = 0;
    sort_range(data, 0, data.len(), 0, rng, &mut comparisons);
    comparisons
}

pub(crate) fn sort_range<T: AsRef<[u8]>, R: Rng>(
    data: &mut [T],
    mut lo: usize,
    mut hi: usize,
    mut depth: usize,
    rng: &mut R,
    comparisons: &mut u64,
) {
    // Recurse into the two smaller partitions and loop on the largest,
    // keeping the call stack logarithmic even on adversarial inputs.
    while hi - lo > 1 {
        let head = partition_exhausted(data, lo, hi, depth);
        if head == hi {
            return;
        }

        let pivot_index = rng.random_range(head..hi);
        data.swap(head, pivot_index);
        let pivot = data[head].as_ref()[depth];

        let (mut lower, mut upper) = (head, hi - 1);
        let mut current = head + 1;
        while current <= upper {
            *comparisons += 1;
            let byte = data[current].as_ref()[depth];
            if byte < pivot {
                data.swap(lower, current);
                lower += 1;
                current += 1;
            } else if byte > pivot {
                data.swap(current, upper);
                upper -= 1;
            } else {
                current += 1;
            }
        }

        let parts = [
            (head, lower, depth),
            (lower, upper + 1, depth + 1),
            (upper + 1, hi, depth),
        ];
        let mut largest = 0;
        for idx in 1..parts.len() {
            if parts[idx].1 - parts[idx].0 > parts[largest].1 - parts[largest].0 {
                largest = idx;
            }
        }
        for (idx, &(start, end, d)) in parts.iter().enumerate() {
            if idx != largest {
                sort_range(data, start, end, d, rng, comparisons);
            }
        }
        (lo, hi, depth) = parts[largest];
    }
}
