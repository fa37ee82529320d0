//! MSD radix sort and the radix/quicksort hybrid.
//!
//! Both sorts distribute a working range into 256 buckets keyed by the byte at
//! the current depth, using a counting pass, a prefix-sum over the counts, and
//! a stable pass through a scratch buffer. Each non-empty bucket then becomes
//! a new working range one byte deeper. The hybrid hands ranges below
//! [`TERNARY_CUTOFF`] to the ternary quicksort instead, where histogram
//! overhead would dominate.

use crate::core::partition_exhausted;
use crate::quick;
use cuneiform::cuneiform;
use rand::Rng;

/// Number of buckets, one per byte value.
const RADIX_BUCKETS: usize = 256;

/// Working ranges smaller than this skip the histogram and go straight to the
/// ternary quicksort. A tuning constant, not a correctness boundary: any
/// non-negative value sorts correctly.
pub const TERNARY_CUTOFF: usize = 74;

// Cache-aligned bucket counts.
#[cuneiform]
struct BucketCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Sorts `data` with a most-significant-byte radix sort.
///
/// Returns the number of comparison units performed: one per key during each
/// counting pass and one per key moved during each distribution pass.
pub fn msd_radix_sort<T: AsRef<[u8]> + Clone>(data: &mut [T]) -> u64 {
    let mut comparisons = 0;
    // Explicit work list instead of per-bucket recursion: the partition tree
    // can be as deep as the longest key.
    let mut tasks = vec![(0, data.len(), 0)];
    while let Some((lo, hi, depth)) = tasks.pop() {
        if hi - lo <= 1 {
            continue;
        }
        distribute(data, lo, hi, depth, &mut tasks, &mut comparisons);
    }
    comparisons
}

/// Sorts `data` with an MSD radix sort that falls back to the ternary
/// quicksort for working ranges below [`TERNARY_CUTOFF`].
///
/// Returns the number of comparison units performed.
pub fn radix_quick_sort<T: AsRef<[u8]> + Clone>(data: &mut [T]) -> u64 {
    radix_quick_sort_with(data, &mut rand::rng())
}

/// Same as [`radix_quick_sort`], but draws the fallback quicksort's pivot
/// positions from the supplied random source.
pub fn radix_quick_sort_with<T: AsRef<[u8]> + Clone, R: Rng>(data: &mut [T], rng: &mut R) -> u64 {
    let mut comparisons = 0;
    let mut tasks = vec![(0, data.len(), 0)];
    while let Some((lo, hi, depth)) = tasks.pop() {
        if hi - lo <= 1 {
            continue;
        }
        if hi - lo < TERNARY_CUTOFF {
            quick::sort_range(data, lo, hi, depth, rng, &mut comparisons);
            continue;
        }
        distribute(data, lo, hi, depth, &mut tasks, &mut comparisons);
    }
    comparisons
}

/// One counting-distribution step over `data[lo..hi]` at `depth`.
///
/// Extracts exhausted keys, histograms the remaining keys' bytes at `depth`,
/// converts counts to bucket start offsets, redistributes the keys stably
/// through a scratch buffer, and queues each bucket of two or more keys for
/// the next depth.
fn distribute<T: AsRef<[u8]> + Clone>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    depth: usize,
    tasks: &mut Vec<(usize, usize, usize)>,
    comparisons: &mut u64,
) {
    let head = partition_exhausted(data, lo, hi, depth);
    if head == hi {
        return;
    }

    let mut counts = BucketCounts {
        data: [0; RADIX_BUCKETS],
    };
    let counts = &mut counts.data;

    for i in head..hi {
        *comparisons += 1;
        counts[data[i].as_ref()[depth] as usize] += 1;
    }

    let mut offsets = [0usize; RADIX_BUCKETS];
    let mut sum = 0;
    offsets
        .iter_mut()
        .zip(counts.iter())
        .for_each(|(offset, &count)| {
            *offset = sum;
            sum += count;
        });

    // Stable distribution: scan the scratch copy in order and place each key
    // at its bucket cursor.
    let buffer = data[head..hi].to_vec();
    let mut cursors = offsets;
    for key in buffer {
        *comparisons += 1;
        let bucket = key.as_ref()[depth] as usize;
        data[head + cursors[bucket]] = key;
        cursors[bucket] += 1;
    }

    for bucket in 0..RADIX_BUCKETS {
        let start = head + offsets[bucket];
        let end = start + counts[bucket];
        if end - start > 1 {
            tasks.push((start, end, depth + 1));
        }
    }
}
