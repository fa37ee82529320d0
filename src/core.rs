//! Comparison primitives shared by every sort in the crate.
//!
//! This module defines:
//! - [`compare_from`]: byte-wise lexicographic comparison that resumes at a
//!   known-equal offset.
//! - `partition_exhausted`: moves keys fully consumed at the current depth to
//!   the front of a working range.

use std::cmp::Ordering;

/// Compares `a` and `b` lexicographically by raw byte value, starting at
/// `start` — an offset up to which both keys are already known to be equal.
///
/// Scanning stops at the first mismatching byte or when either key runs out.
/// Returns the ordering together with the offset at which scanning stopped,
/// i.e. the new verified-equal prefix length. A key that runs out first is a
/// strict prefix of the other and orders before it; `Ordering::Equal` is only
/// returned when both keys end exactly at the same offset.
///
/// Charges one unit to `comparisons` per byte pair examined, plus one for the
/// terminal equality/prefix check.
#[inline(always)]
pub fn compare_from(a: &[u8], b: &[u8], start: usize, comparisons: &mut u64) -> (Ordering, usize) {
    let mut i = start;
    while i < a.len() && i < b.len() {
        *comparisons += 1;
        if a[i] != b[i] {
            let order = if a[i] < b[i] {
                Ordering::Less
            } else {
                Ordering::Greater
            };
            return (order, i);
        }
        i += 1;
    }

    *comparisons += 1;
    let order = if i == a.len() && i == b.len() {
        Ordering::Equal
    } else if i == a.len() {
        Ordering::Less
    } else {
        Ordering::Greater
    };
    (order, i)
}

/// Moves every key of `data[lo..hi]` whose length equals `depth` to the front
/// of the range and returns the index of the first key that still has a byte
/// at `depth`.
///
/// Keys in a range processed at `depth` share their first `depth` bytes, so
/// the extracted keys are mutually equal and already occupy their final
/// position: they order strictly before any key with a byte at `depth`.
/// Every depth-indexed byte read in this crate happens behind this extraction.
pub(crate) fn partition_exhausted<T: AsRef<[u8]>>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    depth: usize,
) -> usize {
    let mut head = lo;
    for i in lo..hi {
        if data[i].as_ref().len() == depth {
            data.swap(head, i);
            head += 1;
        }
    }
    head
}
