//! Merge sort that carries a longest-common-prefix hint with every key.
//!
//! Each key is paired with the number of leading bytes already verified equal
//! to its neighbor at the current merge frontier. During a merge, a strictly
//! larger cached LCP means more agreement with the previously emitted key, so
//! that head wins without touching any bytes. Only when both heads carry the
//! same LCP does the comparator run, and it resumes at that shared offset
//! instead of rescanning the prefix.

use crate::core::compare_from;
use std::cmp::Ordering;

/// A key plus the number of leading bytes known to match the key it was last
/// measured against during the current merge pass. Invariant:
/// `lcp <= key.len()`. Lives only for the duration of one sort call.
#[derive(Clone)]
struct LcpEntry<T> {
    key: T,
    lcp: usize,
}

/// Sorts `data` with a merge sort that skips re-scanning verified prefixes.
///
/// Returns the number of byte comparisons performed.
pub fn lcp_merge_sort<T: AsRef<[u8]> + Clone>(data: &mut [T]) -> u64 {
    let mut comparisons = 0;
    if data.len() <= 1 {
        return comparisons;
    }

    let mut entries: Vec<LcpEntry<T>> = data
        .iter()
        .map(|key| LcpEntry {
            key: key.clone(),
            lcp: 0,
        })
        .collect();

    sort_entries(&mut entries, &mut comparisons);

    for (slot, entry) in data.iter_mut().zip(entries) {
        *slot = entry.key;
    }
    comparisons
}

fn sort_entries<T: AsRef<[u8]> + Clone>(entries: &mut [LcpEntry<T>], comparisons: &mut u64) {
    if entries.len() <= 1 {
        return;
    }
    let mid = entries.len() / 2;
    {
        let (left, right) = entries.split_at_mut(mid);
        sort_entries(left, comparisons);
        sort_entries(right, comparisons);
    }
    merge_entries(entries, mid, comparisons);
}

fn merge_entries<T: AsRef<[u8]> + Clone>(
    entries: &mut [LcpEntry<T>],
    mid: usize,
    comparisons: &mut u64,
) {
    let mut left = entries[..mid].to_vec();
    let mut right = entries[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        match left[i].lcp.cmp(&right[j].lcp) {
            // The head agreeing further with the previously emitted key is
            // necessarily the smaller one; no bytes need to be read.
            Ordering::Greater => {
                entries[k] = left[i].clone();
                i += 1;
            }
            Ordering::Less => {
                entries[k] = right[j].clone();
                j += 1;
            }
            Ordering::Equal => {
                let shared = left[i].lcp;
                let (order, scanned) = compare_from(
                    left[i].key.as_ref(),
                    right[j].key.as_ref(),
                    shared,
                    comparisons,
                );
                // The losing head now agrees with the new merge frontier up
                // to the offset where scanning stopped.
                if order == Ordering::Less {
                    entries[k] = left[i].clone();
                    i += 1;
                    right[j].lcp = scanned;
                } else {
                    entries[k] = right[j].clone();
                    j += 1;
                    left[i].lcp = scanned;
                }
            }
        }
        k += 1;
    }

    // Tail LCPs are stale relative to the new frontier, but relative order
    // within one half is already established by the recursive sort.
    while i < left.len() {
        entries[k] = left[i].clone();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        entries[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}
