//! # Lcpsort
//!
//! `lcpsort` is a family of in-place string sorting algorithms that exploit shared
//! prefixes to skip redundant byte comparisons.
//!
//! Byte-at-a-time string sorts never re-examine a position that is already known to
//! be equal: the merge sort carries a longest-common-prefix (LCP) hint with every
//! key, while the quicksort and radix variants partition on one byte position at a
//! time and only ever advance that position once a group of keys agrees on it.
//!
//! ## Algorithms
//!
//! - [`merge_sort`] / [`quick_sort`]: plain whole-string sorts. They exploit
//!   nothing and exist as the correctness and comparison-count baseline the
//!   prefix-aware sorts are validated against.
//! - [`lcp_merge_sort`]: merge sort whose merge step orders heads by their cached
//!   LCP values first and only falls back to byte comparison on a tie, resuming at
//!   the already-verified offset.
//! - [`ternary_quick_sort`]: three-way (Bentley–Sedgewick style) quicksort that
//!   partitions on a single byte position around a randomly chosen pivot.
//! - [`msd_radix_sort`]: most-significant-byte radix sort using a 256-way counting
//!   distribution per byte position.
//! - [`radix_quick_sort`]: MSD radix sort that hands working ranges below 74
//!   elements to the ternary quicksort, avoiding histogram overhead on small
//!   buckets.
//!
//! All five produce byte-identical output for the same input; they differ only in
//! comparison count and runtime.
//!
//! ## Usage
//!
//! Every sort works on a mutable slice of anything byte-slice-like
//! (`&str`, `String`, `Vec<u8>`, ...), sorts it in place, and returns the number
//! of comparisons it performed.
//!
//! ```rust
//! use lcpsort::radix_quick_sort;
//!
//! let mut data = vec!["banana", "apple", "band", "ba", "bandana"];
//! radix_quick_sort(&mut data);
//!
//! assert_eq!(data, vec!["apple", "ba", "banana", "band", "bandana"]);
//! ```
//!
//! ## Instrumentation
//!
//! The return value counts units of comparison work: one per key pair for the
//! whole-string baselines, one per byte position examined for the byte-at-a-time
//! sorts. Timing and aggregation are left to the caller (the bench targets in
//! this repository use criterion for both).
//!
//! ```rust
//! use lcpsort::{lcp_merge_sort, merge_sort};
//!
//! let mut a = vec!["prefix_one", "prefix_two", "prefix_ten"];
//! let mut b = a.clone();
//!
//! let plain = merge_sort(&mut a);
//! let lcp = lcp_merge_sort(&mut b);
//!
//! assert_eq!(a, b);
//! assert!(plain > 0 && lcp > 0);
//! ```
//!
//! ## Reproducibility
//!
//! The quicksort-based variants pick pivots from a process-local random source by
//! default. Sorted output is invariant to pivot choice; to also make comparison
//! counts reproducible, hand a seeded generator to the `_with` entry points:
//!
//! ```rust
//! use lcpsort::ternary_quick_sort_with;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut data = vec!["cherry", "apple", "banana"];
//! ternary_quick_sort_with(&mut data, &mut StdRng::seed_from_u64(42));
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry"]);
//! ```
//!
//! ## Performance characteristics
//!
//! - The byte-at-a-time sorts approach O(total input bytes) on data with long
//!   shared prefixes, where whole-string comparison sorts pay O(prefix) per
//!   comparison.
//! - The radix variants trade an auxiliary buffer (one working range's worth of
//!   keys per distribution step) for stable linear-time bucketing.
//! - All algorithms bound their call-stack depth to O(log n): the quicksorts
//!   iterate on their largest partition, the radix sorts drain an explicit work
//!   list.

pub mod baseline;
pub mod core;
pub mod merge;
pub mod quick;
pub mod radix;

pub use baseline::{merge_sort, quick_sort};
pub use merge::lcp_merge_sort;
pub use quick::{ternary_quick_sort, ternary_quick_sort_with};
pub use radix::{msd_radix_sort, radix_quick_sort, radix_quick_sort_with};

pub mod prelude {
    pub use crate::baseline::{merge_sort, quick_sort};
    pub use crate::merge::lcp_merge_sort;
    pub use crate::quick::{ternary_quick_sort, ternary_quick_sort_with};
    pub use crate::radix::{msd_radix_sort, radix_quick_sort, radix_quick_sort_with};
}
