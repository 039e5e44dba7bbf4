//! hybridsort: insertion, merge and hybrid sort, plus the machinery to time
//! them and find where the quadratic sort stops paying off.
//!
//! The sort providers never mutate their input; each returns a freshly
//! ordered `Vec`. All three are stable.
//!
//! # Example
//!
//! ```
//! use hybridsort::{hybrid_sort, insertion_sort, merge_sort};
//!
//! let data = vec![5, 3, 9, 1, 3];
//!
//! assert_eq!(insertion_sort(&data), vec![1, 3, 3, 5, 9]);
//! assert_eq!(merge_sort(&data), vec![1, 3, 3, 5, 9]);
//! assert_eq!(hybrid_sort(&data, 2), vec![1, 3, 3, 5, 9]);
//!
//! // The input is untouched.
//! assert_eq!(data, vec![5, 3, 9, 1, 3]);
//! ```

use std::cmp::Ordering;

pub mod algorithm;
pub mod crossover;
pub mod dataset;
pub mod error;
pub mod report;
pub mod statistics;
pub mod timer;
pub mod trials;

pub use algorithm::Algorithm;
pub use crossover::{find_n0, find_n0_with, CrossoverConfig, CrossoverSearch, InputPolicy};
pub use error::BenchError;
pub use report::ResultSet;
pub use statistics::{summarize, Summary};
pub use timer::{measure, Probe, WallClock};
pub use trials::{collect_sample, run_trials};

/// Sorts a copy of `seq` with insertion sort.
///
/// This is a convenience wrapper around [`insertion_sort_by`] for types that implement `Ord`.
pub fn insertion_sort<T>(seq: &[T]) -> Vec<T>
where
    T: Clone + Ord,
{
    insertion_sort_by(seq, T::cmp)
}

/// Sorts a copy of `seq` with insertion sort, using a custom comparator.
///
/// Each element is shifted left past every predecessor that compares
/// `Greater`, so equal elements never swap and the sort is stable.
/// Quadratic in general, linear on already ordered input.
pub fn insertion_sort_by<T, F>(seq: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut out = seq.to_vec();
    insertion_sort_in_place(&mut out, &cmp);
    out
}

fn insertion_sort_in_place<T, F>(arr: &mut [T], cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && cmp(&arr[j - 1], &arr[j]) == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts a copy of `seq` with top-down merge sort.
///
/// This is a convenience wrapper around [`merge_sort_by`] for types that implement `Ord`.
pub fn merge_sort<T>(seq: &[T]) -> Vec<T>
where
    T: Clone + Ord,
{
    merge_sort_by(seq, T::cmp)
}

/// Sorts a copy of `seq` with top-down merge sort, using a custom comparator.
///
/// Splits at `len / 2`, sorts both halves recursively and merges them with
/// [`merge_by`]. Sequences of length 0 or 1 are returned as they are.
pub fn merge_sort_by<T, F>(seq: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    split_and_merge(seq, 0, &cmp)
}

/// Sorts a copy of `seq` with merge sort, handing every subsequence of
/// length `<= n0` to insertion sort.
///
/// This is a convenience wrapper around [`hybrid_sort_by`] for types that implement `Ord`.
///
/// # Example
///
/// ```
/// use hybridsort::hybrid_sort;
///
/// let data: Vec<u32> = (0..100).rev().collect();
/// let sorted = hybrid_sort(&data, 16);
/// assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn hybrid_sort<T>(seq: &[T], n0: usize) -> Vec<T>
where
    T: Clone + Ord,
{
    hybrid_sort_by(seq, n0, T::cmp)
}

/// Hybrid merge/insertion sort with a custom comparator.
///
/// `n0 == 0` never reaches insertion sort and behaves exactly like
/// [`merge_sort_by`].
pub fn hybrid_sort_by<T, F>(seq: &[T], n0: usize, cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    split_and_merge(seq, n0, &cmp)
}

/// Shared recursion for merge and hybrid sort. `cutoff == 0` is plain merge sort.
fn split_and_merge<T, F>(seq: &[T], cutoff: usize, cmp: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }
    if seq.len() <= cutoff {
        let mut out = seq.to_vec();
        insertion_sort_in_place(&mut out, cmp);
        return out;
    }

    let mid = seq.len() / 2;
    let left = split_and_merge(&seq[..mid], cutoff, cmp);
    let right = split_and_merge(&seq[mid..], cutoff, cmp);

    merge_by(&left, &right, cmp)
}

/// Merges two ordered sequences into a new ordered sequence.
///
/// This is a convenience wrapper around [`merge_by`] for types that implement `Ord`.
pub fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Clone + Ord,
{
    merge_by(left, right, T::cmp)
}

/// Two-pointer merge with a custom comparator. On ties the left element goes first.
pub fn merge_by<T, F>(left: &[T], right: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut result: Vec<T> = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if cmp(&left[i], &right[j]) != Ordering::Greater {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}
