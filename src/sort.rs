//! Comparison sorts with optional operation counting.
//!
//! Each algorithm comes in two flavours:
//! - a plain entry point that sorts in place, and
//! - a `*_counted` entry point that additionally returns the [`Counters`] tallied during the run.
//!
//! Both flavours share a single generic implementation; the plain one threads a zero-sized
//! hook through it.
//!
//! Empty and single-element slices are left untouched and report zero operations.

use crate::core::{Counters, Tally};

/// Sorts the slice with a top-down, stable merge sort.
///
/// The range `[0, len)` is split at `mid = (len - 1) / 2`, both halves are sorted recursively
/// and then merged through two temporary buffers. Ties keep the left run first, so equal
/// elements retain their relative order.
///
/// Recursion depth is `O(log n)`; auxiliary space is `O(n)`.
///
/// # Examples
///
/// ```
/// use sortlab::merge_sort;
///
/// let mut data = vec![8, 42, 25, 3, 3, 2, 27, 3];
/// merge_sort(&mut data);
///
/// assert_eq!(data, vec![2, 3, 3, 3, 8, 25, 27, 42]);
/// ```
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort_impl(v, &mut ());
}

/// [`merge_sort`] returning one comparison per merge step and one move per element written back.
pub fn merge_sort_counted<T: Ord + Clone>(v: &mut [T]) -> Counters {
    let mut counters = Counters::new();
    merge_sort_impl(v, &mut counters);
    counters
}

fn merge_sort_impl<T: Ord + Clone, C: Tally>(v: &mut [T], tally: &mut C) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = (len - 1) / 2;
    let (left, right) = v.split_at_mut(mid + 1);
    merge_sort_impl(left, tally);
    merge_sort_impl(right, tally);
    merge(v, mid + 1, tally);
}

/// Merges the sorted runs `v[..split]` and `v[split..]`.
fn merge<T: Ord + Clone, C: Tally>(v: &mut [T], split: usize, tally: &mut C) {
    let left = v[..split].to_vec();
    let right = v[split..].to_vec();

    let (mut i, mut j) = (0, 0);
    let mut out = 0;

    while i < left.len() && j < right.len() {
        tally.compare();
        if left[i] <= right[j] {
            v[out] = left[i].clone();
            i += 1;
        } else {
            v[out] = right[j].clone();
            j += 1;
        }
        tally.moves(1);
        out += 1;
    }

    // At most one of the runs has anything left.
    for item in left[i..].iter().chain(right[j..].iter()) {
        v[out] = item.clone();
        tally.moves(1);
        out += 1;
    }
}

/// Sorts the slice with bubble sort, stopping after the first pass that exchanges nothing.
///
/// Already sorted input finishes after a single pass (`n - 1` comparisons).
pub fn bubble_sort<T: Ord>(v: &mut [T]) {
    bubble_sort_impl(v, true, &mut ());
}

/// Bubble sort without the early exit, returning its counts.
///
/// Every pass runs to completion, so the comparison count is always `n(n - 1) / 2` regardless of
/// the input's content. Swaps equal the number of inversions.
///
/// # Examples
///
/// ```
/// use sortlab::bubble_sort_counted;
///
/// let mut data = vec![8, 42, 25, 3, 3, 2, 27, 3];
/// let counters = bubble_sort_counted(&mut data);
///
/// assert_eq!(counters.comparisons, 28);
/// ```
pub fn bubble_sort_counted<T: Ord>(v: &mut [T]) -> Counters {
    let mut counters = Counters::new();
    bubble_sort_impl(v, false, &mut counters);
    counters
}

fn bubble_sort_impl<T: Ord, C: Tally>(v: &mut [T], early_exit: bool, tally: &mut C) {
    let len = v.len();

    for i in 0..len {
        let mut swapped = false;
        for j in 0..len - i - 1 {
            tally.compare();
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                tally.swap();
                swapped = true;
            }
        }

        if early_exit && !swapped {
            break;
        }
    }
}

/// Sorts the slice with linear insertion sort.
///
/// Each new element is walked backwards past every larger element of the sorted prefix.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_impl(v, &mut ());
}

/// [`insertion_sort`] returning one comparison per `key < v[j]` test and one move per shift.
pub fn insertion_sort_counted<T: Ord>(v: &mut [T]) -> Counters {
    let mut counters = Counters::new();
    insertion_sort_impl(v, &mut counters);
    counters
}

fn insertion_sort_impl<T: Ord, C: Tally>(v: &mut [T], tally: &mut C) {
    for i in 1..v.len() {
        // v[j] always holds the key being inserted.
        let mut j = i;
        while j > 0 {
            tally.compare();
            if v[j] < v[j - 1] {
                v.swap(j - 1, j);
                tally.moves(1);
                j -= 1;
            } else {
                break;
            }
        }
    }
}

/// Sorts the slice with binary insertion sort.
///
/// The insertion point of each element is located by binary search over the sorted prefix
/// (see [`insertion_point`]); the element is then rotated into place. This keeps the
/// `O(n log n)` comparison bound while moves stay `O(n^2)`.
pub fn binary_insertion_sort<T: Ord>(v: &mut [T]) {
    binary_insertion_sort_impl(v, &mut ());
}

/// [`binary_insertion_sort`] returning search comparisons and one move per shifted element.
pub fn binary_insertion_sort_counted<T: Ord>(v: &mut [T]) -> Counters {
    let mut counters = Counters::new();
    binary_insertion_sort_impl(v, &mut counters);
    counters
}

fn binary_insertion_sort_impl<T: Ord, C: Tally>(v: &mut [T], tally: &mut C) {
    for i in 1..v.len() {
        let (prefix, rest) = v.split_at(i);
        let j = insertion_point_impl(prefix, &rest[0], tally);

        if j < i {
            v[j..=i].rotate_right(1);
            tally.moves(i - j);
        }
    }
}

/// Returns the index at which `key` should be inserted into the sorted slice.
///
/// - An empty slice yields `0`.
/// - A single element yields `0` when it is greater than `key`, `1` otherwise.
/// - In longer ranges an element equal to `key` that the search lands on is returned as-is.
///
/// # Examples
///
/// ```
/// use sortlab::insertion_point;
///
/// assert_eq!(insertion_point(&[5], &3), 0);
/// assert_eq!(insertion_point(&[5], &7), 1);
/// assert_eq!(insertion_point(&[1, 4, 9], &5), 2);
/// ```
pub fn insertion_point<T: Ord>(sorted: &[T], key: &T) -> usize {
    insertion_point_impl(sorted, key, &mut ())
}

fn insertion_point_impl<T: Ord, C: Tally>(sorted: &[T], key: &T, tally: &mut C) -> usize {
    // Half-open window [start, end).
    let (mut start, mut end) = (0, sorted.len());

    while start < end {
        if end - start == 1 {
            tally.compare();
            return if sorted[start] > *key { start } else { start + 1 };
        }

        let mid = (start + end - 1) / 2;
        tally.compare();
        if sorted[mid] < *key {
            start = mid + 1;
        } else {
            tally.compare();
            if sorted[mid] > *key {
                end = mid;
            } else {
                return mid;
            }
        }
    }

    start
}

/// Sorts the slice with quicksort using the Lomuto partition scheme.
///
/// The pivot is always the last element of the current range. Already sorted (or reverse
/// sorted) input therefore degrades to `O(n^2)` comparisons.
///
/// Only the smaller partition is recursed into; the larger one is handled by the loop, so the
/// call stack stays `O(log n)` deep even for the degenerate inputs.
pub fn quicksort<T: Ord>(v: &mut [T]) {
    quicksort_impl(v, &mut ());
}

/// [`quicksort`] returning one comparison per `v[j] <= pivot` test and one swap per exchange.
///
/// On the ascending sequence `0..n` this performs exactly `n(n - 1) / 2` comparisons.
pub fn quicksort_counted<T: Ord>(v: &mut [T]) -> Counters {
    let mut counters = Counters::new();
    quicksort_impl(v, &mut counters);
    counters
}

fn quicksort_impl<T: Ord, C: Tally>(mut v: &mut [T], tally: &mut C) {
    while v.len() > 1 {
        let pivot = lomuto_partition(v, tally);

        let (left, right) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort_impl(left, tally);
            v = right;
        } else {
            quicksort_impl(right, tally);
            v = left;
        }
    }
}

/// Partitions `v` around its last element and returns the pivot's final index.
///
/// Afterwards every element before the pivot is `<=` it and every element after is `>` it.
fn lomuto_partition<T: Ord, C: Tally>(v: &mut [T], tally: &mut C) -> usize {
    let pivot = v.len() - 1;
    let mut boundary = 0;

    for j in 0..pivot {
        tally.compare();
        if v[j] <= v[pivot] {
            v.swap(boundary, j);
            tally.swap();
            boundary += 1;
        }
    }

    v.swap(boundary, pivot);
    tally.swap();
    boundary
}
