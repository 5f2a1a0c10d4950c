//! Linear, binary and interpolation-seeded binary search.
//!
//! All searches return `Some(index)` of a matching element or `None` when the key is absent.
//! The binary variants require non-decreasing input; the `*_checked` entry points verify that
//! first and fail with [`SearchError::Unsorted`] instead of returning a meaningless answer.
//!
//! Under duplicate keys the binary variants return whichever matching index the halving lands
//! on; only [`linear_search`] guarantees the first occurrence.

use crate::core::{Counters, Interpolate, Tally};
use crate::error::SearchError;
use log::trace;
use std::cmp::Ordering;

/// Scans left to right and returns the index of the first element equal to `key`.
pub fn linear_search<T: PartialEq>(v: &[T], key: &T) -> Option<usize> {
    linear_search_impl(v, key, &mut ())
}

/// [`linear_search`] returning one comparison per inspected element.
pub fn linear_search_counted<T: PartialEq>(v: &[T], key: &T) -> (Option<usize>, Counters) {
    let mut counters = Counters::new();
    let found = linear_search_impl(v, key, &mut counters);
    (found, counters)
}

fn linear_search_impl<T: PartialEq, C: Tally>(v: &[T], key: &T, tally: &mut C) -> Option<usize> {
    v.iter().position(|item| {
        tally.compare();
        item == key
    })
}

/// Iterative binary search over a sorted slice.
///
/// The midpoint is `(low + high) / 2` with floor division over the inclusive window
/// `[low, high]`; the search is exhausted once `low > high`.
///
/// # Examples
///
/// ```
/// use sortlab::binary_search;
///
/// let data = [2, 3, 8, 25, 27, 42];
///
/// assert_eq!(binary_search(&data, &25), Some(3));
/// assert_eq!(binary_search(&data, &4), None);
/// ```
pub fn binary_search<T: Ord>(v: &[T], key: &T) -> Option<usize> {
    binary_search_impl(v, key, &mut ())
}

/// [`binary_search`] returning one comparison per probed element.
pub fn binary_search_counted<T: Ord>(v: &[T], key: &T) -> (Option<usize>, Counters) {
    let mut counters = Counters::new();
    let found = binary_search_impl(v, key, &mut counters);
    (found, counters)
}

/// [`binary_search`] that first verifies the slice is sorted.
pub fn binary_search_checked<T: Ord>(v: &[T], key: &T) -> Result<Option<usize>, SearchError> {
    ensure_sorted(v)?;
    Ok(binary_search(v, key))
}

fn binary_search_impl<T: Ord, C: Tally>(v: &[T], key: &T, tally: &mut C) -> Option<usize> {
    if v.is_empty() {
        return None;
    }

    let mid = (v.len() - 1) / 2;
    halve_from(v, key, mid, tally)
}

/// Binary search whose first probe is placed by linear interpolation.
///
/// The first midpoint is [`interpolation_seed`]; every later step falls back to the ordinary
/// floor midpoint. A range whose endpoints are equal cannot be interpolated and starts from the
/// floor midpoint instead.
///
/// # Examples
///
/// ```
/// use sortlab::interpolation_search;
///
/// let data: Vec<u32> = (0..100).map(|i| i * 10).collect();
///
/// assert_eq!(interpolation_search(&data, &370), Some(37));
/// assert_eq!(interpolation_search(&data, &375), None);
/// ```
pub fn interpolation_search<T: Interpolate>(v: &[T], key: &T) -> Option<usize> {
    interpolation_search_impl(v, key, &mut ())
}

/// [`interpolation_search`] returning one comparison per probed element.
pub fn interpolation_search_counted<T: Interpolate>(
    v: &[T],
    key: &T,
) -> (Option<usize>, Counters) {
    let mut counters = Counters::new();
    let found = interpolation_search_impl(v, key, &mut counters);
    (found, counters)
}

/// [`interpolation_search`] that first verifies the slice is sorted.
pub fn interpolation_search_checked<T: Interpolate>(
    v: &[T],
    key: &T,
) -> Result<Option<usize>, SearchError> {
    ensure_sorted(v)?;
    Ok(interpolation_search(v, key))
}

fn interpolation_search_impl<T: Interpolate, C: Tally>(
    v: &[T],
    key: &T,
    tally: &mut C,
) -> Option<usize> {
    let mid = interpolation_seed(v, key)?;
    halve_from(v, key, mid, tally)
}

/// Returns the first midpoint probed by [`interpolation_search`], or `None` for an empty slice.
///
/// With `low = 0` and `high = len - 1` the seed is
/// `low + ceil((high - low) * (key - v[low]) / (v[high] - v[low]))`, clamped to `[low, high]`
/// for keys outside the slice's value range. When `v[high] == v[low]` the span is zero and the
/// floor midpoint `(low + high) / 2` is used.
pub fn interpolation_seed<T: Interpolate>(v: &[T], key: &T) -> Option<usize> {
    let high = v.len().checked_sub(1)?;
    let low = 0;

    let base = v[low].as_scalar();
    let span = v[high].as_scalar() - base;
    if span == 0.0 {
        trace!("zero interpolation span over [{low}, {high}], using floor midpoint");
        return Some(low + (high - low) / 2);
    }

    let fraction = (key.as_scalar() - base) / span;
    let offset = ((high - low) as f64 * fraction)
        .ceil()
        .clamp(0.0, (high - low) as f64);

    Some(low + offset as usize)
}

/// Halving loop shared by both binary variants, starting at `mid` over the whole slice.
fn halve_from<T: Ord, C: Tally>(v: &[T], key: &T, mut mid: usize, tally: &mut C) -> Option<usize> {
    let (mut low, mut high) = (0, v.len() - 1);

    loop {
        tally.compare();
        match v[mid].cmp(key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }

        if low > high {
            return None;
        }
        mid = low + (high - low) / 2;
    }
}

/// Verifies that `v` is in non-decreasing order.
///
/// # Errors
///
/// Returns [`SearchError::Unsorted`] with the index of the first element that is greater than
/// its successor.
pub fn ensure_sorted<T: Ord>(v: &[T]) -> Result<(), SearchError> {
    match v.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(index) => Err(SearchError::Unsorted { index }),
        None => Ok(()),
    }
}
