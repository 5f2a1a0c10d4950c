//! Core traits and types for the instrumented kernels.
//!
//! This module defines:
//! - [`Counters`]: The operation tally a counted invocation hands back to its caller.
//! - Tally: Internal hook threaded through every sort and search step.
//! - [`Interpolate`]: Numeric view of an element used by interpolation-seeded search.

use cuneiform::cuneiform;
use std::ops::{Add, AddAssign};

/// Operation counts recorded during a single top-level sort or search call.
///
/// `swaps` counts exchanges for the swap-based algorithms (bubble sort, quicksort) and element
/// moves for the shift- and merge-based ones (insertion, binary insertion, merge sort).
///
/// A fresh value is created by every `*_counted` entry point and returned once the call
/// completes, so counts never leak between invocations.
///
/// # Examples
///
/// ```
/// use sortlab::quicksort_counted;
///
/// let mut data: Vec<u32> = (0..16).collect();
/// let counters = quicksort_counted(&mut data);
///
/// assert_eq!(counters.comparisons, 120);
/// ```
#[cuneiform]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Counters {
    /// Creates a zeroed record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of recorded operations.
    pub fn total(&self) -> u64 {
        self.comparisons + self.swaps
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
    }
}

impl Add for Counters {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Instrumentation hook passed by `&mut` through the kernels.
///
/// The unit type is the no-op hook used by the uncounted entry points, so both flavours run the
/// exact same code.
pub(crate) trait Tally {
    fn compare(&mut self);

    fn swap(&mut self);

    fn moves(&mut self, n: usize);
}

impl Tally for Counters {
    #[inline(always)]
    fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline(always)]
    fn swap(&mut self) {
        self.swaps += 1;
    }

    #[inline(always)]
    fn moves(&mut self, n: usize) {
        self.swaps += n as u64;
    }
}

impl Tally for () {
    #[inline(always)]
    fn compare(&mut self) {}

    #[inline(always)]
    fn swap(&mut self) {}

    #[inline(always)]
    fn moves(&mut self, _n: usize) {}
}

/// Elements that can be placed on a number line for interpolation.
///
/// The mapping must be monotonic with respect to [`Ord`]: `a <= b` implies
/// `a.as_scalar() <= b.as_scalar()`.
///
/// # Examples
///
/// Implementing for a newtype key:
///
/// ```
/// use sortlab::core::Interpolate;
///
/// #[derive(PartialEq, Eq, PartialOrd, Ord)]
/// struct Timestamp(u64);
///
/// impl Interpolate for Timestamp {
///     fn as_scalar(&self) -> f64 {
///         self.0 as f64
///     }
/// }
/// ```
pub trait Interpolate: Ord {
    /// Returns the position of `self` on the number line.
    fn as_scalar(&self) -> f64;
}

macro_rules! impl_interpolate {
    ($($t:ty),* $(,)?) => {
        $(
            impl Interpolate for $t {
                #[inline(always)]
                fn as_scalar(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_interpolate!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);
