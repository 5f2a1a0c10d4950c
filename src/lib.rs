//! # Sortlab
//!
//! `sortlab` provides classic comparison sorts and searches instrumented to report how many
//! comparisons and swaps they perform, so their cost can be measured against input size.
//!
//! ## Algorithms
//!
//! - **Sorts**: merge sort, bubble sort, insertion sort, binary insertion sort and quicksort
//!   (Lomuto partition, last-element pivot).
//! - **Searches**: linear search, binary search and an interpolation-seeded binary search.
//!
//! Every algorithm has a plain entry point and a `*_counted` one returning [`Counters`]. Counts
//! are deterministic for a given input; each counted call starts from zero.
//!
//! ## Usage
//!
//! ```rust
//! use sortlab::prelude::*;
//!
//! let mut data: Vec<u32> = (0..16).collect();
//! let counters = quicksort_counted(&mut data);
//!
//! // Ascending input is quicksort's worst case: n(n - 1) / 2 comparisons.
//! assert_eq!(counters.comparisons, 120);
//! assert_eq!(binary_search(&data, &7), Some(7));
//! ```
//!
//! ### Comparing strategies
//!
//! The [`analysis`] module generates best, worst and random inputs, profiles the counted entry
//! points across a ladder of sizes, and finds where one series overtakes another.
//!
//! ```rust
//! use sortlab::analysis::{InputCase, ProfileConfig, SortAlgorithm, profile_sort};
//!
//! let config = ProfileConfig {
//!     sizes: vec![10, 100],
//!     ..ProfileConfig::default()
//! };
//! let samples = profile_sort(SortAlgorithm::Bubble, InputCase::Random, &config);
//!
//! assert_eq!(samples[1].counters.comparisons, 4950);
//! ```
//!
//! ## Stack depth
//!
//! Quicksort only recurses into its smaller partition, so even the quadratic inputs keep the
//! call stack logarithmic. Merge sort splits evenly and recurses `O(log n)` deep.

pub mod analysis;
pub mod core;
pub mod error;
pub mod search;
pub mod sort;

pub use crate::core::{Counters, Interpolate};
pub use crate::error::{AnalysisError, SearchError};
pub use crate::search::{
    binary_search, binary_search_checked, binary_search_counted, ensure_sorted,
    interpolation_search, interpolation_search_checked, interpolation_search_counted,
    interpolation_seed, linear_search, linear_search_counted,
};
pub use crate::sort::{
    binary_insertion_sort, binary_insertion_sort_counted, bubble_sort, bubble_sort_counted,
    insertion_point, insertion_sort, insertion_sort_counted, merge_sort, merge_sort_counted,
    quicksort, quicksort_counted,
};

pub mod prelude {
    pub use crate::core::{Counters, Interpolate};
    pub use crate::error::SearchError;
    pub use crate::search::{
        binary_search, binary_search_checked, binary_search_counted, interpolation_search,
        interpolation_search_counted, linear_search, linear_search_counted,
    };
    pub use crate::sort::{
        binary_insertion_sort, binary_insertion_sort_counted, bubble_sort, bubble_sort_counted,
        insertion_sort, insertion_sort_counted, merge_sort, merge_sort_counted, quicksort,
        quicksort_counted,
    };
}
