//! Deterministic measurement helpers for comparing the kernels against input size.
//!
//! This module generates the standard input shapes, dispatches to the sorts and search
//! strategies by name, collects [`Counters`] across a ladder of sizes and locates the size at
//! which one series overtakes another. Wall-clock timing lives in the criterion benches.

use crate::core::Counters;
use crate::error::AnalysisError;
use crate::search::{binary_search_counted, linear_search_counted};
use crate::sort::{
    binary_insertion_sort, binary_insertion_sort_counted, bubble_sort, bubble_sort_counted,
    insertion_sort, insertion_sort_counted, merge_sort, merge_sort_counted, quicksort,
    quicksort_counted,
};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Shape of a generated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputCase {
    /// `0, 1, ..., n - 1`. Best case for bubble and insertion sort, worst case for quicksort.
    Ascending,
    /// `n, n - 1, ..., 1`. Worst case for bubble and insertion sort.
    Descending,
    /// `n` distinct values drawn uniformly from `0..10n`, in random order.
    Random,
}

impl InputCase {
    pub const ALL: [InputCase; 3] = [Self::Ascending, Self::Descending, Self::Random];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Random => "random",
        }
    }

    /// Builds an input of length `n`. Only [`InputCase::Random`] draws from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<u64> {
        match self {
            Self::Ascending => (0..n as u64).collect(),
            Self::Descending => (1..=n as u64).rev().collect(),
            Self::Random => rand::seq::index::sample(rng, n * 10, n)
                .into_iter()
                .map(|i| i as u64)
                .collect(),
        }
    }
}

/// The sorts provided by [`crate::sort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Merge,
    Bubble,
    Insertion,
    BinaryInsertion,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        Self::Merge,
        Self::Bubble,
        Self::Insertion,
        Self::BinaryInsertion,
        Self::Quick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Merge => "merge_sort",
            Self::Bubble => "bubble_sort",
            Self::Insertion => "insertion_sort",
            Self::BinaryInsertion => "binary_insertion_sort",
            Self::Quick => "quicksort",
        }
    }

    /// Sorts `v` in place with the uncounted entry point.
    pub fn sort<T: Ord + Clone>(&self, v: &mut [T]) {
        match self {
            Self::Merge => merge_sort(v),
            Self::Bubble => bubble_sort(v),
            Self::Insertion => insertion_sort(v),
            Self::BinaryInsertion => binary_insertion_sort(v),
            Self::Quick => quicksort(v),
        }
    }

    /// Sorts `v` in place with the counted entry point.
    pub fn sort_counted<T: Ord + Clone>(&self, v: &mut [T]) -> Counters {
        match self {
            Self::Merge => merge_sort_counted(v),
            Self::Bubble => bubble_sort_counted(v),
            Self::Insertion => insertion_sort_counted(v),
            Self::BinaryInsertion => binary_insertion_sort_counted(v),
            Self::Quick => quicksort_counted(v),
        }
    }
}

/// Ways of answering a single membership query on unsorted data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Scan the data as given.
    Linear,
    /// Copy the data, quicksort the copy, then binary search it.
    SortThenBinary,
}

impl SearchStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear_search",
            Self::SortThenBinary => "sort_then_binary_search",
        }
    }

    /// Answers the query, returning the found index and the combined counts.
    ///
    /// For [`SearchStrategy::SortThenBinary`] the index refers to the sorted copy.
    pub fn run<T: Ord + Clone>(&self, v: &[T], key: &T) -> (Option<usize>, Counters) {
        match self {
            Self::Linear => linear_search_counted(v, key),
            Self::SortThenBinary => {
                let mut sorted = v.to_vec();
                let sort_counts = quicksort_counted(&mut sorted);
                let (found, search_counts) = binary_search_counted(&sorted, key);
                (found, sort_counts + search_counts)
            }
        }
    }
}

/// Size ladder and sampling parameters for a profiling run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Input sizes, in the order they are profiled.
    pub sizes: Vec<usize>,
    /// Number of queries aggregated per size by [`profile_search`].
    pub tasks: usize,
    /// Seed for the random input generator.
    pub seed: u64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 20, 50, 100, 200, 500, 1000, 2000, 5000, 10000],
            tasks: 100,
            seed: 42,
        }
    }
}

/// Counts aggregated over `runs` invocations at one input size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    pub size: usize,
    pub runs: usize,
    pub counters: Counters,
}

impl Sample {
    pub fn mean_comparisons(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.counters.comparisons as f64 / self.runs as f64
    }

    pub fn mean_swaps(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.counters.swaps as f64 / self.runs as f64
    }
}

/// Sorts one generated input per configured size and records its counts.
pub fn profile_sort(
    algorithm: SortAlgorithm,
    case: InputCase,
    config: &ProfileConfig,
) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    config
        .sizes
        .iter()
        .map(|&size| {
            let mut input = case.generate(size, &mut rng);
            let counters = algorithm.sort_counted(&mut input);
            debug!(
                "{} on {} input of size {size}: {} comparisons, {} swaps",
                algorithm.name(),
                case.name(),
                counters.comparisons,
                counters.swaps
            );
            Sample {
                size,
                runs: 1,
                counters,
            }
        })
        .collect()
}

/// Runs `config.tasks` queries per size, each on a fresh input with a target drawn from it.
pub fn profile_search(
    strategy: SearchStrategy,
    case: InputCase,
    config: &ProfileConfig,
) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    config
        .sizes
        .iter()
        .map(|&size| {
            let mut sample = Sample {
                size,
                ..Sample::default()
            };

            for _ in 0..config.tasks {
                let input = case.generate(size, &mut rng);
                let Some(&target) = input.choose(&mut rng) else {
                    continue;
                };
                let (_, counters) = strategy.run(&input, &target);
                sample.counters += counters;
                sample.runs += 1;
            }

            debug!(
                "{} on {} input of size {size}: {:.1} mean comparisons over {} runs",
                strategy.name(),
                case.name(),
                sample.mean_comparisons(),
                sample.runs
            );
            sample
        })
        .collect()
}

/// Finds the size at which `left` starts costing more than `right`.
///
/// Returns `sizes[i]` for the first `i` with `left[i] <= right[i]` and
/// `left[i + 1] > right[i + 1]`, or `None` if the series never cross that way.
///
/// # Errors
///
/// Returns [`AnalysisError::MismatchedSeries`] unless all three slices have the same length.
///
/// # Examples
///
/// ```
/// use sortlab::analysis::crossover;
///
/// let sizes = [10, 20, 50, 100];
/// let bubble = [45.0, 190.0, 1225.0, 4950.0];
/// let quick = [60.0, 150.0, 400.0, 900.0];
///
/// assert_eq!(crossover(&sizes, &bubble, &quick), Ok(Some(10)));
/// ```
pub fn crossover<V: PartialOrd>(
    sizes: &[usize],
    left: &[V],
    right: &[V],
) -> Result<Option<usize>, AnalysisError> {
    if sizes.len() != left.len() || sizes.len() != right.len() {
        return Err(AnalysisError::MismatchedSeries {
            sizes: sizes.len(),
            left: left.len(),
            right: right.len(),
        });
    }

    let found = (0..sizes.len().saturating_sub(1))
        .find(|&i| left[i] <= right[i] && left[i + 1] > right[i + 1])
        .map(|i| sizes[i]);

    Ok(found)
}
