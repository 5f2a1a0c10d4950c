//! Error types for precondition checks and result analysis.

use thiserror::Error;

/// Precondition violations detected by the checked search entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `v[index] > v[index + 1]`; binary searches need non-decreasing input.
    #[error("input is not sorted: element at index {index} is greater than its successor")]
    Unsorted { index: usize },
}

/// Errors raised while comparing measured series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("series lengths differ: {sizes} sizes, {left} left values, {right} right values")]
    MismatchedSeries {
        sizes: usize,
        left: usize,
        right: usize,
    },
}
