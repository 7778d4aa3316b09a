//! Errors for dataset construction (feature-count and outcome-count checks).
//!
//! This module defines [`DataError`], raised synchronously at the point where
//! an [`Observations`](crate::data::Observations) collection would otherwise
//! lose its fixed-width invariant. Errors are never recovered internally; they
//! propagate to the caller (and into [`RegressionError`] via `From`).
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - `expected` is always the width or count already established by the
//!   collection; `actual` is what the caller supplied.
//!
//! [`RegressionError`]: crate::algorithm::errors::RegressionError
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for dataset construction paths that may produce [`DataError`].
pub type DataResult<T> = Result<T, DataError>;

/// Dimension errors raised while building a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// An observation's feature vector disagrees with the established width.
    FeatureCountMismatch { index: usize, expected: usize, actual: usize },

    /// Bulk construction received a different number of outcomes than rows.
    OutcomeCountMismatch { features: usize, outcomes: usize },

    /// Observations must carry at least one feature.
    EmptyFeatures { index: usize },
}

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::FeatureCountMismatch { index, expected, actual } => {
                write!(
                    f,
                    "Observation {index} has {actual} features; all observations must have {expected}"
                )
            }
            DataError::OutcomeCountMismatch { features, outcomes } => {
                write!(
                    f,
                    "Must have as many outcomes as observations: got {features} feature rows and {outcomes} outcomes"
                )
            }
            DataError::EmptyFeatures { index } => {
                write!(f, "Observation {index} has an empty feature vector")
            }
        }
    }
}

/// Convert a [`DataError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<DataError> for PyErr {
    fn from(err: DataError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for each `DataError` variant, including the
    //   embedded payload values.
    //
    // They intentionally DO NOT cover:
    // - The `From<DataError> for PyErr` conversion, which requires linking
    //   against the Python C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `FeatureCountMismatch` reports index, expected and actual
    // widths.
    //
    // Given
    // -----
    // - A mismatch at index 4 with expected 3 and actual 2.
    //
    // Expect
    // ------
    // - The message contains "4", "3" and "2".
    fn feature_count_mismatch_includes_payload_in_display() {
        // Arrange
        let err = DataError::FeatureCountMismatch { index: 4, expected: 3, actual: 2 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('4') && msg.contains('3') && msg.contains('2'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `OutcomeCountMismatch` mentions both counts.
    //
    // Given
    // -----
    // - 5 feature rows and 4 outcomes.
    //
    // Expect
    // ------
    // - The message contains "5" and "4".
    fn outcome_count_mismatch_includes_both_counts() {
        // Arrange
        let err = DataError::OutcomeCountMismatch { features: 5, outcomes: 4 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('5') && msg.contains('4'), "Got: {msg}");
    }
}
