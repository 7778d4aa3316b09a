//! Errors for regression algorithms (dimension checks, domain failures,
//! configuration validation, and singular designs).
//!
//! This module defines [`RegressionError`], the single error surface returned
//! by every [`Algorithm`](crate::algorithm::Algorithm) and by the strategy
//! traits that can fail (gradient functions, linkings). Dataset errors are
//! folded in through `From<DataError>` so `?` works across the boundary.
//!
//! ## Conventions
//! - **Dimension errors** are raised synchronously where the violation is
//!   detected and are never recovered internally.
//! - **Domain errors** come from logarithms of non-positive or saturated
//!   values; they signal out-of-range data or diverged coefficients.
//! - Silent `NaN`/`±∞` arithmetic is *not* converted into an error; only the
//!   named cases below are.
use crate::data::errors::DataError;
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Crate-wide result alias for regression operations.
pub type RegressionResult<T> = Result<T, RegressionError>;

/// Unified error type for regression fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    // ---- Dimension ----
    /// Dataset construction failed.
    Data(DataError),

    /// The dataset handed to an algorithm has no observations.
    EmptyDataset,

    /// Closed-form solve with fewer observations than features.
    NotEnoughObservations { observations: usize, features: usize },

    /// Coefficient and feature vectors disagree in length.
    DimensionMismatch { expected: usize, actual: usize },

    /// Mini-batch size must lie in `1..=observations`.
    InvalidBatchSize { batch_size: usize, observations: usize },

    // ---- Domain ----
    /// Logarithm of a non-positive (or saturated) value.
    LogOfNonPositive { value: f64, reason: &'static str },

    // ---- Linear algebra ----
    /// `XᵗX + λI` could not be inverted.
    SingularMatrix { dim: usize },

    // ---- Configuration ----
    /// At least one stopping rule must be provided.
    NoStoppingRuleProvided,

    /// A numeric hyperparameter failed validation.
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    /// Unknown schedule name.
    InvalidSchedule { name: String, reason: &'static str },

    /// Unknown loss name.
    InvalidLoss { name: String, reason: &'static str },

    /// Unknown descent variant name.
    InvalidVariant { name: String, reason: &'static str },
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Dimension ----
            RegressionError::Data(err) => write!(f, "Invalid dataset: {err}"),
            RegressionError::EmptyDataset => {
                write!(f, "Cannot regress on an empty set of observations")
            }
            RegressionError::NotEnoughObservations { observations, features } => {
                write!(
                    f,
                    "Not enough observations to perform regression: {observations} observations for {features} explanatory variables"
                )
            }
            RegressionError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected length {expected}, got {actual}")
            }
            RegressionError::InvalidBatchSize { batch_size, observations } => {
                write!(
                    f,
                    "Invalid batch size {batch_size}: must be between 1 and the number of observations ({observations})"
                )
            }

            // ---- Domain ----
            RegressionError::LogOfNonPositive { value, reason } => {
                write!(f, "Attempting to take the logarithm of {value}: {reason}")
            }

            // ---- Linear algebra ----
            RegressionError::SingularMatrix { dim } => {
                write!(f, "The {dim}x{dim} normal-equation matrix is singular")
            }

            // ---- Configuration ----
            RegressionError::NoStoppingRuleProvided => {
                write!(f, "At least one stopping rule must be provided")
            }
            RegressionError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid {name}: {value}. {reason}")
            }
            RegressionError::InvalidSchedule { name, reason } => {
                write!(f, "Invalid schedule '{name}'. {reason}")
            }
            RegressionError::InvalidLoss { name, reason } => {
                write!(f, "Invalid loss '{name}'. {reason}")
            }
            RegressionError::InvalidVariant { name, reason } => {
                write!(f, "Invalid variant '{name}'. {reason}")
            }
        }
    }
}

impl From<DataError> for RegressionError {
    fn from(err: DataError) -> Self {
        RegressionError::Data(err)
    }
}

/// Convert a [`RegressionError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<RegressionError> for PyErr {
    fn from(err: RegressionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
