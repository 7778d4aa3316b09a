//! Validation helpers shared by regression algorithms and their options.
//!
//! - **Dimension checks**: [`validate_dims`] guards dot products between
//!   coefficient and feature vectors; [`validate_batch_size`] guards
//!   mini-batch sampling.
//! - **Hyperparameter checks**: [`verify_positive`] and
//!   [`verify_non_negative`] reject non-finite or out-of-range values;
//!   [`verify_positive_count`] rejects zero or negative integer settings
//!   (decay scales, roots, norm orders).
//!
//! All helpers return [`RegressionError`] variants so callers can use `?`.
use crate::algorithm::{
    errors::{RegressionError, RegressionResult},
    types::Coefficients,
};
use crate::data::Features;

/// Dot product of coefficients and features after a length check.
///
/// # Errors
/// Returns [`RegressionError::DimensionMismatch`] if the two vectors differ
/// in length.
pub fn linear_predictor(coefficients: &Coefficients, features: &Features) -> RegressionResult<f64> {
    validate_dims(coefficients.len(), features.len())?;
    Ok(coefficients.dot(features))
}

/// Ensure `actual == expected`.
///
/// # Errors
/// Returns [`RegressionError::DimensionMismatch`] otherwise.
pub fn validate_dims(expected: usize, actual: usize) -> RegressionResult<()> {
    if expected != actual {
        return Err(RegressionError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Ensure a mini-batch size lies in `1..=observations`.
///
/// # Errors
/// Returns [`RegressionError::InvalidBatchSize`] otherwise.
pub fn validate_batch_size(batch_size: usize, observations: usize) -> RegressionResult<()> {
    if batch_size == 0 || batch_size > observations {
        return Err(RegressionError::InvalidBatchSize { batch_size, observations });
    }
    Ok(())
}

/// Validate a hyperparameter that must be finite and strictly positive.
///
/// # Errors
/// Returns [`RegressionError::InvalidParameter`] if the value is non-finite
/// or ≤ 0.0.
pub fn verify_positive(name: &'static str, value: f64) -> RegressionResult<()> {
    if !value.is_finite() {
        return Err(RegressionError::InvalidParameter {
            name,
            value,
            reason: "Value must be finite.",
        });
    }
    if value <= 0.0 {
        return Err(RegressionError::InvalidParameter {
            name,
            value,
            reason: "Value must be positive.",
        });
    }
    Ok(())
}

/// Validate an integer hyperparameter that must be ≥ 1.
///
/// # Errors
/// Returns [`RegressionError::InvalidParameter`] if the value is ≤ 0.
pub fn verify_positive_count(name: &'static str, value: i64) -> RegressionResult<()> {
    if value <= 0 {
        return Err(RegressionError::InvalidParameter {
            name,
            value: value as f64,
            reason: "Value must be at least one.",
        });
    }
    Ok(())
}

/// Validate a hyperparameter that must be finite and ≥ 0.
///
/// # Errors
/// Returns [`RegressionError::InvalidParameter`] if the value is non-finite
/// or negative.
pub fn verify_non_negative(name: &'static str, value: f64) -> RegressionResult<()> {
    if !value.is_finite() {
        return Err(RegressionError::InvalidParameter {
            name,
            value,
            reason: "Value must be finite.",
        });
    }
    if value < 0.0 {
        return Err(RegressionError::InvalidParameter {
            name,
            value,
            reason: "Value must be non-negative.",
        });
    }
    Ok(())
}
