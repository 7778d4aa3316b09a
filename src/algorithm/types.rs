//! algorithm::types — shared numeric aliases.
//!
//! Coefficient and gradient vectors are `ndarray` containers over `f64`,
//! index-aligned with the feature vectors of the dataset being fitted.
//! Index 0 conventionally belongs to the bias term.
use ndarray::Array1;

/// Coefficient vector being fitted.
pub type Coefficients = Array1<f64>;

/// Gradient of the loss with respect to each coefficient.
pub type Grad = Array1<f64>;

/// Scalar loss value of a single observation (or a dataset average).
pub type Cost = f64;
