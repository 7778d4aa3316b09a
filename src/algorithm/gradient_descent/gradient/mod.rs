//! gradient — per-observation loss and gradient functions.
//!
//! Purpose
//! -------
//! Define the [`GradientFunction`] strategy consumed by the descent loop and
//! provide its concrete implementations:
//!
//! - [`Linear`]: `|error|^p` loss of a linear predictor (default `p = 2`).
//! - [`Logistic`]: cross-entropy loss of a sigmoid predictor.
//! - [`Regularized`]: decorator adding an Lᵏ penalty to any inner function.
//! - [`NumericGradient`]: decorator replacing the analytic gradient with a
//!   central finite-difference approximation of the inner cost.
//!
//! Invariants & assumptions
//! ------------------------
//! - Implementations hold no per-call state; everything they need is fixed at
//!   construction.
//! - `gradient` returns a vector of the same length as `features`, index
//!   aligned with `coefficients`.
//! - Coefficient and feature vectors of different lengths are reported as
//!   [`RegressionError::DimensionMismatch`](crate::algorithm::errors::RegressionError::DimensionMismatch).
//!
//! Conventions
//! -----------
//! - The gradient is taken with respect to the coefficients, for a single
//!   observation. Averaging over observations is the descent variant's job.
//! - Only the whole-vector contract exists; there is no per-index partial
//!   derivative entry point.

pub mod linear;
pub mod logistic;
pub mod numeric;
pub mod regularized;

pub use self::linear::Linear;
pub use self::logistic::Logistic;
pub use self::numeric::NumericGradient;
pub use self::regularized::Regularized;

use crate::algorithm::{
    errors::RegressionResult,
    types::{Coefficients, Cost, Grad},
};
use crate::data::Features;

/// Loss and gradient of a single observation under the current coefficients.
pub trait GradientFunction {
    /// Loss of predicting `outcome` from `features` with `coefficients`.
    fn cost(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Cost>;

    /// Gradient of [`GradientFunction::cost`] with respect to `coefficients`.
    fn gradient(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Grad>;
}

impl<G: GradientFunction + ?Sized> GradientFunction for Box<G> {
    fn cost(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Cost> {
        (**self).cost(coefficients, features, outcome)
    }

    fn gradient(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Grad> {
        (**self).gradient(coefficients, features, outcome)
    }
}

impl<G: GradientFunction + ?Sized> GradientFunction for &G {
    fn cost(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Cost> {
        (**self).cost(coefficients, features, outcome)
    }

    fn gradient(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Grad> {
        (**self).gradient(coefficients, features, outcome)
    }
}
