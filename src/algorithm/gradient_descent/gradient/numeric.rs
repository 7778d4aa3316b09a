//! Finite-difference gradient decorator.
//!
//! Purpose
//! -------
//! Let callers plug in a loss whose analytic derivative is unavailable (or
//! cross-check one that is) by approximating the gradient from the cost alone
//! with central differences over the coefficient vector.
//!
//! Key behaviors
//! -------------
//! - [`NumericGradient::cost`] forwards to the inner function unchanged.
//! - [`NumericGradient::gradient`] differentiates `c ↦ inner.cost(c, x, y)`
//!   with `finitediff`'s central scheme.
//! - Any error raised by the inner cost while differencing is captured and
//!   returned instead of the (meaningless) approximation.
//!
//! Notes
//! -----
//! - Each gradient costs `2p` inner cost evaluations for `p` coefficients.
//! - The inner gradient is never consulted.
use crate::algorithm::{
    errors::{RegressionError, RegressionResult},
    gradient_descent::gradient::GradientFunction,
    types::{Coefficients, Cost, Grad},
    validation::validate_dims,
};
use crate::data::Features;
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// `NumericGradient` — central finite-difference gradient of an inner cost.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericGradient<G> {
    inner: G,
}

impl<G: GradientFunction> NumericGradient<G> {
    pub fn new(inner: G) -> Self {
        NumericGradient { inner }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: GradientFunction> GradientFunction for NumericGradient<G> {
    fn cost(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Cost> {
        self.inner.cost(coefficients, features, outcome)
    }

    fn gradient(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Grad> {
        validate_dims(coefficients.len(), features.len())?;
        let closure_err: RefCell<Option<RegressionError>> = RefCell::new(None);
        let cost = |c: &Coefficients| match self.inner.cost(c, features, outcome) {
            Ok(value) => value,
            Err(err) => {
                closure_err.borrow_mut().get_or_insert(err);
                f64::NAN
            }
        };
        let gradient = coefficients.central_diff(&cost);
        if let Some(err) = closure_err.into_inner() {
            return Err(err);
        }
        Ok(gradient)
    }
}
