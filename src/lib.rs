//! rust_regression — regression fitting by gradient descent and least squares.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, behind the `python-bindings`
//! feature, as the PyO3 bridge exposing the fitting routines to Python via
//! the `_rust_regression` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: [`data`] (observation collections),
//!   [`algorithm`] (gradient descent and least squares), [`linking`]
//!   (outcome transforms) and [`predict`] (applying fitted coefficients).
//! - Define the `Regression` `#[pyclass]` and the `#[pymodule]` initializer
//!   for `_rust_regression`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; the PyO3 items perform
//!   only input conversion, option parsing and error mapping.
//! - Errors from core code propagate as [`algorithm::RegressionError`] /
//!   [`data::DataError`] and become Python `ValueError`s at the boundary.
//!
//! Conventions
//! -----------
//! - Feature index 0 is the bias column; callers supply the constant `1.0`.
//! - The library installs no logger. Diagnostics go through the `log`
//!   facade and are visible only if the application installs one.
//!
//! Downstream usage
//! ----------------
//! ```
//! use ndarray::array;
//! use rust_regression::algorithm::prelude::*;
//! use rust_regression::data::Observations;
//!
//! let mut observations = Observations::new();
//! for (x, y) in [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)] {
//!     observations.add(array![1.0, x], y).unwrap();
//! }
//! let coefficients = LeastSquares::new().regress(&observations).unwrap();
//! assert!((coefficients[1] - 2.0).abs() < 1e-9);
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; end-to-end fits are under
//!   `tests/`.

pub mod algorithm;
pub mod data;
pub mod linking;
pub mod predict;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    algorithm::{Algorithm, LeastSquares, gradient_descent::options::LossKind},
    predict::Predictor,
    utils::{build_descent_options, extract_f64_vector, extract_observations},
};

/// Regression — Python-facing wrapper around a fitted coefficient vector.
///
/// Purpose
/// -------
/// Fit a regression from Python array-likes and expose the resulting
/// coefficients and predictions.
///
/// Key behaviors
/// -------------
/// - `Regression.least_squares(features, outcomes, lambda_=0.0)` solves the
///   normal equations.
/// - `Regression.gradient_descent(features, outcomes, ...)` runs a descent
///   configured by name (`loss`, `schedule`, `variant`) and tolerances.
/// - `coefficients` returns the fitted vector; `predict(features)` applies
///   it, through the sigmoid when the loss was logistic.
///
/// Parameters
/// ----------
/// - `features`: 2-D array-like of `f64`, one row per observation.
/// - `outcomes`: 1-D array-like of `f64`, one entry per row.
///
/// Notes
/// -----
/// - Native Rust code should use [`LeastSquares`] /
///   [`GradientDescent`](crate::algorithm::GradientDescent) directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_regression")]
pub struct Regression {
    coefficients: Array1<f64>,
    logistic: bool,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Regression {
    /// Closed-form (optionally ridge-penalized) least squares.
    #[staticmethod]
    #[pyo3(
        text_signature = "(features, outcomes, /, lambda_=0.0)",
        signature = (features, outcomes, lambda_ = 0.0)
    )]
    pub fn least_squares<'py>(
        features: &Bound<'py, PyAny>, outcomes: &Bound<'py, PyAny>, lambda_: f64,
    ) -> PyResult<Regression> {
        let observations = extract_observations(features, outcomes)?;
        let coefficients = LeastSquares::with_lambda(lambda_)?.regress(&observations)?;
        Ok(Regression { coefficients, logistic: false })
    }

    /// Gradient descent configured by name.
    #[staticmethod]
    #[pyo3(
        text_signature = "(features, outcomes, /, loss='linear', schedule='adam', variant='batch', learning_rate=None, batch_size=None, lambda_=0.0, tol_grad=None, max_iter=None, max_time=None, seed=0)",
        signature = (
            features, outcomes, loss = "linear", schedule = "adam", variant = "batch",
            learning_rate = None, batch_size = None, lambda_ = 0.0, tol_grad = None,
            max_iter = None, max_time = None, seed = 0
        )
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn gradient_descent<'py>(
        features: &Bound<'py, PyAny>, outcomes: &Bound<'py, PyAny>, loss: &str, schedule: &str,
        variant: &str, learning_rate: Option<f64>, batch_size: Option<usize>, lambda_: f64,
        tol_grad: Option<f64>, max_iter: Option<usize>, max_time: Option<f64>, seed: u64,
    ) -> PyResult<Regression> {
        let observations = extract_observations(features, outcomes)?;
        let options = build_descent_options(
            loss,
            schedule,
            variant,
            learning_rate,
            batch_size,
            lambda_,
            tol_grad,
            max_iter,
            max_time,
            seed,
        )?;
        let coefficients = options.regress(&observations)?;
        Ok(Regression { coefficients, logistic: options.loss == LossKind::Logistic })
    }

    /// Fitted coefficients, bias first.
    #[getter]
    pub fn coefficients(&self) -> Vec<f64> {
        self.coefficients.to_vec()
    }

    /// Prediction for one feature vector.
    pub fn predict(&self, features: &Bound<'_, PyAny>) -> PyResult<f64> {
        let features = Array1::from(extract_f64_vector(features)?);
        let coefficients = self.coefficients.clone();
        let prediction = if self.logistic {
            Predictor::logistic(coefficients).predict(&features)?
        } else {
            Predictor::linear(coefficients).predict(&features)?
        };
        Ok(prediction)
    }
}

/// _rust_regression — PyO3 module initializer.
///
/// Registers the [`Regression`] class. Invoked by Python when importing the
/// compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_regression<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<Regression>()?;
    Ok(())
}
