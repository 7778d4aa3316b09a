//! utils — conversion helpers for the Python bindings.
//!
//! Everything here is compiled only with the `python-bindings` feature.
//! Python array-likes (NumPy arrays, pandas objects exposing `to_numpy`, or
//! plain sequences) are copied into owned `ndarray` containers; option
//! names and tolerances are parsed into validated Rust configuration.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    algorithm::{
        errors::RegressionError,
        gradient_descent::options::{
            DescentOptions, LossKind, ScheduleKind, StoppingTolerances, VariantKind,
        },
    },
    data::Observations,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    PyReadonlyArray1,
    PyReadonlyArray2,
    PyUntypedArrayMethods, // .shape()
};

/// Values of a 1-D array-like (outcomes, or one feature vector).
///
/// Contiguous float64 arrays are copied from their slice; anything else
/// goes through sequence extraction.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector(raw_data: &Bound<'_, PyAny>) -> PyResult<Vec<f64>> {
    let candidate = match raw_data.call_method("to_numpy", (false,), None) {
        Ok(obj) => obj,
        Err(_) => raw_data.clone(),
    };
    if let Ok(arr_ro) = candidate.extract::<PyReadonlyArray1<f64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(slice.to_vec());
        }
    }

    raw_data.extract::<Vec<f64>>().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })
}

/// Row-major rows of a 2-D array-like.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_rows<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<Vec<Vec<f64>>> {
    let candidate = match raw_data.call_method("to_numpy", (false,), None) {
        Ok(obj) => obj,
        Err(_) => raw_data.clone(),
    };
    if let Ok(arr_ro) = candidate.extract::<PyReadonlyArray2<f64>>() {
        let cols = arr_ro.shape()[1];
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(slice.chunks(cols.max(1)).map(<[f64]>::to_vec).collect());
        }
    }

    raw_data.extract::<Vec<Vec<f64>>>().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 rows",
        )
    })
}

/// Build [`Observations`] from a 2-D feature array-like and 1-D outcomes.
#[cfg(feature = "python-bindings")]
pub fn extract_observations<'py>(
    features: &Bound<'py, PyAny>, outcomes: &Bound<'py, PyAny>,
) -> PyResult<Observations> {
    let rows = extract_f64_rows(features)?;
    let outcomes = extract_f64_vector(outcomes)?;
    if rows.is_empty() {
        return Err(RegressionError::EmptyDataset.into());
    }
    let observations = Observations::from_vecs(rows, outcomes)?;
    Ok(observations)
}

/// Parse names and tolerances into [`DescentOptions`].
///
/// With no stopping rule given, the library default (gradient norm capped
/// by an iteration budget) applies.
#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
pub fn build_descent_options(
    loss: &str, schedule: &str, variant: &str, learning_rate: Option<f64>,
    batch_size: Option<usize>, lambda: f64, tol_grad: Option<f64>, max_iter: Option<usize>,
    max_time: Option<f64>, seed: u64,
) -> PyResult<DescentOptions> {
    use std::{str::FromStr, time::Duration};

    let max_time = match max_time {
        Some(secs) if secs.is_finite() && secs >= 0.0 => Some(Duration::from_secs_f64(secs)),
        Some(_) => return Err(PyValueError::new_err("max_time must be a non-negative number")),
        None => None,
    };
    let tols = if tol_grad.is_none() && max_iter.is_none() && max_time.is_none() {
        StoppingTolerances::default()
    } else {
        StoppingTolerances::new(tol_grad, max_iter, max_time)?
    };

    let mut options = DescentOptions::new(
        tols,
        LossKind::from_str(loss)?,
        ScheduleKind::from_str(schedule)?,
        VariantKind::from_str(variant)?,
    )
    .with_lambda(lambda)?
    .with_seed(seed);
    if let Some(rate) = learning_rate {
        options = options.with_learning_rate(rate)?;
    }
    if let Some(batch_size) = batch_size {
        options = options.with_batch_size(batch_size)?;
    }
    Ok(options)
}
