//! least_squares — closed-form ordinary (and ridge) least squares.
//!
//! Purpose
//! -------
//! Solve the normal equations `β = (XᵗX + λI)⁻¹ Xᵗy` directly. The solver is
//! exact for well-conditioned, low-dimensional problems and serves as the
//! reference the iterative descent is checked against.
//!
//! Key behaviors
//! -------------
//! - Builds the dense design matrix `X` (`n × p`) and outcome vector `y`
//!   from the observations.
//! - Forms `XᵗX + λI` and `Xᵗy` with `ndarray`, copies the `p × p` normal
//!   matrix into a `nalgebra::DMatrix`, and inverts it there.
//! - `λ = 0` (the default) gives plain OLS. A positive `λ` adds a ridge
//!   penalty to every coefficient, the bias included.
//!
//! Invariants & assumptions
//! ------------------------
//! - Fewer observations than features is rejected up front with
//!   [`RegressionError::NotEnoughObservations`], regardless of `λ`.
//! - A normal matrix that `nalgebra` cannot invert yields
//!   [`RegressionError::SingularMatrix`]. Near-singular designs are not
//!   detected and may produce large or non-finite coefficients.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference dataset, the underdetermined guard, a
//!   singular design, and ridge shrinkage.
use crate::algorithm::{
    Algorithm,
    errors::{RegressionError, RegressionResult},
    types::Coefficients,
    validation::verify_non_negative,
};
use crate::data::Observations;
use log::debug;
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// `LeastSquares` — closed-form solver with an optional ridge penalty.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeastSquares {
    lambda: f64,
}

impl LeastSquares {
    /// Plain OLS.
    pub fn new() -> Self {
        LeastSquares::default()
    }

    /// Ridge regression with penalty `lambda · I`.
    ///
    /// # Errors
    /// [`RegressionError::InvalidParameter`] unless `lambda` is finite and ≥ 0.
    pub fn with_lambda(lambda: f64) -> RegressionResult<Self> {
        verify_non_negative("lambda", lambda)?;
        Ok(LeastSquares { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

/// Copy a square `ndarray` matrix into a preallocated `DMatrix` of the same
/// shape, column by column.
fn fill_dmatrix(source: &Array2<f64>, target: &mut DMatrix<f64>) {
    for j in 0..source.ncols() {
        for i in 0..source.nrows() {
            target[(i, j)] = source[[i, j]];
        }
    }
}

impl Algorithm for LeastSquares {
    fn regress(&mut self, observations: &Observations) -> RegressionResult<Coefficients> {
        if observations.is_empty() {
            return Err(RegressionError::EmptyDataset);
        }
        let (rows, cols) = (observations.len(), observations.feature_count());
        if rows < cols {
            return Err(RegressionError::NotEnoughObservations {
                observations: rows,
                features: cols,
            });
        }
        debug!("least squares: {rows}x{cols} design, lambda = {}", self.lambda);

        let design = observations.features();
        let outcomes = observations.outcomes();

        let mut normal = design.t().dot(&design);
        if self.lambda > 0.0 {
            normal.diag_mut().mapv_inplace(|d| d + self.lambda);
        }
        let moment = design.t().dot(&outcomes);

        let mut normal_nalg = DMatrix::<f64>::zeros(cols, cols);
        fill_dmatrix(&normal, &mut normal_nalg);
        let inverse =
            normal_nalg.try_inverse().ok_or(RegressionError::SingularMatrix { dim: cols })?;

        let beta = inverse * DVector::from_iterator(cols, moment.iter().copied());
        Ok(Array1::from_iter(beta.iter().copied()))
    }
}
