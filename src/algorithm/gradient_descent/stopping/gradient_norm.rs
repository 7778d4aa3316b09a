//! Gradient-magnitude criterion.
use crate::algorithm::{
    errors::RegressionResult,
    gradient_descent::stopping::StoppingCriterion,
    types::{Coefficients, Grad},
    validation::{verify_non_negative, verify_positive_count},
};

/// Default threshold, 2⁻¹⁴.
pub const DEFAULT_ETA: f64 = 6.103515625e-5;

/// Default norm order.
pub const DEFAULT_P_NORM: i32 = 2;

/// `GradientNorm` — converged when `(Σ|g_i|^p)^(1/p) ≤ eta`.
///
/// Stateless. A NaN gradient never converges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientNorm {
    eta: f64,
    p_norm: i32,
}

impl GradientNorm {
    /// # Errors
    /// [`RegressionError::InvalidParameter`](crate::algorithm::RegressionError::InvalidParameter)
    /// unless `eta` is finite and ≥ 0 and `p_norm ≥ 1`.
    pub fn new(eta: f64, p_norm: i32) -> RegressionResult<Self> {
        verify_non_negative("eta", eta)?;
        verify_positive_count("p_norm", i64::from(p_norm))?;
        Ok(GradientNorm { eta, p_norm })
    }

    /// Euclidean norm against `eta`.
    ///
    /// # Errors
    /// As [`GradientNorm::new`].
    pub fn with_eta(eta: f64) -> RegressionResult<Self> {
        GradientNorm::new(eta, DEFAULT_P_NORM)
    }

    pub fn norm(&self, gradient: &Grad) -> f64 {
        let p = self.p_norm;
        gradient.iter().map(|slope| slope.abs().powi(p)).sum::<f64>().powf(1.0 / f64::from(p))
    }
}

impl Default for GradientNorm {
    fn default() -> Self {
        GradientNorm { eta: DEFAULT_ETA, p_norm: DEFAULT_P_NORM }
    }
}

impl StoppingCriterion for GradientNorm {
    fn converged(&mut self, gradient: &Grad, _coefficients: &Coefficients) -> bool {
        self.norm(gradient) <= self.eta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::RegressionError;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify the threshold comparison under the Euclidean norm.
    //
    // Given
    // -----
    // - GradientNorm(eta = 1.0, p = 2).
    //
    // Expect
    // ------
    // - [2, 2] (norm ≈ 2.83) does not converge; [0.5, 0.5] (≈ 0.71) does.
    fn compares_euclidean_norm_against_eta() {
        // Arrange
        let mut criterion = GradientNorm::new(1.0, 2).unwrap();
        let coefficients = array![0.0, 0.0];

        // Act / Assert
        assert!(!criterion.converged(&array![2.0, 2.0], &coefficients));
        assert!(criterion.converged(&array![0.5, 0.5], &coefficients));
    }

    #[test]
    // Purpose
    // -------
    // Check the default threshold and the 1-norm.
    //
    // Given
    // -----
    // - Default criterion; a 1-norm criterion with eta 1.0.
    //
    // Expect
    // ------
    // - A zero gradient converges under the default; [0.6, 0.6] has 1-norm
    //   1.2 and does not converge.
    fn default_threshold_and_one_norm() {
        // Arrange
        let mut default = GradientNorm::default();
        let mut taxicab = GradientNorm::new(1.0, 1).unwrap();
        let coefficients = array![0.0, 0.0];

        // Act / Assert
        assert!(default.converged(&array![0.0, 0.0], &coefficients));
        assert!(!default.converged(&array![1e-3, 0.0], &coefficients));
        assert!(!taxicab.converged(&array![0.6, 0.6], &coefficients));
        assert!(!default.converged(&array![f64::NAN, 0.0], &coefficients));
    }

    #[test]
    // Purpose
    // -------
    // Ensure a zero norm order and an invalid threshold are rejected.
    //
    // Given
    // -----
    // - p_norm 0 and -1; eta NaN and -1e-3.
    //
    // Expect
    // ------
    // - `InvalidParameter` naming `p_norm` or `eta`; eta 0 is accepted.
    fn new_rejects_zero_norm_order_and_invalid_eta() {
        // Act / Assert
        assert!(matches!(
            GradientNorm::new(1.0, 0),
            Err(RegressionError::InvalidParameter { name: "p_norm", .. })
        ));
        assert!(matches!(
            GradientNorm::new(1.0, -1),
            Err(RegressionError::InvalidParameter { name: "p_norm", .. })
        ));
        assert!(matches!(
            GradientNorm::with_eta(f64::NAN),
            Err(RegressionError::InvalidParameter { name: "eta", .. })
        ));
        assert!(matches!(
            GradientNorm::with_eta(-1e-3),
            Err(RegressionError::InvalidParameter { name: "eta", .. })
        ));
        assert!(GradientNorm::with_eta(0.0).is_ok());
    }
}
