//! predict — apply fitted coefficients to new feature vectors.
//!
//! A [`Predictor`] pairs a coefficient vector with a [`Linking`]: the
//! prediction for features `x` is `linking.delinearize(x · β)`.
//! [`Predictor::linear`] uses [`Identity`]; [`Predictor::logistic`] passes
//! the linear predictor through the sigmoid, giving a probability.
use crate::algorithm::{errors::RegressionResult, types::Coefficients, validation::linear_predictor};
use crate::data::Features;
use crate::linking::{Identity, Linking, Logistic};

/// `Predictor` — fitted coefficients plus the linking they were fitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct Predictor<L = Identity> {
    coefficients: Coefficients,
    linking: L,
}

impl Predictor<Identity> {
    /// Plain linear predictions `x · β`.
    pub fn linear(coefficients: Coefficients) -> Self {
        Predictor { coefficients, linking: Identity }
    }
}

impl Predictor<Logistic> {
    /// Probabilities `σ(x · β)`.
    pub fn logistic(coefficients: Coefficients) -> Self {
        Predictor { coefficients, linking: Logistic }
    }
}

impl<L: Linking> Predictor<L> {
    pub fn with_linking(coefficients: Coefficients, linking: L) -> Self {
        Predictor { coefficients, linking }
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Predicted outcome for `features`.
    ///
    /// # Errors
    /// - [`RegressionError::DimensionMismatch`](crate::algorithm::RegressionError::DimensionMismatch)
    ///   if `features` and the coefficients differ in length.
    /// - Any domain error of [`Linking::delinearize`].
    pub fn predict(&self, features: &Features) -> RegressionResult<f64> {
        self.linking.delinearize(linear_predictor(&self.coefficients, features)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::errors::RegressionError;
    use crate::linking::Exponential;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Linear and logistic predictions against hand-computed values.
    // - Custom linkings and dimension checking.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the two built-in predictors.
    //
    // Given
    // -----
    // - Coefficients [1, 2] and features [1, 3].
    //
    // Expect
    // ------
    // - Linear: 7. Logistic: σ(7).
    fn linear_and_logistic_predictions() {
        // Arrange
        let features = array![1.0, 3.0];

        // Act
        let linear = Predictor::linear(array![1.0, 2.0]).predict(&features).unwrap();
        let logistic = Predictor::logistic(array![1.0, 2.0]).predict(&features).unwrap();

        // Assert
        assert_eq!(linear, 7.0);
        assert_relative_eq!(logistic, 1.0 / (1.0 + (-7.0f64).exp()), epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Check a custom linking and the length check.
    //
    // Given
    // -----
    // - Exponential linking with coefficients [0, 1]; features [1, 2] and [1].
    //
    // Expect
    // ------
    // - e² for the matching features; `DimensionMismatch` otherwise.
    fn custom_linking_and_dimension_check() {
        // Arrange
        let predictor = Predictor::with_linking(array![0.0, 1.0], Exponential::default());

        // Act
        let ok = predictor.predict(&array![1.0, 2.0]).unwrap();
        let err = predictor.predict(&array![1.0]);

        // Assert
        assert_relative_eq!(ok, 2f64.exp(), max_relative = 1e-14);
        assert_eq!(err, Err(RegressionError::DimensionMismatch { expected: 2, actual: 1 }));
    }
}
