//! Power-loss gradient for linear predictors.
use crate::algorithm::{
    errors::RegressionResult,
    gradient_descent::gradient::GradientFunction,
    types::{Coefficients, Cost, Grad},
    validation::linear_predictor,
};
use crate::data::Features;

/// Default exponent of the loss (ordinary least squares).
pub const DEFAULT_POWER: i32 = 2;

/// `Linear` — `|prediction - outcome|^p` loss of `prediction = c · x`.
///
/// The gradient is `sign(e) · p · |e|^(p-1) · x` with `e = c · x - y`; an
/// exact zero error counts as positive, which makes no difference for
/// `p > 1` since the magnitude is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    power: i32,
}

impl Linear {
    pub fn new(power: i32) -> Self {
        Linear { power }
    }

    pub fn power(&self) -> i32 {
        self.power
    }
}

impl Default for Linear {
    fn default() -> Self {
        Linear::new(DEFAULT_POWER)
    }
}

impl GradientFunction for Linear {
    fn cost(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Cost> {
        let error = linear_predictor(coefficients, features)? - outcome;
        Ok(error.abs().powi(self.power))
    }

    fn gradient(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Grad> {
        let error = linear_predictor(coefficients, features)? - outcome;
        let sign = if error < 0.0 { -1.0 } else { 1.0 };
        let scale = sign * f64::from(self.power) * error.abs().powi(self.power - 1);
        Ok(features.mapv(|feature| scale * feature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::errors::RegressionError;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Squared-error cost and gradient on a one-feature example.
    // - Absolute-error (p = 1) gradient sign handling.
    // - Dimension checking between coefficients and features.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the squared-error cost of a single observation.
    //
    // Given
    // -----
    // - Coefficients [1], features [2], outcome 3 (error = -1).
    //
    // Expect
    // ------
    // - cost = 1.0.
    fn cost_is_squared_error_by_default() {
        // Arrange
        let gradient = Linear::default();

        // Act
        let cost = gradient.cost(&array![1.0], &array![2.0], 3.0).unwrap();

        // Assert
        assert_eq!(cost, 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the squared-error gradient of a single observation.
    //
    // Given
    // -----
    // - Coefficients [1], features [2], outcome 3 (error = -1).
    //
    // Expect
    // ------
    // - gradient = -1 · 2 · 1 · [2] = [-4].
    fn gradient_is_two_times_error_times_feature() {
        // Arrange
        let gradient = Linear::new(2);

        // Act
        let grad = gradient.gradient(&array![1.0], &array![2.0], 3.0).unwrap();

        // Assert
        assert_eq!(grad, array![-4.0]);
    }

    #[test]
    // Purpose
    // -------
    // Check that the absolute-error loss has a gradient of constant
    // magnitude whose sign follows the error.
    //
    // Given
    // -----
    // - p = 1, coefficients [1, 1], features [1, 2], outcomes 10 and -10.
    //
    // Expect
    // ------
    // - [-1, -2] for the under-prediction and [1, 2] for the over-prediction.
    fn absolute_error_gradient_follows_error_sign() {
        // Arrange
        let gradient = Linear::new(1);
        let coefficients = array![1.0, 1.0];
        let features = array![1.0, 2.0];

        // Act
        let under = gradient.gradient(&coefficients, &features, 10.0).unwrap();
        let over = gradient.gradient(&coefficients, &features, -10.0).unwrap();

        // Assert
        assert_eq!(under, array![-1.0, -2.0]);
        assert_eq!(over, array![1.0, 2.0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure mismatched coefficient/feature lengths are reported rather
    // than panicking inside the dot product.
    //
    // Given
    // -----
    // - Two coefficients and a single feature.
    //
    // Expect
    // ------
    // - `DimensionMismatch { expected: 2, actual: 1 }` from both methods.
    fn mismatched_lengths_are_dimension_errors() {
        // Arrange
        let gradient = Linear::default();
        let coefficients = array![1.0, 1.0];
        let features = array![2.0];
        let expected = RegressionError::DimensionMismatch { expected: 2, actual: 1 };

        // Act / Assert
        assert_eq!(gradient.cost(&coefficients, &features, 3.0), Err(expected.clone()));
        assert_eq!(gradient.gradient(&coefficients, &features, 3.0), Err(expected));
    }
}
