//! Cross-entropy gradient for logistic (sigmoid) predictors.
use crate::algorithm::{
    errors::{RegressionError, RegressionResult},
    gradient_descent::gradient::GradientFunction,
    types::{Coefficients, Cost, Grad},
    validation::linear_predictor,
};
use crate::data::Features;
use statrs::function::logistic::logistic;

/// `Logistic` — binary cross-entropy of `p = σ(c · x)` against an outcome in
/// `[0, 1]`.
///
/// Cost evaluation fails with [`RegressionError::LogOfNonPositive`] once the
/// sigmoid saturates to exactly `0.0` or `1.0`, since one of the two log
/// terms is then undefined. The gradient `(p - y) · x` never takes a log and
/// stays finite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Logistic;

impl Logistic {
    pub fn new() -> Self {
        Logistic
    }

    fn predicted(coefficients: &Coefficients, features: &Features) -> RegressionResult<f64> {
        Ok(logistic(linear_predictor(coefficients, features)?))
    }
}

impl GradientFunction for Logistic {
    fn cost(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Cost> {
        let predicted = Logistic::predicted(coefficients, features)?;
        if predicted <= 0.0 || predicted >= 1.0 {
            return Err(RegressionError::LogOfNonPositive {
                value: predicted.min(1.0 - predicted),
                reason: "Logistic prediction saturated; check the data or bound the descent.",
            });
        }
        Ok(-outcome * predicted.ln() - (1.0 - outcome) * (1.0 - predicted).ln())
    }

    fn gradient(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Grad> {
        let error = Logistic::predicted(coefficients, features)? - outcome;
        Ok(features.mapv(|feature| error * feature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Cost and gradient on a one-feature example with a known sigmoid.
    // - The domain error raised when the sigmoid saturates.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the logistic gradient against a hand-computed value.
    //
    // Given
    // -----
    // - Coefficients [1], features [2], outcome 3 so that p = σ(2) ≈ 0.880797.
    //
    // Expect
    // ------
    // - gradient ≈ (0.880797 - 3) · 2 ≈ -4.238406.
    fn gradient_is_prediction_error_times_feature() {
        // Arrange
        let gradient = Logistic::new();

        // Act
        let grad = gradient.gradient(&array![1.0], &array![2.0], 3.0).unwrap();

        // Assert
        assert_eq!(grad.len(), 1);
        assert_relative_eq!(grad[0], -4.238406, epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Verify the cross-entropy cost for a non-saturated prediction.
    //
    // Given
    // -----
    // - Coefficients [1], features [2], outcome 1.
    //
    // Expect
    // ------
    // - cost = -ln(σ(2)) ≈ 0.126928.
    fn cost_is_cross_entropy() {
        // Arrange
        let gradient = Logistic::new();

        // Act
        let cost = gradient.cost(&array![1.0], &array![2.0], 1.0).unwrap();

        // Assert
        assert_relative_eq!(cost, 0.126928, epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a saturated sigmoid is reported as a domain error instead of
    // producing an infinite or NaN cost.
    //
    // Given
    // -----
    // - A linear predictor of 1000, so σ(1000) == 1.0 in f64.
    //
    // Expect
    // ------
    // - `LogOfNonPositive` from `cost`, while `gradient` still succeeds.
    fn saturated_prediction_is_a_domain_error() {
        // Arrange
        let gradient = Logistic::new();
        let coefficients = array![1000.0];
        let features = array![1.0];

        // Act
        let cost = gradient.cost(&coefficients, &features, 0.0);
        let grad = gradient.gradient(&coefficients, &features, 0.0);

        // Assert
        assert!(matches!(cost, Err(RegressionError::LogOfNonPositive { .. })));
        assert_eq!(grad.unwrap(), array![1.0]);
    }
}
