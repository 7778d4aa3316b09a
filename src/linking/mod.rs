//! linking — invertible transforms between outcome space and linear space.
//!
//! Purpose
//! -------
//! Fit non-linear relationships with the linear machinery in
//! [`algorithm`](crate::algorithm): transform outcomes into a space where the
//! model is linear before fitting ([`Linking::linearize`]), then map linear
//! predictions back ([`Linking::delinearize`]).
//!
//! Key behaviors
//! -------------
//! - [`Identity`]: no transform.
//! - [`Logistic`]: logit / sigmoid, for probabilities in `(0, 1)`.
//! - [`Exponential`]: `y = base^(x·β)`; linearizes with `log_base`.
//! - [`Log`]: `y = log_base(x·β)`; linearizes with `base^y`.
//! - [`Power`]: `y = (x·β)^(1/k)`; linearizes with `y^k`.
//! - [`linearize_outcomes`] rewrites a whole dataset's outcomes.
//!
//! Invariants & assumptions
//! ------------------------
//! - Logarithms of non-positive values, and the logit of values outside
//!   `(0, 1)`, fail with
//!   [`RegressionError::LogOfNonPositive`](crate::algorithm::RegressionError::LogOfNonPositive).
//! - `delinearize(linearize(y)) == y` up to rounding wherever both are
//!   defined.

pub mod transforms;

pub use self::transforms::{Exponential, Identity, Log, Logistic, Power};

use crate::algorithm::errors::RegressionResult;
use crate::data::{Observation, Observations};

/// Transform between an outcome and its linear-model counterpart.
pub trait Linking {
    /// Outcome space → linear space.
    fn linearize(&self, value: f64) -> RegressionResult<f64>;

    /// Linear space → outcome space.
    fn delinearize(&self, value: f64) -> RegressionResult<f64>;
}

impl<L: Linking + ?Sized> Linking for &L {
    fn linearize(&self, value: f64) -> RegressionResult<f64> {
        (**self).linearize(value)
    }

    fn delinearize(&self, value: f64) -> RegressionResult<f64> {
        (**self).delinearize(value)
    }
}

/// Copy of `observations` with every outcome passed through `linking.linearize`.
///
/// # Errors
/// The first error raised by [`Linking::linearize`].
pub fn linearize_outcomes<L: Linking + ?Sized>(
    linking: &L, observations: &Observations,
) -> RegressionResult<Observations> {
    let mut linearized = Observations::new();
    for observation in observations {
        let outcome = linking.linearize(observation.outcome())?;
        linearized.add_observation(Observation::new(observation.features().clone(), outcome))?;
    }
    Ok(linearized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Algorithm, LeastSquares, errors::RegressionError};
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Fit an exponential relationship through an Exponential linking.
    //
    // Given
    // -----
    // - y = e^(0.5 + 0.25x) on x = 0..5.
    //
    // Expect
    // ------
    // - Least squares on the linearized outcomes recovers [0.5, 0.25].
    fn linearized_outcomes_make_exponential_fit_linear() {
        // Arrange
        let mut observations = Observations::new();
        for x in 0..5 {
            let x = f64::from(x);
            observations.add(array![1.0, x], (0.5 + 0.25 * x).exp()).unwrap();
        }

        // Act
        let linearized = linearize_outcomes(&Exponential::default(), &observations).unwrap();
        let coefficients = LeastSquares::new().regress(&linearized).unwrap();

        // Assert
        assert_relative_eq!(coefficients[0], 0.5, epsilon = 1e-9);
        assert_relative_eq!(coefficients[1], 0.25, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a domain error in any outcome aborts the rewrite.
    //
    // Given
    // -----
    // - Outcomes 1.0 and 0.0 under Exponential.
    //
    // Expect
    // ------
    // - `LogOfNonPositive`.
    fn linearize_outcomes_propagates_domain_errors() {
        // Arrange
        let observations =
            Observations::from_vecs(vec![vec![1.0], vec![1.0]], vec![1.0, 0.0]).unwrap();

        // Act
        let result = linearize_outcomes(&Exponential::default(), &observations);

        // Assert
        assert!(matches!(
            result,
            Err(RegressionError::LogOfNonPositive { value, .. }) if value == 0.0
        ));
    }
}
