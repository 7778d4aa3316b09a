//! Concrete linkings.
use crate::algorithm::errors::{RegressionError, RegressionResult};
use crate::linking::Linking;
use statrs::function::logistic::{logistic, logit};
use std::f64::consts::E;

/// Default exponent of [`Power`].
pub const DEFAULT_EXPONENT: f64 = 2.0;

fn checked_log(value: f64, base: f64) -> RegressionResult<f64> {
    if value <= 0.0 {
        return Err(RegressionError::LogOfNonPositive {
            value,
            reason: "Logarithm is only defined for positive values. Double-check your regression model.",
        });
    }
    Ok(value.log(base))
}

/// `Identity` — outcomes are already linear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Linking for Identity {
    fn linearize(&self, value: f64) -> RegressionResult<f64> {
        Ok(value)
    }

    fn delinearize(&self, value: f64) -> RegressionResult<f64> {
        Ok(value)
    }
}

/// `Logistic` — logit into linear space, sigmoid back out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Logistic;

impl Linking for Logistic {
    /// # Errors
    /// [`RegressionError::LogOfNonPositive`] unless `0 < value < 1`.
    fn linearize(&self, value: f64) -> RegressionResult<f64> {
        if !(value > 0.0 && value < 1.0) {
            return Err(RegressionError::LogOfNonPositive {
                value,
                reason: "Logit is only defined on the open interval (0, 1).",
            });
        }
        Ok(logit(value))
    }

    fn delinearize(&self, value: f64) -> RegressionResult<f64> {
        Ok(logistic(value))
    }
}

/// `Exponential` — outcomes grow as `base^(x·β)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    base: f64,
}

impl Exponential {
    pub fn new(base: f64) -> Self {
        Exponential { base }
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Exponential::new(E)
    }
}

impl Linking for Exponential {
    /// # Errors
    /// [`RegressionError::LogOfNonPositive`] if `value <= 0`.
    fn linearize(&self, value: f64) -> RegressionResult<f64> {
        checked_log(value, self.base)
    }

    fn delinearize(&self, value: f64) -> RegressionResult<f64> {
        Ok(self.base.powf(value))
    }
}

/// `Log` — outcomes grow as `log_base(x·β)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Log {
    base: f64,
}

impl Log {
    pub fn new(base: f64) -> Self {
        Log { base }
    }
}

impl Default for Log {
    fn default() -> Self {
        Log::new(E)
    }
}

impl Linking for Log {
    fn linearize(&self, value: f64) -> RegressionResult<f64> {
        Ok(self.base.powf(value))
    }

    /// # Errors
    /// [`RegressionError::LogOfNonPositive`] if the linear prediction is `<= 0`.
    fn delinearize(&self, value: f64) -> RegressionResult<f64> {
        checked_log(value, self.base)
    }
}

/// `Power` — outcomes grow as `(x·β)^(1/exponent)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Power {
    exponent: f64,
}

impl Power {
    pub fn new(exponent: f64) -> Self {
        Power { exponent }
    }
}

impl Default for Power {
    fn default() -> Self {
        Power::new(DEFAULT_EXPONENT)
    }
}

impl Linking for Power {
    fn linearize(&self, value: f64) -> RegressionResult<f64> {
        Ok(value.powf(self.exponent))
    }

    fn delinearize(&self, value: f64) -> RegressionResult<f64> {
        Ok(value.powf(1.0 / self.exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Round trips through each linking on representative values.
    // - Domain errors of the logarithm-based directions.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that delinearize inverts linearize.
    //
    // Given
    // -----
    // - Values inside each linking's domain.
    //
    // Expect
    // ------
    // - The original value is recovered to 1e-12.
    fn delinearize_inverts_linearize() {
        // Arrange
        let cases: Vec<(Box<dyn Linking>, f64)> = vec![
            (Box::new(Identity), -3.5),
            (Box::new(Logistic), 0.2),
            (Box::new(Exponential::default()), 7.0),
            (Box::new(Exponential::new(10.0)), 1000.0),
            (Box::new(Log::new(2.0)), 3.0),
            (Box::new(Power::default()), 4.0),
        ];

        // Act / Assert
        for (linking, value) in cases {
            let round_trip = linking.delinearize(linking.linearize(value).unwrap()).unwrap();
            assert_relative_eq!(round_trip, value, max_relative = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Check known values of the individual transforms.
    //
    // Given
    // -----
    // - logit(0.5), sigmoid(0), log10(1000), 2^3, 3².
    //
    // Expect
    // ------
    // - 0, 0.5, 3, 8, 9.
    fn transforms_match_known_values() {
        // Act / Assert
        assert_relative_eq!(Logistic.linearize(0.5).unwrap(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(Logistic.delinearize(0.0).unwrap(), 0.5);
        let log10 = Exponential::new(10.0).linearize(1000.0).unwrap();
        assert_relative_eq!(log10, 3.0, epsilon = 1e-12);
        assert_relative_eq!(Log::new(2.0).linearize(3.0).unwrap(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(Power::default().linearize(3.0).unwrap(), 9.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure logarithms of non-positive values and saturated logits fail.
    //
    // Given
    // -----
    // - Exponential.linearize(0), Log.delinearize(-1), Logistic.linearize(1).
    //
    // Expect
    // ------
    // - `LogOfNonPositive` each time.
    fn logarithm_domain_is_enforced() {
        // Act / Assert
        assert!(matches!(
            Exponential::default().linearize(0.0),
            Err(RegressionError::LogOfNonPositive { .. })
        ));
        assert!(matches!(
            Log::default().delinearize(-1.0),
            Err(RegressionError::LogOfNonPositive { .. })
        ));
        assert!(matches!(Logistic.linearize(1.0), Err(RegressionError::LogOfNonPositive { .. })));
    }
}
