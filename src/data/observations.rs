//! Observation containers for regression fits.
//!
//! Purpose
//! -------
//! Provide the validated input collection consumed by every regression
//! algorithm in this crate. An [`Observations`] value is an ordered sequence
//! of [`Observation`]s, each pairing a fixed-width feature vector with a
//! scalar outcome.
//!
//! Key behaviors
//! -------------
//! - The first inserted observation fixes the feature count; every later
//!   insertion with a different width is rejected with
//!   [`DataError::FeatureCountMismatch`].
//! - Bulk constructors reject mismatched row/outcome counts with
//!   [`DataError::OutcomeCountMismatch`] before inserting anything.
//! - Dense views ([`Observations::features`], [`Observations::outcomes`]) are
//!   materialized on demand for the closed-form solver.
//!
//! Invariants & assumptions
//! ------------------------
//! - All observations in one collection share the same, non-zero width.
//! - An [`Observation`] is immutable once created; the collection only grows.
//! - Algorithms borrow the collection immutably for the duration of a fit, so
//!   it cannot change mid-descent.
//!
//! Conventions
//! -----------
//! - Index 0 of every feature vector is, by convention, the constant `1.0`
//!   paired with the bias coefficient. The collection does not insert it; the
//!   caller does.
//! - Feature vectors are `ndarray::Array1<f64>`; the dense design matrix is
//!   `Array2<f64>` with one row per observation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover width fixing, mismatch rejection, bulk construction,
//!   and the dense views.
use crate::data::errors::{DataError, DataResult};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Feature vector of a single observation.
pub type Features = Array1<f64>;

/// `Observation` — one feature vector plus its observed outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    features: Features,
    outcome: f64,
}

impl Observation {
    pub fn new(features: Features, outcome: f64) -> Self {
        Observation { features, outcome }
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn outcome(&self) -> f64 {
        self.outcome
    }

    /// Number of features carried by this observation.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// `Observations` — ordered, fixed-width collection of observations.
///
/// Purpose
/// -------
/// Hold the dataset a regression is fitted to, guaranteeing that every
/// observation has the same number of features.
///
/// Fields
/// ------
/// - `feature_count`: `usize`
///   Width fixed by the first inserted observation; `0` while empty.
/// - `observations`: `Vec<Observation>`
///   Observations in insertion order.
///
/// Invariants
/// ----------
/// - `feature_count == 0` iff `observations.is_empty()`.
/// - Every stored observation has exactly `feature_count` features.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_regression::data::Observations;
/// let mut observations = Observations::new();
/// observations.add(array![1.0, 2.0], 3.0).unwrap();
/// assert!(observations.add(array![1.0], 2.0).is_err());
/// assert_eq!(observations.feature_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observations {
    feature_count: usize,
    observations: Vec<Observation>,
}

impl Observations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from parallel feature rows and outcomes.
    ///
    /// Errors
    /// ------
    /// - [`DataError::OutcomeCountMismatch`] when `features.len() != outcomes.len()`.
    /// - Any error raised by [`Observations::add`] for an individual row.
    pub fn from_vecs(features: Vec<Vec<f64>>, outcomes: Vec<f64>) -> DataResult<Self> {
        if features.len() != outcomes.len() {
            return Err(DataError::OutcomeCountMismatch {
                features: features.len(),
                outcomes: outcomes.len(),
            });
        }
        let mut observations = Self::new();
        for (row, outcome) in features.into_iter().zip(outcomes) {
            observations.add(Array1::from(row), outcome)?;
        }
        Ok(observations)
    }

    /// Build a collection from a dense design matrix and an outcome vector.
    ///
    /// Each row of `features` becomes one observation.
    ///
    /// Errors
    /// ------
    /// - [`DataError::OutcomeCountMismatch`] when the row count differs from
    ///   `outcomes.len()`.
    /// - [`DataError::EmptyFeatures`] when the matrix has zero columns.
    pub fn from_arrays(
        features: ArrayView2<'_, f64>, outcomes: ArrayView1<'_, f64>,
    ) -> DataResult<Self> {
        if features.nrows() != outcomes.len() {
            return Err(DataError::OutcomeCountMismatch {
                features: features.nrows(),
                outcomes: outcomes.len(),
            });
        }
        let mut observations = Self::new();
        for (row, &outcome) in features.rows().into_iter().zip(outcomes.iter()) {
            observations.add(row.to_owned(), outcome)?;
        }
        Ok(observations)
    }

    /// Append one observation built from `features` and `outcome`.
    pub fn add(&mut self, features: Features, outcome: f64) -> DataResult<&mut Self> {
        self.add_observation(Observation::new(features, outcome))
    }

    /// Append an already-built observation.
    ///
    /// Errors
    /// ------
    /// - [`DataError::EmptyFeatures`] if the observation has no features.
    /// - [`DataError::FeatureCountMismatch`] if its width differs from the
    ///   width fixed by the first observation.
    pub fn add_observation(&mut self, observation: Observation) -> DataResult<&mut Self> {
        let index = self.observations.len();
        let width = observation.len();
        if width == 0 {
            return Err(DataError::EmptyFeatures { index });
        }
        if self.observations.is_empty() {
            self.feature_count = width;
        } else if width != self.feature_count {
            return Err(DataError::FeatureCountMismatch {
                index,
                expected: self.feature_count,
                actual: width,
            });
        }
        self.observations.push(observation);
        Ok(self)
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Dense `n × p` design matrix, one row per observation.
    pub fn features(&self) -> Array2<f64> {
        let mut design = Array2::zeros((self.len(), self.feature_count));
        for (mut row, observation) in design.rows_mut().into_iter().zip(&self.observations) {
            row.assign(observation.features());
        }
        design
    }

    /// Outcomes in insertion order.
    pub fn outcomes(&self) -> Array1<f64> {
        self.observations.iter().map(Observation::outcome).collect()
    }
}

impl<'a> IntoIterator for &'a Observations {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Width fixing by the first observation and rejection of mismatches.
    // - Bulk construction from `Vec`s and from `ndarray` views.
    // - Dense design-matrix and outcome views.
    //
    // They intentionally DO NOT cover:
    // - Any use of the collection by regression algorithms.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure the first observation fixes the width and later mismatches are
    // rejected without modifying the collection.
    //
    // Given
    // -----
    // - An empty collection, one 2-wide observation, then a 3-wide one.
    //
    // Expect
    // ------
    // - The second insertion fails with `FeatureCountMismatch` and the
    //   collection still holds exactly one observation.
    fn add_rejects_observation_with_different_width() {
        // Arrange
        let mut observations = Observations::new();
        observations.add(array![1.0, 2.0], 3.0).unwrap();

        // Act
        let result = observations.add(array![1.0, 2.0, 3.0], 4.0).map(|_| ());

        // Assert
        assert_eq!(
            result,
            Err(DataError::FeatureCountMismatch { index: 1, expected: 2, actual: 3 })
        );
        assert_eq!(observations.len(), 1);
        assert_eq!(observations.feature_count(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify that an empty feature vector is refused.
    //
    // Given
    // -----
    // - An empty collection and a zero-width observation.
    //
    // Expect
    // ------
    // - `EmptyFeatures { index: 0 }`.
    fn add_rejects_empty_feature_vector() {
        // Arrange
        let mut observations = Observations::new();

        // Act
        let result = observations.add(Array1::zeros(0), 1.0).map(|_| ());

        // Assert
        assert_eq!(result, Err(DataError::EmptyFeatures { index: 0 }));
        assert!(observations.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Check that bulk construction rejects a row/outcome count mismatch.
    //
    // Given
    // -----
    // - Two feature rows and three outcomes.
    //
    // Expect
    // ------
    // - `OutcomeCountMismatch { features: 2, outcomes: 3 }`.
    fn from_vecs_rejects_outcome_count_mismatch() {
        // Arrange
        let features = vec![vec![1.0, 1.0], vec![1.0, 2.0]];
        let outcomes = vec![1.0, 2.0, 3.0];

        // Act
        let result = Observations::from_vecs(features, outcomes);

        // Assert
        assert_eq!(result, Err(DataError::OutcomeCountMismatch { features: 2, outcomes: 3 }));
    }

    #[test]
    // Purpose
    // -------
    // Verify that bulk construction from `ndarray` preserves order and that
    // the dense views reproduce the inputs.
    //
    // Given
    // -----
    // - A 3×2 design matrix and 3 outcomes.
    //
    // Expect
    // ------
    // - `features()` equals the input matrix and `outcomes()` the input vector.
    fn from_arrays_round_trips_through_dense_views() {
        // Arrange
        let design = array![[1.0, 1.0], [1.0, 2.0], [1.0, 1.3]];
        let outcomes = array![1.0, 2.0, 3.0];

        // Act
        let observations = Observations::from_arrays(design.view(), outcomes.view()).unwrap();

        // Assert
        assert_eq!(observations.len(), 3);
        assert_eq!(observations.feature_count(), 2);
        assert_eq!(observations.features(), design);
        assert_eq!(observations.outcomes(), outcomes);
        assert_eq!(observations.get(1).map(Observation::outcome), Some(2.0));
    }
}
