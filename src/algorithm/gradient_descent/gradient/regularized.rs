//! Lᵏ-penalty decorator for gradient functions.
use crate::algorithm::{
    errors::RegressionResult,
    gradient_descent::gradient::GradientFunction,
    types::{Coefficients, Cost, Grad},
    validation::validate_dims,
};
use crate::data::Features;

/// Default penalty weight.
pub const DEFAULT_LAMBDA: f64 = 1.0;

/// Default norm degree of the penalty (ridge).
pub const DEFAULT_LEVEL: i32 = 2;

/// `Regularized` — adds `λ/k · Σ|c_i|^k` to the inner cost and
/// `λ · |c_j|^(k-1)` to each inner gradient component.
///
/// Purpose
/// -------
/// Shrink coefficient magnitudes to reduce overfitting, with the option of
/// leaving the bias coefficient (index 0) unpenalized.
///
/// Fields
/// ------
/// - `inner`: wrapped gradient function providing the unpenalized loss.
/// - `lambda`: penalty weight, default [`DEFAULT_LAMBDA`].
/// - `level`: norm degree `k`, default [`DEFAULT_LEVEL`].
/// - `ignore_first`: skip index 0 in both the cost and the gradient penalty.
///
/// Notes
/// -----
/// - The gradient penalty uses the magnitude `|c_j|`, not its sign, for every
///   level.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_regression::algorithm::gradient_descent::gradient::{
/// #     GradientFunction, Linear, Regularized,
/// # };
/// let ridge = Regularized::new(Linear::default()).with_lambda(0.5).ignore_first_feature(true);
/// let cost = ridge.cost(&array![1.0, 2.0], &array![1.0, 1.0], 3.0).unwrap();
/// assert_eq!(cost, 0.0 + 0.5 / 2.0 * 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Regularized<G> {
    inner: G,
    lambda: f64,
    level: i32,
    ignore_first: bool,
}

impl<G: GradientFunction> Regularized<G> {
    pub fn new(inner: G) -> Self {
        Regularized { inner, lambda: DEFAULT_LAMBDA, level: DEFAULT_LEVEL, ignore_first: false }
    }

    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Leave the bias coefficient (index 0) out of the penalty.
    pub fn ignore_first_feature(mut self, ignore_first: bool) -> Self {
        self.ignore_first = ignore_first;
        self
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    fn penalized(&self, index: usize) -> bool {
        index > 0 || !self.ignore_first
    }
}

impl<G: GradientFunction> GradientFunction for Regularized<G> {
    fn cost(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Cost> {
        let penalty: f64 = coefficients
            .iter()
            .enumerate()
            .filter(|(i, _)| self.penalized(*i))
            .map(|(_, coefficient)| coefficient.abs().powi(self.level))
            .sum();
        let base = self.inner.cost(coefficients, features, outcome)?;
        Ok(base + self.lambda * penalty / f64::from(self.level))
    }

    fn gradient(
        &self, coefficients: &Coefficients, features: &Features, outcome: f64,
    ) -> RegressionResult<Grad> {
        let mut gradient = self.inner.gradient(coefficients, features, outcome)?;
        validate_dims(coefficients.len(), gradient.len())?;
        for (i, (slope, coefficient)) in gradient.iter_mut().zip(coefficients.iter()).enumerate() {
            if self.penalized(i) {
                *slope += self.lambda * coefficient.abs().powi(self.level - 1);
            }
        }
        Ok(gradient)
    }
}
