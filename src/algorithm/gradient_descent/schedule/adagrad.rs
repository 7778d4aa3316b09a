//! Adagrad: per-coefficient steps shrinking with accumulated squared gradients.
use crate::algorithm::{gradient_descent::schedule::Schedule, types::Grad};
use ndarray::Array1;

/// Default base step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// Default smoothing term added to the root of the accumulator.
pub const DEFAULT_ETA: f64 = 1e-6;

/// `Adagrad` — `step(i) = base / (eta + sqrt(Σ g_i²))`.
///
/// The step size for each coefficient is monotonically non-increasing over a
/// run.
#[derive(Debug, Clone, PartialEq)]
pub struct Adagrad {
    step_size: f64,
    eta: f64,
    sum_squared_gradient: Array1<f64>,
}

impl Adagrad {
    pub fn new(step_size: f64, eta: f64) -> Self {
        Adagrad { step_size, eta, sum_squared_gradient: Array1::zeros(0) }
    }
}

impl Default for Adagrad {
    fn default() -> Self {
        Adagrad::new(DEFAULT_STEP_SIZE, DEFAULT_ETA)
    }
}

impl Schedule for Adagrad {
    fn update(&mut self, gradient: &Grad) {
        if self.sum_squared_gradient.len() != gradient.len() {
            self.sum_squared_gradient = Array1::zeros(gradient.len());
        }
        self.sum_squared_gradient.zip_mut_with(gradient, |sum, &slope| *sum += slope.powi(2));
    }

    fn step(&self, feature_index: usize) -> f64 {
        let sum = self.sum_squared_gradient.get(feature_index).copied().unwrap_or(0.0);
        self.step_size / (self.eta + sum.sqrt())
    }

    fn reset(&mut self) {
        self.sum_squared_gradient = Array1::zeros(0);
    }
}
