//! Adam: adaptive moment estimation.
use crate::algorithm::{gradient_descent::schedule::Schedule, types::Grad};
use ndarray::Array1;

/// Default base step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.001;

/// Default smoothing term added to the corrected standard deviation.
pub const DEFAULT_ETA: f64 = 1e-8;

/// Default decay of the first-moment estimate.
pub const DEFAULT_MEAN_BETA: f64 = 0.9;

/// Default decay of the second-moment estimate.
pub const DEFAULT_VARIANCE_BETA: f64 = 0.999;

/// `Adam` — bias-corrected first/second moment schedule.
///
/// After `t` updates,
///
/// ```text
/// m̂_i = m_i / (1 − β₁ᵗ),   v̂_i = v_i / (1 − β₂ᵗ)
/// step(i) = base · m̂_i / ((sqrt(v̂_i) + eta) · g_i)
/// ```
///
/// where `g_i` is the gradient from the most recent update. Dividing by
/// `g_i` cancels the multiplication in the coefficient update, so the
/// effective move is `base · m̂_i / (sqrt(v̂_i) + eta)`. When `g_i == 0` the
/// step is `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Adam {
    step_size: f64,
    eta: f64,
    mean_beta: f64,
    variance_beta: f64,
    iteration: i32,
    means: Array1<f64>,
    variances: Array1<f64>,
    gradient: Array1<f64>,
}

impl Adam {
    pub fn new(step_size: f64, eta: f64, mean_beta: f64, variance_beta: f64) -> Self {
        Adam {
            step_size,
            eta,
            mean_beta,
            variance_beta,
            iteration: 0,
            means: Array1::zeros(0),
            variances: Array1::zeros(0),
            gradient: Array1::zeros(0),
        }
    }
}

impl Default for Adam {
    fn default() -> Self {
        Adam::new(DEFAULT_STEP_SIZE, DEFAULT_ETA, DEFAULT_MEAN_BETA, DEFAULT_VARIANCE_BETA)
    }
}

impl Schedule for Adam {
    fn update(&mut self, gradient: &Grad) {
        if self.means.len() != gradient.len() {
            self.means = Array1::zeros(gradient.len());
            self.variances = Array1::zeros(gradient.len());
        }

        let (mean_beta, variance_beta) = (self.mean_beta, self.variance_beta);
        self.means.zip_mut_with(gradient, |m, &slope| {
            *m = mean_beta * *m + (1.0 - mean_beta) * slope
        });
        self.variances.zip_mut_with(gradient, |v, &slope| {
            *v = variance_beta * *v + (1.0 - variance_beta) * slope.powi(2)
        });

        self.iteration = self.iteration.saturating_add(1);
        self.gradient = gradient.clone();
    }

    fn step(&self, feature_index: usize) -> f64 {
        let slope = match self.gradient.get(feature_index) {
            Some(&slope) if slope != 0.0 => slope,
            _ => return 0.0,
        };

        let corrected_mean =
            self.means[feature_index] / (1.0 - self.mean_beta.powi(self.iteration));
        let corrected_variance =
            self.variances[feature_index] / (1.0 - self.variance_beta.powi(self.iteration));

        self.step_size * corrected_mean / ((corrected_variance.sqrt() + self.eta) * slope)
    }

    fn reset(&mut self) {
        *self = Adam::new(self.step_size, self.eta, self.mean_beta, self.variance_beta);
    }
}
