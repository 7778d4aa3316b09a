//! RMSProp: steps scaled by a moving average of squared gradients.
use crate::algorithm::{gradient_descent::schedule::Schedule, types::Grad};
use ndarray::Array1;

/// Default decay rate of the squared-gradient average.
pub const DEFAULT_RATE: f64 = 0.9;

/// Default base step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.001;

/// Default smoothing term added under the root.
pub const DEFAULT_ETA: f64 = 1e-6;

/// `RmsProp` — `step(i) = base / sqrt(eta + h_i)`.
///
/// `h_i` is seeded with `g_i²` on the first update and thereafter follows
/// `h_i ← rate · h_i + (1 − rate) · g_i²`. Unlike [`Adagrad`](super::Adagrad),
/// steps may grow again when the slope flattens.
#[derive(Debug, Clone, PartialEq)]
pub struct RmsProp {
    rate: f64,
    step_size: f64,
    eta: f64,
    history: Option<Array1<f64>>,
}

impl RmsProp {
    pub fn new(rate: f64, step_size: f64, eta: f64) -> Self {
        RmsProp { rate, step_size, eta, history: None }
    }
}

impl Default for RmsProp {
    fn default() -> Self {
        RmsProp::new(DEFAULT_RATE, DEFAULT_STEP_SIZE, DEFAULT_ETA)
    }
}

impl Schedule for RmsProp {
    fn update(&mut self, gradient: &Grad) {
        let rate = self.rate;
        match &mut self.history {
            Some(history) if history.len() == gradient.len() => {
                history.zip_mut_with(gradient, |h, &slope| {
                    *h = *h * rate + (1.0 - rate) * slope.powi(2)
                });
            }
            _ => self.history = Some(gradient.mapv(|slope| slope.powi(2))),
        }
    }

    fn step(&self, feature_index: usize) -> f64 {
        let history = self.history.as_ref().and_then(|h| h.get(feature_index).copied());
        self.step_size / (self.eta + history.unwrap_or(0.0)).sqrt()
    }

    fn reset(&mut self) {
        self.history = None;
    }
}
