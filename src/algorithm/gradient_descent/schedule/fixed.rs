//! Constant learning rate.
use crate::algorithm::{gradient_descent::schedule::Schedule, types::Grad};

/// Default step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// `Fixed` — the same step for every coefficient on every iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed {
    step_size: f64,
}

impl Fixed {
    pub fn new(step_size: f64) -> Self {
        Fixed { step_size }
    }
}

impl Default for Fixed {
    fn default() -> Self {
        Fixed::new(DEFAULT_STEP_SIZE)
    }
}

impl Schedule for Fixed {
    fn update(&mut self, _gradient: &Grad) {}

    fn step(&self, _feature_index: usize) -> f64 {
        self.step_size
    }
}
