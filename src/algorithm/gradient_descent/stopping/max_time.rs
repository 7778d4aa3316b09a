//! Wall-clock budget.
use crate::algorithm::{
    gradient_descent::stopping::StoppingCriterion,
    types::{Coefficients, Grad},
};
use std::time::{Duration, Instant};

/// `MaxTime` — converged once `limit` has elapsed since the first call.
///
/// The clock starts on the first `converged` call, not at construction, so a
/// criterion built ahead of time does not eat into the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxTime {
    limit: Duration,
    started: Option<Instant>,
}

impl MaxTime {
    pub fn new(limit: Duration) -> Self {
        MaxTime { limit, started: None }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl StoppingCriterion for MaxTime {
    fn converged(&mut self, _gradient: &Grad, _coefficients: &Coefficients) -> bool {
        let started = *self.started.get_or_insert_with(Instant::now);
        started.elapsed() >= self.limit
    }

    fn reset(&mut self) {
        self.started = None;
    }
}
