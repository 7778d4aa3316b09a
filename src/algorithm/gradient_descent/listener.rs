//! Per-iteration observation hooks for the descent loop.
use crate::algorithm::types::{Coefficients, Cost};

/// Receives the coefficients after every coefficient update.
///
/// When [`IterationListener::wants_average_cost`] returns `true`, the loop
/// also evaluates the mean cost over the full dataset for that iteration and
/// passes it as `Some`; otherwise the extra pass is skipped and `None` is
/// passed.
pub trait IterationListener {
    fn wants_average_cost(&self) -> bool {
        false
    }

    fn on_iteration(&mut self, coefficients: &Coefficients, average_cost: Option<Cost>);
}

/// Listener that ignores every iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopListener;

impl IterationListener for NoopListener {
    fn on_iteration(&mut self, _coefficients: &Coefficients, _average_cost: Option<Cost>) {}
}

/// Listener forwarding to a closure.
pub struct CallbackListener<F> {
    callback: F,
    average_cost: bool,
}

impl<F: FnMut(&Coefficients, Option<Cost>)> CallbackListener<F> {
    /// Forward coefficients only.
    pub fn new(callback: F) -> Self {
        CallbackListener { callback, average_cost: false }
    }

    /// Forward coefficients together with the mean dataset cost.
    pub fn with_average_cost(callback: F) -> Self {
        CallbackListener { callback, average_cost: true }
    }
}

impl<F: FnMut(&Coefficients, Option<Cost>)> IterationListener for CallbackListener<F> {
    fn wants_average_cost(&self) -> bool {
        self.average_cost
    }

    fn on_iteration(&mut self, coefficients: &Coefficients, average_cost: Option<Cost>) {
        (self.callback)(coefficients, average_cost)
    }
}

impl<L: IterationListener + ?Sized> IterationListener for &mut L {
    fn wants_average_cost(&self) -> bool {
        (**self).wants_average_cost()
    }

    fn on_iteration(&mut self, coefficients: &Coefficients, average_cost: Option<Cost>) {
        (**self).on_iteration(coefficients, average_cost)
    }
}
