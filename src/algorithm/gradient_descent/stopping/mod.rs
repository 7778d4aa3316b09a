//! stopping — criteria deciding when a descent run halts.
//!
//! Purpose
//! -------
//! Define the [`StoppingCriterion`] strategy and its implementations. Leaf
//! criteria inspect the iteration count, the wall clock, the gradient, or the
//! coefficients; combinators compose other criteria.
//!
//! Key behaviors
//! -------------
//! - [`MaxIterations`], [`MaxTime`]: hard budgets.
//! - [`GradientNorm`]: halts once `‖g‖_p ≤ eta`.
//! - [`CoefficientEquality`]: halts once an iteration leaves the
//!   coefficients bit-identical to the previous call.
//! - [`Any`]: short-circuiting OR over a list of criteria.
//! - [`NthIteration`]: consults its inner criterion only every n-th call.
//! - [`SteppedCriteria`]: hands the inner criterion `step(i) · g_i` instead
//!   of the raw gradient.
//! - [`DescentSpy`]: observes every call through a hook, then delegates.
//!
//! Invariants & assumptions
//! ------------------------
//! - `converged` is called exactly once per iteration, after the coefficient
//!   update.
//! - Criteria carry state between calls; [`StoppingCriterion::reset`] clears
//!   it and decorators forward the reset to what they wrap.
//! - Non-termination is not detected here. Callers bound gradient-based
//!   criteria with [`MaxIterations`] or [`MaxTime`] inside [`Any`].

pub mod coefficient_equality;
pub mod combinators;
pub mod gradient_norm;
pub mod max_iterations;
pub mod max_time;

pub use self::coefficient_equality::CoefficientEquality;
pub use self::combinators::{Any, DescentSpy, NthIteration, SteppedCriteria};
pub use self::gradient_norm::GradientNorm;
pub use self::max_iterations::MaxIterations;
pub use self::max_time::MaxTime;

use crate::algorithm::types::{Coefficients, Grad};

/// Decide whether a descent run should stop after the current iteration.
pub trait StoppingCriterion {
    fn converged(&mut self, gradient: &Grad, coefficients: &Coefficients) -> bool;

    /// Clear any state accumulated over previous calls.
    fn reset(&mut self) {}
}

impl<C: StoppingCriterion + ?Sized> StoppingCriterion for Box<C> {
    fn converged(&mut self, gradient: &Grad, coefficients: &Coefficients) -> bool {
        (**self).converged(gradient, coefficients)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
