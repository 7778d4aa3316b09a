//! schedule — per-coefficient learning-rate strategies.
//!
//! Purpose
//! -------
//! Define the [`Schedule`] strategy consumed by the descent loop and provide
//! its concrete implementations:
//!
//! - [`Fixed`]: constant step size.
//! - [`Adagrad`]: step shrinks with the running sum of squared gradients.
//! - [`RmsProp`]: step scales with an exponential average of squared
//!   gradients.
//! - [`Adam`]: bias-corrected first/second moment estimates.
//! - [`ExponentialDecay`] / [`InverseRootDecay`]: decorators multiplying an
//!   inner schedule's step by an iteration-dependent factor.
//! - [`Shared`]: reference-counted handle so one schedule can drive the loop
//!   and be read by a [`SteppedCriteria`](crate::algorithm::gradient_descent::stopping::SteppedCriteria).
//!
//! Invariants & assumptions
//! ------------------------
//! - [`Schedule::update`] is called exactly once per iteration, after the
//!   gradient is computed and before any [`Schedule::step`] for that
//!   iteration.
//! - State is never reset mid-descent. [`Schedule::reset`] restores the
//!   freshly-constructed state and is invoked by the descent loop at the
//!   start of every `regress`.
//! - `step` before the first `update` treats all accumulators as zero.
//!
//! Conventions
//! -----------
//! - The coefficient update is `c_i -= step(i) · g_i`. [`Adam`] divides by
//!   the current gradient component to cancel that multiplication, since its
//!   direction comes from the corrected mean instead.

pub mod adagrad;
pub mod adam;
pub mod decay;
pub mod fixed;
pub mod rms_prop;
pub mod shared;

pub use self::adagrad::Adagrad;
pub use self::adam::Adam;
pub use self::decay::{ExponentialDecay, InverseRootDecay};
pub use self::fixed::Fixed;
pub use self::rms_prop::RmsProp;
pub use self::shared::Shared;

use crate::algorithm::types::Grad;

/// Learning-rate strategy fed with the gradient history of one descent run.
pub trait Schedule {
    /// Fold the current iteration's gradient into the internal state.
    fn update(&mut self, gradient: &Grad);

    /// Learning rate for coefficient `feature_index` as of the last update.
    fn step(&self, feature_index: usize) -> f64;

    /// Return to the freshly-constructed state.
    fn reset(&mut self) {}
}

impl<S: Schedule + ?Sized> Schedule for Box<S> {
    fn update(&mut self, gradient: &Grad) {
        (**self).update(gradient)
    }

    fn step(&self, feature_index: usize) -> f64 {
        (**self).step(feature_index)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
