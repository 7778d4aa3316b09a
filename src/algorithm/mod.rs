//! algorithm — regression solvers sharing one contract.
//!
//! Every solver implements [`Algorithm`]: take a borrowed
//! [`Observations`](crate::data::Observations) and return one coefficient
//! per feature, index-aligned with the feature vectors.
//!
//! - [`gradient_descent`]: the iterative engine, assembled from gradient
//!   function, schedule, stopping criterion and descent variant.
//! - [`least_squares`]: the closed-form normal-equation solver.
//!
//! Shared pieces live alongside: [`errors`] (the [`RegressionError`] surface),
//! [`types`] (numeric aliases) and [`validation`] (dimension and
//! hyperparameter checks).

pub mod errors;
pub mod gradient_descent;
pub mod least_squares;
pub mod types;
pub mod validation;

pub use self::errors::{RegressionError, RegressionResult};
pub use self::gradient_descent::GradientDescent;
pub use self::least_squares::LeastSquares;
pub use self::types::{Coefficients, Cost, Grad};

use crate::data::Observations;

/// A regression solver.
///
/// `regress` takes `&mut self` because iterative solvers carry strategy
/// state (schedule accumulators, criterion counters, RNGs) that evolves
/// during a run.
pub trait Algorithm {
    /// Fit coefficients to `observations`.
    fn regress(&mut self, observations: &Observations) -> RegressionResult<Coefficients>;
}

pub mod prelude {
    pub use super::gradient_descent::{
        Batch, CallbackListener, DescentVariant, GradientDescent, GradientFunction,
        IterationListener, MiniBatch, NoopListener, Sampling, Schedule, Stochastic,
        StoppingCriterion,
        gradient::{Linear, Logistic, NumericGradient, Regularized},
        options::{DescentOptions, LossKind, ScheduleKind, StoppingTolerances, VariantKind},
        schedule::{Adagrad, Adam, ExponentialDecay, Fixed, InverseRootDecay, RmsProp, Shared},
        stopping::{
            Any, CoefficientEquality, DescentSpy, GradientNorm, MaxIterations, MaxTime,
            NthIteration, SteppedCriteria,
        },
    };
    pub use super::{Algorithm, LeastSquares, RegressionError, RegressionResult};
}
