//! options — validated, string-configurable descent settings.
//!
//! Purpose
//! -------
//! Let callers (including the Python bindings) describe a descent run with
//! plain values and names instead of assembling strategy types by hand.
//! [`DescentOptions::regress`] turns the description into a concrete
//! [`GradientDescent`] and runs it.
//!
//! Key behaviors
//! -------------
//! - [`StoppingTolerances`] requires at least one stopping rule and builds an
//!   [`Any`] criterion from the rules that are set.
//! - [`ScheduleKind`], [`LossKind`] and [`VariantKind`] parse
//!   case-insensitive names through `FromStr`.
//! - Numeric settings are validated when they are set, so a constructed
//!   [`DescentOptions`] is always runnable; the batch size is checked
//!   against the dataset at run time.
//!
//! Conventions
//! -----------
//! - Schedules use their library defaults unless a learning rate is given,
//!   in which case it replaces the base step size.
//! - A positive `lambda` wraps the loss in an L2 [`Regularized`] penalty that
//!   leaves the bias coefficient (index 0) unpenalized.
use crate::algorithm::{
    Algorithm,
    errors::{RegressionError, RegressionResult},
    gradient_descent::{
        GradientDescent,
        gradient::{GradientFunction, Linear, Logistic, Regularized},
        schedule::{self, Adagrad, Adam, Fixed, RmsProp, Schedule},
        stopping::{Any, GradientNorm, MaxIterations, MaxTime, gradient_norm},
    },
    types::Coefficients,
    validation::{verify_non_negative, verify_positive},
};
use crate::data::Observations;
use log::debug;
use std::{str::FromStr, time::Duration};

/// Default iteration budget of [`StoppingTolerances::default`].
pub const DEFAULT_MAX_ITER: usize = 10_000;

/// Stopping rules combined with logical OR.
///
/// - `grad_norm`: stop once the Euclidean gradient norm is at most this.
/// - `max_iter`: stop after this many iterations.
/// - `max_time`: stop once this much wall-clock time has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingTolerances {
    pub grad_norm: Option<f64>,
    pub max_iter: Option<usize>,
    pub max_time: Option<Duration>,
}

impl StoppingTolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `grad_norm`, `max_iter`, or `max_time` must be `Some`.
    /// - If provided, `grad_norm` must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`RegressionError::NoStoppingRuleProvided`] if all three are `None`.
    /// - [`RegressionError::InvalidParameter`] for an invalid `grad_norm` or a
    ///   zero `max_iter`.
    pub fn new(
        grad_norm: Option<f64>, max_iter: Option<usize>, max_time: Option<Duration>,
    ) -> RegressionResult<Self> {
        if grad_norm.is_none() && max_iter.is_none() && max_time.is_none() {
            return Err(RegressionError::NoStoppingRuleProvided);
        }
        if let Some(grad_norm) = grad_norm {
            verify_positive("grad_norm", grad_norm)?;
        }
        if max_iter == Some(0) {
            return Err(RegressionError::InvalidParameter {
                name: "max_iter",
                value: 0.0,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        Ok(StoppingTolerances { grad_norm, max_iter, max_time })
    }

    /// Build the OR of every configured rule, cheapest first.
    ///
    /// # Errors
    /// [`RegressionError::InvalidParameter`] if a public field was set to a
    /// `grad_norm` that [`GradientNorm`] rejects.
    pub fn criterion(&self) -> RegressionResult<Any<'static>> {
        let mut any = Any::default();
        if let Some(max_iter) = self.max_iter {
            any.add(MaxIterations::new(max_iter));
        }
        if let Some(max_time) = self.max_time {
            any.add(MaxTime::new(max_time));
        }
        if let Some(grad_norm) = self.grad_norm {
            any.add(GradientNorm::with_eta(grad_norm)?);
        }
        Ok(any)
    }
}

impl Default for StoppingTolerances {
    /// Default gradient-norm threshold capped at [`DEFAULT_MAX_ITER`] iterations.
    fn default() -> Self {
        StoppingTolerances {
            grad_norm: Some(gradient_norm::DEFAULT_ETA),
            max_iter: Some(DEFAULT_MAX_ITER),
            max_time: None,
        }
    }
}

/// Learning-rate schedule selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScheduleKind {
    Fixed,
    Adagrad,
    RmsProp,
    #[default]
    Adam,
}

impl ScheduleKind {
    /// Box the schedule, replacing its base step size with `learning_rate`
    /// when given.
    pub fn build(self, learning_rate: Option<f64>) -> Box<dyn Schedule> {
        match (self, learning_rate) {
            (ScheduleKind::Fixed, rate) => {
                Box::new(rate.map_or_else(Fixed::default, Fixed::new))
            }
            (ScheduleKind::Adagrad, None) => Box::new(Adagrad::default()),
            (ScheduleKind::Adagrad, Some(rate)) => {
                Box::new(Adagrad::new(rate, schedule::adagrad::DEFAULT_ETA))
            }
            (ScheduleKind::RmsProp, None) => Box::new(RmsProp::default()),
            (ScheduleKind::RmsProp, Some(rate)) => Box::new(RmsProp::new(
                schedule::rms_prop::DEFAULT_RATE,
                rate,
                schedule::rms_prop::DEFAULT_ETA,
            )),
            (ScheduleKind::Adam, None) => Box::new(Adam::default()),
            (ScheduleKind::Adam, Some(rate)) => Box::new(Adam::new(
                rate,
                schedule::adam::DEFAULT_ETA,
                schedule::adam::DEFAULT_MEAN_BETA,
                schedule::adam::DEFAULT_VARIANCE_BETA,
            )),
        }
    }
}

impl FromStr for ScheduleKind {
    type Err = RegressionError;

    /// Parse a schedule name (case-insensitive): `"fixed"`, `"adagrad"`,
    /// `"rmsprop"` or `"adam"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(ScheduleKind::Fixed),
            "adagrad" => Ok(ScheduleKind::Adagrad),
            "rmsprop" => Ok(ScheduleKind::RmsProp),
            "adam" => Ok(ScheduleKind::Adam),
            _ => Err(RegressionError::InvalidSchedule {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'Fixed', 'Adagrad', 'RmsProp' or 'Adam'.",
            }),
        }
    }
}

/// Loss function selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LossKind {
    #[default]
    Linear,
    Logistic,
}

impl LossKind {
    pub fn build(self) -> Box<dyn GradientFunction> {
        match self {
            LossKind::Linear => Box::new(Linear::default()),
            LossKind::Logistic => Box::new(Logistic),
        }
    }
}

impl FromStr for LossKind {
    type Err = RegressionError;

    /// Parse a loss name (case-insensitive): `"linear"` or `"logistic"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(LossKind::Linear),
            "logistic" => Ok(LossKind::Logistic),
            _ => Err(RegressionError::InvalidLoss {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'Linear' or 'Logistic'.",
            }),
        }
    }
}

/// Descent variant selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VariantKind {
    #[default]
    Batch,
    MiniBatch,
    Stochastic,
}

impl FromStr for VariantKind {
    type Err = RegressionError;

    /// Parse a variant name (case-insensitive): `"batch"`, `"minibatch"` or
    /// `"stochastic"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "batch" => Ok(VariantKind::Batch),
            "minibatch" | "mini_batch" => Ok(VariantKind::MiniBatch),
            "stochastic" => Ok(VariantKind::Stochastic),
            _ => Err(RegressionError::InvalidVariant {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'Batch', 'MiniBatch' or 'Stochastic'.",
            }),
        }
    }
}

/// Default mini-batch size.
pub const DEFAULT_BATCH_SIZE: usize = 32;

/// Complete description of a descent run.
///
/// Fields:
/// - `tols`: stopping rules.
/// - `loss`, `schedule`, `variant`: strategy choices.
/// - `learning_rate`: optional override of the schedule's base step.
/// - `batch_size`: observations per mini-batch (ignored by other variants).
/// - `lambda`: L2 penalty strength; `0.0` disables regularization.
/// - `seed`: RNG seed for the sampling variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentOptions {
    pub tols: StoppingTolerances,
    pub loss: LossKind,
    pub schedule: ScheduleKind,
    pub variant: VariantKind,
    pub learning_rate: Option<f64>,
    pub batch_size: usize,
    pub lambda: f64,
    pub seed: u64,
}

impl DescentOptions {
    pub fn new(
        tols: StoppingTolerances, loss: LossKind, schedule: ScheduleKind, variant: VariantKind,
    ) -> Self {
        DescentOptions { tols, loss, schedule, variant, ..DescentOptions::default() }
    }

    /// # Errors
    /// [`RegressionError::InvalidParameter`] unless `rate` is finite and > 0.
    pub fn with_learning_rate(mut self, rate: f64) -> RegressionResult<Self> {
        verify_positive("learning_rate", rate)?;
        self.learning_rate = Some(rate);
        Ok(self)
    }

    /// # Errors
    /// [`RegressionError::InvalidBatchSize`] if `batch_size == 0`.
    pub fn with_batch_size(mut self, batch_size: usize) -> RegressionResult<Self> {
        if batch_size == 0 {
            return Err(RegressionError::InvalidBatchSize { batch_size, observations: 0 });
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    /// # Errors
    /// [`RegressionError::InvalidParameter`] unless `lambda` is finite and ≥ 0.
    pub fn with_lambda(mut self, lambda: f64) -> RegressionResult<Self> {
        verify_non_negative("lambda", lambda)?;
        self.lambda = lambda;
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn gradient_function(&self) -> Box<dyn GradientFunction> {
        let loss = self.loss.build();
        if self.lambda > 0.0 {
            Box::new(Regularized::new(loss).with_lambda(self.lambda).ignore_first_feature(true))
        } else {
            loss
        }
    }

    /// Assemble the configured descent and fit `observations`.
    ///
    /// # Errors
    /// Any error of [`Algorithm::regress`] for the assembled descent,
    /// including [`RegressionError::InvalidBatchSize`] when the mini-batch
    /// is larger than the dataset.
    pub fn regress(&self, observations: &Observations) -> RegressionResult<Coefficients> {
        debug!("descent options: {self:?}");
        let gradient = self.gradient_function();
        let schedule = self.schedule.build(self.learning_rate);
        let criterion = self.tols.criterion()?;
        match self.variant {
            VariantKind::Batch => {
                GradientDescent::batch(gradient, schedule, criterion).regress(observations)
            }
            VariantKind::MiniBatch => GradientDescent::mini_batch(
                gradient,
                schedule,
                criterion,
                self.batch_size,
                self.seed,
            )
            .regress(observations),
            VariantKind::Stochastic => {
                GradientDescent::stochastic(gradient, schedule, criterion, self.seed)
                    .regress(observations)
            }
        }
    }
}

impl Default for DescentOptions {
    fn default() -> Self {
        DescentOptions {
            tols: StoppingTolerances::default(),
            loss: LossKind::default(),
            schedule: ScheduleKind::default(),
            variant: VariantKind::default(),
            learning_rate: None,
            batch_size: DEFAULT_BATCH_SIZE,
            lambda: 0.0,
            seed: 0,
        }
    }
}
