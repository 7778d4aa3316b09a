//! Decorators shrinking an inner schedule's step as iterations accumulate.
//!
//! Both decorators forward `update` to the wrapped schedule and count how
//! many updates they have seen; `step` multiplies the inner step by an
//! iteration-dependent factor.
//!
//! Constructors reject a zero scale or root and a non-positive factor.
use crate::algorithm::{
    errors::RegressionResult,
    gradient_descent::schedule::Schedule,
    types::Grad,
    validation::{verify_positive, verify_positive_count},
};

/// Default decay factor reached after `scale` iterations.
pub const DEFAULT_FACTOR: f64 = 1000.0;

/// Default root for [`InverseRootDecay`].
pub const DEFAULT_ROOT: i32 = 2;

/// `ExponentialDecay` — `step(i) = inner.step(i) · exp(−ln(factor) · t / scale)`.
///
/// The step therefore reaches `1 / factor` of the inner step after `scale`
/// updates.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialDecay<S> {
    inner: S,
    scale: f64,
    log_factor: f64,
    iteration: u64,
}

impl<S: Schedule> ExponentialDecay<S> {
    /// Decay by [`DEFAULT_FACTOR`] over `scale` updates.
    ///
    /// # Errors
    /// [`RegressionError::InvalidParameter`](crate::algorithm::RegressionError::InvalidParameter)
    /// if `scale` is zero.
    pub fn new(inner: S, scale: u32) -> RegressionResult<Self> {
        ExponentialDecay::with_factor(inner, scale, DEFAULT_FACTOR)
    }

    /// # Errors
    /// [`RegressionError::InvalidParameter`](crate::algorithm::RegressionError::InvalidParameter)
    /// if `scale` is zero or `factor` is not finite and positive.
    pub fn with_factor(inner: S, scale: u32, factor: f64) -> RegressionResult<Self> {
        verify_positive_count("scale", i64::from(scale))?;
        verify_positive("factor", factor)?;
        Ok(ExponentialDecay {
            inner,
            scale: f64::from(scale),
            log_factor: factor.ln(),
            iteration: 0,
        })
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Schedule> Schedule for ExponentialDecay<S> {
    fn update(&mut self, gradient: &Grad) {
        self.inner.update(gradient);
        self.iteration += 1;
    }

    fn step(&self, feature_index: usize) -> f64 {
        let exponent = -self.log_factor * self.iteration as f64 / self.scale;
        self.inner.step(feature_index) * exponent.exp()
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.iteration = 0;
    }
}

/// `InverseRootDecay` — `step(i) = inner.step(i) / t^(1/root)`.
///
/// Before the first update `t` is taken as 1, so the inner step is returned
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseRootDecay<S> {
    inner: S,
    root: i32,
    iteration: u64,
}

impl<S: Schedule> InverseRootDecay<S> {
    pub fn new(inner: S) -> Self {
        InverseRootDecay { inner, root: DEFAULT_ROOT, iteration: 0 }
    }

    /// # Errors
    /// [`RegressionError::InvalidParameter`](crate::algorithm::RegressionError::InvalidParameter)
    /// unless `root ≥ 1`.
    pub fn with_root(inner: S, root: i32) -> RegressionResult<Self> {
        verify_positive_count("root", i64::from(root))?;
        Ok(InverseRootDecay { inner, root, iteration: 0 })
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Schedule> Schedule for InverseRootDecay<S> {
    fn update(&mut self, gradient: &Grad) {
        self.inner.update(gradient);
        self.iteration += 1;
    }

    fn step(&self, feature_index: usize) -> f64 {
        let iteration = self.iteration.max(1) as f64;
        self.inner.step(feature_index) / iteration.powf(1.0 / f64::from(self.root))
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.iteration = 0;
    }
}
