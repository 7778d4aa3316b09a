//! Criteria built from other criteria.
use crate::algorithm::{
    gradient_descent::{schedule::Schedule, stopping::StoppingCriterion},
    types::{Coefficients, Grad},
};
use ndarray::Array1;

/// `Any` — converged as soon as one of its criteria converges.
///
/// Criteria are consulted in insertion order and evaluation stops at the
/// first `true`, so later criteria do not see that call. An empty `Any`
/// never converges. Children may borrow for `'a`, e.g. a [`DescentSpy`]
/// whose hook writes into a local.
#[derive(Default)]
pub struct Any<'a> {
    criteria: Vec<Box<dyn StoppingCriterion + 'a>>,
}

impl<'a> Any<'a> {
    pub fn new(criteria: Vec<Box<dyn StoppingCriterion + 'a>>) -> Self {
        Any { criteria }
    }

    pub fn add<C: StoppingCriterion + 'a>(&mut self, criterion: C) -> &mut Self {
        self.criteria.push(Box::new(criterion));
        self
    }

    pub fn with<C: StoppingCriterion + 'a>(mut self, criterion: C) -> Self {
        self.add(criterion);
        self
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl std::fmt::Debug for Any<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Any").field("criteria", &self.criteria.len()).finish()
    }
}

impl StoppingCriterion for Any<'_> {
    fn converged(&mut self, gradient: &Grad, coefficients: &Coefficients) -> bool {
        self.criteria.iter_mut().any(|criterion| criterion.converged(gradient, coefficients))
    }

    fn reset(&mut self) {
        self.criteria.iter_mut().for_each(|criterion| criterion.reset());
    }
}

/// `NthIteration` — forwards to `inner` only on every `n`-th call and
/// reports `false` otherwise.
///
/// `n == 0` behaves like `n == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct NthIteration<C> {
    inner: C,
    n: usize,
    iteration: usize,
}

impl<C: StoppingCriterion> NthIteration<C> {
    pub fn new(inner: C, n: usize) -> Self {
        NthIteration { inner, n: n.max(1), iteration: 0 }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: StoppingCriterion> StoppingCriterion for NthIteration<C> {
    fn converged(&mut self, gradient: &Grad, coefficients: &Coefficients) -> bool {
        self.iteration = (self.iteration + 1) % self.n;
        if self.iteration != 0 {
            return false;
        }
        self.inner.converged(gradient, coefficients)
    }

    fn reset(&mut self) {
        self.iteration = 0;
        self.inner.reset();
    }
}

/// `SteppedCriteria` — hands `inner` the scaled gradient
/// `[step(0)·g_0, step(1)·g_1, …]`.
///
/// With a [`GradientNorm`](super::GradientNorm) inside, this halts on the
/// size of the actual coefficient move rather than on the slope. Pass a
/// [`Shared`](crate::algorithm::gradient_descent::schedule::Shared) clone of
/// the descent's schedule to observe the same state the loop uses. The
/// schedule is read, never updated or reset here.
#[derive(Debug, Clone)]
pub struct SteppedCriteria<C, S> {
    inner: C,
    schedule: S,
}

impl<C: StoppingCriterion, S: Schedule> SteppedCriteria<C, S> {
    pub fn new(inner: C, schedule: S) -> Self {
        SteppedCriteria { inner, schedule }
    }
}

impl<C: StoppingCriterion, S: Schedule> StoppingCriterion for SteppedCriteria<C, S> {
    fn converged(&mut self, gradient: &Grad, coefficients: &Coefficients) -> bool {
        let stepped =
            Array1::from_iter(gradient.iter().enumerate().map(|(i, g)| self.schedule.step(i) * g));
        self.inner.converged(&stepped, coefficients)
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

/// `DescentSpy` — calls `hook(gradient, coefficients)` on every call, then
/// returns whatever `inner` decides.
pub struct DescentSpy<C, F> {
    inner: C,
    hook: F,
}

impl<C, F> DescentSpy<C, F>
where
    C: StoppingCriterion,
    F: FnMut(&Grad, &Coefficients),
{
    pub fn new(inner: C, hook: F) -> Self {
        DescentSpy { inner, hook }
    }
}

impl<C, F> StoppingCriterion for DescentSpy<C, F>
where
    C: StoppingCriterion,
    F: FnMut(&Grad, &Coefficients),
{
    fn converged(&mut self, gradient: &Grad, coefficients: &Coefficients) -> bool {
        (self.hook)(gradient, coefficients);
        self.inner.converged(gradient, coefficients)
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}
