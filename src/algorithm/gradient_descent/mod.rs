//! gradient_descent — the iterative fitting engine.
//!
//! Purpose
//! -------
//! Run a generic gradient-descent loop assembled from independent
//! strategies:
//!
//! - a [`GradientFunction`] (loss and per-observation gradient),
//! - a [`Schedule`] (per-coefficient learning rate),
//! - a [`StoppingCriterion`] (when to halt),
//! - a [`DescentVariant`] (which observations feed each gradient),
//! - an optional [`IterationListener`].
//!
//! Key behaviors
//! -------------
//! Every call to [`Algorithm::regress`]:
//!
//! 1. Rejects an empty dataset, lets the variant validate itself, and resets
//!    the schedule and criterion.
//! 2. Starts from all-zero coefficients.
//! 3. Repeats: compute the gradient; `schedule.update(gradient)`;
//!    `c_i -= schedule.step(i) · g_i`; notify the listener; stop if
//!    `criterion.converged(gradient, coefficients)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - There is no divergence detection and no built-in iteration cap. A
//!   criterion that never fires loops forever; bound it with
//!   [`MaxIterations`](stopping::MaxIterations) or
//!   [`MaxTime`](stopping::MaxTime) inside [`Any`](stopping::Any).
//! - NaN or infinite coefficients are not errors; they propagate.
//! - Errors from the gradient function abort the run and are returned as-is.
//!
//! Downstream usage
//! ----------------
//! - Build with [`GradientDescent::batch`], [`GradientDescent::mini_batch`],
//!   [`GradientDescent::stochastic`] or [`GradientDescent::new`]; or from
//!   string-configured [`options::DescentOptions`].
//!
//! Testing notes
//! -------------
//! - Unit tests here cover loop ordering, reuse across runs, listener
//!   wiring and error propagation. End-to-end fits live in `tests/`.

pub mod gradient;
pub mod listener;
pub mod options;
pub mod schedule;
pub mod stopping;
pub mod variants;

pub use self::gradient::GradientFunction;
pub use self::listener::{CallbackListener, IterationListener, NoopListener};
pub use self::schedule::Schedule;
pub use self::stopping::StoppingCriterion;
pub use self::variants::{Batch, DescentVariant, MiniBatch, Sampling, Stochastic};

use crate::algorithm::{
    Algorithm,
    errors::{RegressionError, RegressionResult},
    types::{Coefficients, Cost},
};
use crate::data::Observations;
use log::{debug, trace};
use rand_xoshiro::Xoshiro256PlusPlus;

/// `GradientDescent` — the descent loop over a variant `V`, gradient
/// function `G`, schedule `S`, criterion `C` and listener `L`.
///
/// The value owns all of its strategies. Running [`Algorithm::regress`]
/// twice on the same value is safe: schedule and criterion state are reset
/// at the start of every run. The variant's RNG is not reseeded, so two runs
/// on one value draw different samples.
pub struct GradientDescent<V, G, S, C, L = NoopListener> {
    variant: V,
    gradient: G,
    schedule: S,
    criterion: C,
    listener: L,
}

impl<V, G, S, C> GradientDescent<V, G, S, C>
where
    V: DescentVariant,
    G: GradientFunction,
    S: Schedule,
    C: StoppingCriterion,
{
    pub fn new(variant: V, gradient: G, schedule: S, criterion: C) -> Self {
        GradientDescent { variant, gradient, schedule, criterion, listener: NoopListener }
    }
}

impl<G, S, C> GradientDescent<Batch, G, S, C>
where
    G: GradientFunction,
    S: Schedule,
    C: StoppingCriterion,
{
    /// Full-batch descent.
    pub fn batch(gradient: G, schedule: S, criterion: C) -> Self {
        GradientDescent::new(Batch, gradient, schedule, criterion)
    }
}

impl<G, S, C> GradientDescent<MiniBatch<Xoshiro256PlusPlus>, G, S, C>
where
    G: GradientFunction,
    S: Schedule,
    C: StoppingCriterion,
{
    /// Mini-batch descent sampling `batch_size` observations per iteration
    /// from an RNG seeded with `seed`.
    pub fn mini_batch(
        gradient: G, schedule: S, criterion: C, batch_size: usize, seed: u64,
    ) -> Self {
        GradientDescent::new(MiniBatch::seeded(batch_size, seed), gradient, schedule, criterion)
    }
}

impl<G, S, C> GradientDescent<Stochastic<Xoshiro256PlusPlus>, G, S, C>
where
    G: GradientFunction,
    S: Schedule,
    C: StoppingCriterion,
{
    /// Single-observation descent with uniform draws from an RNG seeded with
    /// `seed`.
    pub fn stochastic(gradient: G, schedule: S, criterion: C, seed: u64) -> Self {
        GradientDescent::new(Stochastic::seeded(seed), gradient, schedule, criterion)
    }
}

impl<V, G, S, C, L> GradientDescent<V, G, S, C, L>
where
    V: DescentVariant,
    G: GradientFunction,
    S: Schedule,
    C: StoppingCriterion,
    L: IterationListener,
{
    /// Replace the iteration listener.
    pub fn with_listener<L2: IterationListener>(
        self, listener: L2,
    ) -> GradientDescent<V, G, S, C, L2> {
        GradientDescent {
            variant: self.variant,
            gradient: self.gradient,
            schedule: self.schedule,
            criterion: self.criterion,
            listener,
        }
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    pub fn gradient_function(&self) -> &G {
        &self.gradient
    }

    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    pub fn criterion(&self) -> &C {
        &self.criterion
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}

/// Mean of `gradient.cost` over every observation.
pub fn average_cost<G: GradientFunction + ?Sized>(
    gradient: &G, observations: &Observations, coefficients: &Coefficients,
) -> RegressionResult<Cost> {
    let mut total = 0.0;
    for observation in observations {
        total += gradient.cost(coefficients, observation.features(), observation.outcome())?;
    }
    Ok(total / observations.len() as f64)
}

impl<V, G, S, C, L> Algorithm for GradientDescent<V, G, S, C, L>
where
    V: DescentVariant,
    G: GradientFunction,
    S: Schedule,
    C: StoppingCriterion,
    L: IterationListener,
{
    fn regress(&mut self, observations: &Observations) -> RegressionResult<Coefficients> {
        if observations.is_empty() {
            return Err(RegressionError::EmptyDataset);
        }
        self.variant.prepare(observations)?;
        self.schedule.reset();
        self.criterion.reset();

        let mut coefficients = Coefficients::zeros(observations.feature_count());
        debug!(
            "gradient descent: {} observations, {} features",
            observations.len(),
            observations.feature_count()
        );

        let mut iteration: u64 = 0;
        loop {
            iteration += 1;
            let gradient =
                self.variant.calculate_gradient(&self.gradient, observations, &coefficients)?;
            self.schedule.update(&gradient);
            for (i, (coefficient, slope)) in coefficients.iter_mut().zip(gradient.iter()).enumerate()
            {
                *coefficient -= self.schedule.step(i) * slope;
            }

            let cost = if self.listener.wants_average_cost() {
                Some(average_cost(&self.gradient, observations, &coefficients)?)
            } else {
                None
            };
            self.listener.on_iteration(&coefficients, cost);
            trace!("iteration {iteration}: coefficients {coefficients}");

            if self.criterion.converged(&gradient, &coefficients) {
                debug!("gradient descent stopped after {iteration} iterations");
                return Ok(coefficients);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::gradient_descent::{
        gradient::{Linear, Logistic},
        schedule::Fixed,
        stopping::{Any, DescentSpy, GradientNorm, MaxIterations},
    };
    use crate::algorithm::types::Grad;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The first iteration against a hand-computed update.
    // - Empty-dataset and variant validation errors.
    // - Reuse of one descent value across runs.
    // - Listener wiring, including the average-cost pass.
    // - Propagation of gradient-function errors.
    // -------------------------------------------------------------------------

    fn dataset() -> Observations {
        let mut observations = Observations::new();
        for (x, y) in [(1.0, 1.0), (2.0, 2.0), (3.0, 1.3), (4.0, 3.75), (5.0, 2.25)] {
            observations.add(array![1.0, x], y).unwrap();
        }
        observations
    }

    #[test]
    // Purpose
    // -------
    // Verify the update rule on a single batch iteration.
    //
    // Given
    // -----
    // - Batch descent, Linear(2), Fixed(0.01), MaxIterations(1).
    //
    // Expect
    // ------
    // - Coefficients = -0.01 · [-4.12, -14.06] = [0.0412, 0.1406].
    fn single_batch_iteration_applies_step_times_gradient() {
        // Arrange
        let mut descent =
            GradientDescent::batch(Linear::default(), Fixed::new(0.01), MaxIterations::new(1));

        // Act
        let coefficients = descent.regress(&dataset()).unwrap();

        // Assert
        assert!(coefficients.abs_diff_eq(&array![0.0412, 0.1406], 1e-12));
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid inputs are reported before any iteration.
    //
    // Given
    // -----
    // - An empty dataset; a mini-batch larger than the dataset.
    //
    // Expect
    // ------
    // - `EmptyDataset` and `InvalidBatchSize` respectively.
    fn rejects_empty_dataset_and_oversized_batch() {
        // Arrange
        let mut batch =
            GradientDescent::batch(Linear::default(), Fixed::default(), MaxIterations::new(1));
        let mut mini = GradientDescent::mini_batch(
            Linear::default(),
            Fixed::default(),
            MaxIterations::new(1),
            10,
            1,
        );

        // Act
        let empty = batch.regress(&Observations::new());
        let oversized = mini.regress(&dataset());

        // Assert
        assert_eq!(empty, Err(RegressionError::EmptyDataset));
        assert_eq!(
            oversized,
            Err(RegressionError::InvalidBatchSize { batch_size: 10, observations: 5 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Check that stateful strategies are reset between runs.
    //
    // Given
    // -----
    // - One batch descent value with MaxIterations(25), run twice.
    //
    // Expect
    // ------
    // - Both runs return identical coefficients.
    fn repeated_runs_on_one_value_agree() {
        // Arrange
        let observations = dataset();
        let mut descent = GradientDescent::batch(
            Linear::default(),
            schedule::Adagrad::new(0.5, 1e-6),
            MaxIterations::new(25),
        );

        // Act
        let first = descent.regress(&observations).unwrap();
        let second = descent.regress(&observations).unwrap();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the listener sees every iteration and, when asked, a
    // non-increasing mean cost for a small fixed step.
    //
    // Given
    // -----
    // - Batch descent with Fixed(0.01) stopped after 10 iterations.
    //
    // Expect
    // ------
    // - Ten callbacks, each carrying a cost; the last cost is below the first.
    fn listener_receives_each_iteration_with_average_cost() {
        // Arrange
        let mut costs: Vec<f64> = Vec::new();
        let listener = CallbackListener::with_average_cost(|_c: &Coefficients, cost: Option<f64>| {
            costs.extend(cost)
        });
        let mut descent =
            GradientDescent::batch(Linear::default(), Fixed::new(0.01), MaxIterations::new(10))
                .with_listener(listener);

        // Act
        descent.regress(&dataset()).unwrap();
        drop(descent);

        // Assert
        assert_eq!(costs.len(), 10);
        assert!(costs[9] < costs[0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure the criterion sees the gradient and coefficients of each
    // iteration, after the update.
    //
    // Given
    // -----
    // - DescentSpy around Any[GradientNorm(1e-3), MaxIterations(3)].
    //
    // Expect
    // ------
    // - Three spy calls; the first coefficients equal the single-step result.
    fn criterion_is_consulted_after_the_update() {
        // Arrange
        let mut seen: Vec<(Grad, Coefficients)> = Vec::new();
        {
            let criterion = DescentSpy::new(
                Any::default()
                    .with(GradientNorm::with_eta(1e-3).unwrap())
                    .with(MaxIterations::new(3)),
                |g: &Grad, c: &Coefficients| seen.push((g.clone(), c.clone())),
            );
            let mut descent = GradientDescent::batch(Linear::default(), Fixed::new(0.01), criterion);

            // Act
            descent.regress(&dataset()).unwrap();
        }

        // Assert
        assert_eq!(seen.len(), 3);
        assert!(seen[0].0.abs_diff_eq(&array![-4.12, -14.06], 1e-12));
        assert!(seen[0].1.abs_diff_eq(&array![0.0412, 0.1406], 1e-12));
    }

    #[test]
    // Purpose
    // -------
    // Verify that a domain error raised while evaluating the cost aborts
    // the run.
    //
    // Given
    // -----
    // - Logistic loss with an outcome of 1.0 and a huge fixed step, and a
    //   listener requesting the average cost.
    //
    // Expect
    // ------
    // - `LogOfNonPositive` once the sigmoid saturates.
    fn cost_domain_error_aborts_the_run() {
        // Arrange
        let mut observations = Observations::new();
        observations.add(array![1.0, 1.0], 1.0).unwrap();
        let listener = CallbackListener::with_average_cost(|_: &Coefficients, _: Option<f64>| {});
        let mut descent =
            GradientDescent::batch(Logistic, Fixed::new(1e6), MaxIterations::new(50))
                .with_listener(listener);

        // Act
        let result = descent.regress(&observations);

        // Assert
        assert!(matches!(result, Err(RegressionError::LogOfNonPositive { .. })));
    }
}
