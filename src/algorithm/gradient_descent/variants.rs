//! variants — how each descent iteration picks the observations it averages.
//!
//! Purpose
//! -------
//! Provide the [`DescentVariant`] seam of the descent loop. A variant
//! computes the gradient used for one coefficient update:
//!
//! - [`Batch`]: mean over the whole dataset (deterministic).
//! - [`MiniBatch`]: mean over `batch_size` distinct observations sampled
//!   uniformly each iteration.
//! - [`Stochastic`]: gradient of a single observation, drawn uniformly with
//!   replacement or, in [`Sampling::Shuffled`] mode, from a per-epoch
//!   permutation.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`DescentVariant::prepare`] is called once at the start of every run,
//!   before any gradient; it validates sizes against the dataset and clears
//!   per-run sampling state.
//! - The dataset is non-empty by the time `calculate_gradient` runs.
//! - Randomness comes only from the injected RNG; the same seed and dataset
//!   reproduce the same sequence of draws. The RNG is not reseeded between
//!   runs.
//!
//! Conventions
//! -----------
//! - Averaging divides each per-observation gradient by the batch size as it
//!   is accumulated.
use crate::algorithm::{
    errors::{RegressionError, RegressionResult},
    gradient_descent::gradient::GradientFunction,
    types::{Coefficients, Grad},
    validation::{validate_batch_size, validate_dims},
};
use crate::data::{Observation, Observations};
use rand::{
    Rng, SeedableRng,
    seq::{SliceRandom, index::sample},
};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Strategy computing the gradient for one descent iteration.
pub trait DescentVariant {
    /// Validate against `observations` and clear per-run state.
    fn prepare(&mut self, _observations: &Observations) -> RegressionResult<()> {
        Ok(())
    }

    fn calculate_gradient<G: GradientFunction + ?Sized>(
        &mut self, gradient: &G, observations: &Observations, coefficients: &Coefficients,
    ) -> RegressionResult<Grad>;
}

fn observation_gradient<G: GradientFunction + ?Sized>(
    gradient: &G, observation: &Observation, coefficients: &Coefficients,
) -> RegressionResult<Grad> {
    let slope = gradient.gradient(coefficients, observation.features(), observation.outcome())?;
    validate_dims(coefficients.len(), slope.len())?;
    Ok(slope)
}

/// Mean gradient over `batch`.
fn mean_gradient<'a, G, I>(
    gradient: &G, batch: I, batch_size: usize, coefficients: &Coefficients,
) -> RegressionResult<Grad>
where
    G: GradientFunction + ?Sized,
    I: IntoIterator<Item = &'a Observation>,
{
    let scale = batch_size as f64;
    let mut mean = Grad::zeros(coefficients.len());
    for observation in batch {
        let slope = observation_gradient(gradient, observation, coefficients)?;
        mean.zip_mut_with(&slope, |acc, &g| *acc += g / scale);
    }
    Ok(mean)
}

/// `Batch` — average gradient over every observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Batch;

impl DescentVariant for Batch {
    fn calculate_gradient<G: GradientFunction + ?Sized>(
        &mut self, gradient: &G, observations: &Observations, coefficients: &Coefficients,
    ) -> RegressionResult<Grad> {
        mean_gradient(gradient, observations, observations.len(), coefficients)
    }
}

/// `MiniBatch` — average gradient over a fresh uniform sample of
/// `batch_size` distinct observations each iteration.
#[derive(Debug, Clone)]
pub struct MiniBatch<R = Xoshiro256PlusPlus> {
    batch_size: usize,
    rng: R,
}

impl<R: Rng> MiniBatch<R> {
    pub fn new(batch_size: usize, rng: R) -> Self {
        MiniBatch { batch_size, rng }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl MiniBatch<Xoshiro256PlusPlus> {
    /// Mini-batch sampler driven by a `Xoshiro256PlusPlus` seeded with `seed`.
    pub fn seeded(batch_size: usize, seed: u64) -> Self {
        MiniBatch::new(batch_size, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> DescentVariant for MiniBatch<R> {
    /// # Errors
    /// [`RegressionError::InvalidBatchSize`](crate::algorithm::errors::RegressionError::InvalidBatchSize)
    /// unless `1 ≤ batch_size ≤ observations.len()`.
    fn prepare(&mut self, observations: &Observations) -> RegressionResult<()> {
        validate_batch_size(self.batch_size, observations.len())
    }

    fn calculate_gradient<G: GradientFunction + ?Sized>(
        &mut self, gradient: &G, observations: &Observations, coefficients: &Coefficients,
    ) -> RegressionResult<Grad> {
        validate_batch_size(self.batch_size, observations.len())?;
        let indices = sample(&mut self.rng, observations.len(), self.batch_size);
        let batch = indices.iter().filter_map(|index| observations.get(index));
        mean_gradient(gradient, batch, self.batch_size, coefficients)
    }
}

/// How [`Stochastic`] picks its observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Uniform draw with replacement on every iteration.
    #[default]
    WithReplacement,
    /// Walk a random permutation, reshuffling after each full pass.
    Shuffled,
}

/// `Stochastic` — gradient of a single randomly chosen observation.
#[derive(Debug, Clone)]
pub struct Stochastic<R = Xoshiro256PlusPlus> {
    rng: R,
    sampling: Sampling,
    order: Vec<usize>,
    cursor: usize,
}

impl<R: Rng> Stochastic<R> {
    pub fn new(rng: R) -> Self {
        Stochastic::with_sampling(rng, Sampling::default())
    }

    pub fn with_sampling(rng: R, sampling: Sampling) -> Self {
        Stochastic { rng, sampling, order: Vec::new(), cursor: 0 }
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    fn next_index(&mut self, len: usize) -> usize {
        match self.sampling {
            Sampling::WithReplacement => self.rng.gen_range(0..len),
            Sampling::Shuffled => {
                if self.cursor >= self.order.len() || self.order.len() != len {
                    self.order = (0..len).collect();
                    self.order.shuffle(&mut self.rng);
                    self.cursor = 0;
                }
                let index = self.order[self.cursor];
                self.cursor += 1;
                index
            }
        }
    }
}

impl Stochastic<Xoshiro256PlusPlus> {
    /// Sampler driven by a `Xoshiro256PlusPlus` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Stochastic::new(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> DescentVariant for Stochastic<R> {
    fn prepare(&mut self, _observations: &Observations) -> RegressionResult<()> {
        self.order.clear();
        self.cursor = 0;
        Ok(())
    }

    fn calculate_gradient<G: GradientFunction + ?Sized>(
        &mut self, gradient: &G, observations: &Observations, coefficients: &Coefficients,
    ) -> RegressionResult<Grad> {
        if observations.is_empty() {
            return Err(RegressionError::EmptyDataset);
        }
        let index = self.next_index(observations.len());
        mean_gradient(gradient, observations.get(index), 1, coefficients)
    }
}
