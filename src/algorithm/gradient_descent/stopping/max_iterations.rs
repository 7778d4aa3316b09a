//! Iteration budget.
use crate::algorithm::{
    gradient_descent::stopping::StoppingCriterion,
    types::{Coefficients, Grad},
};

/// `MaxIterations` — converged from the `max`-th call onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxIterations {
    max: usize,
    iterations: usize,
}

impl MaxIterations {
    pub fn new(max: usize) -> Self {
        MaxIterations { max, iterations: 0 }
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl StoppingCriterion for MaxIterations {
    fn converged(&mut self, _gradient: &Grad, _coefficients: &Coefficients) -> bool {
        self.iterations = self.iterations.saturating_add(1);
        self.iterations >= self.max
    }

    fn reset(&mut self) {
        self.iterations = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify that the budget trips exactly on the n-th call.
    //
    // Given
    // -----
    // - MaxIterations(5).
    //
    // Expect
    // ------
    // - Four `false` results followed by `true`; `true` again after reset
    //   only on the fifth call.
    fn converges_on_the_nth_call() {
        // Arrange
        let mut criterion = MaxIterations::new(5);
        let (gradient, coefficients) = (array![1.0], array![0.0]);

        // Act / Assert
        for _ in 0..4 {
            assert!(!criterion.converged(&gradient, &coefficients));
        }
        assert!(criterion.converged(&gradient, &coefficients));

        criterion.reset();
        for _ in 0..4 {
            assert!(!criterion.converged(&gradient, &coefficients));
        }
        assert!(criterion.converged(&gradient, &coefficients));
    }
}
