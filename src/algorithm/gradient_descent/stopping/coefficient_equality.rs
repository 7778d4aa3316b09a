//! Fixed-point criterion on the coefficients.
use crate::algorithm::{
    gradient_descent::stopping::StoppingCriterion,
    types::{Coefficients, Grad},
};

/// `CoefficientEquality` — converged when the coefficients are bit-identical
/// to those seen on the previous call.
///
/// The first call never converges. Vectors of different lengths are never
/// equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoefficientEquality {
    previous: Option<Coefficients>,
}

impl CoefficientEquality {
    pub fn new() -> Self {
        CoefficientEquality::default()
    }
}

fn bitwise_equal(a: &Coefficients, b: &Coefficients) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits())
}

impl StoppingCriterion for CoefficientEquality {
    fn converged(&mut self, _gradient: &Grad, coefficients: &Coefficients) -> bool {
        let unchanged =
            self.previous.as_ref().is_some_and(|previous| bitwise_equal(previous, coefficients));
        self.previous = Some(coefficients.clone());
        unchanged
    }

    fn reset(&mut self) {
        self.previous = None;
    }
}
