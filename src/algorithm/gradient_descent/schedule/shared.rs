//! Shared — one schedule observed from several places.
//!
//! The descent loop owns the schedule it drives, while a
//! [`SteppedCriteria`](crate::algorithm::gradient_descent::stopping::SteppedCriteria)
//! must read that same schedule's steps. `Shared` wraps the schedule in
//! `Rc<RefCell<_>>`; clones are handles to the same state.
use crate::algorithm::{gradient_descent::schedule::Schedule, types::Grad};
use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Default)]
pub struct Shared<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> Shared<S> {
    pub fn new(schedule: S) -> Self {
        Shared { inner: Rc::new(RefCell::new(schedule)) }
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Shared { inner: Rc::clone(&self.inner) }
    }
}

impl<S: Schedule> Schedule for Shared<S> {
    fn update(&mut self, gradient: &Grad) {
        self.inner.borrow_mut().update(gradient)
    }

    fn step(&self, feature_index: usize) -> f64 {
        self.inner.borrow().step(feature_index)
    }

    fn reset(&mut self) {
        self.inner.borrow_mut().reset()
    }
}
