//! data — validated observation containers for regression fits.
//!
//! Purpose
//! -------
//! Own the boundary where raw feature vectors and outcomes enter the crate.
//! Everything downstream (gradient descent, least squares, predictors) can
//! assume a non-empty, fixed-width collection.
//!
//! Key behaviors
//! -------------
//! - [`Observations`] enforces a single feature width per collection.
//! - [`DataError`] reports width and count mismatches at the point of
//!   insertion.
//!
//! Downstream usage
//! ----------------
//! - Build an [`Observations`] by repeated [`Observations::add`] or in bulk
//!   via [`Observations::from_vecs`] / [`Observations::from_arrays`], then
//!   hand it to any [`Algorithm`](crate::algorithm::Algorithm).

pub mod errors;
pub mod observations;

pub use self::errors::{DataError, DataResult};
pub use self::observations::{Features, Observation, Observations};
