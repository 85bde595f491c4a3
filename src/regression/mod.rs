//! regression — ordinary-least-squares fitting for segment models.
//!
//! Purpose
//! -------
//! Provide the single numerical kernel the Chow break test relies on: an
//! intercept-bearing OLS fitter with explicit error reporting, plus the
//! residual sum-of-squares helper.
//!
//! Key behaviors
//! -------------
//! - [`OLSFit::fit`] solves the normal equations through a Cholesky
//!   factorization of the Gram matrix and returns coefficients, fitted
//!   values, residuals, RSS, and residual degrees of freedom in one
//!   immutable value.
//! - [`residual_sum_of_squares`] is the pure Σr² reduction, shared by the
//!   fitter and available to callers holding their own residuals.
//!
//! Invariants & assumptions
//! ------------------------
//! - Callers supply finite, aligned arrays; `series::ChowData` enforces
//!   this for every in-crate path.
//! - Failures are reported via [`RegResult`]; rank deficiency never leaks
//!   as NaN output.
//!
//! Downstream usage
//! ----------------
//! - `statistical_tests::chow` runs one fit per segment and combines the
//!   RSS values into the F-statistic.

pub mod errors;
pub mod ols;

pub use errors::{RegResult, RegressionError};
pub use ols::{OLSFit, residual_sum_of_squares};
