//! Errors for ordinary-least-squares fitting (sample-size preconditions and
//! rank deficiency).
//!
//! This module defines [`RegressionError`], the error type of the OLS
//! fitter and the residual sum-of-squares helper. It implements
//! `Display`/`Error` and is wrapped with segment context by
//! `statistical_tests::errors::ChowError`.
//!
//! ## Conventions
//! - `n_coeffs` always counts the intercept, so a fit over p explanatory
//!   columns reports `n_coeffs = p + 1`.
//! - Rank deficiency is detected at the Cholesky factorization of the Gram
//!   matrix; the fitter never emits NaN coefficients.

/// Result alias for fitting paths that may produce [`RegressionError`].
pub type RegResult<T> = Result<T, RegressionError>;

/// Error conditions for the OLS fitter and RSS helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegressionError {
    /// Too few observations for the requested coefficient count; OLS needs
    /// `n_obs > n_coeffs` so residual degrees of freedom stay positive.
    InsufficientData { n_obs: usize, n_coeffs: usize },

    /// The Gram matrix XᵀX is singular (perfectly collinear columns), so
    /// the normal equations have no unique solution.
    SingularMatrix { n_coeffs: usize },

    /// The residual vector handed to the sum-of-squares helper is empty.
    EmptyResiduals,
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegressionError::InsufficientData { n_obs, n_coeffs } => {
                write!(
                    f,
                    "Need more than {n_coeffs} observations to fit {n_coeffs} coefficients; \
                     got {n_obs}."
                )
            }
            RegressionError::SingularMatrix { n_coeffs } => {
                write!(
                    f,
                    "Design matrix with {n_coeffs} coefficients is rank-deficient; \
                     X\u{1d40}X is singular."
                )
            }
            RegressionError::EmptyResiduals => {
                write!(f, "Residual vector is empty; cannot compute a sum of squares.")
            }
        }
    }
}
