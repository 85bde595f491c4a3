//! regression::ols — ordinary-least-squares fitting with an intercept.
//!
//! Purpose
//! -------
//! Fit a linear model by minimizing the residual sum of squares, returning
//! coefficients, fitted values, residuals, and the RSS in one immutable
//! result. This is the single numerical kernel of the Chow break test; the
//! pooled, pre-break, and post-break fits all run through it.
//!
//! Key behaviors
//! -------------
//! - Prepend an explicit intercept column, so a caller-supplied (n, p)
//!   matrix yields p + 1 coefficients with the intercept first.
//! - Solve the normal equations (XᵀX)β = Xᵀy through a Cholesky
//!   factorization of the Gram matrix, bridging `ndarray` inputs into
//!   `nalgebra` for the solve.
//! - Surface rank deficiency as [`RegressionError::SingularMatrix`] when
//!   the factorization fails, never as NaN coefficients.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite; the series container enforces this upstream, and
//!   standalone callers carry the same obligation.
//! - `x.nrows() == y.len()`; a mismatch is a programming error upstream.
//! - Sample size must satisfy `n > p + 1` so residual degrees of freedom
//!   are strictly positive.
//!
//! Conventions
//! -----------
//! - The coefficient vector is ordered [intercept, β₁, …, βₚ].
//! - The same algorithm serves p = 1 and p > 1; nothing in this module
//!   special-cases single-regressor fits.
//! - Errors are reported via [`RegResult`]; no partial results are
//!   produced.
//!
//! Downstream usage
//! ----------------
//! - `statistical_tests::chow` fits each segment with [`OLSFit::fit`] and
//!   combines the three [`OLSFit::rss`] values into the F-statistic.
//!
//! Testing notes
//! -------------
//! - Unit tests recover known coefficients on exactly-linear data, check a
//!   hand-computed two-coefficient fit, and exercise the insufficient-data
//!   and singular-matrix branches plus the RSS helper.
use crate::regression::errors::{RegResult, RegressionError};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// `OLSFit` — immutable result of one least-squares fit.
///
/// Purpose
/// -------
/// Bundle everything one OLS fit produces: the coefficient vector, fitted
/// values, residuals, the residual sum of squares, and the residual degrees
/// of freedom. Produced once by [`OLSFit::fit`], never mutated.
///
/// Fields
/// ------
/// - `coefficients`: `Array1<f64>`
///   Estimated coefficients, intercept first; length p + 1.
/// - `fitted`: `Array1<f64>`
///   In-sample predictions ŷ, length n.
/// - `residuals`: `Array1<f64>`
///   y − ŷ, length n.
/// - `rss`: `f64`
///   Sum of squared residuals, ≥ 0.
/// - `df_resid`: `usize`
///   Residual degrees of freedom, n − (p + 1); strictly positive by the
///   fit precondition.
///
/// Invariants
/// ----------
/// - All fields are finite whenever construction succeeds; a singular
///   system is rejected before any field is computed.
///
/// Performance
/// -----------
/// - One (p+1)×(p+1) Cholesky factorization plus O(n·p) matrix products;
///   memory is proportional to the input and released on drop.
#[derive(Debug, Clone)]
pub struct OLSFit {
    coefficients: Array1<f64>,
    fitted: Array1<f64>,
    residuals: Array1<f64>,
    rss: f64,
    df_resid: usize,
}

impl OLSFit {
    /// Fit an intercept-bearing OLS model to a design matrix and response.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `ArrayView2<f64>`
    ///   Explanatory matrix of shape (n, p), intercept excluded; this
    ///   function prepends the intercept column itself.
    /// - `y`: `ArrayView1<f64>`
    ///   Response vector of length n.
    ///
    /// Returns
    /// -------
    /// `RegResult<OLSFit>`
    ///   The completed fit, or the precondition / rank failure that
    ///   prevented it.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::InsufficientData` when `n <= p + 1`, so residual
    ///   degrees of freedom would be non-positive.
    /// - `RegressionError::SingularMatrix` when XᵀX (intercept included)
    ///   admits no Cholesky factorization, i.e. the columns are perfectly
    ///   collinear.
    ///
    /// Panics
    /// ------
    /// - Panics if `x.nrows() != y.len()`; callers in this crate route all
    ///   data through `ChowData`, which guarantees alignment.
    ///
    /// Notes
    /// -----
    /// - The Gram-matrix Cholesky route matches the classical
    ///   normal-equations formulation; the factorization doubles as the
    ///   rank check, so no separate conditioning probe is needed.
    pub fn fit(x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> RegResult<Self> {
        assert_eq!(x.nrows(), y.len(), "design matrix and response must be aligned");

        let n = x.nrows();
        let p = x.ncols();
        let n_coeffs = p + 1;
        if n <= n_coeffs {
            return Err(RegressionError::InsufficientData { n_obs: n, n_coeffs });
        }

        // Intercept column first, then the explanatory columns.
        let mut design = DMatrix::<f64>::zeros(n, n_coeffs);
        for i in 0..n {
            design[(i, 0)] = 1.0;
            for j in 0..p {
                design[(i, j + 1)] = x[(i, j)];
            }
        }
        let rhs = DVector::<f64>::from_iterator(n, y.iter().copied());

        let gram = design.transpose() * &design;
        let moment = design.transpose() * &rhs;
        let beta = gram
            .cholesky()
            .ok_or(RegressionError::SingularMatrix { n_coeffs })?
            .solve(&moment);

        let fitted_vec = &design * &beta;
        let fitted = Array1::from_iter(fitted_vec.iter().copied());
        let residuals =
            Array1::from_iter(y.iter().zip(fitted.iter()).map(|(obs, fit)| obs - fit));
        let rss = residual_sum_of_squares(residuals.view())?;

        Ok(OLSFit {
            coefficients: Array1::from_iter(beta.iter().copied()),
            fitted,
            residuals,
            rss,
            df_resid: n - n_coeffs,
        })
    }

    /// Estimated coefficients, intercept first; length p + 1.
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    /// In-sample fitted values ŷ.
    pub fn fitted(&self) -> ArrayView1<'_, f64> {
        self.fitted.view()
    }

    /// Residuals y − ŷ.
    pub fn residuals(&self) -> ArrayView1<'_, f64> {
        self.residuals.view()
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.rss
    }

    /// Residual degrees of freedom, n − (p + 1).
    pub fn df_resid(&self) -> usize {
        self.df_resid
    }
}

/// Sum of squared residuals.
///
/// Parameters
/// ----------
/// - `residuals`: `ArrayView1<f64>`
///   Residual vector; must be non-empty.
///
/// Returns
/// -------
/// `RegResult<f64>`
///   Σ rᵢ², which is ≥ 0 for finite input.
///
/// Errors
/// ------
/// - `RegressionError::EmptyResiduals` when the vector has length 0.
pub fn residual_sum_of_squares(residuals: ArrayView1<'_, f64>) -> RegResult<f64> {
    if residuals.is_empty() {
        return Err(RegressionError::EmptyResiduals);
    }
    Ok(residuals.iter().map(|r| r * r).sum())
}
