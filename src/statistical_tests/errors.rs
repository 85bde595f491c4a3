//! statistical_tests::errors — unified error surface for the Chow test.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the Chow break test,
//! together with a conversion layer to Python exceptions for PyO3-based
//! bindings. Series and regression failures are wrapped here so callers
//! see one error type at the test boundary, with segment context attached
//! to fit failures.
//!
//! Key behaviors
//! -------------
//! - Define [`ChowResult`] and [`ChowError`] as the canonical result and
//!   error types for the Chow test entry points.
//! - Wrap [`SeriesError`] transparently via `From`, and
//!   [`RegressionError`] together with the [`Segment`] whose fit failed.
//! - Implement `From<ChowError> for PyErr`, mapping every variant to a
//!   Python `ValueError` carrying the Rust `Display` message.
//!
//! Invariants & assumptions
//! ------------------------
//! - All errors are terminal for the invocation that raised them; the
//!   computation is deterministic, so nothing is retried internally.
//! - `ChowError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("the
//!   pre-break segment holds too few observations") rather than low-level
//!   linear-algebra detail.
//!
//! Downstream usage
//! ----------------
//! - The Chow engine and decision module return [`ChowResult<T>`]; Rust
//!   callers may match on variants, while Python callers receive
//!   `ValueError` with the same message.
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` formatting and the wrapping conversions;
//!   the PyErr conversion is exercised by Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::regression::errors::RegressionError;
use crate::series::errors::SeriesError;
use crate::series::segment::Segment;

/// Result alias for Chow-test paths that may produce [`ChowError`].
pub type ChowResult<T> = Result<T, ChowError>;

/// `ChowError` — error conditions for the Chow break test.
///
/// Purpose
/// -------
/// Represent every failure a test invocation can surface: series and
/// boundary problems, per-segment fit failures, degenerate degrees of
/// freedom, and unsupported significance levels.
///
/// Variants
/// --------
/// - `Series(SeriesError)`
///   Data construction, column selection, or split-boundary failure,
///   forwarded from the series subtree.
/// - `Fit { segment, source }`
///   The OLS fit for `segment` failed (too few observations or a singular
///   design matrix).
/// - `InsufficientDegreesOfFreedom { df2 }`
///   The denominator degrees of freedom n_pre + n_post − 2(p+1) are not
///   strictly positive.
/// - `UnsupportedSignificance { alpha }`
///   The significance level is not one of the tabulated values 0.10,
///   0.05, 0.01.
///
/// Invariants
/// ----------
/// - `Fit` always names the segment whose fit failed, so multi-segment
///   orchestration failures remain attributable.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation, and converts to `PyValueError` at
///   the Python boundary when the `python-bindings` feature is enabled.
#[derive(Debug, Clone, PartialEq)]
pub enum ChowError {
    /// Series construction, column selection, or boundary failure.
    Series(SeriesError),

    /// An OLS fit failed for the named segment.
    Fit { segment: Segment, source: RegressionError },

    /// Denominator degrees of freedom are not strictly positive.
    InsufficientDegreesOfFreedom { df2: i64 },

    /// Significance level outside the tabulated set {0.10, 0.05, 0.01}.
    UnsupportedSignificance { alpha: f64 },
}

impl std::error::Error for ChowError {}

impl std::fmt::Display for ChowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChowError::Series(source) => write!(f, "{source}"),
            ChowError::Fit { segment, source } => {
                write!(f, "OLS fit failed for the {segment} segment: {source}")
            }
            ChowError::InsufficientDegreesOfFreedom { df2 } => {
                write!(
                    f,
                    "Denominator degrees of freedom must be positive; got df2 = {df2}. \
                     Too few observations relative to model complexity."
                )
            }
            ChowError::UnsupportedSignificance { alpha } => {
                write!(
                    f,
                    "Unsupported significance level {alpha}; expected one of 0.10, 0.05, 0.01."
                )
            }
        }
    }
}

impl From<SeriesError> for ChowError {
    fn from(err: SeriesError) -> Self {
        ChowError::Series(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<ChowError> for PyErr {
    fn from(err: ChowError) -> PyErr {
        PyValueError::new_err(format!("{err}"))
    }
}
