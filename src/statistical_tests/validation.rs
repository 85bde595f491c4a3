//! statistical_tests::validation — shared input guards for the Chow test.
//!
//! Purpose
//! -------
//! Centralize entry-point validation that does not belong to the data
//! containers themselves. Series shape and boundary checks live with
//! `series`; what remains at the test level is the significance level,
//! which must be one of the conventionally tabulated values.
//!
//! Key behaviors
//! -------------
//! - Map a raw α into a [`SignificanceLevel`], rejecting anything outside
//!   the supported set {0.10, 0.05, 0.01}.
//!
//! Conventions
//! -----------
//! - Matching uses a tight absolute tolerance so `0.05_f64` literals and
//!   values arriving through FFI resolve to the same level, while 0.049
//!   or 0.2 are rejected.
//! - Errors are reported via the subtree's [`ChowResult`] alias.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_significance`] at the top of the Chow entry points,
//!   before any segmentation or fitting work.
//!
//! Testing notes
//! -------------
//! - Unit tests cover all three supported levels and representative
//!   rejected values.

use crate::statistical_tests::decision::SignificanceLevel;
use crate::statistical_tests::errors::{ChowError, ChowResult};

/// Absolute tolerance for matching a raw α to a tabulated level.
const ALPHA_MATCH_TOL: f64 = 1e-12;

/// Validate a raw significance level against the tabulated set.
///
/// Parameters
/// ----------
/// - `alpha`: `f64`
///   Requested significance level; must equal 0.10, 0.05, or 0.01 within
///   [`ALPHA_MATCH_TOL`].
///
/// Returns
/// -------
/// `ChowResult<SignificanceLevel>`
///   The matching level on success.
///
/// Errors
/// ------
/// - `ChowError::UnsupportedSignificance` for any α outside the supported
///   set, including NaN.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `ChowError`.
pub fn validate_significance(alpha: f64) -> ChowResult<SignificanceLevel> {
    for level in [
        SignificanceLevel::TenPercent,
        SignificanceLevel::FivePercent,
        SignificanceLevel::OnePercent,
    ] {
        if (alpha - level.alpha()).abs() <= ALPHA_MATCH_TOL {
            return Ok(level);
        }
    }
    Err(ChowError::UnsupportedSignificance { alpha })
}
