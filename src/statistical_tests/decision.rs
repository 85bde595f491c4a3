//! statistical_tests::decision — F-distribution verdicts for the Chow test.
//!
//! Purpose
//! -------
//! Map a computed F-statistic and its degrees-of-freedom pair to a
//! hypothesis-test verdict at one of the conventionally tabulated
//! significance levels: the upper-tail p-value, the critical value, and
//! the reject/fail-to-reject decision.
//!
//! Key behaviors
//! -------------
//! - [`SignificanceLevel`] enumerates the supported levels (10%, 5%, 1%);
//!   arbitrary α values are rejected upstream by
//!   `validation::validate_significance`.
//! - [`Verdict::decide`] evaluates the F(df1, df2) distribution via
//!   `statrs`: p = 1 − F_cdf(f) and the critical value is the (1 − α)
//!   quantile.
//!
//! Invariants & assumptions
//! ------------------------
//! - `df1 >= 1` and `df2 >= 1`; the Chow engine guarantees both before
//!   calling in, and [`Verdict::decide`] re-checks df2 defensively.
//! - The F-statistic is ≥ 0 (the engine clamps numerical anomalies to 0).
//!   An infinite statistic — possible when both sub-fits are exact — maps
//!   to p = 0.
//!
//! Conventions
//! -----------
//! - Rejection means p < α: the null hypothesis that one pooled regression
//!   suffices is rejected, i.e. a structural break is detected.
//!
//! Downstream usage
//! ----------------
//! - `statistical_tests::chow` calls [`Verdict::decide`] once per test
//!   invocation and copies the verdict fields into the outcome record.
//!
//! Testing notes
//! -------------
//! - Unit tests check critical values against tabulated F quantiles,
//!   p-value ranges, the rejection rule on both sides of the threshold,
//!   and the infinite-statistic convention.
use crate::statistical_tests::errors::{ChowError, ChowResult};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// `SignificanceLevel` — the tabulated levels the decision module accepts.
///
/// Purpose
/// -------
/// Restrict significance to the conventional critical-value tables (10%,
/// 5%, 1%), so every verdict corresponds to a level a reader can look up.
///
/// Notes
/// -----
/// - Construct from a raw α via
///   [`validate_significance`](crate::statistical_tests::validation::validate_significance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceLevel {
    /// α = 0.10.
    TenPercent,
    /// α = 0.05.
    FivePercent,
    /// α = 0.01.
    OnePercent,
}

impl SignificanceLevel {
    /// The numeric level α.
    pub fn alpha(self) -> f64 {
        match self {
            SignificanceLevel::TenPercent => 0.10,
            SignificanceLevel::FivePercent => 0.05,
            SignificanceLevel::OnePercent => 0.01,
        }
    }
}

/// `Verdict` — the decision record for one Chow test.
///
/// Purpose
/// -------
/// Hold the upper-tail p-value, the matching critical value, the level
/// used, and the boolean decision. Terminal output of one invocation; no
/// further lifecycle.
///
/// Fields
/// ------
/// - `p_value`: `f64`
///   P(F(df1, df2) > f), in [0, 1].
/// - `critical_value`: `f64`
///   The (1 − α) quantile of F(df1, df2).
/// - `level`: [`SignificanceLevel`]
///   The significance level the decision used.
/// - `reject_null`: `bool`
///   `true` when p < α: the pooled model is rejected and a structural
///   break is detected.
///
/// Invariants
/// ----------
/// - `reject_null == (p_value < level.alpha())` by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    p_value: f64,
    critical_value: f64,
    level: SignificanceLevel,
    reject_null: bool,
}

impl Verdict {
    /// Decide the Chow test from its F-statistic and degrees of freedom.
    ///
    /// Parameters
    /// ----------
    /// - `f_statistic`: `f64`
    ///   The Chow F-statistic, ≥ 0; may be `f64::INFINITY` when the
    ///   unrestricted fits are exact.
    /// - `df1`: `usize`
    ///   Numerator degrees of freedom, p + 1.
    /// - `df2`: `usize`
    ///   Denominator degrees of freedom, n_pre + n_post − 2(p + 1).
    /// - `level`: [`SignificanceLevel`]
    ///   Significance level for the decision.
    ///
    /// Returns
    /// -------
    /// `ChowResult<Verdict>`
    ///   The completed decision record.
    ///
    /// Errors
    /// ------
    /// - `ChowError::InsufficientDegreesOfFreedom` when `df2 == 0` (and,
    ///   through the distribution constructor, for any degenerate pair the
    ///   upstream guards failed to catch).
    ///
    /// Notes
    /// -----
    /// - The critical value comes from the numerical quantile of the same
    ///   distribution object that produces the p-value, so the two are
    ///   always mutually consistent: p < α exactly when f exceeds the
    ///   critical value, up to quantile precision.
    pub fn decide(
        f_statistic: f64, df1: usize, df2: usize, level: SignificanceLevel,
    ) -> ChowResult<Verdict> {
        if df1 == 0 || df2 == 0 {
            return Err(ChowError::InsufficientDegreesOfFreedom { df2: df2 as i64 });
        }
        let dist = FisherSnedecor::new(df1 as f64, df2 as f64)
            .map_err(|_| ChowError::InsufficientDegreesOfFreedom { df2: df2 as i64 })?;

        let p_value = if f_statistic.is_finite() { 1.0 - dist.cdf(f_statistic) } else { 0.0 };
        let critical_value = dist.inverse_cdf(1.0 - level.alpha());
        let reject_null = p_value < level.alpha();

        Ok(Verdict { p_value, critical_value, level, reject_null })
    }

    /// Upper-tail p-value of the observed statistic.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Critical value at the chosen level: the (1 − α) quantile.
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Significance level the decision used.
    pub fn level(&self) -> SignificanceLevel {
        self.level
    }

    /// Whether the pooled (no-break) model is rejected.
    pub fn reject_null(&self) -> bool {
        self.reject_null
    }
}
