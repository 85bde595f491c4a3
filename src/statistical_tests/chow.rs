//! statistical_tests::chow — the Chow structural-break test.
//!
//! Purpose
//! -------
//! Implement the Chow (1960, Econometrica 28, 591–605) test for equality
//! of regression coefficients across two regimes of an ordered dataset.
//! Given a split boundary, the test compares one pooled OLS fit against
//! separate pre-break and post-break fits and asks whether the pooled
//! model's extra restriction is statistically tenable.
//!
//! Key behaviors
//! -------------
//! - Segment the series at the boundary, fit the pooled, pre-break, and
//!   post-break models, and reduce each to its residual sum of squares.
//! - Combine the three RSS values into the Chow F-statistic
//!   F = [(RSS_pooled − (RSS_pre + RSS_post)) / df1] /
//!   [(RSS_pre + RSS_post) / df2] with df1 = p + 1 and
//!   df2 = n_pre + n_post − 2(p + 1).
//! - Delegate the p-value, critical value, and decision to
//!   `statistical_tests::decision`, and expose a compact [`ChowOutcome`]
//!   value suitable for both Rust callers and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - The pooled restriction can never fit better than the two
//!   unrestricted sub-fits, so the numerator is non-negative in exact
//!   arithmetic. A negative value is a numerical anomaly: the statistic
//!   is clamped to 0 and the outcome records the clamp in
//!   [`ChowOutcome::numerator_clamped`].
//! - Segment sizing is enforced by the segmenter before any fit runs, so
//!   df2 ≥ 2 whenever `split` succeeds; the engine still re-checks df2.
//!
//! Conventions
//! -----------
//! - The whole pipeline is a single stateless computation per call: no
//!   caches, no shared mutable state, and every invocation allocates its
//!   own matrices. Independent invocations may run on parallel threads
//!   with no coordination.
//! - Fit failures carry the [`Segment`] they occurred in.
//!
//! Downstream usage
//! ----------------
//! - Call [`ChowOutcome::chow_test`] with a validated series, a boundary,
//!   and a tabulated significance level:
//!
//!   ```rust
//!   use ndarray::{Array1, Array2};
//!   use rust_chowtest::series::{ChowData, SplitBoundary};
//!   use rust_chowtest::statistical_tests::ChowOutcome;
//!
//!   let keys: Vec<i64> = (1..=20).collect();
//!   let x = Array2::from_shape_fn((20, 1), |(i, _)| keys[i] as f64);
//!   let y = Array1::from_shape_fn(20, |i| {
//!       let t = keys[i] as f64;
//!       if keys[i] <= 10 { 2.0 * t } else { 5.0 * t }
//!   });
//!   let data = ChowData::new(keys, x, y).unwrap();
//!
//!   let outcome =
//!       ChowOutcome::chow_test(&data, &SplitBoundary::new(10, 11), 0.05).unwrap();
//!   assert!(outcome.reject_null());
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests cover the F-statistic helper (including the clamp and the
//!   exact-sub-fit branches), the degrees-of-freedom bookkeeping, break
//!   and no-break scenarios, determinism, and error propagation with
//!   segment context. End-to-end coverage lives in
//!   `tests/integration_chow_pipeline.rs`.
use crate::regression::ols::OLSFit;
use crate::series::columns::ColumnSelection;
use crate::series::data::ChowData;
use crate::series::segment::{Segment, SplitBoundary, split};
use crate::statistical_tests::decision::Verdict;
use crate::statistical_tests::errors::{ChowError, ChowResult};
use crate::statistical_tests::validation::validate_significance;
use ndarray::s;

/// `ChowOutcome` — result record of one Chow break test.
///
/// Purpose
/// -------
/// Represent the complete outcome of a single test invocation: the
/// F-statistic with its degrees of freedom, the decision fields, the three
/// residual sums of squares, and the numerical-anomaly flag.
///
/// Key behaviors
/// -------------
/// - Constructed only by [`ChowOutcome::chow_test`] /
///   [`ChowOutcome::chow_test_with`]; computed once per invocation and
///   never mutated or persisted.
/// - Exposes lightweight accessors so downstream code (including Python
///   bindings) does not depend on the internal layout.
///
/// Fields
/// ------
/// - `f_statistic`: `f64`
///   The Chow statistic; ≥ 0, possibly +∞ for exact sub-fits.
/// - `df1`, `df2`: `usize`
///   Numerator (p + 1) and denominator (n_pre + n_post − 2(p + 1))
///   degrees of freedom.
/// - `p_value`: `f64`
///   Upper-tail probability of `f_statistic` under F(df1, df2).
/// - `critical_value`: `f64`
///   The (1 − α) quantile of the same distribution.
/// - `alpha`: `f64`
///   Significance level used for the decision.
/// - `reject_null`: `bool`
///   `true` when p < α: a structural break is detected.
/// - `rss_pooled`, `rss_pre`, `rss_post`: `f64`
///   Residual sums of squares of the three fits.
/// - `numerator_clamped`: `bool`
///   `true` when RSS_pooled fell below RSS_pre + RSS_post and the
///   statistic was clamped to 0.
///
/// Invariants
/// ----------
/// - `p_value` ∈ [0, 1]; `reject_null == (p_value < alpha)`.
/// - `numerator_clamped` implies `f_statistic == 0.0`, which can never
///   reject.
///
/// Performance
/// -----------
/// - Stores only scalars and derives `Copy`, so it is cheap to pass by
///   value across FFI boundaries or between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChowOutcome {
    f_statistic: f64,
    df1: usize,
    df2: usize,
    p_value: f64,
    critical_value: f64,
    alpha: f64,
    reject_null: bool,
    rss_pooled: f64,
    rss_pre: f64,
    rss_post: f64,
    numerator_clamped: bool,
}

impl ChowOutcome {
    /// Run the Chow test over every explanatory column of the series.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&ChowData`
    ///   Validated observation series.
    /// - `boundary`: `&SplitBoundary`
    ///   Keys of the last pre-break and first post-break observations.
    /// - `alpha`: `f64`
    ///   Significance level; one of 0.10, 0.05, 0.01.
    ///
    /// Returns
    /// -------
    /// `ChowResult<ChowOutcome>`
    ///   The completed result record, or the first validation / fit
    ///   failure encountered.
    ///
    /// Errors
    /// ------
    /// - `ChowError::UnsupportedSignificance` for an off-table α.
    /// - `ChowError::Series` for boundary keys absent from the index,
    ///   reversed/identical boundaries, or undersized segments.
    /// - `ChowError::Fit` when a segment's OLS fit fails, naming the
    ///   segment.
    /// - `ChowError::InsufficientDegreesOfFreedom` when df2 would be
    ///   non-positive.
    ///
    /// Panics
    /// ------
    /// - Never panics under the documented invariants.
    pub fn chow_test(
        data: &ChowData, boundary: &SplitBoundary, alpha: f64,
    ) -> ChowResult<Self> {
        Self::chow_test_with(data, boundary, &ColumnSelection::All, alpha)
    }

    /// Run the Chow test over an explicit column selection.
    ///
    /// Parameters
    /// ----------
    /// - `columns`: `&ColumnSelection`
    ///   Which X columns form the design matrix; resolved once before any
    ///   fit. The coefficient count (and hence df1) follows the selection,
    ///   not the full series width.
    ///
    /// Other parameters, returns, and errors match
    /// [`ChowOutcome::chow_test`], plus the column-selection errors of
    /// [`ColumnSelection::resolve`].
    pub fn chow_test_with(
        data: &ChowData, boundary: &SplitBoundary, columns: &ColumnSelection, alpha: f64,
    ) -> ChowResult<Self> {
        let level = validate_significance(alpha)?;

        let x = columns.resolve(data)?;
        let y = data.y();
        let n_coeffs = x.ncols() + 1;

        let positions = split(data, boundary, n_coeffs)?;

        let pooled = OLSFit::fit(x.view(), y)
            .map_err(|source| ChowError::Fit { segment: Segment::Pooled, source })?;
        let pre = OLSFit::fit(
            x.slice(s![..positions.n_pre, ..]),
            y.slice(s![..positions.n_pre]),
        )
        .map_err(|source| ChowError::Fit { segment: Segment::Pre, source })?;
        let post = OLSFit::fit(
            x.slice(s![positions.post_start.., ..]),
            y.slice(s![positions.post_start..]),
        )
        .map_err(|source| ChowError::Fit { segment: Segment::Post, source })?;

        let df1 = n_coeffs;
        let df2_signed = (positions.n_pre + positions.n_post) as i64 - 2 * n_coeffs as i64;
        if df2_signed <= 0 {
            return Err(ChowError::InsufficientDegreesOfFreedom { df2: df2_signed });
        }
        let df2 = df2_signed as usize;

        let (f_statistic, numerator_clamped) =
            calc_f_statistic(pooled.rss(), pre.rss(), post.rss(), df1, df2);
        let verdict = Verdict::decide(f_statistic, df1, df2, level)?;

        Ok(ChowOutcome {
            f_statistic,
            df1,
            df2,
            p_value: verdict.p_value(),
            critical_value: verdict.critical_value(),
            alpha: level.alpha(),
            reject_null: verdict.reject_null(),
            rss_pooled: pooled.rss(),
            rss_pre: pre.rss(),
            rss_post: post.rss(),
            numerator_clamped,
        })
    }

    /// The Chow F-statistic.
    pub fn f_statistic(&self) -> f64 {
        self.f_statistic
    }

    /// Numerator degrees of freedom, p + 1.
    pub fn df1(&self) -> usize {
        self.df1
    }

    /// Denominator degrees of freedom, n_pre + n_post − 2(p + 1).
    pub fn df2(&self) -> usize {
        self.df2
    }

    /// Upper-tail p-value of [`f_statistic`](Self::f_statistic).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Critical value at the chosen significance level.
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Significance level used for the decision.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Whether the pooled (no-break) model is rejected.
    pub fn reject_null(&self) -> bool {
        self.reject_null
    }

    /// Residual sum of squares of the pooled fit.
    pub fn rss_pooled(&self) -> f64 {
        self.rss_pooled
    }

    /// Residual sum of squares of the pre-break fit.
    pub fn rss_pre(&self) -> f64 {
        self.rss_pre
    }

    /// Residual sum of squares of the post-break fit.
    pub fn rss_post(&self) -> f64 {
        self.rss_post
    }

    /// Whether a negative numerator was clamped to zero.
    pub fn numerator_clamped(&self) -> bool {
        self.numerator_clamped
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Combine the three RSS values into the Chow F-statistic.
///
/// Parameters
/// ----------
/// - `rss_pooled`, `rss_pre`, `rss_post`: `f64`
///   Residual sums of squares of the pooled and sub-segment fits; ≥ 0.
/// - `df1`, `df2`: `usize`
///   Degrees of freedom; both strictly positive when called from the
///   validated entry points.
///
/// Returns
/// -------
/// `(f64, bool)`
///   The statistic and a flag marking whether a negative numerator was
///   clamped to zero.
///
/// Notes
/// -----
/// - RSS_pooled < RSS_pre + RSS_post is impossible in exact arithmetic
///   but can arise from near-singular fits; the clamp keeps the statistic
///   well-defined instead of propagating a negative F.
/// - When both sub-fits are exact (RSS_pre + RSS_post = 0) and the pooled
///   fit is not, the statistic is +∞; the decision module maps that to
///   p = 0.
#[inline]
fn calc_f_statistic(
    rss_pooled: f64, rss_pre: f64, rss_post: f64, df1: usize, df2: usize,
) -> (f64, bool) {
    let rss_unrestricted = rss_pre + rss_post;
    let numerator = rss_pooled - rss_unrestricted;

    if numerator < 0.0 {
        return (0.0, true);
    }
    if numerator == 0.0 {
        return (0.0, false);
    }
    if rss_unrestricted == 0.0 {
        return (f64::INFINITY, false);
    }
    ((numerator / df1 as f64) / (rss_unrestricted / df2 as f64), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::errors::RegressionError;
    use crate::series::errors::SeriesError;
    use ndarray::{Array1, Array2};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The F-statistic helper: the textbook formula, the clamp for
    //   negative numerators, and the exact-sub-fit branches.
    // - Degrees-of-freedom bookkeeping (df1, df2) on a concrete run.
    // - The break / no-break scenarios on deterministic synthetic data.
    // - Determinism across repeated invocations.
    // - Error propagation with segment context for singular sub-fits.
    //
    // They intentionally DO NOT cover:
    // - Boundary validation branches (series::segment tests) or F-table
    //   accuracy (statistical_tests::decision tests).
    // -------------------------------------------------------------------------

    /// Trend-free noise pattern: zero mean and (nearly) zero covariance
    /// with positions 1..=10, so a within-segment linear fit removes
    /// almost nothing beyond the mean.
    const NOISE: [f64; 10] = [0.1, -0.1, -0.1, 0.1, 0.05, -0.05, -0.05, 0.05, 0.08, -0.08];

    /// Build a 20-point single-regressor series over keys 1..=20 with
    /// y = slope·x + noise, the slope switching at key 10 when the two
    /// slopes differ. The noise pattern repeats identically in both
    /// halves, so it cannot mimic a break by itself.
    fn two_regime_series(slope_pre: f64, slope_post: f64) -> ChowData {
        let keys: Vec<i64> = (1..=20).collect();
        let x = Array2::from_shape_fn((20, 1), |(i, _)| keys[i] as f64);
        let y = Array1::from_shape_fn(20, |i| {
            let t = keys[i] as f64;
            let slope = if keys[i] <= 10 { slope_pre } else { slope_post };
            slope * t + NOISE[i % 10]
        });
        ChowData::new(keys, x, y).expect("synthetic series should construct")
    }

    #[test]
    // Purpose
    // -------
    // Verify the F-statistic helper against a hand-computed value.
    //
    // Given
    // -----
    // - RSS_pooled = 10, RSS_pre = 2, RSS_post = 3, df1 = 2, df2 = 16.
    //
    // Expect
    // ------
    // - F = ((10 − 5) / 2) / (5 / 16) = 8.0, not clamped.
    fn calc_f_statistic_matches_hand_computed_value() {
        // Arrange & Act
        let (f, clamped) = calc_f_statistic(10.0, 2.0, 3.0, 2, 16);

        // Assert
        assert!((f - 8.0).abs() < 1e-12, "expected 8.0, got {f}");
        assert!(!clamped);
    }

    #[test]
    // Purpose
    // -------
    // Verify the clamp: a pooled RSS below the sub-fit total yields F = 0
    // with the clamp flag set, never a negative statistic.
    //
    // Given
    // -----
    // - RSS_pooled = 4.9 against RSS_pre + RSS_post = 5.0.
    //
    // Expect
    // ------
    // - (0.0, true).
    fn calc_f_statistic_clamps_negative_numerator() {
        // Arrange & Act
        let (f, clamped) = calc_f_statistic(4.9, 2.0, 3.0, 2, 16);

        // Assert
        assert_eq!(f, 0.0);
        assert!(clamped);
    }

    #[test]
    // Purpose
    // -------
    // Verify the degenerate branches: an exactly zero numerator is 0
    // without the clamp flag, and exact sub-fits under a non-trivial
    // pooled RSS drive the statistic to +∞.
    //
    // Given
    // -----
    // - (5, 2, 3) for the zero numerator; (5, 0, 0) for exact sub-fits.
    //
    // Expect
    // ------
    // - (0.0, false) and (+∞, false) respectively.
    fn calc_f_statistic_handles_degenerate_branches() {
        // Arrange & Act & Assert
        assert_eq!(calc_f_statistic(5.0, 2.0, 3.0, 2, 16), (0.0, false));
        let (f, clamped) = calc_f_statistic(5.0, 0.0, 0.0, 2, 16);
        assert!(f.is_infinite() && f > 0.0);
        assert!(!clamped);
    }

    #[test]
    // Purpose
    // -------
    // End-to-end break detection: a large slope change at the boundary
    // must be rejected at both 5% and 1%.
    //
    // Given
    // -----
    // - y = 2x + noise for keys 1..=10 and y = 5x + noise for keys
    //   11..=20; boundary (10, 11); p = 1.
    //
    // Expect
    // ------
    // - reject_null at α = 0.05 and α = 0.01; df1 = 2, df2 = 16; the
    //   pooled RSS dominates the sub-fit total.
    fn chow_test_detects_slope_break() {
        // Arrange
        let data = two_regime_series(2.0, 5.0);
        let boundary = SplitBoundary::new(10, 11);

        // Act
        let at_five = ChowOutcome::chow_test(&data, &boundary, 0.05).expect("test should run");
        let at_one = ChowOutcome::chow_test(&data, &boundary, 0.01).expect("test should run");

        // Assert
        assert!(at_five.reject_null(), "p = {}", at_five.p_value());
        assert!(at_one.reject_null(), "p = {}", at_one.p_value());
        assert_eq!(at_five.df1(), 2);
        assert_eq!(at_five.df2(), 16);
        assert!(at_five.rss_pooled() > at_five.rss_pre() + at_five.rss_post());
        assert!(!at_five.numerator_clamped());
    }

    #[test]
    // Purpose
    // -------
    // End-to-end no-break behavior: a constant slope with regime-neutral
    // noise must not be rejected at 5%.
    //
    // Given
    // -----
    // - y = 2x + noise throughout, the same noise pattern in both halves;
    //   boundary (10, 11).
    //
    // Expect
    // ------
    // - reject_null is false, the statistic sits below the critical
    //   value, and RSS_pre + RSS_post ≤ RSS_pooled up to tolerance.
    fn chow_test_constant_slope_fails_to_reject() {
        // Arrange
        let data = two_regime_series(2.0, 2.0);
        let boundary = SplitBoundary::new(10, 11);

        // Act
        let outcome = ChowOutcome::chow_test(&data, &boundary, 0.05).expect("test should run");

        // Assert
        assert!(!outcome.reject_null(), "p = {}", outcome.p_value());
        assert!(outcome.f_statistic() < outcome.critical_value());
        assert!(
            outcome.rss_pre() + outcome.rss_post() <= outcome.rss_pooled() + 1e-9,
            "sub-fit RSS total should not exceed pooled RSS"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the df bookkeeping identity df2 = n_total − 2·df1 when the
    // split covers the whole series.
    //
    // Given
    // -----
    // - The 20-point series with boundary (10, 11) and p = 1.
    //
    // Expect
    // ------
    // - df2 == 20 − 2·df1 == 16.
    fn chow_test_df2_matches_identity() {
        // Arrange
        let data = two_regime_series(2.0, 5.0);

        // Act
        let outcome = ChowOutcome::chow_test(&data, &SplitBoundary::new(10, 11), 0.05)
            .expect("test should run");

        // Assert
        assert_eq!(outcome.df2(), data.len() - 2 * outcome.df1());
    }

    #[test]
    // Purpose
    // -------
    // Verify determinism: the same fixed dataset and boundary produce
    // byte-identical statistics on every call.
    //
    // Given
    // -----
    // - Two invocations over the same series and boundary.
    //
    // Expect
    // ------
    // - Identical F-statistic and p-value (exact equality).
    fn chow_test_is_deterministic() {
        // Arrange
        let data = two_regime_series(2.0, 5.0);
        let boundary = SplitBoundary::new(10, 11);

        // Act
        let first = ChowOutcome::chow_test(&data, &boundary, 0.05).expect("test should run");
        let second = ChowOutcome::chow_test(&data, &boundary, 0.05).expect("test should run");

        // Assert
        assert_eq!(first.f_statistic().to_bits(), second.f_statistic().to_bits());
        assert_eq!(first.p_value().to_bits(), second.p_value().to_bits());
    }

    #[test]
    // Purpose
    // -------
    // Ensure significance validation runs before any segmentation or
    // fitting.
    //
    // Given
    // -----
    // - A valid series and boundary with α = 0.07.
    //
    // Expect
    // ------
    // - `Err(ChowError::UnsupportedSignificance { alpha: 0.07 })`.
    fn chow_test_off_table_significance_is_rejected() {
        // Arrange
        let data = two_regime_series(2.0, 5.0);

        // Act
        let result = ChowOutcome::chow_test(&data, &SplitBoundary::new(10, 11), 0.07);

        // Assert
        match result {
            Err(ChowError::UnsupportedSignificance { alpha }) => assert_eq!(alpha, 0.07),
            other => panic!("expected UnsupportedSignificance, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure boundary failures surface as wrapped series errors.
    //
    // Given
    // -----
    // - Keys 1..=20 with boundary keys 50 (absent) and (11, 10)
    //   (reversed).
    //
    // Expect
    // ------
    // - `ChowError::Series(KeyNotFound)` and
    //   `ChowError::Series(InvalidSplit)` respectively.
    fn chow_test_propagates_boundary_errors() {
        // Arrange
        let data = two_regime_series(2.0, 5.0);

        // Act & Assert: missing key
        match ChowOutcome::chow_test(&data, &SplitBoundary::new(50, 51), 0.05) {
            Err(ChowError::Series(SeriesError::KeyNotFound { key })) => assert_eq!(key, 50),
            other => panic!("expected KeyNotFound, got {other:?}"),
        }

        // Act & Assert: reversed boundary
        match ChowOutcome::chow_test(&data, &SplitBoundary::new(11, 10), 0.05) {
            Err(ChowError::Series(SeriesError::InvalidSplit { .. })) => (),
            other => panic!("expected InvalidSplit, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a rank-deficient sub-segment design surfaces as a `Fit`
    // error naming the segment, rather than NaN output.
    //
    // Given
    // -----
    // - Two explanatory columns that are perfectly collinear inside the
    //   pre-break segment (x₂ = 2x₁ there) but not elsewhere.
    //
    // Expect
    // ------
    // - `ChowError::Fit { segment: Pre, source: SingularMatrix { .. } }`.
    fn chow_test_singular_segment_names_segment() {
        // Arrange
        let keys: Vec<i64> = (1..=16).collect();
        let x = Array2::from_shape_fn((16, 2), |(i, j)| {
            let t = (i + 1) as f64;
            match j {
                0 => t,
                // Collinear with column 0 over the first 8 rows only.
                _ => {
                    if i < 8 {
                        2.0 * t
                    } else {
                        t * t
                    }
                }
            }
        });
        let y = Array1::from_shape_fn(16, |i| (i + 1) as f64 + NOISE[i % 10]);
        let data = ChowData::new(keys, x, y).expect("series should construct");

        // Act
        let result = ChowOutcome::chow_test(&data, &SplitBoundary::new(8, 9), 0.05);

        // Assert
        match result {
            Err(ChowError::Fit { segment, source }) => {
                assert_eq!(segment, Segment::Pre);
                assert!(matches!(source, RegressionError::SingularMatrix { .. }));
            }
            other => panic!("expected Fit(Pre, SingularMatrix), got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a column subset changes the coefficient count and df1
    // accordingly.
    //
    // Given
    // -----
    // - A two-column series tested on the subset [0] with boundary
    //   (10, 11).
    //
    // Expect
    // ------
    // - df1 = 2 (one slope plus intercept) instead of 3, and
    //   df2 = 20 − 4 = 16.
    fn chow_test_with_subset_adjusts_degrees_of_freedom() {
        // Arrange
        let keys: Vec<i64> = (1..=20).collect();
        let x = Array2::from_shape_fn((20, 2), |(i, j)| {
            let t = (i + 1) as f64;
            if j == 0 { t } else { t * t }
        });
        let y = Array1::from_shape_fn(20, |i| 2.0 * (i + 1) as f64 + NOISE[i % 10]);
        let data = ChowData::new(keys, x, y).expect("series should construct");

        // Act
        let outcome = ChowOutcome::chow_test_with(
            &data,
            &SplitBoundary::new(10, 11),
            &ColumnSelection::Subset(vec![0]),
            0.05,
        )
        .expect("test should run");

        // Assert
        assert_eq!(outcome.df1(), 2);
        assert_eq!(outcome.df2(), 16);
    }
}
