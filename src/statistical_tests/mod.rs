//! statistical_tests — structural-break diagnostics and helpers.
//!
//! Purpose
//! -------
//! Collect the hypothesis-test routines of the crate and their shared
//! infrastructure. This subtree currently implements the Chow test for
//! structural breaks together with significance-level validation, the
//! decision layer over the F-distribution, and error handling, including
//! Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose the Chow structural-break test via [`ChowOutcome`] and its
//!   constructors [`ChowOutcome::chow_test`] and
//!   [`ChowOutcome::chow_test_with`].
//! - Validate requested significance levels against the supported table
//!   through [`validate_significance`].
//! - Convert an F-statistic into a p-value, critical value, and verdict
//!   through [`Verdict::decide`](decision::Verdict::decide).
//! - Wrap series and regression failures into a single [`ChowError`]
//!   taxonomy with a shared [`ChowResult`] alias.
//!
//! Conventions
//! -----------
//! - Submodules are public, but the re-exports below form the intended
//!   surface; downstream code should not need deeper paths.
//! - All computations are stateless per call, so the subtree is safe to
//!   use from parallel threads without coordination.
//!
//! Downstream usage
//! ----------------
//! - Rust callers use [`ChowOutcome`] directly; the Python bindings in
//!   the crate root wrap it behind a `ChowTest` class.
pub mod chow;
pub mod decision;
pub mod errors;
pub mod validation;

pub use chow::ChowOutcome;
pub use decision::{SignificanceLevel, Verdict};
pub use errors::{ChowError, ChowResult};
pub use validation::validate_significance;
