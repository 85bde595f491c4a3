//! rust_chowtest — structural-break testing for ordered data with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the Chow structural-break test to Python via the `_rust_chowtest` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing classes and submodules used by the `rust_chowtest`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`series`, `regression`, and
//!   `statistical_tests`) as the public crate surface.
//! - Define the `ChowTest` `#[pyclass]` wrapper and the `#[pymodule]`
//!   initializer for the `_rust_chowtest` Python extension.
//! - Create and register the `statistical_tests` Python submodule under
//!   `rust_chowtest` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible `ChowTest` type
//!   mirrors the invariants and accessors of
//!   [`ChowOutcome`](statistical_tests::ChowOutcome).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_chowtest.statistical_tests` and
//!   are typically wrapped by thin pure-Python facades in the top-level
//!   `rust_chowtest` package.
//! - Indexing and statistical conventions follow the documentation of the
//!   underlying Rust modules (`series`, `statistical_tests`).
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_chowtest` module defined
//!   here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the integration test in `tests/integration_chow_pipeline.rs`.
//! - Smoke tests for the PyO3 bindings verify that `ChowTest` can be
//!   constructed and queried from Python.

pub mod regression;
pub mod series;
pub mod statistical_tests;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    series::{ColumnSelection, SplitBoundary},
    statistical_tests::ChowOutcome,
    utils::build_chow_data,
};

/// ChowTest — Python-facing wrapper for the Chow structural-break test.
///
/// Purpose
/// -------
/// Represent the result of a Chow test when called from Python and forward
/// all computation to [`ChowOutcome`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs (numpy arrays, pandas objects, or
///   plain sequences) into a [`ChowData`](series::ChowData) series.
/// - Run the test via [`ChowOutcome::chow_test_with`] and store the outcome
///   internally.
/// - Expose scalar accessors (`f_statistic`, `p_value`, `reject_null`, the
///   degrees of freedom, the critical value, the three RSS values, and the
///   clamp flag) as Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `ChowTest(x, y, last_index, first_index, significance=0.05, index=None,
/// columns=None)`:
/// - `x`: `&PyAny`
///   Two-dimensional array-like of `f64` regressors (a 1-D input is treated
///   as a single column).
/// - `y`: `&PyAny`
///   One-dimensional array-like of `f64` responses, aligned with `x`.
/// - `last_index`, `first_index`: `i64`
///   Keys of the last pre-break and first post-break observations.
/// - `significance`: `Option<f64>`
///   One of 0.10, 0.05, or 0.01; defaults to 0.05.
/// - `index`: `Option<&PyAny>`
///   Optional strictly increasing `i64` keys; defaults to positions 0..n.
/// - `columns`: `Option<Vec<usize>>`
///   Optional subset of X columns to test; defaults to all columns.
///
/// Fields
/// ------
/// - `inner`: [`ChowOutcome`]
///   Rust-side record holding the full test outcome used by the accessors.
///
/// Invariants
/// ----------
/// - `inner` satisfies every invariant documented on [`ChowOutcome`].
///
/// Performance
/// -----------
/// - Input conversion copies the Python buffers once; property access is
///   O(1).
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer calling [`ChowOutcome::chow_test`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_chowtest.statistical_tests")]
pub struct ChowTest {
    /// The Chow test result record.
    inner: ChowOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ChowTest {
    /// Result of the Chow test for a structural break at a known boundary.
    ///
    /// The statistic follows F(df1, df2) under the null of coefficient
    /// stability across the two regimes.
    #[new]
    #[pyo3(
        text_signature = "(x, y, last_index, first_index, /, significance=0.05, index=None, \
                          columns=None)",
        signature = (x, y, last_index, first_index, significance = 0.05, index = None, columns = None)
    )]
    pub fn chow_test<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, last_index: i64,
        first_index: i64, significance: Option<f64>, index: Option<&Bound<'py, PyAny>>,
        columns: Option<Vec<usize>>,
    ) -> PyResult<ChowTest> {
        let data = build_chow_data(py, x, y, index)?;
        let boundary = SplitBoundary::new(last_index, first_index);
        let selection = match columns {
            Some(cols) => ColumnSelection::Subset(cols),
            None => ColumnSelection::All,
        };
        let alpha = significance.unwrap_or(0.05);

        let result = ChowOutcome::chow_test_with(&data, &boundary, &selection, alpha)?;
        Ok(ChowTest { inner: result })
    }

    /// The Chow F-statistic.
    #[getter]
    pub fn f_statistic(&self) -> f64 {
        self.inner.f_statistic()
    }

    /// Upper-tail p-value of the statistic under F(df1, df2).
    #[getter]
    pub fn p_value(&self) -> f64 {
        self.inner.p_value()
    }

    /// Critical value at the chosen significance level.
    #[getter]
    pub fn critical_value(&self) -> f64 {
        self.inner.critical_value()
    }

    /// Significance level used for the decision.
    #[getter]
    pub fn significance(&self) -> f64 {
        self.inner.alpha()
    }

    /// Whether the no-break null hypothesis is rejected.
    #[getter]
    pub fn reject_null(&self) -> bool {
        self.inner.reject_null()
    }

    /// Numerator degrees of freedom.
    #[getter]
    pub fn df1(&self) -> usize {
        self.inner.df1()
    }

    /// Denominator degrees of freedom.
    #[getter]
    pub fn df2(&self) -> usize {
        self.inner.df2()
    }

    /// Residual sum of squares of the pooled fit.
    #[getter]
    pub fn rss_pooled(&self) -> f64 {
        self.inner.rss_pooled()
    }

    /// Residual sum of squares of the pre-break fit.
    #[getter]
    pub fn rss_pre(&self) -> f64 {
        self.inner.rss_pre()
    }

    /// Residual sum of squares of the post-break fit.
    #[getter]
    pub fn rss_post(&self) -> f64 {
        self.inner.rss_post()
    }

    /// Whether a negative F numerator was clamped to zero.
    #[getter]
    pub fn numerator_clamped(&self) -> bool {
        self.inner.numerator_clamped()
    }
}

/// _rust_chowtest — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_chowtest` Python module and register the submodule used
/// by the public `rust_chowtest` package.
///
/// Key behaviors
/// -------------
/// - Create the `statistical_tests` submodule and attach it to the parent
///   `_rust_chowtest` module.
/// - Register the submodule in `sys.modules` so it is importable via a
///   dotted path from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_rust_chowtest`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_chowtest<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let statistical_tests_mod = PyModule::new(_py, "statistical_tests")?;
    statistical_tests(_py, m, &statistical_tests_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_chowtest.statistical_tests", statistical_tests_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn statistical_tests<'py>(
    _py: Python, rust_chowtest: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<ChowTest>()?;
    rust_chowtest.add_submodule(m)?;
    Ok(())
}
