//! Ordered observation containers for the Chow break test.
//!
//! Purpose
//! -------
//! Provide a small, validated container for an ordered regression dataset:
//! an `i64` key index aligned with an explanatory matrix X and a response
//! vector y. This module centralizes input validation so downstream code
//! (segmenter, OLS fitter, Chow engine) can assume clean, aligned data.
//!
//! Key behaviors
//! -------------
//! - [`ChowData`] enforces basic data invariants at construction time:
//!   non-empty, aligned lengths, at least one explanatory column, finite
//!   values, and a strictly increasing key index.
//! - Key → position lookup is a binary search over the sorted keys, so
//!   label-based slicing reduces to plain positional slicing over parallel
//!   arrays.
//!
//! Invariants & assumptions
//! ------------------------
//! - `index.len() == x.nrows() == y.len() > 0`.
//! - `x.ncols() >= 1`.
//! - All X and y entries are finite.
//! - Index keys are strictly increasing; gaps between keys are allowed and
//!   carry no meaning beyond ordering.
//! - The container is immutable once constructed; no method mutates it.
//!
//! Conventions
//! -----------
//! - Positions are 0-based; keys are the caller's `i64` labels.
//! - X is stored row-per-observation, column-per-variable, without an
//!   intercept column; the fitter prepends the intercept itself.
//!
//! Downstream usage
//! ----------------
//! - Construct [`ChowData`] once at the boundary where raw arrays enter the
//!   crate, then hand references to the segmenter and Chow engine.
//! - Consumers may rely on the constructor invariants when slicing views.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and each rejection branch of
//!   [`ChowData::new`], plus key lookup on an index with gaps.
use crate::series::errors::{SeriesError, SeriesResult};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// `ChowData` — validated, immutable observation series.
///
/// Purpose
/// -------
/// Represent one ordered dataset for the Chow break test: parallel arrays
/// holding the key index, the explanatory matrix X of shape (n, p), and the
/// response vector y of length n.
///
/// Key behaviors
/// -------------
/// - Validates alignment, finiteness, and strict key ordering at
///   construction via [`ChowData::new`].
/// - Exposes cheap accessors returning slices and `ndarray` views; no
///   method copies or mutates the underlying data.
/// - Resolves a key to its array position with [`ChowData::position_of`]
///   using binary search, which is the only index-aware operation the rest
///   of the pipeline needs.
///
/// Fields
/// ------
/// - `index`: `Vec<i64>`
///   Strictly increasing observation keys (time-like labels, gaps allowed).
/// - `x`: `Array2<f64>`
///   Explanatory variables, one row per observation, `p >= 1` columns,
///   intercept excluded.
/// - `y`: `Array1<f64>`
///   Response values aligned with `index` and the rows of `x`.
///
/// Invariants
/// ----------
/// - Lengths agree and are non-zero; all values are finite; keys strictly
///   increase. These hold for the lifetime of the value.
///
/// Performance
/// -----------
/// - Construction is O(n·p) for the finiteness scan; lookup is O(log n);
///   accessors are O(1).
///
/// Notes
/// -----
/// - The container does not interpret keys beyond ordering; callers may use
///   timestamps, sample numbers, or any other monotone labeling.
#[derive(Debug, Clone)]
pub struct ChowData {
    index: Vec<i64>,
    x: Array2<f64>,
    y: Array1<f64>,
}

impl ChowData {
    /// Build a validated observation series from aligned raw arrays.
    ///
    /// Parameters
    /// ----------
    /// - `index`: `Vec<i64>`
    ///   Observation keys; must be strictly increasing and as long as `y`.
    /// - `x`: `Array2<f64>`
    ///   Explanatory matrix of shape (n, p) with `p >= 1`; finite entries.
    /// - `y`: `Array1<f64>`
    ///   Response vector of length n; finite entries.
    ///
    /// Returns
    /// -------
    /// `SeriesResult<ChowData>`
    ///   The validated container, or the first constraint violation found.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::EmptySeries` when n == 0.
    /// - `SeriesError::LengthMismatch` when the three lengths disagree.
    /// - `SeriesError::NoRegressors` when `x.ncols() == 0`.
    /// - `SeriesError::NonFiniteX` / `SeriesError::NonFiniteY` when an entry
    ///   is NaN or ±∞, with the offending coordinates as payload.
    /// - `SeriesError::NonIncreasingIndex` when a key fails to exceed its
    ///   predecessor.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are reported via `SeriesError`.
    pub fn new(index: Vec<i64>, x: Array2<f64>, y: Array1<f64>) -> SeriesResult<Self> {
        if index.is_empty() && x.nrows() == 0 && y.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if index.len() != x.nrows() || index.len() != y.len() {
            return Err(SeriesError::LengthMismatch {
                index_len: index.len(),
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }
        if x.ncols() == 0 {
            return Err(SeriesError::NoRegressors);
        }

        for ((row, column), &value) in x.indexed_iter() {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteX { row, column, value });
            }
        }
        for (row, &value) in y.indexed_iter() {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteY { row, value });
            }
        }

        for position in 1..index.len() {
            if index[position] <= index[position - 1] {
                return Err(SeriesError::NonIncreasingIndex {
                    position,
                    previous: index[position - 1],
                    current: index[position],
                });
            }
        }

        Ok(ChowData { index, x, y })
    }

    /// Number of observations n.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always `false` for a constructed value; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of explanatory columns p (intercept excluded).
    pub fn n_vars(&self) -> usize {
        self.x.ncols()
    }

    /// The strictly increasing key index.
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// View of the explanatory matrix X, shape (n, p).
    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    /// View of the response vector y, length n.
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Resolve a key to its 0-based array position.
    ///
    /// Returns
    /// -------
    /// `Option<usize>`
    ///   `Some(position)` when `key` is present in the index, `None` when it
    ///   falls in a gap or outside the key range.
    ///
    /// Notes
    /// -----
    /// - Binary search over the strictly increasing keys; O(log n).
    pub fn position_of(&self, key: i64) -> Option<usize> {
        self.index.binary_search(&key).ok()
    }
}
