//! series — ordered observation data and segmentation.
//!
//! Purpose
//! -------
//! Collect the data-model side of the Chow break test: the validated
//! observation container, the column-selection configuration, and the
//! split-boundary segmenter, together with the subtree's error type.
//!
//! Key behaviors
//! -------------
//! - [`ChowData`] owns the aligned (index, X, y) arrays and enforces their
//!   invariants once, at construction.
//! - [`ColumnSelection`] resolves the explanatory columns that form the
//!   design matrix, as an explicit configuration value.
//! - [`split`] validates a [`SplitBoundary`] against a series and yields
//!   [`SplitPositions`] for positional slicing.
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything downstream of [`ChowData::new`] may assume aligned lengths,
//!   finite values, and a strictly increasing key index.
//! - Modules in this subtree report failures via [`SeriesResult`] and never
//!   panic on user-facing invalid inputs.
//!
//! Downstream usage
//! ----------------
//! - The Chow engine in `statistical_tests::chow` consumes this subtree:
//!
//!   ```rust
//!   use rust_chowtest::series::{ChowData, SplitBoundary};
//!   use ndarray::{array, Array1};
//!
//!   let data = ChowData::new(
//!       vec![1, 2, 3, 4, 5, 6, 7, 8],
//!       array![[1.0], [2.0], [3.0], [4.0], [5.0], [6.0], [7.0], [8.0]],
//!       Array1::from(vec![2.0, 4.1, 5.9, 8.0, 10.1, 12.0, 13.9, 16.0]),
//!   ).unwrap();
//!   let boundary = SplitBoundary::new(4, 5);
//!   ```
//!
//! Testing notes
//! -------------
//! - Each module carries its own unit tests; the end-to-end path is covered
//!   by `tests/integration_chow_pipeline.rs`.

pub mod columns;
pub mod data;
pub mod errors;
pub mod segment;

pub use columns::ColumnSelection;
pub use data::ChowData;
pub use errors::{SeriesError, SeriesResult};
pub use segment::{Segment, SplitBoundary, SplitPositions, split};
