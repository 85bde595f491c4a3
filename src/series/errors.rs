//! Errors for ordered observation series (construction, key lookup, and
//! split-boundary validation).
//!
//! This module defines [`SeriesError`], the error type shared by the series
//! containers and the segmenter. It implements `Display`/`Error` and is
//! wrapped by `statistical_tests::errors::ChowError` at the test level.
//!
//! ## Conventions
//! - **Positions are 0-based**; **keys** are the caller-supplied `i64` index
//!   values, which may contain gaps.
//! - Observations must be **finite** (no NaN or ±∞).
//! - The index must be **strictly increasing**; duplicated or reordered keys
//!   are rejected at construction time.
//! - Segment-size failures name the offending segment so callers can tell
//!   which side of the split is undersized.

use crate::series::segment::Segment;

/// Result alias for series construction, lookup, and segmentation paths that
/// may produce [`SeriesError`].
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Unified error type for the observation-series subtree.
///
/// Covers container construction, column-selection resolution, and the
/// split-boundary checks performed by the segmenter. Converts into
/// `ChowError` (and from there into a Python `ValueError`) at the test-level
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    // ---- Container construction ----
    /// Series has no observations.
    EmptySeries,

    /// Index, X, and y lengths disagree.
    LengthMismatch { index_len: usize, x_rows: usize, y_len: usize },

    /// X has zero columns; at least one explanatory variable is required.
    NoRegressors,

    /// An X entry is NaN/±inf.
    NonFiniteX { row: usize, column: usize, value: f64 },

    /// A y entry is NaN/±inf.
    NonFiniteY { row: usize, value: f64 },

    /// Index keys are not strictly increasing at `position`.
    NonIncreasingIndex { position: usize, previous: i64, current: i64 },

    // ---- Column selection ----
    /// A selected column position is out of range for the series.
    ColumnOutOfRange { column: usize, n_vars: usize },

    /// A column subset selection is empty.
    EmptyColumnSelection,

    /// A column position appears more than once in a subset selection.
    DuplicateColumn { column: usize },

    // ---- Split-boundary validation ----
    /// A boundary key is absent from the series index.
    KeyNotFound { key: i64 },

    /// The pre-break boundary key does not strictly precede the post-break
    /// boundary key.
    InvalidSplit { last_pre: i64, first_post: i64 },

    /// A segment holds too few observations for the requested model size.
    UndersizedSegment { segment: Segment, len: usize, min_len: usize },
}

impl std::error::Error for SeriesError {}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::EmptySeries => {
                write!(f, "Observation series is empty.")
            }
            SeriesError::LengthMismatch { index_len, x_rows, y_len } => {
                write!(
                    f,
                    "Index, X, and y must be aligned: index has {index_len} keys, \
                     X has {x_rows} rows, y has {y_len} values."
                )
            }
            SeriesError::NoRegressors => {
                write!(f, "X must have at least one explanatory column.")
            }
            SeriesError::NonFiniteX { row, column, value } => {
                write!(f, "X entry at row {row}, column {column} is non-finite: {value}")
            }
            SeriesError::NonFiniteY { row, value } => {
                write!(f, "y entry at row {row} is non-finite: {value}")
            }
            SeriesError::NonIncreasingIndex { position, previous, current } => {
                write!(
                    f,
                    "Index keys must be strictly increasing; key {current} at position \
                     {position} does not exceed preceding key {previous}."
                )
            }
            SeriesError::ColumnOutOfRange { column, n_vars } => {
                write!(
                    f,
                    "Selected column {column} is out of range for a series with \
                     {n_vars} explanatory columns."
                )
            }
            SeriesError::EmptyColumnSelection => {
                write!(f, "Column subset selection must name at least one column.")
            }
            SeriesError::DuplicateColumn { column } => {
                write!(f, "Column {column} appears more than once in the selection.")
            }
            SeriesError::KeyNotFound { key } => {
                write!(f, "Boundary key {key} is absent from the series index.")
            }
            SeriesError::InvalidSplit { last_pre, first_post } => {
                write!(
                    f,
                    "Invalid split boundary: last pre-break key ({last_pre}) must \
                     strictly precede first post-break key ({first_post})."
                )
            }
            SeriesError::UndersizedSegment { segment, len, min_len } => {
                write!(
                    f,
                    "The {segment} segment holds {len} observations but at least \
                     {min_len} are required to fit {} coefficients.",
                    min_len - 1
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for representative SeriesError variants.
    // - Embedding of payload values (keys, positions, segment names) into
    //   error messages.
    //
    // They intentionally DO NOT cover:
    // - The wrapping into ChowError, which is exercised by the
    //   statistical_tests error tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `SeriesError::KeyNotFound` reports the missing key in its
    // `Display` representation.
    //
    // Given
    // -----
    // - A `KeyNotFound` error with key = 50.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "50".
    fn series_error_key_not_found_includes_key_in_display() {
        // Arrange
        let err = SeriesError::KeyNotFound { key: 50 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("50"), "Display message should include the missing key.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `SeriesError::InvalidSplit` reports both boundary keys.
    //
    // Given
    // -----
    // - An `InvalidSplit` error with last_pre = 11 and first_post = 10.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains both "11" and "10".
    fn series_error_invalid_split_includes_both_keys_in_display() {
        // Arrange
        let err = SeriesError::InvalidSplit { last_pre: 11, first_post: 10 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("11"), "Display message should include last_pre.\nGot: {msg}");
        assert!(msg.contains("10"), "Display message should include first_post.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `SeriesError::UndersizedSegment` names the offending
    // segment so failures are attributable to one side of the split.
    //
    // Given
    // -----
    // - An `UndersizedSegment` error for the pre-break segment with
    //   len = 2 and min_len = 3.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "pre-break", "2", and "3".
    fn series_error_undersized_segment_names_segment_in_display() {
        // Arrange
        let err = SeriesError::UndersizedSegment { segment: Segment::Pre, len: 2, min_len: 3 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("pre-break"),
            "Display message should name the undersized segment.\nGot: {msg}"
        );
        assert!(msg.contains('2') && msg.contains('3'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `SeriesError::NonIncreasingIndex` embeds the position and
    // both offending keys.
    //
    // Given
    // -----
    // - A `NonIncreasingIndex` error at position 3 with keys 7 and 7.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "3" and "7".
    fn series_error_non_increasing_index_includes_payload_in_display() {
        // Arrange
        let err = SeriesError::NonIncreasingIndex { position: 3, previous: 7, current: 7 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('3'), "Got: {msg}");
        assert!(msg.contains('7'), "Got: {msg}");
    }
}
