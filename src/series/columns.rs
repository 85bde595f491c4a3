//! Column-selection configuration for the explanatory matrix.
//!
//! Purpose
//! -------
//! Model the choice of which X columns enter the regression as an explicit
//! configuration value that is resolved exactly once, before any fitting,
//! so the engine consumes the selection as data rather than picking
//! columns ad hoc at call sites.
//!
//! Key behaviors
//! -------------
//! - [`ColumnSelection::All`] uses every column of the series.
//! - [`ColumnSelection::Subset`] names column positions explicitly and is
//!   validated against the series shape at resolution time.
//!
//! Conventions
//! -----------
//! - Column positions are 0-based and refer to the series' X matrix
//!   (intercept excluded; the fitter adds it).
//! - Resolution materializes the selected columns into an owned matrix so
//!   the segment slices taken from it stay contiguous and alignment with y
//!   is preserved row-for-row.
//!
//! Testing notes
//! -------------
//! - Unit tests cover full selection, subsets (including reordering), and
//!   each rejection branch.
use crate::series::data::ChowData;
use crate::series::errors::{SeriesError, SeriesResult};
use ndarray::{Array2, Axis};

/// `ColumnSelection` — which explanatory columns form the design matrix.
///
/// Purpose
/// -------
/// Enumerate the X columns to regress on, as a small policy value resolved
/// once per test invocation.
///
/// Variants
/// --------
/// - `All`
///   Use every column of the series' X matrix, in order.
/// - `Subset(Vec<usize>)`
///   Use exactly the named column positions, in the given order. Positions
///   must be in range and distinct; the subset must be non-empty.
///
/// Notes
/// -----
/// - Selection affects the coefficient count p + 1 and therefore the
///   degrees of freedom of the resulting Chow statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection {
    /// Use every explanatory column.
    All,
    /// Use the named 0-based column positions, in order.
    Subset(Vec<usize>),
}

impl ColumnSelection {
    /// Materialize the selected columns of a series into an owned matrix.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&ChowData`
    ///   The validated observation series supplying the X columns.
    ///
    /// Returns
    /// -------
    /// `SeriesResult<Array2<f64>>`
    ///   An (n, p') matrix holding the selected columns, aligned row-for-row
    ///   with the series' response vector.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::EmptyColumnSelection` when a subset names no columns.
    /// - `SeriesError::DuplicateColumn` when a position repeats.
    /// - `SeriesError::ColumnOutOfRange` when a position is `>= n_vars`.
    pub fn resolve(&self, data: &ChowData) -> SeriesResult<Array2<f64>> {
        match self {
            ColumnSelection::All => Ok(data.x().to_owned()),
            ColumnSelection::Subset(columns) => {
                if columns.is_empty() {
                    return Err(SeriesError::EmptyColumnSelection);
                }
                for (i, &column) in columns.iter().enumerate() {
                    if columns[..i].contains(&column) {
                        return Err(SeriesError::DuplicateColumn { column });
                    }
                    if column >= data.n_vars() {
                        return Err(SeriesError::ColumnOutOfRange {
                            column,
                            n_vars: data.n_vars(),
                        });
                    }
                }
                Ok(data.x().select(Axis(1), columns))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Full selection returning the X matrix unchanged.
    // - Subset selection, including reordering of columns.
    // - Rejection of empty, duplicated, and out-of-range selections.
    // -------------------------------------------------------------------------

    fn two_column_series() -> ChowData {
        let index = vec![1_i64, 2, 3, 4];
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let y = Array1::from(vec![1.0, 2.0, 3.0, 4.0]);
        ChowData::new(index, x, y).expect("test series should construct")
    }

    #[test]
    // Purpose
    // -------
    // Verify that `All` reproduces the full X matrix.
    //
    // Given
    // -----
    // - A series with two explanatory columns.
    //
    // Expect
    // ------
    // - `resolve` returns a (4, 2) matrix equal to the series' X.
    fn column_selection_all_returns_full_matrix() {
        // Arrange
        let data = two_column_series();

        // Act
        let resolved = ColumnSelection::All.resolve(&data).expect("All should resolve");

        // Assert
        assert_eq!(resolved, data.x().to_owned());
    }

    #[test]
    // Purpose
    // -------
    // Verify that a subset selection extracts the named columns in the
    // requested order.
    //
    // Given
    // -----
    // - A series with columns [t, 10t] and the selection [1, 0].
    //
    // Expect
    // ------
    // - A (4, 2) matrix whose first column is 10t and second is t.
    fn column_selection_subset_reorders_columns() {
        // Arrange
        let data = two_column_series();

        // Act
        let resolved =
            ColumnSelection::Subset(vec![1, 0]).resolve(&data).expect("subset should resolve");

        // Assert
        assert_eq!(resolved, array![[10.0, 1.0], [20.0, 2.0], [30.0, 3.0], [40.0, 4.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid subsets are rejected: empty, duplicated, and
    // out-of-range positions.
    //
    // Given
    // -----
    // - A series with two explanatory columns.
    //
    // Expect
    // ------
    // - `EmptyColumnSelection`, `DuplicateColumn { column: 0 }`, and
    //   `ColumnOutOfRange { column: 2, n_vars: 2 }` respectively.
    fn column_selection_invalid_subsets_are_rejected() {
        // Arrange
        let data = two_column_series();

        // Act & Assert: empty
        match ColumnSelection::Subset(Vec::new()).resolve(&data) {
            Err(SeriesError::EmptyColumnSelection) => (),
            other => panic!("expected EmptyColumnSelection, got {other:?}"),
        }

        // Act & Assert: duplicate
        match ColumnSelection::Subset(vec![0, 0]).resolve(&data) {
            Err(SeriesError::DuplicateColumn { column }) => assert_eq!(column, 0),
            other => panic!("expected DuplicateColumn, got {other:?}"),
        }

        // Act & Assert: out of range
        match ColumnSelection::Subset(vec![0, 2]).resolve(&data) {
            Err(SeriesError::ColumnOutOfRange { column, n_vars }) => {
                assert_eq!((column, n_vars), (2, 2));
            }
            other => panic!("expected ColumnOutOfRange, got {other:?}"),
        }
    }
}
