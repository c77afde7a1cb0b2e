//! Error taxonomy for matrix construction and operations.

use thiserror::Error;

/// Errors reported by matrix constructors and operations.
///
/// Every structural violation is detected synchronously at the point it
/// occurs and reported to the immediate caller; nothing is retried or
/// recovered internally, and no partial result is ever produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A constructor was given a zero dimension, or a backing buffer whose
    /// length does not equal `rows * cols`.
    #[error("invalid matrix dimensions {rows}x{cols} (buffer length {data_len})")]
    InvalidDimension {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Length of the supplied buffer, or zero when none was supplied.
        data_len: usize,
    },

    /// The operands of an elementwise operation have different shapes.
    #[error("matrix shapes {left:?} and {right:?} are not compatible")]
    DimensionMismatch {
        /// Shape of the left operand as (rows, cols).
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols).
        right: (usize, usize),
    },

    /// The inner dimensions of a multiplication do not match.
    #[error("cannot multiply: left has {left_cols} columns but right has {right_rows} rows")]
    IncompatibleMultiplication {
        /// Column count of the left operand.
        left_cols: usize,
        /// Row count of the right operand.
        right_rows: usize,
    },

    /// A transpose or adjoint was requested on a non-square matrix.
    #[error("matrix is {rows}x{cols}, not square, and cannot be transposed")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// An element access was out of bounds in either dimension.
    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}
