//! Generic dense matrices stored in row-major order.
//!
//! The element at (row, col) of a `rows` x `cols` matrix lives at flat
//! index `col + cols * row`. Dimensions are fixed at construction; every
//! combining operation allocates and returns a fresh matrix.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::One;

use matlib_scalars::{Conjugate, Scalar};

use crate::error::MatrixError;

/// A dense matrix over an arbitrary scalar type.
///
/// Invariants: `rows >= 1`, `cols >= 1` and `data.len() == rows * cols`,
/// established by every constructor and never broken afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a new matrix filled with the scalar's additive identity.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension {
                rows,
                cols,
                data_len: 0,
            });
        }
        Ok(Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix from a row-major buffer of `rows * cols` values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if either dimension is zero
    /// or the buffer length does not equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(MatrixError::InvalidDimension {
                rows,
                cols,
                data_len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if the input is empty, a
    /// row is empty, or the rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 || rows.iter().any(|row| row.len() != num_cols) {
            return Err(MatrixError::InvalidDimension {
                rows: num_rows,
                cols: num_cols,
                data_len: rows.iter().map(Vec::len).sum(),
            });
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: num_rows,
            cols: num_cols,
        })
    }

    /// Creates an `n` x `n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `n` is zero.
    pub fn identity(n: usize) -> Result<Self, MatrixError>
    where
        T: One,
    {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i + n * i] = T::one();
        }
        Ok(m)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if either index is past
    /// its dimension.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        self.check_bounds(row, col)?;
        Ok(&self.data[col + self.cols * row])
    }

    /// Returns a mutable reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if either index is past
    /// its dimension.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        self.check_bounds(row, col)?;
        Ok(&mut self.data[col + self.cols * row])
    }

    /// Returns a reference to the element at (row, col), or `None` if out
    /// of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.at(row, col).ok()
    }

    /// Returns a mutable reference to the element at (row, col), or `None`
    /// if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.at_mut(row, col).ok()
    }

    /// Returns a slice of the specified row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        self.check_bounds(row, 0)?;
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Returns a row-major iterator over the elements.
    ///
    /// The iterator is read-only and restartable; independent iterations
    /// over the same matrix do not interfere.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Elementwise addition.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(other)?;
        let mut result = self.clone();
        for (lhs, rhs) in result.data.iter_mut().zip(&other.data) {
            *lhs += rhs.clone();
        }
        Ok(result)
    }

    /// Elementwise subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(other)?;
        let mut result = self.clone();
        for (lhs, rhs) in result.data.iter_mut().zip(&other.data) {
            *lhs -= rhs.clone();
        }
        Ok(result)
    }

    /// Matrix multiplication by the straightforward triple loop.
    ///
    /// Each output cell starts from the scalar's additive identity and
    /// accumulates the inner products in index order; the result has shape
    /// `(self.rows, other.cols)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IncompatibleMultiplication`] if
    /// `self.cols() != other.rows()`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_multiplicable(other)?;
        let mut result = Self {
            data: vec![T::zero(); self.rows * other.cols],
            rows: self.rows,
            cols: other.cols,
        };
        for row in 0..self.rows {
            for col in 0..other.cols {
                let mut acc = T::zero();
                for i in 0..self.cols {
                    acc += self.data[i + self.cols * row].clone()
                        * other.data[col + other.cols * i].clone();
                }
                result.data[col + result.cols * row] = acc;
            }
        }
        Ok(result)
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IncompatibleMultiplication`] if
    /// `x.len() != self.cols()`.
    pub fn mv(&self, x: &[T]) -> Result<Vec<T>, MatrixError> {
        if x.len() != self.cols {
            return Err(MatrixError::IncompatibleMultiplication {
                left_cols: self.cols,
                right_rows: x.len(),
            });
        }
        Ok((0..self.rows)
            .map(|row| {
                let start = row * self.cols;
                let mut acc = T::zero();
                for (a, b) in self.data[start..start + self.cols].iter().zip(x) {
                    acc += a.clone() * b.clone();
                }
                acc
            })
            .collect())
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &T) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|v| v.clone() * scalar.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns the transpose: result(col, row) = source(row, col).
    ///
    /// This is the plain transpose body used for every scalar type; for
    /// conjugable scalars [`Matrix::adjoint`] is the Hermitian variant.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square.
    pub fn transpose(&self) -> Result<Self, MatrixError> {
        self.check_square()?;
        let n = self.rows;
        let mut result = self.clone();
        for row in 0..n {
            for col in 0..n {
                result.data[row + n * col] = self.data[col + n * row].clone();
            }
        }
        Ok(result)
    }

    /// Returns the adjoint (Hermitian transpose):
    /// result(col, row) = conjugate(source(row, col)).
    ///
    /// Only available on matrices whose scalar carries the [`Conjugate`]
    /// capability; other scalars have the plain [`Matrix::transpose`] alone.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square.
    pub fn adjoint(&self) -> Result<Self, MatrixError>
    where
        T: Conjugate,
    {
        self.check_square()?;
        let n = self.rows;
        let mut result = self.clone();
        for row in 0..n {
            for col in 0..n {
                result.data[row + n * col] = self.data[col + n * row].conjugate();
            }
        }
        Ok(result)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn check_same_shape(&self, other: &Self) -> Result<(), MatrixError> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    fn check_multiplicable(&self, other: &Self) -> Result<(), MatrixError> {
        if self.cols == other.rows {
            Ok(())
        } else {
            Err(MatrixError::IncompatibleMultiplication {
                left_cols: self.cols,
                right_rows: other.rows,
            })
        }
    }

    fn check_square(&self) -> Result<(), MatrixError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

/// The default matrix is a 1x1 zero matrix.
impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: vec![T::zero()],
            rows: 1,
            cols: 1,
        }
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if either index is out of bounds; [`Matrix::at`] is the
    /// non-panicking form.
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.at(row, col) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.at_mut(row, col) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics on a shape mismatch; [`Matrix::checked_add`] is the
    /// non-panicking form.
    fn add(self, other: Self) -> Matrix<T> {
        match self.checked_add(other) {
            Ok(result) => result,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics on a shape mismatch; [`Matrix::checked_sub`] is the
    /// non-panicking form.
    fn sub(self, other: Self) -> Matrix<T> {
        match self.checked_sub(other) {
            Ok(result) => result,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics on an inner-dimension mismatch; [`Matrix::checked_mul`] is
    /// the non-panicking form.
    fn mul(self, other: Self) -> Matrix<T> {
        match self.checked_mul(other) {
            Ok(result) => result,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// Renders one line per row, elements separated by a tab, with a line
    /// break after every row and no trailing tab.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", self.data[col + self.cols * row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
