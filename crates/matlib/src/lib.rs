//! # matlib
//!
//! A generic dense-matrix library.
//!
//! matlib provides a row-major [`Matrix`](matlib_dense::Matrix) over any
//! scalar type satisfying the [`Scalar`](matlib_scalars::Scalar) contract,
//! with validated construction, bounds-checked access, elementwise and
//! triple-loop arithmetic, and a transpose that becomes the Hermitian
//! adjoint for conjugable scalars.
//!
//! ## Quick Start
//!
//! ```rust
//! use matlib::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
//!
//! let product = a.checked_mul(&b)?;
//! assert_eq!(product[(0, 0)], 19);
//! # Ok::<(), MatrixError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use matlib_dense as dense;
pub use matlib_scalars as scalars;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use matlib_dense::{Matrix, MatrixError};
    pub use matlib_scalars::{Complex, Conjugate, Scalar};
}
