//! # matlib-dense
//!
//! Generic dense matrices for matlib.
//!
//! This crate provides:
//! - [`Matrix`], a row-major dense matrix over any [`matlib_scalars::Scalar`]
//! - Validated construction and bounds-checked element access
//! - Elementwise addition/subtraction and triple-loop multiplication
//! - A transpose whose body is selected by the scalar's capabilities:
//!   plain for ordinary scalars, conjugating for complex-like ones
//! - A five-kind error taxonomy in [`MatrixError`]
//!
//! All operations are synchronous value transformations: operands are
//! borrowed, results are freshly allocated, and every structural violation
//! is reported to the caller as a `Result`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;

#[cfg(test)]
mod proptests;
