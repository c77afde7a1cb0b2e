//! # matlib-scalars
//!
//! Scalar capability traits for matlib.
//!
//! This crate provides:
//! - The [`Scalar`] contract every matrix element type must satisfy
//! - The optional [`Conjugate`] capability for complex-like types
//! - A concrete [`Complex`] number implementing both
//!
//! ## Capability Hierarchy
//!
//! ```text
//! Scalar
//!  └── Conjugate   (complex-like types only)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod traits;

pub use complex::Complex;
pub use traits::{Conjugate, Scalar};
