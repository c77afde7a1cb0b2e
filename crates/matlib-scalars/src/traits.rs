//! Scalar capability traits.
//!
//! This module defines the contract a type must satisfy to be stored in a
//! matrix, and the optional conjugation capability that selects the adjoint
//! transpose body.

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Mul, Sub, SubAssign};

use num_traits::Zero;

/// The minimal operation set a matrix element type must provide.
///
/// # Requirements
///
/// - An additive identity (`Zero`, which also brings `Add`)
/// - Compound addition and subtraction (`AddAssign`, `SubAssign`)
/// - Multiplication whose result is accumulable via addition
/// - Equality and stream formatting
///
/// The blanket impl below makes every type with these bounds a scalar, so
/// the integer and float primitives qualify without further ceremony.
pub trait Scalar:
    Clone
    + PartialEq
    + Debug
    + Display
    + Zero
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
{
}

impl<T> Scalar for T where
    T: Clone
        + PartialEq
        + Debug
        + Display
        + Zero
        + Sub<Output = T>
        + Mul<Output = T>
        + AddAssign
        + SubAssign
{
}

/// The conjugation capability of complex-like scalars.
///
/// Implemented only by types with a meaningful complex conjugate; real
/// scalars deliberately do not get a blanket identity impl. The adjoint
/// (Hermitian) transpose is available exactly on matrices whose scalar
/// carries this capability, so the choice between the plain and the
/// conjugating transpose body is resolved entirely at compile time.
pub trait Conjugate: Scalar {
    /// Returns the complex conjugate of this value.
    #[must_use]
    fn conjugate(&self) -> Self;
}
