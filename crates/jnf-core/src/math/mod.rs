//! Exact scalar and dense matrix types used throughout the crate.
//!
//! Provides `Rational` (arbitrary-precision, always in canonical form) and
//! `Matrix<T>` (dense, row-major) together with the `Field` trait bound the
//! linear-algebra kernel is generic over. The kernel is only instantiated at
//! the rationals, but the abstraction keeps the algorithms independent of the
//! scalar representation and easy to test.
pub mod matrix;
pub mod rational;

pub use matrix::Matrix;
pub use rational::Rational;

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// Scalar requirements of the dense kernel: an exact field with decidable
/// equality. `Zero`/`One` give the additive and multiplicative identities,
/// `PartialEq` gives the zero test that makes row reduction exact.
pub trait Field:
    Clone
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Field for T where
    T: Clone
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}
