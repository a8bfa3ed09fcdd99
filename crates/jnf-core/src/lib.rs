//! jnf-core: exact rational linear algebra and Jordan Normal Form decomposition.
//!
//! This crate provides an arbitrary-precision rational scalar, a dense
//! row-major matrix type generic over an exact field, a small linear-algebra
//! kernel (reduced row echelon form, rank, null-space bases, independence
//! tests, matrix powers), and a driver that computes the Jordan Normal Form
//! of a square rational matrix from an externally supplied factorization of
//! its characteristic polynomial.
//!
//! The design favors small, testable modules; everything is exact, so rank
//! and zero-testing are decidable and no numerical tolerance appears anywhere.
pub mod error;
pub mod jnf;
pub mod linalg;
pub mod math;
pub mod report;
