//! densemat: a small dense matrix library.
//!
//! This crate provides a single owned, row-major `f64` matrix type with
//! shape manipulation (resize, indexed access), textbook linear algebra
//! (arithmetic, transpose, determinant by cofactor expansion, inverse),
//! and two interchangeable serialization formats: a line-oriented text
//! format and a fixed-layout big-endian binary format.
//!
//! The design favors small, testable modules over performance: the
//! determinant/inverse family is the classical Laplace expansion, which
//! is exponential in the matrix size and intended for small matrices.
pub mod error;
pub mod io;
pub mod math;

pub use error::{MatrixError, Result};
pub use math::{Matrix, EPS};
