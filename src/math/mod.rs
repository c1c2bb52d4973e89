//! The dense matrix type and its linear algebra.
//!
//! `Matrix` owns a flat row-major `f64` buffer together with its shape.
//! Storage and shape manipulation live in `matrix`; the arithmetic and
//! the determinant/cofactor/inverse family live in `linalg`.
pub mod matrix;

mod linalg;

pub use matrix::{Matrix, EPS};
