use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{MatrixError, Result};

/// Absolute tolerance used by the equality compare and the singularity check.
pub const EPS: f64 = 1e-7;

/// Owned, row-major matrix of `f64` elements.
///
/// Every instance exclusively owns its buffer, so `clone()` always
/// produces a deep copy. The default value is the degenerate `0x0`
/// sentinel: valid for formatting and serialization of nothing, but
/// rejected by the algebraic operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Matrix {
    pub(crate) data: Vec<f64>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Matrix {
    /// Zero-filled matrix with the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(MatrixError::InvalidDimension {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Identity matrix of size `n`.
    pub fn identity(n: usize) -> Result<Self> {
        let mut out = Self::zeros(n, n)?;
        for i in 0..n {
            out.data[i * n + i] = 1.0;
        }
        Ok(out)
    }

    /// Build a matrix from literal rows. Every row must have the first
    /// row's length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows < 1 || ncols < 1 {
            return Err(MatrixError::InvalidDimension {
                rows: nrows as i64,
                cols: ncols as i64,
            });
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in &rows {
            if row.len() != ncols {
                return Err(MatrixError::ShapeMismatch {
                    expected: (nrows, ncols),
                    found: (nrows, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Build a matrix from a shape and a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows < 1 || cols < 1 {
            return Err(MatrixError::InvalidDimension {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                expected: (rows, cols),
                found: (1, data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Checked element write, the only single-element mutator.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_index(row, col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Grow or shrink the row count in place. New rows are zero-filled,
    /// shrinking truncates from the bottom.
    pub fn resize_rows(&mut self, new_rows: usize) -> Result<()> {
        if new_rows < 1 {
            return Err(MatrixError::InvalidDimension {
                rows: new_rows as i64,
                cols: self.cols as i64,
            });
        }
        if new_rows == self.rows {
            return Ok(());
        }
        log::debug!("resizing rows {} -> {} ({} cols)", self.rows, new_rows, self.cols);
        self.data.resize(new_rows * self.cols, 0.0);
        self.rows = new_rows;
        Ok(())
    }

    /// Grow or shrink the column count in place. New columns are
    /// zero-filled, shrinking truncates from the right.
    pub fn resize_cols(&mut self, new_cols: usize) -> Result<()> {
        if new_cols < 1 {
            return Err(MatrixError::InvalidDimension {
                rows: self.rows as i64,
                cols: new_cols as i64,
            });
        }
        if new_cols == self.cols {
            return Ok(());
        }
        log::debug!("resizing cols {} -> {} ({} rows)", self.cols, new_cols, self.rows);
        let keep = self.cols.min(new_cols);
        let mut data = vec![0.0; self.rows * new_cols];
        for row in 0..self.rows {
            let src = row * self.cols;
            let dst = row * new_cols;
            data[dst..dst + keep].copy_from_slice(&self.data[src..src + keep]);
        }
        self.data = data;
        self.cols = new_cols;
        Ok(())
    }
}

/// Structural equality with an absolute per-element tolerance of [`EPS`].
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= EPS)
    }
}

/// Accumulates the shape and every element's bit pattern. Matrices that
/// compare equal only through the tolerance may still hash differently.
impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        for value in &self.data {
            value.to_bits().hash(state);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{}", self.rows, self.cols)?;
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                // Debug formatting so integral values keep a fractional part.
                write!(f, "{:?}", self.data[self.offset(row, col)])?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawMatrix {
            data: Vec<f64>,
            rows: usize,
            cols: usize,
        }

        let raw = RawMatrix::deserialize(deserializer)?;
        if raw.rows == 0 && raw.cols == 0 && raw.data.is_empty() {
            return Ok(Matrix::default());
        }
        Matrix::from_shape_vec((raw.rows, raw.cols), raw.data).map_err(de::Error::custom)
    }
}
