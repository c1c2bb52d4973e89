use std::ops::Mul;

use crate::error::{MatrixError, Result};
use crate::math::matrix::{Matrix, EPS};

impl Matrix {
    fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        Ok(())
    }

    /// Element-wise sum. Both operands must share a shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Element-wise difference. Both operands must share a shape.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Scale every element by `k`.
    pub fn scale(&self, k: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v * k).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Standard matrix product; `self` must have as many columns as
    /// `other` has rows.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.cols, other.cols),
                found: (other.rows, other.cols),
            });
        }
        let mut out = Matrix {
            data: vec![0.0; self.rows * other.cols],
            rows: self.rows,
            cols: other.cols,
        };
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[self.offset(i, k)] * other.data[other.offset(k, j)];
                }
                let idx = out.offset(i, j);
                out.data[idx] = sum;
            }
        }
        Ok(out)
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix {
            data: vec![0.0; self.data.len()],
            rows: self.cols,
            cols: self.rows,
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                let idx = out.offset(j, i);
                out.data[idx] = self.data[self.offset(i, j)];
            }
        }
        out
    }

    /// Submatrix with the given row and column removed. Indices are
    /// 1-based, matching the cofactor expansion below.
    pub fn minor(&self, row: usize, col: usize) -> Matrix {
        assert!(
            row >= 1 && row <= self.rows,
            "minor row index out of bounds"
        );
        assert!(
            col >= 1 && col <= self.cols,
            "minor column index out of bounds"
        );
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row - 1 {
                continue;
            }
            for j in 0..self.cols {
                if j == col - 1 {
                    continue;
                }
                data.push(self.data[self.offset(i, j)]);
            }
        }
        Matrix {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Laplace expansion along the first row. Exponential in the matrix
    /// size; intended for small matrices only.
    pub fn determinant(&self) -> Result<f64> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> f64 {
        match self.rows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => {
                let mut det = 0.0;
                for i in 0..self.cols {
                    let term = self.data[i] * self.minor(1, i + 1).det_unchecked();
                    if i % 2 == 0 {
                        det += term;
                    } else {
                        det -= term;
                    }
                }
                det
            }
        }
    }

    /// Matrix of cofactors: entry `(i, j)` is the signed determinant of
    /// the minor at `(i, j)`.
    pub fn cofactors(&self) -> Result<Matrix> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows == 1 {
            return Ok(Matrix {
                data: vec![self.data[0]],
                rows: 1,
                cols: 1,
            });
        }
        let mut out = Matrix {
            data: vec![0.0; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                let det = self.minor(i + 1, j + 1).det_unchecked();
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                let idx = out.offset(i, j);
                out.data[idx] = sign * det;
            }
        }
        Ok(out)
    }

    /// Classical adjugate-over-determinant inverse.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det.abs() < EPS {
            return Err(MatrixError::Singular { det });
        }
        Ok(self.cofactors()?.transpose().scale(1.0 / det))
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: f64) -> Matrix {
        self.scale(k)
    }
}
