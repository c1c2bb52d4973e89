use std::error::Error;
use std::fmt;
use std::io;

/// Failures surfaced by matrix construction, algebra, and the codecs.
#[derive(Debug)]
pub enum MatrixError {
    /// A row or column count outside `[1, ..)`. Dimensions are signed
    /// here because serialized headers carry `i32` values.
    InvalidDimension { rows: i64, cols: i64 },
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Two shapes that a binary operation or constructor cannot combine.
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    NotSquare { rows: usize, cols: usize },
    /// Inverse requested while the determinant is within tolerance of zero.
    Singular { det: f64 },
    /// A text header or row with the wrong token count or an unparsable token.
    MalformedInput { line: usize, detail: String },
    /// The stream ended before the declared shape was fully read.
    UnexpectedEof(String),
    Io(io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => write!(
                f,
                "invalid dimension {}x{}: matrices must have a positive size",
                rows, cols
            ),
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of range for a {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::ShapeMismatch { expected, found } => write!(
                f,
                "shape mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "the {}x{} matrix is not square", rows, cols)
            }
            MatrixError::Singular { det } => write!(
                f,
                "matrix is singular: determinant {} is within tolerance of zero",
                det
            ),
            MatrixError::MalformedInput { line, detail } => {
                write!(f, "malformed input at line {}: {}", line, detail)
            }
            MatrixError::UnexpectedEof(detail) => {
                write!(f, "unexpected end of input: {}", detail)
            }
            MatrixError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MatrixError {
    fn from(err: io::Error) -> Self {
        MatrixError::Io(err)
    }
}
