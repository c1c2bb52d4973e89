//! Line-oriented text codec.
//!
//! The layout is a `"rows cols"` header line followed by one line per
//! row, elements separated by single spaces.
use std::io::{BufRead, Write};

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Write `matrix` in the text format to a caller-supplied stream.
pub fn write_text<W: Write>(matrix: &Matrix, mut writer: W) -> Result<()> {
    writeln!(writer, "{} {}", matrix.nrows(), matrix.ncols())?;
    for row in 0..matrix.nrows() {
        for (col, value) in matrix.row_slice(row).iter().enumerate() {
            if col > 0 {
                write!(writer, " ")?;
            }
            // {:?} keeps a fractional part on integral values (1.0, not 1).
            write!(writer, "{:?}", value)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Encode `matrix` into an owned string.
pub fn encode_text(matrix: &Matrix) -> String {
    let mut buf = Vec::new();
    write_text(matrix, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("the text codec emits ASCII")
}

/// Read a matrix in the text format from a caller-supplied stream.
pub fn read_text<R: BufRead>(mut reader: R) -> Result<Matrix> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(MatrixError::UnexpectedEof("input is empty".to_string()));
    }
    let (rows, cols) = parse_header(&line)?;
    if rows < 1 || cols < 1 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    let (rows, cols) = (rows as usize, cols as usize);

    let mut matrix = Matrix::zeros(rows, cols)?;
    for i in 0..rows {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(MatrixError::UnexpectedEof(format!(
                "matrix body ended at row {} of {}",
                i + 1,
                rows
            )));
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != cols {
            return Err(MatrixError::MalformedInput {
                line: i + 2,
                detail: format!("expected {} values, found {}", cols, tokens.len()),
            });
        }
        for (j, token) in tokens.iter().enumerate() {
            let value = token.parse::<f64>().map_err(|_| MatrixError::MalformedInput {
                line: i + 2,
                detail: format!("invalid number '{}'", token),
            })?;
            matrix[(i, j)] = value;
        }
    }
    log::debug!("read {}x{} matrix from text input", rows, cols);
    Ok(matrix)
}

/// Decode a matrix from a string in the text format.
pub fn decode_text(input: &str) -> Result<Matrix> {
    read_text(input.as_bytes())
}

fn parse_header(line: &str) -> Result<(i64, i64)> {
    let mut tokens = line.split_whitespace();
    let rows = match tokens.next() {
        Some(token) => parse_dimension(token)?,
        None => return Err(header_error("header must contain rows and cols")),
    };
    let cols = match tokens.next() {
        Some(token) => parse_dimension(token)?,
        None => return Err(header_error("header must contain rows and cols")),
    };
    Ok((rows, cols))
}

fn parse_dimension(token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| header_error(&format!("invalid dimension '{}'", token)))
}

fn header_error(detail: &str) -> MatrixError {
    MatrixError::MalformedInput {
        line: 1,
        detail: detail.to_string(),
    }
}
