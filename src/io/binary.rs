//! Fixed-layout big-endian binary codec.
//!
//! The layout is two 4-byte big-endian `i32` dimensions followed by
//! `rows * cols` 8-byte big-endian IEEE-754 doubles in row-major order.
//! There is no magic number, no checksum, and no version tag.
use std::io::{self, Read, Write};

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Write `matrix` in the binary format to a caller-supplied stream.
pub fn write_binary<W: Write>(matrix: &Matrix, mut writer: W) -> Result<()> {
    writer.write_all(&(matrix.nrows() as i32).to_be_bytes())?;
    writer.write_all(&(matrix.ncols() as i32).to_be_bytes())?;
    for value in matrix.as_slice() {
        writer.write_all(&value.to_be_bytes())?;
    }
    Ok(())
}

/// Encode `matrix` into an owned byte buffer.
pub fn encode_binary(matrix: &Matrix) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8 + matrix.as_slice().len() * 8);
    write_binary(matrix, &mut buf).expect("writing to a Vec cannot fail");
    buf
}

/// Read a matrix in the binary format from a caller-supplied stream.
pub fn read_binary<R: Read>(mut reader: R) -> Result<Matrix> {
    let rows = read_i32(&mut reader, "the row count")? as i64;
    let cols = read_i32(&mut reader, "the column count")? as i64;
    if rows < 1 || cols < 1 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    let (rows, cols) = (rows as usize, cols as usize);

    let total = rows * cols;
    let mut data = Vec::with_capacity(total);
    let mut buf = [0u8; 8];
    for read in 0..total {
        match reader.read_exact(&mut buf) {
            Ok(()) => data.push(f64::from_be_bytes(buf)),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(MatrixError::UnexpectedEof(format!(
                    "binary stream ended after {} of {} elements",
                    read, total
                )))
            }
            Err(err) => return Err(MatrixError::Io(err)),
        }
    }
    log::debug!("read {}x{} matrix from binary stream", rows, cols);
    Matrix::from_shape_vec((rows, cols), data)
}

fn read_i32<R: Read>(reader: &mut R, what: &str) -> Result<i32> {
    let mut buf = [0u8; 4];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(i32::from_be_bytes(buf)),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Err(MatrixError::UnexpectedEof(
            format!("binary stream ended while reading {}", what),
        )),
        Err(err) => Err(MatrixError::Io(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_is_two_big_endian_ints() {
        let m = Matrix::from_shape_vec((1, 2), vec![1.0, -3.5]).unwrap();
        let bytes = encode_binary(&m);
        assert_eq!(&bytes[..8], &[0, 0, 0, 1, 0, 0, 0, 2]);
        assert_eq!(bytes.len(), 8 + 2 * 8);
    }

    #[test]
    fn truncated_header_reports_eof() {
        let result = read_binary(&[0u8, 0, 0][..]);
        assert!(matches!(result, Err(MatrixError::UnexpectedEof(_))));
    }
}
