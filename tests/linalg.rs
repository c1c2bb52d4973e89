//! Integration tests for the arithmetic and the determinant/cofactor/inverse family.

use densemat::{Matrix, MatrixError};

fn sample() -> Matrix {
    Matrix::from_rows(vec![
        vec![2.0, 5.0, 7.0],
        vec![6.0, 3.0, 4.0],
        vec![5.0, -2.0, -3.0],
    ])
    .unwrap()
}

fn assert_grid(m: &Matrix, expected: &[&[f64]], tol: f64) {
    assert_eq!(m.nrows(), expected.len());
    for (i, row) in expected.iter().enumerate() {
        assert_eq!(m.ncols(), row.len());
        for (j, want) in row.iter().enumerate() {
            let got = m.get(i, j).unwrap();
            assert!(
                (got - want).abs() < tol,
                "element ({}, {}): expected {}, got {}",
                i,
                j,
                want,
                got
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Element-wise arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_identity() {
    let result = sample().add(&Matrix::identity(3).unwrap()).unwrap();
    assert_grid(
        &result,
        &[&[3.0, 5.0, 7.0], &[6.0, 4.0, 4.0], &[5.0, -2.0, -2.0]],
        1e-10,
    );
}

#[test]
fn sub_identity() {
    let result = sample().sub(&Matrix::identity(3).unwrap()).unwrap();
    assert_grid(
        &result,
        &[&[1.0, 5.0, 7.0], &[6.0, 2.0, 4.0], &[5.0, -2.0, -4.0]],
        1e-10,
    );
}

#[test]
fn add_and_sub_reject_incompatible_shapes() {
    let wide = Matrix::zeros(1, 7).unwrap();
    assert!(matches!(
        wide.add(&sample()),
        Err(MatrixError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        wide.sub(&sample()),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}

#[test]
fn scale_doubles_every_element_exactly() {
    let result = sample().scale(2.0);
    assert_eq!(
        result.as_slice(),
        &[4.0, 10.0, 14.0, 12.0, 6.0, 8.0, 10.0, -4.0, -6.0]
    );
}

#[test]
fn mul_operator_matches_scale() {
    let m = sample();
    assert_eq!(&m * 2.0, m.scale(2.0));
}

// ---------------------------------------------------------------------------
// Matrix product and transpose
// ---------------------------------------------------------------------------

#[test]
fn matmul_with_identity_is_identity_map() {
    let m = sample();
    let result = m.matmul(&Matrix::identity(3).unwrap()).unwrap();
    assert_eq!(result, m);
}

#[test]
fn matmul_computes_dot_products() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![7.0], vec![8.0], vec![9.0]]).unwrap();
    let product = a.matmul(&b).unwrap();
    assert_eq!(product.shape(), (2, 1));
    assert_grid(&product, &[&[50.0], &[122.0]], 1e-10);
}

#[test]
fn matmul_rejects_incompatible_shapes() {
    let wide = Matrix::zeros(1, 7).unwrap();
    assert!(matches!(
        wide.matmul(&sample()),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}

#[test]
fn transpose_is_involutive() {
    let m = sample();
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_grid(&t, &[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]], 1e-10);
}

// ---------------------------------------------------------------------------
// Minor, determinant, cofactors, inverse
// ---------------------------------------------------------------------------

#[test]
fn minor_removes_one_row_and_one_column() {
    let minor = sample().minor(2, 2);
    assert_eq!(minor.shape(), (2, 2));
    assert_grid(&minor, &[&[2.0, 7.0], &[5.0, -3.0]], 1e-10);
}

#[test]
fn determinant_of_the_sample_is_minus_one() {
    let det = sample().determinant().unwrap();
    assert!((det + 1.0).abs() < 1e-10);
}

#[test]
fn determinant_base_cases() {
    let single = Matrix::from_rows(vec![vec![42.0]]).unwrap();
    assert_eq!(single.determinant().unwrap(), 42.0);

    let two = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert!((two.determinant().unwrap() + 2.0).abs() < 1e-10);
}

#[test]
fn determinant_of_identity_is_one() {
    let id = Matrix::identity(4).unwrap();
    assert!((id.determinant().unwrap() - 1.0).abs() < 1e-10);
}

#[test]
fn determinant_rejects_non_square() {
    let wide = Matrix::zeros(1, 7).unwrap();
    assert!(matches!(
        wide.determinant(),
        Err(MatrixError::NotSquare { .. })
    ));
}

#[test]
fn cofactors_of_the_sample() {
    let cof = sample().cofactors().unwrap();
    assert_grid(
        &cof,
        &[&[-1.0, 38.0, -27.0], &[1.0, -41.0, 29.0], &[-1.0, 34.0, -24.0]],
        1e-10,
    );
}

#[test]
fn cofactors_of_a_1x1_matrix_is_its_determinant() {
    let single = Matrix::from_rows(vec![vec![5.0]]).unwrap();
    let cof = single.cofactors().unwrap();
    assert_eq!(cof.get(0, 0).unwrap(), 5.0);
}

#[test]
fn cofactors_rejects_non_square() {
    let wide = Matrix::zeros(1, 7).unwrap();
    assert!(matches!(
        wide.cofactors(),
        Err(MatrixError::NotSquare { .. })
    ));
}

#[test]
fn inverse_of_the_sample() {
    let inv = sample().inverse().unwrap();
    assert_grid(
        &inv,
        &[
            &[1.0, -1.0, 1.0],
            &[-38.0, 41.0, -34.0],
            &[27.0, -29.0, 24.0],
        ],
        1e-10,
    );
}

#[test]
fn product_with_the_inverse_is_the_identity() {
    let m = sample();
    let product = m.matmul(&m.inverse().unwrap()).unwrap();
    assert_eq!(product, Matrix::identity(3).unwrap());
}

#[test]
fn inverse_rejects_non_square() {
    let wide = Matrix::zeros(1, 7).unwrap();
    assert!(matches!(
        wide.inverse(),
        Err(MatrixError::NotSquare { .. })
    ));
}

#[test]
fn inverse_rejects_singular_matrices() {
    let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    assert!(matches!(
        singular.inverse(),
        Err(MatrixError::Singular { .. })
    ));
}
