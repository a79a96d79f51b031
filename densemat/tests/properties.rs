//! Property tests for the matrix algebra and search contracts

use std::collections::HashSet;

use densemat::{expand_slice_to_matrix, Matrix, MatrixError};
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

/// Matrix with 1..=6 rows and columns and small values
fn matrix_strategy() -> impl Strategy<Value = Matrix<i32>> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(rows, columns)| {
        prop_vec(-50i32..50, rows * columns).prop_map(move |values| {
            expand_slice_to_matrix(&values, rows, columns).expect("values fit the shape")
        })
    })
}

/// Two matrices of the same shape
fn matrix_pair_strategy() -> impl Strategy<Value = (Matrix<i32>, Matrix<i32>)> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(rows, columns)| {
        (
            prop_vec(-50i32..50, rows * columns),
            prop_vec(-50i32..50, rows * columns),
        )
            .prop_map(move |(a, b)| {
                (
                    expand_slice_to_matrix(&a, rows, columns).expect("values fit the shape"),
                    expand_slice_to_matrix(&b, rows, columns).expect("values fit the shape"),
                )
            })
    })
}

proptest! {
    #[test]
    fn construction_reports_shape(rows in 1usize..8, columns in 1usize..8, fill in any::<i16>()) {
        let data = vec![vec![fill; columns]; rows];
        let m = Matrix::new(rows, columns, data).unwrap();
        prop_assert_eq!(m.shape(), (rows, columns));
        prop_assert_eq!(m.size(), rows * columns);
    }

    #[test]
    fn ragged_rows_report_first_bad_row(rows in 2usize..8, columns in 1usize..8, bad in 0usize..8) {
        let bad = bad % rows;
        let mut data = vec![vec![0u8; columns]; rows];
        data[bad].push(1);
        prop_assert_eq!(
            Matrix::new(rows, columns, data).unwrap_err(),
            MatrixError::ColumnCountMismatch { row: bad }
        );
    }

    #[test]
    fn add_then_subtract_is_identity((a, b) in matrix_pair_strategy()) {
        let round_trip = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(round_trip, a);
    }

    #[test]
    fn add_in_place_returns_receiver((a, b) in matrix_pair_strategy()) {
        let expected = a.add(&b).unwrap();
        let mut a = a;
        let before: *const Matrix<i32> = &a;
        let returned: *const Matrix<i32> = a.add_in_place(&b).unwrap();
        prop_assert!(std::ptr::eq(before, returned));
        prop_assert_eq!(a, expected);
    }

    #[test]
    fn scalar_multiply_scales_every_cell(a in matrix_strategy(), c in -20i32..20) {
        let scaled = a.scalar_multiply(c);
        for i in 0..a.rows() {
            for j in 0..a.columns() {
                prop_assert_eq!(scaled.get(i, j).unwrap(), c * a.get(i, j).unwrap());
            }
        }
    }

    #[test]
    fn multiply_is_row_column_dot_product(
        (m, n, p) in (1usize..5, 1usize..5, 1usize..5),
        seed in prop_vec(-9i32..9, 50),
    ) {
        let a = expand_slice_to_matrix(&seed[..m * n], m, n).unwrap();
        let b = expand_slice_to_matrix(&seed[25..25 + n * p], n, p).unwrap();

        let product = a.multiply(&b).unwrap();
        prop_assert_eq!(product.shape(), (m, p));
        for i in 0..m {
            for j in 0..p {
                let dot: i32 = (0..n).map(|k| a.get(i, k).unwrap() * b.get(k, j).unwrap()).sum();
                prop_assert_eq!(product.get(i, j).unwrap(), dot);
            }
        }
    }

    #[test]
    fn multiply_rejects_inner_mismatch(a in matrix_strategy(), extra in 1usize..3) {
        let b = Matrix::<i32>::empty(a.columns() + extra, 2).unwrap();
        prop_assert_eq!(
            a.multiply(&b).unwrap_err(),
            MatrixError::MultiplicationDimensionMismatch
        );
    }

    #[test]
    fn transpose_is_an_involution(a in matrix_strategy()) {
        let t = a.transpose();
        prop_assert_eq!(t.shape(), (a.columns(), a.rows()));
        prop_assert_eq!(t.transpose(), a);
    }

    #[test]
    fn flatten_expand_round_trip(a in matrix_strategy()) {
        let expanded = expand_slice_to_matrix(&a.flatten(), a.rows(), a.columns()).unwrap();
        prop_assert_eq!(expanded, a);
    }

    #[test]
    fn indexed_search_matches_scan(a in matrix_strategy(), value in -50i32..50) {
        let scanned = a.search(value);

        let mut indexed = a.clone();
        indexed.index().unwrap();
        let looked_up = indexed.search(value);

        prop_assert_eq!(scanned.is_some(), looked_up.is_some());
        if let (Some(scanned), Some(looked_up)) = (scanned, looked_up) {
            let scanned: HashSet<_> = scanned.iter().map(|l| l.position()).collect();
            let looked_up: HashSet<_> = looked_up.iter().map(|l| l.position()).collect();
            prop_assert_eq!(scanned, looked_up);
        }
    }
}

#[test]
fn add_in_place_doubles_filled_matrix() {
    let mut m = Matrix::<i32>::empty(3, 3).unwrap();
    m.fill(6);
    let copy = m.clone();

    m.add_in_place(&copy).unwrap();
    assert_eq!(m.flatten(), vec![12; 9]);
}

#[test]
fn expand_zero_fills_remaining_cells() {
    let got = expand_slice_to_matrix(&[1, 2, 3, 44, 5, 6, 8], 3, 3).unwrap();
    assert_eq!(
        got.into_rows(),
        vec![vec![1, 2, 3], vec![44, 5, 6], vec![8, 0, 0]]
    );
}

#[test]
fn expand_overflow_reports_sizes() {
    let values: Vec<i32> = (1..=9).collect();
    let err = expand_slice_to_matrix(&values, 2, 2).unwrap_err();
    assert_eq!(
        err,
        MatrixError::MatrixOverflow {
            capacity: 4,
            input_size: 9
        }
    );
    assert_eq!(err.to_string(), "matrix has size: 4 cannot fit input size: 9");
}

#[test]
fn set_outside_extent_fails() {
    let mut m = Matrix::<i32>::empty(4, 4).unwrap();
    assert_eq!(
        m.set(6, 4, 81).unwrap_err(),
        MatrixError::OutOfBounds { row: 6, column: 4 }
    );
}

#[test]
fn identity_checks() {
    let mut identity = Matrix::<f64>::empty(5, 5).unwrap();
    for i in 0..5 {
        identity.set(i, i, 1.0).unwrap();
    }
    assert!(identity.is_identity_matrix());

    let mut rect = Matrix::<f64>::empty(2, 3).unwrap();
    rect.set(0, 0, 1.0).unwrap().set(1, 1, 1.0).unwrap();
    assert!(!rect.is_identity_matrix());
}
