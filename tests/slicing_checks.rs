#![allow(non_snake_case)]
use cscslice::algebra::*;

// a collection of tests to ensure that malformed matrices and
// out-of-range deletion requests are rejected before any work is done

fn slice_check_data() -> CscMatrix<f64> {
    // A =
    //[ 4.0  -3.0   7.0    ⋅ ]
    //[  ⋅    8.0  -1.0    ⋅ ]
    //[ 1.0    ⋅    2.0  -3.0]
    //[  ⋅   -1.0    ⋅    1.0]
    let Ap = vec![0, 2, 5, 8, 10];
    let Ai = vec![0, 2, 0, 1, 3, 0, 1, 2, 2, 3];
    let Ax = vec![4., 1., -3., 8., -1., 7., -1., 2., -3., 1.];
    CscMatrix::new(4, 4, Ap, Ai, Ax)
}

#[test]
fn slice_check_working() {
    // This example should work because the matrix is well formed
    // and all deletion indices exist.  All following checks perturb
    // one input to test the failure paths.

    let A = slice_check_data();
    let B = A.delete_cols(&[1, 2]).unwrap();
    assert_eq!(B.size(), (4, 2));
    assert_eq!(B.nnz(), 4);

    let C = A.delete_rows(&[0]).unwrap();
    assert_eq!(C.size(), (3, 4));
    assert_eq!(C.nnz(), 7);
}

#[test]
fn slice_check_col_out_of_range() {
    let A = slice_check_data();
    assert_eq!(
        A.delete_cols(&[1, 7]),
        Err(SliceError::OutOfRange { index: 7, dim: 4 })
    );
}

#[test]
fn slice_check_row_out_of_range() {
    let A = slice_check_data();
    assert_eq!(
        A.delete_rows(&[4]),
        Err(SliceError::OutOfRange { index: 4, dim: 4 })
    );
}

#[test]
fn slice_check_bad_rowval() {
    let mut A = slice_check_data();
    A.m = 3; //row index 3 is now out of bounds
    assert_eq!(
        A.delete_cols(&[0]),
        Err(SliceError::BadFormat(SparseFormatError::BadRowval))
    );
    assert_eq!(
        A.delete_rows(&[0]),
        Err(SliceError::BadFormat(SparseFormatError::BadRowval))
    );
}

#[test]
fn slice_check_bad_colptr() {
    let mut A = slice_check_data();
    A.colptr[2] = 1; //no longer monotone
    assert_eq!(
        A.delete_rows(&[1]),
        Err(SliceError::BadFormat(SparseFormatError::BadColptr))
    );
}

#[test]
fn slice_check_bad_lengths() {
    let mut A = slice_check_data();
    A.rowval.push(0); //rowval and nzval lengths now disagree
    assert_eq!(
        A.delete_cols(&[1]),
        Err(SliceError::BadFormat(
            SparseFormatError::IncompatibleDimension
        ))
    );
}

#[test]
fn slice_check_source_untouched_on_error() {
    let A = slice_check_data();
    let B = A.clone();
    let _ = A.delete_cols(&[9]);
    let _ = A.delete_rows(&[9]);
    assert_eq!(A, B);
}
