//! __cscslice__ implements row and column deletion for sparse matrices
//! held in standard Compressed Sparse Column (CSC) format.
//!
//! A [`CscMatrix`](crate::algebra::CscMatrix) stores a column pointer
//! array, a row index array and a value array.  The two slicing
//! operations, [`delete_cols`](crate::algebra::CscMatrix::delete_cols)
//! and [`delete_rows`](crate::algebra::CscMatrix::delete_rows), remove
//! an arbitrary set of columns or rows and return a new matrix with
//! all offsets and coordinates renumbered.  Source matrices are never
//! mutated, so repeated slices of the same matrix are always safe.
//!
//! # Example
//!
//! ```
//! use cscslice::algebra::CscMatrix;
//!
//! // A = [1.  ⋅  ⋅  4.]
//! //     [ ⋅  2. ⋅   ⋅]
//! //     [ ⋅  3. ⋅   ⋅]
//! //     [ ⋅  ⋅  ⋅  5.]
//! let A: CscMatrix<f64> = CscMatrix::new(
//!     4,
//!     4,
//!     vec![0, 1, 3, 3, 5],
//!     vec![0, 1, 2, 0, 3],
//!     vec![1., 2., 3., 4., 5.],
//! );
//!
//! let B = A.delete_cols(&[1]).unwrap();
//! assert_eq!(B.colptr, vec![0, 1, 1, 3]);
//! assert_eq!(B.rowval, vec![0, 0, 3]);
//! assert_eq!(B.nzval, vec![1., 4., 5.]);
//! ```

pub mod algebra;
