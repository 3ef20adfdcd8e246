#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix, SparseFormatError};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use cscslice::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///
/// Entries within a column need not be sorted by row index; none of
/// the operations on this type assume within-column ordering.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// This field should have length `n+1`. The last entry corresponds
    /// to the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__ ensure that row indices
    /// are all in bounds.  Responsibility for ensuring this condition
    /// holds is left to the caller; [`check_format`](CscMatrix::check_format)
    /// performs the full check on demand.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// To make an m x n matrix of zeros, use
    /// ```no_run
    /// use cscslice::algebra::CscMatrix;
    /// let m = 3;
    /// let n = 4;
    /// let A : CscMatrix<f64> = CscMatrix::spalloc(m,n,0);
    /// ```
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Check that matrix data is correctly formatted.
    ///
    /// Verifies the array length relationships, monotonicity of the
    /// column pointer and the row dimension bound on every stored row
    /// index.  Within-column row ordering is deliberately __not__
    /// required.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check that colptr starts at zero and is monotone
        if self.colptr[0] != 0 || self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        // linear scan since columns are not assumed sorted by row
        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        let rows_in_this_column = &self.rowval[first..last];
        rows_in_this_column
            .iter()
            .position(|&r| r == row)
            .map(|idx| self.nzval[first + idx])
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[test]
fn test_csc_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CscMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        vec![0, 3, 9, 11, 11, 14],                                         // colptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    );

    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((5, 0)).unwrap(), 3.);
    assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((3, 1)).unwrap(), 7.);
    assert_eq!(A.get_entry((5, 1)).unwrap(), 9.);
    assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);
    assert_eq!(A.get_entry((4, 2)).unwrap(), 11.);
    assert_eq!(A.get_entry((4, 4)).unwrap(), 14.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((4, 0)).is_none());
    assert!(A.get_entry((2, 2)).is_none());
    assert!(A.get_entry((1, 3)).is_none());
    assert!(A.get_entry((2, 3)).is_none());
    assert!(A.get_entry((4, 3)).is_none());
    assert!(A.get_entry((3, 4)).is_none());
}
