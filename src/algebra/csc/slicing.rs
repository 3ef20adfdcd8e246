#![allow(non_snake_case)]

// Row and column deletion for CSC matrices.  Both operations read
// only from the source matrix and allocate a fresh result, so a
// matrix can be sliced repeatedly or from several threads at once.

use crate::algebra::{CscMatrix, FloatT, SliceError};
use itertools::Itertools;

// Sorted, deduplicated copy of a caller-supplied index list, with
// every index checked against the axis dimension.  The caller's slice
// is never reordered.
fn distinct_sorted(idx: &[usize], dim: usize) -> Result<Vec<usize>, SliceError> {
    if let Some(&index) = idx.iter().find(|&&i| i >= dim) {
        return Err(SliceError::OutOfRange { index, dim });
    }
    Ok(idx.iter().copied().sorted_unstable().dedup().collect())
}

// membership test against a sorted index set
fn contains(sorted: &[usize], i: usize) -> bool {
    sorted.binary_search(&i).is_ok()
}

// number of elements of a sorted index set strictly less than i
fn rank(sorted: &[usize], i: usize) -> usize {
    sorted.partition_point(|&x| x < i)
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Delete a set of columns from the matrix.
    ///
    /// `cols` need not be sorted and may contain repeats; each listed
    /// column is removed exactly once.  Surviving entries keep their
    /// row coordinates and values and their original left-to-right
    /// order.  An empty `cols` returns an independent copy of `self`.
    ///
    /// # Errors
    /// Returns [`SliceError::OutOfRange`] if any index in `cols` is
    /// `>= self.n`, and [`SliceError::BadFormat`] if the matrix fails
    /// [`check_format`](CscMatrix::check_format).  The source matrix
    /// is never modified.
    pub fn delete_cols(&self, cols: &[usize]) -> Result<Self, SliceError> {
        self.check_format()?;
        let del = distinct_sorted(cols, self.n)?;

        if del.is_empty() {
            return Ok(self.clone());
        }

        let nred = self.n - del.len();
        let nzdel: usize = del
            .iter()
            .map(|&col| self.colptr[col + 1] - self.colptr[col])
            .sum();

        let mut Ared = CscMatrix::spalloc(self.m, nred, self.nnz() - nzdel);

        //copy surviving columns left to right, tracking the
        //write position to build the reduced column pointer
        let mut ptrred = 0;
        let mut colred = 0;
        for col in 0..self.n {
            if contains(&del, col) {
                continue;
            }
            Ared.colptr[colred] = ptrred;
            for ptr in self.colptr[col]..self.colptr[col + 1] {
                Ared.rowval[ptrred] = self.rowval[ptr];
                Ared.nzval[ptrred] = self.nzval[ptr];
                ptrred += 1;
            }
            colred += 1;
        }
        Ared.colptr[nred] = ptrred;

        Ok(Ared)
    }

    /// Delete a set of rows from the matrix.
    ///
    /// `rows` need not be sorted and may contain repeats.  Entries in
    /// deleted rows are dropped; every surviving row coordinate `r` is
    /// renumbered to `r` minus the number of deleted rows below it, so
    /// the result's row space is contiguous.  The number of columns is
    /// unchanged.  An empty `rows` returns an independent copy of
    /// `self`.
    ///
    /// # Errors
    /// Returns [`SliceError::OutOfRange`] if any index in `rows` is
    /// `>= self.m`, and [`SliceError::BadFormat`] if the matrix fails
    /// [`check_format`](CscMatrix::check_format).  The source matrix
    /// is never modified.
    pub fn delete_rows(&self, rows: &[usize]) -> Result<Self, SliceError> {
        self.check_format()?;
        let del = distinct_sorted(rows, self.m)?;

        if del.is_empty() {
            return Ok(self.clone());
        }

        let mred = self.m - del.len();

        // count the nonzeros in Ared
        let nzred = self.rowval.iter().filter(|&&r| !contains(&del, r)).count();

        let mut Ared = CscMatrix::spalloc(mred, self.n, nzred);

        //filter and renumber in a single pass over the columns
        let mut ptrred = 0;
        for col in 0..self.n {
            Ared.colptr[col] = ptrred;
            for ptr in self.colptr[col]..self.colptr[col + 1] {
                let thisrow = self.rowval[ptr];
                if contains(&del, thisrow) {
                    continue;
                }
                Ared.rowval[ptrred] = thisrow - rank(&del, thisrow);
                Ared.nzval[ptrred] = self.nzval[ptr];
                ptrred += 1;
            }
        }
        Ared.colptr[self.n] = ptrred;

        Ok(Ared)
    }
}

#[test]
fn test_index_set_helpers() {
    let del = distinct_sorted(&[3, 1, 3, 0], 5).unwrap();
    assert_eq!(del, vec![0, 1, 3]);

    assert!(contains(&del, 0));
    assert!(!contains(&del, 2));
    assert!(contains(&del, 3));

    assert_eq!(rank(&del, 0), 0);
    assert_eq!(rank(&del, 2), 2);
    assert_eq!(rank(&del, 4), 3);

    assert!(distinct_sorted(&[1, 5], 5).is_err());
}
