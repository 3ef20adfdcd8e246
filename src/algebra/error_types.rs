use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type describing a structurally invalid sparse matrix.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
}

/// Error type returned by row and column deletion operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// A requested deletion index does not exist in the matrix
    #[error("index {index} is out of range for axis of dimension {dim}")]
    OutOfRange {
        /// the offending index
        index: usize,
        /// the axis dimension it was checked against
        dim: usize,
    },
    /// The input matrix failed format validation
    #[error(transparent)]
    BadFormat(#[from] SparseFormatError),
}
