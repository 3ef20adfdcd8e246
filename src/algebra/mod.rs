//! Sparse matrix types and slicing operations.

mod error_types;
pub use error_types::*;
mod floats;
pub use floats::*;
mod matrix_traits;
pub use matrix_traits::*;

mod csc;
pub use csc::*;
