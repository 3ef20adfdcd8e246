use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Core trait bounds for internal floating point values.
///
/// This trait collects the scalar bounds required of stored matrix
/// coefficients.  A blanket implementation is provided, so any type
/// satisfying the constituent bounds can be used as the element type
/// of a [`CscMatrix`](crate::algebra::CscMatrix).
pub trait CoreFloatT:
    'static + Send + Float + NumAssign + Default + FromPrimitive + Display + Debug + Sized
{
}

impl<T> CoreFloatT for T where
    T: 'static + Send + Float + NumAssign + Default + FromPrimitive + Display + Debug + Sized
{
}

/// Main trait for floating point types stored in sparse matrices.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its
/// constituent trait bounds and is satisfied by the native `f32` and
/// `f64` types.
pub trait FloatT: CoreFloatT {}
impl<T> FloatT for T where T: CoreFloatT {}
