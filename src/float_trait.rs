use conv::prelude::*;
use ndarray::ScalarOperand;
use num_traits::{FloatConst, NumAssignOps};
use std::fmt::{Debug, Display, LowerExp};
use std::iter::Sum;

/// Floating point type used by the generic numeric routines
///
/// Implemented for [f32] and [f64].
pub trait Float:
    'static
    + Sized
    + num_traits::Float
    + FloatConst
    + NumAssignOps
    + ApproxFrom<usize>
    + ScalarOperand
    + Sum
    + Debug
    + Display
    + LowerExp
    + Default
    + Send
    + Sync
{
    fn half() -> Self;

    /// Convert an index-like count to the float type
    #[inline]
    fn from_count(n: usize) -> Self {
        Self::approx_from(n).unwrap()
    }
}

impl Float for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }
}

impl Float for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }
}
