use crate::float_trait::Float;
use crate::monotonic::{Monotonicity, check_monotonic};
use crate::types::CowArray1;

use ndarray::{Array1, ArrayView1};

/// A [`SampledFunction`](crate::SampledFunction) component
///
/// Underlying array is guaranteed to be contiguous, derived properties are computed on the first
/// request and cached.
#[derive(Clone, Debug)]
pub struct Sample<'a, T>
where
    T: Float,
{
    pub sample: CowArray1<'a, T>,
    monotonicity: Option<Monotonicity>,
}

macro_rules! sample_getter {
    ($t: ty, $attr: ident, $getter: ident, $func: expr) => {
        // This lint is false-positive in macros
        // https://github.com/rust-lang/rust-clippy/issues/1553
        #[allow(clippy::redundant_closure_call)]
        pub fn $getter(&mut self) -> $t {
            match self.$attr {
                Some(x) => x,
                None => {
                    self.$attr = Some($func(self));
                    self.$attr.unwrap()
                }
            }
        }
    };
}

impl<'a, T> Sample<'a, T>
where
    T: Float,
{
    pub fn new(sample: CowArray1<'a, T>) -> Self {
        let sample = if sample.is_standard_layout() {
            sample
        } else {
            Array1::from_iter(sample.iter().copied()).into()
        };
        Self {
            sample,
            monotonicity: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Contiguity is ensured by the constructor
        self.sample.as_slice().unwrap()
    }

    sample_getter!(
        Monotonicity,
        monotonicity,
        get_monotonicity,
        |s: &mut Sample<'a, T>| check_monotonic(s.as_slice())
    );
}

impl<'a, T, Slice: ?Sized> From<&'a Slice> for Sample<'a, T>
where
    T: Float,
    Slice: AsRef<[T]>,
{
    fn from(s: &'a Slice) -> Self {
        ArrayView1::from(s.as_ref()).into()
    }
}

impl<T> From<Vec<T>> for Sample<'_, T>
where
    T: Float,
{
    fn from(v: Vec<T>) -> Self {
        Array1::from(v).into()
    }
}

impl<'a, T> From<ArrayView1<'a, T>> for Sample<'a, T>
where
    T: Float,
{
    fn from(a: ArrayView1<'a, T>) -> Self {
        Self::new(a.into())
    }
}

impl<T> From<Array1<T>> for Sample<'_, T>
where
    T: Float,
{
    fn from(a: Array1<T>) -> Self {
        Self::new(a.into())
    }
}

impl<'a, T> From<CowArray1<'a, T>> for Sample<'a, T>
where
    T: Float,
{
    fn from(a: CowArray1<'a, T>) -> Self {
        Self::new(a)
    }
}
