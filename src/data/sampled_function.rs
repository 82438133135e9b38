use crate::data::sample::Sample;
use crate::float_trait::Float;
use crate::monotonic::Monotonicity;

/// Function known at a set of points, `y(x)`
///
/// `x` is expected to be strictly monotonic, most routines of this crate require it to
/// increase. The direction is not checked on construction, see
/// [`SampledFunction::get_monotonicity`].
#[derive(Clone, Debug)]
pub struct SampledFunction<'a, T>
where
    T: Float,
{
    pub x: Sample<'a, T>,
    pub y: Sample<'a, T>,
}

impl<'a, T> SampledFunction<'a, T>
where
    T: Float,
{
    /// Construct `SampledFunction` from array-like objects
    ///
    /// Input arrays could be [`ndarray::Array1`], [`ndarray::ArrayView1`], 1-D
    /// [`ndarray::CowArray`], `Vec<T>` or `&[T]`.
    ///
    /// # Panics
    /// If `x` and `y` have different lengths.
    pub fn new(x: impl Into<Sample<'a, T>>, y: impl Into<Sample<'a, T>>) -> Self {
        let x = x.into();
        let y = y.into();
        assert_eq!(x.len(), y.len(), "x and y should have the same size");
        Self { x, y }
    }

    /// Number of points
    #[inline]
    pub fn lenu(&self) -> usize {
        self.x.len()
    }

    /// Direction of the abscissa
    pub fn get_monotonicity(&mut self) -> Monotonicity {
        self.x.get_monotonicity()
    }

    #[inline]
    pub fn x_slice(&self) -> &[T] {
        self.x.as_slice()
    }

    #[inline]
    pub fn y_slice(&self) -> &[T] {
        self.y.as_slice()
    }
}
