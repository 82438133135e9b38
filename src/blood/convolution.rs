use crate::float_trait::Float;

use ndarray::{Array1, ArrayView1, Zip, s};

/// `exp(-rate * t)` sampled at every `time`
pub fn exponential_kernel<T>(time: &[T], rate: T) -> Array1<T>
where
    T: Float,
{
    time.iter().map(|&t| T::exp(-rate * t)).collect()
}

/// Discrete causal convolution of two equally sampled signals, truncated to the input length
///
/// `c[k] = spacing * sum(a[i] * b[k - i], i = 0..=k)`
///
/// # Panics
/// If `a` and `b` have different lengths.
pub fn convolve_truncated<T>(a: ArrayView1<T>, b: ArrayView1<T>, spacing: T) -> Array1<T>
where
    T: Float,
{
    assert_eq!(a.len(), b.len(), "convolved signals should have the same size");
    (0..a.len())
        .map(|k| {
            Zip::from(a.slice(s![..=k]))
                .and(b.slice(s![..=k;-1]))
                .fold(T::zero(), |acc, &x, &y| acc + x * y)
                * spacing
        })
        .collect()
}
