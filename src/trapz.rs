use crate::float_trait::Float;

use itertools::Itertools;
use ndarray::{Array1, ArrayView2, Zip};

/// Trapezoidal integral of `values(times)`
///
/// No ordering or length checks are done, the shortest of the two inputs defines the number of
/// points. Less than two points give zero.
pub fn trapz<T>(times: &[T], values: &[T]) -> T
where
    T: Float,
{
    times
        .iter()
        .zip(values)
        .tuple_windows()
        .map(|((&t1, &v1), (&t2, &v2))| T::half() * (v1 + v2) * (t2 - t1))
        .sum()
}

/// Trapezoidal integral of `values * weights` over `times`
pub fn trapz_weighted<T>(times: &[T], values: &[T], weights: &[T]) -> T
where
    T: Float,
{
    let weighted: Vec<_> = values.iter().zip(weights).map(|(&v, &w)| v * w).collect();
    trapz(times, &weighted)
}

/// Trapezoidal integral of every column of `values`, rows follow `times`
pub fn trapz_columns<T>(times: &[T], values: ArrayView2<T>) -> Array1<T>
where
    T: Float,
{
    assert_eq!(
        times.len(),
        values.nrows(),
        "times and value rows should have the same size"
    );
    let mut areas = Array1::zeros(values.ncols());
    Zip::from(&mut areas)
        .and(values.columns())
        .for_each(|area, column| {
            *area = column
                .iter()
                .zip(times)
                .tuple_windows()
                .map(|((&v1, &t1), (&v2, &t2))| T::half() * (v1 + v2) * (t2 - t1))
                .sum();
        });
    areas
}
