//! Piecewise-linear table lookup
//!
//! Queries outside the closed interval spanned by the table abscissa give `NaN`. The unchecked
//! functions assume the abscissa is strictly monotonic in the direction they are named after,
//! run [check_monotonic](crate::check_monotonic) first or use the checked [lookup].

use crate::error::LookupError;
use crate::float_trait::Float;
use crate::monotonic::check_monotonic;

use enum_dispatch::enum_dispatch;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Table lookup in a known abscissa direction
#[enum_dispatch]
pub trait LookupTrait {
    /// Interpolate `old_y(old_x)` at a single point `q`
    fn lookup_one<T: Float>(&self, old_x: &[T], old_y: &[T], q: T) -> T;

    /// Interpolate `old_y(old_x)` at every point of `new_x`
    fn lookup_many<T: Float>(&self, old_x: &[T], old_y: &[T], new_x: &[T]) -> Vec<T> {
        new_x
            .iter()
            .map(|&q| self.lookup_one(old_x, old_y, q))
            .collect()
    }
}

/// Lookup in a table with increasing abscissa
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct AscendingLookup;

/// Lookup in a table with decreasing abscissa
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DescendingLookup;

/// Lookup direction chosen at runtime, usually from [crate::Monotonicity::lookup]
#[enum_dispatch(LookupTrait)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Lookup {
    Ascending(AscendingLookup),
    Descending(DescendingLookup),
}

/// Linear interpolation between `j` and `j + 1`
///
/// `j` is the last table index for one-element tables.
#[inline]
fn interpolate<T: Float>(old_x: &[T], old_y: &[T], j: usize, q: T) -> T {
    if j + 1 >= old_x.len() {
        return old_y[j];
    }
    let slope = (old_y[j + 1] - old_y[j]) / (old_x[j + 1] - old_x[j]);
    old_y[j] + slope * (q - old_x[j])
}

impl LookupTrait for AscendingLookup {
    fn lookup_one<T: Float>(&self, old_x: &[T], old_y: &[T], q: T) -> T {
        let (first, last) = match (old_x.first(), old_x.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return T::nan(),
        };
        if q < first || q > last {
            return T::nan();
        }
        // old_x[j] < q <= old_x[j + 1]
        let j = old_x[1..].partition_point(|&x| x < q);
        interpolate(old_x, old_y, j, q)
    }
}

impl LookupTrait for DescendingLookup {
    fn lookup_one<T: Float>(&self, old_x: &[T], old_y: &[T], q: T) -> T {
        let (first, last) = match (old_x.first(), old_x.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return T::nan(),
        };
        if q > first || q < last {
            return T::nan();
        }
        // old_x[j] > q >= old_x[j + 1]
        let j = old_x[1..].partition_point(|&x| x > q);
        interpolate(old_x, old_y, j, q)
    }
}

/// Interpolate at a single point of a table with increasing abscissa
pub fn lookup_ascending_one<T: Float>(old_x: &[T], old_y: &[T], q: T) -> T {
    AscendingLookup.lookup_one(old_x, old_y, q)
}

/// Interpolate at a single point of a table with decreasing abscissa
pub fn lookup_descending_one<T: Float>(old_x: &[T], old_y: &[T], q: T) -> T {
    DescendingLookup.lookup_one(old_x, old_y, q)
}

/// Interpolate a table with increasing abscissa at every point of `new_x`
pub fn lookup_ascending<T: Float>(old_x: &[T], old_y: &[T], new_x: &[T]) -> Vec<T> {
    AscendingLookup.lookup_many(old_x, old_y, new_x)
}

/// Interpolate a table with decreasing abscissa at every point of `new_x`
pub fn lookup_descending<T: Float>(old_x: &[T], old_y: &[T], new_x: &[T]) -> Vec<T> {
    DescendingLookup.lookup_many(old_x, old_y, new_x)
}

/// Checked lookup: validates the table and picks the direction itself
///
/// An empty or one-element table has no direction and is rejected as non-monotonic.
pub fn lookup<T: Float>(old_x: &[T], old_y: &[T], new_x: &[T]) -> Result<Vec<T>, LookupError> {
    if old_x.len() != old_y.len() {
        return Err(LookupError::LengthMismatch {
            x: old_x.len(),
            y: old_y.len(),
        });
    }
    let direction = check_monotonic(old_x)
        .lookup()
        .ok_or(LookupError::NotMonotonic)?;
    Ok(direction.lookup_many(old_x, old_y, new_x))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use light_curve_common::all_close;
    use rand::prelude::*;

    const X: [f64; 5] = [0.0, 1.0, 2.0, 4.0, 8.0];
    const Y: [f64; 5] = [1.0, 3.0, 2.0, 2.0, -6.0];

    #[test]
    fn ascending_at_nodes() {
        let actual = lookup_ascending(&X, &Y, &X);
        all_close(&actual, &Y, 1e-12);
    }

    #[test]
    fn descending_at_nodes() {
        let x: Vec<_> = X.iter().rev().copied().collect();
        let y: Vec<_> = Y.iter().rev().copied().collect();
        let actual = lookup_descending(&x, &y, &x);
        all_close(&actual, &y, 1e-12);
    }

    #[test]
    fn ascending_between_nodes() {
        let actual = lookup_ascending(&X, &Y, &[0.5, 1.5, 3.0, 6.0]);
        all_close(&actual, &[2.0, 2.5, 2.0, -2.0], 1e-12);
    }

    #[test]
    fn descending_between_nodes() {
        let x = [8.0, 4.0, 2.0, 1.0, 0.0];
        let y = [-6.0, 2.0, 2.0, 3.0, 1.0];
        let actual = lookup_descending(&x, &y, &[6.0, 3.0, 1.5, 0.5]);
        all_close(&actual, &[-2.0, 2.0, 2.5, 2.0], 1e-12);
    }

    #[test]
    fn ascending_out_of_domain() {
        let actual = lookup_ascending(&X, &Y, &[-1e-9, 8.0 + 1e-9, -100.0, f64::INFINITY]);
        assert!(actual.iter().all(|y| y.is_nan()));
    }

    #[test]
    fn descending_out_of_domain() {
        let x = [3.0_f64, 2.0, 1.0];
        let y = [0.0, 1.0, 2.0];
        let actual = lookup_descending(&x, &y, &[3.5, 0.5]);
        assert!(actual.iter().all(|y| y.is_nan()));
    }

    #[test]
    fn empty_table() {
        let empty: [f64; 0] = [];
        assert!(lookup_ascending_one(&empty, &empty, 0.0).is_nan());
        assert!(lookup_descending_one(&empty, &empty, 0.0).is_nan());
    }

    #[test]
    fn single_point_table() {
        assert_eq!(lookup_ascending_one(&[2.0], &[5.0], 2.0), 5.0);
        assert!(lookup_ascending_one(&[2.0_f64], &[5.0], 2.5).is_nan());
    }

    #[test]
    fn random_queries_are_bracketed() {
        let mut rng = StdRng::seed_from_u64(0);
        let x: Vec<f64> = (0..64).map(|i| i as f64 * 0.25).collect();
        let y: Vec<f64> = x.iter().map(|&x| f64::sin(x)).collect();
        for _ in 0..1000 {
            let q: f64 = rng.random_range(0.0..15.75);
            let actual = lookup_ascending_one(&x, &y, q);
            let j = ((q / 0.25).floor() as usize).min(62);
            let (lo, hi) = if y[j] < y[j + 1] {
                (y[j], y[j + 1])
            } else {
                (y[j + 1], y[j])
            };
            assert!(
                lo - 1e-12 <= actual && actual <= hi + 1e-12,
                "{actual} is not between {lo} and {hi}"
            );
            let desired = y[j] + (y[j + 1] - y[j]) / (x[j + 1] - x[j]) * (q - x[j]);
            assert_abs_diff_eq!(actual, desired, epsilon = 1e-12);
        }
    }

    #[test]
    fn dispatch_by_direction() {
        let x = [0.0_f32, 1.0, 2.0];
        let y = [0.0_f32, 10.0, 20.0];
        let up = lookup(&x, &y, &[0.5, 1.5]).unwrap();
        assert_eq!(up, vec![5.0, 15.0]);

        let x_down = [2.0_f32, 1.0, 0.0];
        let y_down = [20.0_f32, 10.0, 0.0];
        let down = lookup(&x_down, &y_down, &[0.5, 1.5]).unwrap();
        assert_eq!(down, vec![5.0, 15.0]);
    }

    #[test]
    fn checked_lookup_errors() {
        assert_eq!(
            lookup(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0], &[0.5]),
            Err(LookupError::NotMonotonic)
        );
        assert_eq!(
            lookup(&[0.0, 1.0], &[0.0], &[0.5]),
            Err(LookupError::LengthMismatch { x: 2, y: 1 })
        );
    }

    #[test]
    fn enum_matches_unit_types() {
        let lookup: Lookup = AscendingLookup.into();
        assert_eq!(
            lookup.lookup_many(&X, &Y, &[0.25, 7.0]),
            AscendingLookup.lookup_many(&X, &Y, &[0.25, 7.0])
        );
    }
}
