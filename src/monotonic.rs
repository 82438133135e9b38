use crate::float_trait::Float;
use crate::interpolation::{AscendingLookup, DescendingLookup, Lookup};

use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Direction of a sequence, see [check_monotonic]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Monotonicity {
    Increasing,
    Decreasing,
    NotMonotonic,
}

impl Monotonicity {
    fn of_step<T: Float>(a: T, b: T) -> Self {
        let diff = b - a;
        if diff > T::zero() {
            Self::Increasing
        } else if diff < T::zero() {
            Self::Decreasing
        } else {
            // zero or NaN step
            Self::NotMonotonic
        }
    }

    pub fn is_monotonic(self) -> bool {
        self != Self::NotMonotonic
    }

    /// Lookup variant matching the direction, `None` for [Monotonicity::NotMonotonic]
    pub fn lookup(self) -> Option<Lookup> {
        match self {
            Self::Increasing => Some(AscendingLookup.into()),
            Self::Decreasing => Some(DescendingLookup.into()),
            Self::NotMonotonic => None,
        }
    }
}

/// Classify a sequence as strictly increasing, strictly decreasing or neither
///
/// The first step defines the direction, every following step must go the same way. Repeated
/// adjacent values make the sequence non-monotonic, as does a sequence shorter than two
/// elements.
pub fn check_monotonic<T>(x: &[T]) -> Monotonicity
where
    T: Float,
{
    let mut steps = x
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| Monotonicity::of_step(a, b));
    let direction = match steps.next() {
        Some(direction) if direction.is_monotonic() => direction,
        _ => return Monotonicity::NotMonotonic,
    };
    if steps.all(|step| step == direction) {
        direction
    } else {
        Monotonicity::NotMonotonic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    macro_rules! monotonic_test {
        ($name: ident, $desired: expr, $x: expr $(,)?) => {
            #[test]
            fn $name() {
                let x: Vec<f64> = $x.to_vec();
                assert_eq!(check_monotonic(&x), $desired);
            }
        };
    }

    monotonic_test!(increasing, Monotonicity::Increasing, [0.0, 1.0, 2.5, 10.0]);
    monotonic_test!(decreasing, Monotonicity::Decreasing, [3.0, 2.0, -1.0]);
    monotonic_test!(two_points_up, Monotonicity::Increasing, [0.0, 1e-12]);
    monotonic_test!(
        repeated_first_pair,
        Monotonicity::NotMonotonic,
        [1.0, 1.0, 2.0]
    );
    monotonic_test!(
        repeated_later_pair,
        Monotonicity::NotMonotonic,
        [1.0, 2.0, 2.0, 3.0]
    );
    monotonic_test!(
        sign_change,
        Monotonicity::NotMonotonic,
        [0.0, 1.0, 2.0, 1.0]
    );
    monotonic_test!(single, Monotonicity::NotMonotonic, [1.0]);
    monotonic_test!(empty, Monotonicity::NotMonotonic, [] as [f64; 0]);
    monotonic_test!(
        nan_inside,
        Monotonicity::NotMonotonic,
        [0.0, 1.0, f64::NAN, 3.0]
    );

    #[test]
    fn random_sorted_sequences() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in 4..50 {
            let mut x: Vec<f64> = (0..n).map(|_| rng.random()).collect();
            x.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
            x.dedup();
            if x.len() < 4 {
                continue;
            }
            assert_eq!(check_monotonic(&x), Monotonicity::Increasing);
            x.reverse();
            assert_eq!(check_monotonic(&x), Monotonicity::Decreasing);
            let last = x.len() - 1;
            x.swap(0, last);
            assert_eq!(check_monotonic(&x), Monotonicity::NotMonotonic);
        }
    }

    #[test]
    fn f32_sequence() {
        let x = [0.0_f32, 0.5, 0.75];
        assert_eq!(check_monotonic(&x), Monotonicity::Increasing);
    }

    #[test]
    fn lookup_variant() {
        assert!(Monotonicity::Increasing.lookup().is_some());
        assert!(Monotonicity::Decreasing.lookup().is_some());
        assert!(Monotonicity::NotMonotonic.lookup().is_none());
    }
}
