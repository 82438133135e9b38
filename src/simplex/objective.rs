use std::convert::Infallible;

/// Scalar function of a parameter vector to be minimized
///
/// Evaluation may fail, the error stops the minimization and is returned to the caller. Any
/// `Fn(&[f64]) -> f64` closure is an infallible unconstrained objective.
pub trait Objective {
    type Error;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error>;

    /// Move a candidate point onto the feasible region
    ///
    /// Called by the minimizer before every evaluation, the constrained point is the one stored
    /// in the simplex. Does nothing by default.
    #[inline]
    fn constrain(&self, _x: &mut [f64]) {}
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    #[inline]
    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Objective wrapper counting evaluations
pub(super) struct Counted<'o, O> {
    objective: &'o O,
    pub evaluations: usize,
}

impl<'o, O> Counted<'o, O>
where
    O: Objective,
{
    pub fn new(objective: &'o O) -> Self {
        Self {
            objective,
            evaluations: 0,
        }
    }

    /// Constrain `x` in place and evaluate it
    pub fn evaluate(&mut self, x: &mut [f64]) -> Result<f64, O::Error> {
        self.evaluations += 1;
        self.objective.constrain(x);
        self.objective.evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_objective() {
        let f = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
        assert_eq!(f.evaluate(&[1.0, 2.0]), Ok(5.0));
    }

    #[test]
    fn counted() {
        let f = |x: &[f64]| x[0];
        let mut counted = Counted::new(&f);
        for i in 0..3 {
            assert_eq!(counted.evaluate(&mut [i as f64]), Ok(i as f64));
        }
        assert_eq!(counted.evaluations, 3);
    }

    #[test]
    fn counted_constrains_in_place() {
        struct NonNegative;

        impl Objective for NonNegative {
            type Error = Infallible;

            fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
                Ok(x[0])
            }

            fn constrain(&self, x: &mut [f64]) {
                x[0] = x[0].max(0.0);
            }
        }

        let mut counted = Counted::new(&NonNegative);
        let mut x = [-2.0, -3.0];
        assert_eq!(counted.evaluate(&mut x), Ok(0.0));
        assert_eq!(x, [0.0, -3.0]);
        assert_eq!(counted.evaluations, 1);
    }
}
