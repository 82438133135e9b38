use crate::simplex::objective::{Counted, Objective};
use crate::simplex::vertices::{Simplex, Vertex, combine};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reflection coefficient
const ALPHA: f64 = 1.0;
/// Contraction coefficient
const BETA: f64 = 0.5;
/// Expansion coefficient
const GAMMA: f64 = 2.0;

/// Nelder-Mead downhill simplex minimizer
///
/// Derivative-free minimization of a scalar [Objective]. The initial simplex is built around the
/// starting point by scaling each of its components by 10%, see [Simplex]. Every iteration
/// replaces the worst vertex by reflecting, expanding or contracting it through the centroid of
/// the others, or shrinks the whole simplex towards the best vertex if none of these improves.
///
/// Every candidate point passes through [Objective::constrain] before it is evaluated and stored.
///
/// Minimization stops when all vertices are within `x_tol` of the best one in every coordinate
/// and within `f_tol` in objective value, or when the evaluation budget is exhausted. The budget
/// is checked between iterations, so a single iteration may overshoot it.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename = "NelderMead")]
pub struct NelderMead {
    /// Objective evaluation budget, `200` per parameter if not set
    pub max_evaluations: Option<usize>,
    pub x_tol: f64,
    pub f_tol: f64,
}

impl NelderMead {
    /// Create a new [NelderMead].
    ///
    /// # Arguments
    /// - `max_evaluations`: objective evaluation budget, `None` for `200` per parameter
    /// - `x_tol`: convergence tolerance on every parameter
    /// - `f_tol`: convergence tolerance on the objective value
    pub fn new(max_evaluations: Option<usize>, x_tol: f64, f_tol: f64) -> Self {
        assert!(x_tol >= 0.0, "x_tol must be non-negative");
        assert!(x_tol.is_finite(), "x_tol must be finite");
        assert!(f_tol >= 0.0, "f_tol must be non-negative");
        assert!(f_tol.is_finite(), "f_tol must be finite");
        Self {
            max_evaluations,
            x_tol,
            f_tol,
        }
    }

    #[inline]
    pub fn default_max_evaluations() -> Option<usize> {
        None
    }

    #[inline]
    pub fn default_evaluations_per_parameter() -> usize {
        200
    }

    #[inline]
    pub fn default_x_tol() -> f64 {
        1e-4
    }

    #[inline]
    pub fn default_f_tol() -> f64 {
        1e-4
    }

    /// Evaluation budget for `nparams` parameters
    pub fn max_evaluations_for(&self, nparams: usize) -> usize {
        self.max_evaluations
            .unwrap_or_else(|| Self::default_evaluations_per_parameter() * nparams)
    }

    /// Minimize `objective` starting from `start`
    ///
    /// The first objective error aborts the minimization.
    pub fn minimize<O>(&self, objective: &O, start: &[f64]) -> Result<SimplexResult, O::Error>
    where
        O: Objective,
    {
        let budget = self.max_evaluations_for(start.len());
        let mut counted = Counted::new(objective);
        let mut simplex = Simplex::around(start, &mut counted)?;

        while counted.evaluations < budget {
            if simplex.is_converged(self.x_tol, self.f_tol) {
                break;
            }
            let step = iterate(&mut simplex, &mut counted)?;
            tracing::debug!(
                ?step,
                evaluations = counted.evaluations,
                best = simplex.best().value,
                worst = simplex.worst().value,
                "simplex step"
            );
            tracing::trace!(?simplex);
        }

        let converged = simplex.is_converged(self.x_tol, self.f_tol);
        if converged {
            tracing::debug!(
                evaluations = counted.evaluations,
                value = simplex.best().value,
                "simplex converged"
            );
        } else {
            tracing::warn!(
                evaluations = counted.evaluations,
                budget,
                value = simplex.best().value,
                "simplex evaluation budget exhausted before convergence"
            );
        }

        let Vertex { x, value } = simplex.best().clone();
        Ok(SimplexResult {
            x,
            value,
            evaluations: counted.evaluations,
            converged,
        })
    }
}

impl Default for NelderMead {
    fn default() -> Self {
        Self::new(
            Self::default_max_evaluations(),
            Self::default_x_tol(),
            Self::default_f_tol(),
        )
    }
}

/// Outcome of a single iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Reflect,
    Expand,
    Contract,
    Shrink,
}

/// Replace the worst vertex of a non-degenerate simplex
fn iterate<O>(simplex: &mut Simplex, objective: &mut Counted<O>) -> Result<Step, O::Error>
where
    O: Objective,
{
    let n = simplex.dim();
    let best = simplex.best().value;
    let second_worst = simplex.vertices()[n - 1].value;
    let worst = simplex.worst().clone();
    let centroid = simplex.centroid();

    let mut reflected = combine(1.0 + ALPHA, &centroid, -ALPHA, &worst.x);
    let reflected_value = objective.evaluate(&mut reflected)?;
    let reflected = Vertex {
        x: reflected,
        value: reflected_value,
    };

    let (replacement, step) = if reflected.value < second_worst {
        if reflected.value < best {
            let mut expanded = combine(GAMMA, &reflected.x, 1.0 - GAMMA, &centroid);
            let value = objective.evaluate(&mut expanded)?;
            if value < best {
                (Vertex { x: expanded, value }, Step::Expand)
            } else {
                (reflected, Step::Reflect)
            }
        } else {
            (reflected, Step::Reflect)
        }
    } else {
        let toward = if reflected.value < worst.value {
            &reflected.x
        } else {
            &worst.x
        };
        let mut contracted = combine(BETA, toward, 1.0 - BETA, &centroid);
        let value = objective.evaluate(&mut contracted)?;
        if value < second_worst {
            (
                Vertex {
                    x: contracted,
                    value,
                },
                Step::Contract,
            )
        } else {
            simplex.shrink_inner(objective)?;
            let mut x = combine(0.5, &simplex.best().x, 0.5, &worst.x);
            let value = objective.evaluate(&mut x)?;
            (Vertex { x, value }, Step::Shrink)
        }
    };
    simplex.replace_worst(replacement);
    Ok(step)
}

/// Result of [NelderMead::minimize]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplexResult {
    /// Best point found
    pub x: Vec<f64>,
    /// Objective value at `x`
    pub value: f64,
    /// Number of objective evaluations including the initial simplex
    pub evaluations: usize,
    /// Whether the final simplex satisfies both tolerances
    pub converged: bool,
}
