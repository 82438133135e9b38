use crate::blood::{BloodCurve, BloodCurveParams, BloodData, NPARAMS};
use crate::data::Frame;
use crate::error::FitError;
use crate::simplex::NelderMead;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Least-squares fit of the [BloodCurve] model with the [NelderMead] minimizer
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename = "BloodCurveFit")]
pub struct BloodCurveFit {
    pub algorithm: NelderMead,
}

impl BloodCurveFit {
    pub fn new(algorithm: NelderMead) -> Self {
        Self { algorithm }
    }

    /// 600 evaluations with unit tolerances
    #[inline]
    pub fn default_algorithm() -> NelderMead {
        NelderMead::new(Some(600), 1.0, 1.0)
    }

    /// Fit `data` starting from `initial_guess` of `k1`, `k2` and `v0`
    pub fn fit(
        &self,
        data: &BloodData,
        initial_guess: &[f64],
    ) -> Result<BloodCurveFitResult, FitError> {
        if initial_guess.len() != NPARAMS {
            return Err(FitError::WrongParameterCount {
                actual: initial_guess.len(),
                expected: NPARAMS,
            });
        }
        let curve = BloodCurve::new(data);
        let result = self.algorithm.minimize(&curve, initial_guess)?;
        let params = BloodCurveParams::try_from(result.x.as_slice())?;
        tracing::info!(
            k1 = params.k1,
            k2 = params.k2,
            v0 = params.v0,
            rss = result.value,
            evaluations = result.evaluations,
            converged = result.converged,
            "blood curve fitted"
        );
        Ok(BloodCurveFitResult {
            params,
            rss: result.value,
            evaluations: result.evaluations,
            converged: result.converged,
        })
    }
}

impl Default for BloodCurveFit {
    fn default() -> Self {
        Self::new(Self::default_algorithm())
    }
}

/// Result of [BloodCurveFit::fit]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloodCurveFitResult {
    /// Best parameters, `v0` is never negative
    pub params: BloodCurveParams,
    /// Residual sum of squares at `params`
    pub rss: f64,
    pub evaluations: usize,
    pub converged: bool,
}

/// Fit the [BloodCurve] model to framed measurements
///
/// `input_time` must be uniformly sampled and increase strictly. `measured_values[i]` is matched
/// with `frames[i]`, so there must be no more measured values than frames. `measured_time` is
/// accepted for symmetry with the measured values and is not used, the frames define where every
/// measurement was taken.
#[allow(clippy::too_many_arguments)]
pub fn fit_blood_curve(
    input_time: &[f64],
    input_values: &[f64],
    _measured_time: &[f64],
    measured_values: &[f64],
    frames: &[Frame<f64>],
    initial_guess: &[f64],
    max_evaluations: usize,
    param_tol: f64,
    value_tol: f64,
) -> Result<BloodCurveFitResult, FitError> {
    let data = BloodData::new(input_time, input_values, measured_values, frames.to_vec())?;
    BloodCurveFit::new(NelderMead::new(
        Some(max_evaluations),
        param_tol,
        value_tol,
    ))
    .fit(&data, initial_guess)
}
