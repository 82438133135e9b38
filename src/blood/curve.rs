use crate::blood::convolution::{convolve_truncated, exponential_kernel};
use crate::blood::data::BloodData;
use crate::data::SampledFunction;
use crate::error::{FitError, FrameError};
use crate::frames::{FrameOptions, integrate_frames_with};
use crate::simplex::Objective;

use macro_const::macro_const;
use ndarray::{Array1, ArrayView1, Zip};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of [BloodCurveParams]
pub const NPARAMS: usize = 3;

/// Parameters of the [BloodCurve] model
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BloodCurveParams {
    /// Amplitude of the convolved component, `alpha`
    pub k1: f64,
    /// Decay rate of the exponential kernel, `beta`
    pub k2: f64,
    /// Fraction of the input passed through directly, `gamma`
    pub v0: f64,
}

impl BloodCurveParams {
    pub fn new(k1: f64, k2: f64, v0: f64) -> Self {
        Self { k1, k2, v0 }
    }

    /// Negative `v0` replaced by zero
    ///
    /// A `NaN` is left as is.
    pub fn clamped(self) -> Self {
        Self {
            v0: if self.v0 < 0.0 { 0.0 } else { self.v0 },
            ..self
        }
    }

    pub fn to_array(self) -> [f64; NPARAMS] {
        [self.k1, self.k2, self.v0]
    }
}

impl From<[f64; NPARAMS]> for BloodCurveParams {
    fn from([k1, k2, v0]: [f64; NPARAMS]) -> Self {
        Self::new(k1, k2, v0)
    }
}

impl TryFrom<&[f64]> for BloodCurveParams {
    type Error = FitError;

    fn try_from(x: &[f64]) -> Result<Self, Self::Error> {
        match *x {
            [k1, k2, v0] => Ok(Self::new(k1, k2, v0)),
            _ => Err(FitError::WrongParameterCount {
                actual: x.len(),
                expected: NPARAMS,
            }),
        }
    }
}

macro_const! {
    const DOC: &str = r#"
Blood curve forward model

The arterial input function $C_a(t)$ sampled on a uniform grid with step $\Delta t$ is convolved
with an exponential kernel and mixed with the unchanged input:

$$
C(t) = k_1 \int_0^t C_a(\tau) \mathrm{e}^{-k_2 (t - \tau)} \mathrm{d}\tau + v_0 C_a(t),
$$

where the integral is the truncated discrete convolution with the kernel sampled at the input
time grid. The model curve is then averaged over every measurement frame and compared with the
measured values, giving the residual sum of squares used as the fit objective. Frames outside of
the input function domain contribute zero. Negative $v_0$ is treated as zero.

- Parameters: $k_1$, $k_2$, $v_0$
- Minimum number of input samples: **2**
"#;
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug)]
pub struct BloodCurve<'d, 'a> {
    data: &'d BloodData<'a>,
}

impl<'d, 'a> BloodCurve<'d, 'a> {
    pub fn new(data: &'d BloodData<'a>) -> Self {
        Self { data }
    }

    pub fn doc() -> &'static str {
        DOC
    }

    #[inline]
    pub fn data(&self) -> &'d BloodData<'a> {
        self.data
    }

    /// Model evaluated at every input function sample
    pub fn model_curve(&self, params: &BloodCurveParams) -> Array1<f64> {
        let BloodCurveParams { k1, k2, v0 } = params.clamped();
        let input = ArrayView1::from(self.data.input());
        let kernel = exponential_kernel(self.data.time(), k2);
        let mut curve = convolve_truncated(input, kernel.view(), self.data.spacing());
        Zip::from(&mut curve)
            .and(input)
            .for_each(|c, &a| *c = k1 * *c + v0 * a);
        curve
    }

    /// Frame-averaged model, one value per frame, `NaN` for frames outside of the input domain
    pub fn fitted_values(&self, params: &BloodCurveParams) -> Result<Array1<f64>, FrameError> {
        let function = SampledFunction::new(self.data.time(), self.model_curve(params));
        integrate_frames_with(&function, self.data.frames(), FrameOptions::default())
            .map(Array1::from)
    }

    /// Sum of squared differences between the measured values and the frame-averaged model
    pub fn residual_sum_of_squares(&self, params: &BloodCurveParams) -> Result<f64, FrameError> {
        let fitted = self.fitted_values(params)?;
        let rss = self
            .data
            .measured()
            .iter()
            .zip(fitted.iter())
            .map(|(&m, &f)| {
                let f = if f.is_nan() { 0.0 } else { f };
                (m - f).powi(2)
            })
            .sum();
        Ok(rss)
    }
}

impl Objective for BloodCurve<'_, '_> {
    type Error = FitError;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        let params = BloodCurveParams::try_from(x)?;
        Ok(self.residual_sum_of_squares(&params)?)
    }

    /// Negative `v0` is replaced by zero
    fn constrain(&self, x: &mut [f64]) {
        if let Some(v0) = x.get_mut(2).filter(|v0| **v0 < 0.0) {
            *v0 = 0.0;
        }
    }
}
