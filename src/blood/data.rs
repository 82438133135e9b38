use crate::data::{FrameList, Sample};
use crate::error::BloodDataError;
use crate::monotonic::Monotonicity;

/// Input function and framed measurements of a blood curve fit
///
/// The input function is sampled on a uniform time grid, its spacing is taken from the first two
/// samples. Measured values are matched with frames by position, every frame past the last
/// measured value is integrated but doesn't contribute to the residual.
#[derive(Clone, Debug)]
pub struct BloodData<'a> {
    time: Sample<'a, f64>,
    input: Sample<'a, f64>,
    measured: Sample<'a, f64>,
    frames: FrameList<f64>,
    spacing: f64,
}

impl<'a> BloodData<'a> {
    /// Minimum number of input function samples
    pub const MIN_SAMPLES: usize = 2;

    pub fn new(
        time: impl Into<Sample<'a, f64>>,
        input: impl Into<Sample<'a, f64>>,
        measured: impl Into<Sample<'a, f64>>,
        frames: impl Into<FrameList<f64>>,
    ) -> Result<Self, BloodDataError> {
        let mut time = time.into();
        let input = input.into();
        let measured = measured.into();
        let frames = frames.into();

        if time.len() != input.len() {
            return Err(BloodDataError::InputLengthMismatch {
                time: time.len(),
                values: input.len(),
            });
        }
        if time.len() < Self::MIN_SAMPLES {
            return Err(BloodDataError::ShortInput {
                actual: time.len(),
                minimum: Self::MIN_SAMPLES,
            });
        }
        if time.get_monotonicity() != Monotonicity::Increasing {
            return Err(BloodDataError::NonIncreasingTime);
        }
        if measured.len() > frames.len() {
            return Err(BloodDataError::TooManyMeasurements {
                measured: measured.len(),
                frames: frames.len(),
            });
        }

        let spacing = time.sample[1] - time.sample[0];
        Ok(Self {
            time,
            input,
            measured,
            frames,
            spacing,
        })
    }

    #[inline]
    pub fn time(&self) -> &[f64] {
        self.time.as_slice()
    }

    #[inline]
    pub fn input(&self) -> &[f64] {
        self.input.as_slice()
    }

    #[inline]
    pub fn measured(&self) -> &[f64] {
        self.measured.as_slice()
    }

    #[inline]
    pub fn frames(&self) -> &FrameList<f64> {
        &self.frames
    }

    /// Time step of the input function
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.time.len()
    }
}
