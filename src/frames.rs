//! Frame-by-frame integration of a sampled function
//!
//! Every frame `[start, start + length]` is integrated trapezoidally over the function samples
//! it contains, with the function linearly interpolated at both frame edges. A frame edge lying
//! outside of the sampled domain is replaced by the nearest sample inside the frame, and the
//! normalization width shrinks accordingly. Frames lying entirely outside of the domain give
//! `NaN`.

use crate::data::{Frame, SampledFunction};
use crate::error::FrameError;
use crate::float_trait::Float;
use crate::interpolation::lookup_ascending_one;
use crate::trapz::trapz;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Frame integration options
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename = "FrameIntegration")]
pub struct FrameOptions {
    /// Divide every integral by the width of the integration interval
    pub normalize: bool,
    /// Size of the per-frame working buffer, a frame needs two more slots than the number of
    /// samples it contains
    pub capacity: usize,
}

impl FrameOptions {
    pub fn new(normalize: bool, capacity: usize) -> Self {
        assert!(capacity > 2, "capacity must be larger than two");
        Self {
            normalize,
            capacity,
        }
    }

    #[inline]
    pub fn default_normalize() -> bool {
        true
    }

    #[inline]
    pub fn default_capacity() -> usize {
        1024
    }
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self::new(Self::default_normalize(), Self::default_capacity())
    }
}

/// Integrator of successive frames over one sampled function
///
/// Keeps a cursor into the abscissa which only moves forward, so frames must be given in
/// increasing, non-overlapping order. Call [FrameIntegrator::reset] to start over from the
/// first sample. The abscissa must increase strictly, this is not checked.
#[derive(Clone, Debug)]
pub struct FrameIntegrator<'a, T> {
    x: &'a [T],
    y: &'a [T],
    low: usize,
    options: FrameOptions,
}

impl<'a, T> FrameIntegrator<'a, T>
where
    T: Float,
{
    pub fn new(function: &'a SampledFunction<'_, T>, options: FrameOptions) -> Self {
        Self::from_slices(function.x_slice(), function.y_slice(), options)
    }

    /// # Panics
    /// If `x` and `y` have different lengths.
    pub fn from_slices(x: &'a [T], y: &'a [T], options: FrameOptions) -> Self {
        assert_eq!(x.len(), y.len(), "x and y should have the same size");
        Self {
            x,
            y,
            low: 0,
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> &FrameOptions {
        &self.options
    }

    /// Index of the first sample after the last integrated frame start
    #[inline]
    pub fn cursor(&self) -> usize {
        self.low
    }

    pub fn reset(&mut self) {
        self.low = 0;
    }

    /// Integrate the next frame
    ///
    /// Returns `NaN` for a frame outside of the sampled domain and
    /// [FrameError::TooManySamples] if the frame contains more samples than the working buffer
    /// can hold.
    pub fn integrate(&mut self, frame: &Frame<T>) -> Result<T, FrameError> {
        let start = frame.start;
        let stop = frame.stop();
        let (first, last) = match (self.x.first(), self.x.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Ok(T::nan()),
        };
        // negated to reject NaN edges too
        if !(stop > first && start < last) {
            tracing::trace!(start = ?start, stop = ?stop, "frame is out of the sampled domain");
            return Ok(T::nan());
        }

        // start < last keeps the cursor inside of x
        while self.x[self.low] <= start {
            self.low += 1;
        }
        let end = if stop > last {
            self.x.len()
        } else {
            self.low
                + self.x[self.low..]
                    .iter()
                    .take_while(|&&x| x < stop)
                    .count()
        };
        let inner = self.low..end;

        let required = inner.len() + 2;
        if required >= self.options.capacity {
            return Err(FrameError::TooManySamples {
                start: start.to_f64().unwrap_or(f64::NAN),
                stop: stop.to_f64().unwrap_or(f64::NAN),
                required,
                capacity: self.options.capacity,
            });
        }

        let mut xs = Vec::with_capacity(required);
        let mut ys = Vec::with_capacity(required);
        xs.push(start);
        ys.push(lookup_ascending_one(self.x, self.y, start));
        xs.extend_from_slice(&self.x[inner.clone()]);
        ys.extend_from_slice(&self.y[inner]);
        xs.push(stop);
        ys.push(lookup_ascending_one(self.x, self.y, stop));

        // Only the edges can be NaN
        if ys[ys.len() - 1].is_nan() {
            xs.pop();
            ys.pop();
        }
        let (xs, ys) = if ys[0].is_nan() {
            (&xs[1..], &ys[1..])
        } else {
            (&xs[..], &ys[..])
        };
        if xs.len() < 2 {
            return Ok(T::nan());
        }

        let area = trapz(xs, ys);
        let value = if self.options.normalize {
            area / (xs[xs.len() - 1] - xs[0])
        } else {
            area
        };
        tracing::trace!(
            start = ?start,
            stop = ?stop,
            samples = xs.len(),
            value = ?value,
            "frame integrated"
        );
        Ok(value)
    }

    /// Integrate all frames from the beginning of the function
    pub fn integrate_all(&mut self, frames: &[Frame<T>]) -> Result<Vec<T>, FrameError> {
        self.reset();
        frames.iter().map(|frame| self.integrate(frame)).collect()
    }
}

/// Integrate `function` over every frame, normalizing by the frame width if `normalize` is set
///
/// `function` abscissa must increase strictly and `frames` must be sorted and non-overlapping.
/// Frames outside of the function domain give `NaN`.
pub fn integrate_frames<T>(
    function: &SampledFunction<'_, T>,
    frames: &[Frame<T>],
    normalize: bool,
) -> Result<Vec<T>, FrameError>
where
    T: Float,
{
    let options = FrameOptions {
        normalize,
        ..FrameOptions::default()
    };
    integrate_frames_with(function, frames, options)
}

/// [integrate_frames] with explicit [FrameOptions]
pub fn integrate_frames_with<T>(
    function: &SampledFunction<'_, T>,
    frames: &[Frame<T>],
    options: FrameOptions,
) -> Result<Vec<T>, FrameError>
where
    T: Float,
{
    FrameIntegrator::new(function, options).integrate_all(frames)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use crate::data::FrameList;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use light_curve_common::{all_close, linspace};
    use rand::prelude::*;

    fn tent() -> SampledFunction<'static, f64> {
        SampledFunction::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 1.0, 2.0, 1.0, 0.0])
    }

    #[test]
    fn tent_halves() {
        let frames: FrameList<f64> = [(0.0, 2.0), (2.0, 2.0)][..].into();
        let actual = integrate_frames(&tent(), &frames, true).unwrap();
        // each half has area 2 over width 2
        all_close(&actual, &[1.0, 1.0], 1e-12);
        let raw = integrate_frames(&tent(), &frames, false).unwrap();
        all_close(&raw, &[2.0, 2.0], 1e-12);
    }

    #[test]
    fn frame_between_samples_gives_midpoint() {
        let f = SampledFunction::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]);
        let frames: FrameList<f64> = [(0.25, 0.5), (1.25, 0.5)][..].into();
        let actual = integrate_frames(&f, &frames, true).unwrap();
        all_close(&actual, &[0.5, 2.5], 1e-12);
    }

    #[test]
    fn frames_outside_of_domain() {
        let frames: FrameList<f64> = [(-3.0, 3.0), (4.0, 1.0), (10.0, 1.0)][..].into();
        let actual = integrate_frames(&tent(), &frames, true).unwrap();
        assert!(actual.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn outside_frame_keeps_cursor() {
        let f = tent();
        let mut integrator = FrameIntegrator::new(&f, FrameOptions::default());
        assert!(integrator.integrate(&Frame::new(-2.0, 1.0)).unwrap().is_nan());
        assert_eq!(integrator.cursor(), 0);
        integrator.integrate(&Frame::new(1.5, 1.0)).unwrap();
        assert_eq!(integrator.cursor(), 2);
        integrator.reset();
        assert_eq!(integrator.cursor(), 0);
    }

    #[test]
    fn frame_sticking_out_on_the_left() {
        let f = SampledFunction::new(linspace(0.0, 4.0, 5), linspace(0.0, 4.0, 5));
        let value = integrate_frames(&f, &[Frame::new(-1.0, 2.0)], true).unwrap()[0];
        // only [0, 1] is integrated
        assert_relative_eq!(value, 0.5, max_relative = 1e-12);
        let raw = integrate_frames(&f, &[Frame::new(-1.0, 2.0)], false).unwrap()[0];
        assert_relative_eq!(raw, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn frame_sticking_out_on_the_right() {
        let f = SampledFunction::new(linspace(0.0, 4.0, 5), linspace(0.0, 4.0, 5));
        let value = integrate_frames(&f, &[Frame::new(3.0, 2.0)], true).unwrap()[0];
        // only [3, 4] is integrated
        assert_relative_eq!(value, 3.5, max_relative = 1e-12);
    }

    #[test]
    fn frame_covering_everything() {
        let f = tent();
        let value = integrate_frames(&f, &[Frame::new(-1.0, 6.0)], true).unwrap()[0];
        assert_relative_eq!(value, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn single_sample_function() {
        let f = SampledFunction::new(vec![1.0_f64], vec![3.0]);
        let value = integrate_frames(&f, &[Frame::new(0.0, 2.0)], true).unwrap()[0];
        assert!(value.is_nan());
    }

    #[test]
    fn empty_function() {
        let f = SampledFunction::<f64>::new(vec![], vec![]);
        let values = integrate_frames(&f, &[Frame::new(0.0, 2.0)], true).unwrap();
        assert!(values[0].is_nan());
    }

    #[test]
    fn nan_frame() {
        let values = integrate_frames(&tent(), &[Frame::new(f64::NAN, 1.0)], true).unwrap();
        assert!(values[0].is_nan());
    }

    #[test]
    fn too_many_samples() {
        const N: usize = 2000;
        let x = linspace(0.0, 1.0, N);
        let y = vec![1.0; N];
        let f = SampledFunction::new(&x, &y);
        let frame = Frame::new(0.0, 1.0);
        let err = integrate_frames(&f, &[frame], true).unwrap_err();
        assert!(matches!(
            err,
            FrameError::TooManySamples {
                capacity: 1024,
                ..
            }
        ));

        let options = FrameOptions::new(true, 4096);
        let value = integrate_frames_with(&f, &[frame], options).unwrap()[0];
        assert_relative_eq!(value, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn capacity_boundary() {
        // interior samples 1, 2, 3 plus both edges
        let f = tent();
        let frame = Frame::new(0.5, 3.0);
        assert!(integrate_frames_with(&f, &[frame], FrameOptions::new(true, 5)).is_err());
        assert!(integrate_frames_with(&f, &[frame], FrameOptions::new(true, 6)).is_ok());
    }

    #[test]
    fn narrow_frames_approach_midpoint_value() {
        let x = linspace(0.0, 10.0, 1001);
        let y: Vec<_> = x.iter().map(|&x| f64::sin(x)).collect();
        let f = SampledFunction::new(&x, &y);
        let frames = FrameList::uniform(0.5, 0.2, 40);
        let actual = integrate_frames(&f, &frames, true).unwrap();
        for (value, mid) in actual.iter().zip(frames.mids()) {
            assert_abs_diff_eq!(*value, f64::sin(mid), epsilon = 1e-2);
        }
    }

    #[test]
    fn stateful_equals_fresh() {
        let mut rng = StdRng::seed_from_u64(0);
        let x = linspace(0.0, 100.0, 337);
        let y: Vec<f64> = x.iter().map(|_| rng.random_range(0.0..10.0)).collect();
        let f = SampledFunction::new(&x, &y);

        let mut boundaries: Vec<f64> = (0..30).map(|_| rng.random_range(-5.0..105.0)).collect();
        boundaries.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        let frames = FrameList::from_boundaries(&boundaries);

        let stateful = integrate_frames(&f, &frames, true).unwrap();
        for (frame, &value) in frames.iter().zip(&stateful) {
            let fresh = integrate_frames(&f, &[*frame], true).unwrap()[0];
            if value.is_nan() {
                assert!(fresh.is_nan());
            } else {
                assert_eq!(value, fresh);
            }
        }
    }

    #[test]
    fn options_serde() {
        let options = FrameOptions::new(false, 64);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"normalize":false,"capacity":64}"#);
        assert_eq!(
            serde_json::from_str::<FrameOptions>(&json).unwrap(),
            options
        );
    }

    #[test]
    #[should_panic(expected = "capacity must be larger than two")]
    fn tiny_capacity() {
        let _ = FrameOptions::new(true, 2);
    }
}
