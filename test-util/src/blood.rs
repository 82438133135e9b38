use conv::prelude::*;
use itertools::{Itertools, repeat_n};
use kinetic_fit::{BloodCurve, BloodCurveParams, BloodData, FrameList};
use lazy_static::lazy_static;

/// `k1`, `k2` and `v0` used to generate [SYNTHETIC_BLOOD]
pub const TRUE_PARAMS: [f64; 3] = [0.6, 0.15, 0.05];

/// `n` time samples with step `spacing` beginning at zero
pub fn uniform_time(n: usize, spacing: f64) -> Vec<f64> {
    (0..n)
        .map(|i| i.approx_as::<f64>().unwrap() * spacing)
        .collect()
}

/// Bolus-like arterial input function: gamma-variate peak followed by a slow plateau
pub fn gamma_variate_input(time: &[f64], amplitude: f64, scale: f64, plateau: f64) -> Vec<f64> {
    time.iter()
        .map(|&t| {
            let decay = f64::exp(-t / scale);
            amplitude * t * decay + plateau * (1.0 - decay)
        })
        .collect()
}

/// Typical dynamic scan: short frames at the bolus arrival and longer ones later
pub fn pet_frame_lengths() -> Vec<f64> {
    itertools::chain!(repeat_n(2.0, 6), repeat_n(4.0, 6), repeat_n(8.0, 3)).collect()
}

/// Noiseless framed measurements generated from a known parameter set
///
/// Plain vectors only, so the data can be used with any build of `kinetic-fit`.
#[derive(Clone, Debug)]
pub struct SyntheticBlood {
    pub params: [f64; 3],
    pub time: Vec<f64>,
    pub input: Vec<f64>,
    pub frame_starts: Vec<f64>,
    pub frame_lengths: Vec<f64>,
    pub measured: Vec<f64>,
}

impl SyntheticBlood {
    pub fn new(params: [f64; 3]) -> Self {
        let time = uniform_time(121, 0.5);
        let input = gamma_variate_input(&time, 50.0, 1.5, 2.0);
        let frame_lengths = pet_frame_lengths();
        let frame_starts = std::iter::once(0.0)
            .chain(frame_lengths.iter().scan(0.0, |stop, &length| {
                *stop += length;
                Some(*stop)
            }))
            .take(frame_lengths.len())
            .collect_vec();
        let measured = {
            let frames = FrameList::from_starts_lengths(&frame_starts, &frame_lengths).unwrap();
            let data = BloodData::new(&time, &input, &[] as &[f64], frames).unwrap();
            BloodCurve::new(&data)
                .fitted_values(&BloodCurveParams::from(params))
                .unwrap()
                .to_vec()
        };
        Self {
            params,
            time,
            input,
            frame_starts,
            frame_lengths,
            measured,
        }
    }
}

lazy_static! {
    pub static ref SYNTHETIC_BLOOD: SyntheticBlood = SyntheticBlood::new(TRUE_PARAMS);
}
