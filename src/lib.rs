#![doc = include_str!("../README.md")]

mod blood;
pub use blood::{
    BloodCurve, BloodCurveParams, BloodData, NPARAMS, convolve_truncated, exponential_kernel,
};

mod data;
pub use data::{Frame, FrameList, Sample, SampledFunction};

mod error;
pub use error::{BloodDataError, FitError, FrameError, LookupError};

mod fit;
pub use fit::{BloodCurveFit, BloodCurveFitResult, fit_blood_curve};

mod float_trait;
pub use float_trait::Float;

mod frames;
pub use frames::{FrameIntegrator, FrameOptions, integrate_frames, integrate_frames_with};

pub mod interpolation;
pub use interpolation::{
    AscendingLookup, DescendingLookup, Lookup, LookupTrait, lookup, lookup_ascending,
    lookup_descending,
};

mod monotonic;
pub use monotonic::{Monotonicity, check_monotonic};

pub mod prelude;

pub mod simplex;
pub use simplex::{NelderMead, Objective, SimplexResult};

mod trapz;
pub use trapz::{trapz, trapz_columns, trapz_weighted};

mod types;

pub use ndarray;
