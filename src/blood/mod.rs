//! Convolution model of a blood time-activity curve measured in frames

mod convolution;
pub use convolution::{convolve_truncated, exponential_kernel};

mod curve;
pub use curve::{BloodCurve, BloodCurveParams, NPARAMS};

mod data;
pub use data::BloodData;
