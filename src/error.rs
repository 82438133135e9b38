/// Error returned from [crate::lookup()]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup table has {x} abscissa values but {y} ordinate values")]
    LengthMismatch { x: usize, y: usize },

    #[error("lookup table abscissa must be strictly monotonic")]
    NotMonotonic,
}

/// Error returned from frame integration, see [crate::FrameIntegrator]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameError {
    #[error(
        "frame [{start}, {stop}] requires {required} working samples, buffer capacity is {capacity}"
    )]
    TooManySamples {
        start: f64,
        stop: f64,
        required: usize,
        capacity: usize,
    },

    #[error("{starts} frame starts were given with {lengths} frame lengths")]
    LengthMismatch { starts: usize, lengths: usize },
}

/// Error returned from [crate::BloodData] constructor
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BloodDataError {
    #[error("input function has {time} time samples but {values} values")]
    InputLengthMismatch { time: usize, values: usize },

    #[error("input function must have at least {minimum} samples, {actual} given")]
    ShortInput { actual: usize, minimum: usize },

    #[error("input function time axis must increase strictly")]
    NonIncreasingTime,

    #[error("{measured} measured points cannot be matched with {frames} frames")]
    TooManyMeasurements { measured: usize, frames: usize },
}

/// Error returned from [crate::BloodCurveFit] and [crate::fit_blood_curve()]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FitError {
    #[error("invalid blood data: {0}")]
    Data(#[from] BloodDataError),

    #[error("frame integration failed: {0}")]
    Frame(#[from] FrameError),

    #[error("initial guess has {actual} parameters, {expected} expected")]
    WrongParameterCount { actual: usize, expected: usize },
}
