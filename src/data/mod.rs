mod frame;
pub use frame::{Frame, FrameList};

mod sample;
pub use sample::Sample;

mod sampled_function;
pub use sampled_function::SampledFunction;
