pub use crate::float_trait::Float;
pub use crate::interpolation::LookupTrait;
pub use crate::simplex::Objective;
