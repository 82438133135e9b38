//! Derivative-free minimization with the Nelder-Mead simplex method

mod nelder_mead;
pub use nelder_mead::{NelderMead, SimplexResult, Step};

mod objective;
pub use objective::Objective;

mod vertices;
pub use vertices::{Simplex, Vertex};
