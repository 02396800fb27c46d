//! Normalization and closed-form solving of reduced polynomial equations.

pub mod error;
pub mod normalize;
pub mod solve;

pub use error::SolveError;
pub use normalize::normalize;
pub use solve::{discriminant, solve};
