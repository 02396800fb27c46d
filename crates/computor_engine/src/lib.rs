//! Equation pipeline: text -> tokens -> sparse polynomial -> canonical
//! polynomial + degree -> solution -> display lines.
//!
//! Every call owns its intermediate state; nothing is shared between
//! equations.

pub mod error;
pub mod pipeline;

pub use computor_formatter::RenderOptions;
pub use error::CoreError;
pub use pipeline::{analyze, solve_equation, solve_equation_with, Report};
