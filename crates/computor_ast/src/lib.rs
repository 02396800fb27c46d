//! Shared data model for the equation pipeline.
//!
//! Every stage (tokenizer, parser, normalizer, solver, presenter) speaks in
//! the types defined here. None of them carry state between equations.

pub mod polynomial;
pub mod solution;
pub mod span;
pub mod token;

pub use polynomial::{
    CanonicalPolynomial, Degree, Exponent, Monomial, Normalized, SparsePolynomial, MAX_EXPONENT,
};
pub use solution::SolutionSet;
pub use span::Span;
pub use token::{Token, TokenKind};
