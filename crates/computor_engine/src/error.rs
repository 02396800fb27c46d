use computor_ast::Span;
use computor_parser::ParseError;
use computor_solver::SolveError;
use thiserror::Error;

/// Any failure that aborts one pipeline run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl CoreError {
    /// Stable category name: tokenization, syntax, semantic or internal.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Parse(e) => e.kind().as_str(),
            CoreError::Solve(_) => "internal",
        }
    }

    /// Location in the input, when the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            CoreError::Parse(e) => Some(e.span()),
            CoreError::Solve(_) => None,
        }
    }
}
