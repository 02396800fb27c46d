use computor_ast::Span;
use thiserror::Error;

/// Broad category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Tokenization,
    Syntax,
    Semantic,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Tokenization => "tokenization",
            ErrorKind::Syntax => "syntax",
            ErrorKind::Semantic => "semantic",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Character matching no token pattern.
    #[error("unrecognized character '{ch}'")]
    Tokenize { ch: char, span: Span },

    /// Token stream does not match the grammar.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    /// Tokens left over after a complete equation.
    #[error("unexpected {found} after the end of the equation")]
    TrailingInput { found: String, span: Span },

    /// Grammatically valid input breaking a domain rule.
    #[error("{message}")]
    Semantic { message: String, span: Span },
}

impl ParseError {
    pub fn semantic(message: impl Into<String>, span: Span) -> Self {
        ParseError::Semantic {
            message: message.into(),
            span,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Tokenize { .. } => ErrorKind::Tokenization,
            ParseError::UnexpectedToken { .. } | ParseError::TrailingInput { .. } => {
                ErrorKind::Syntax
            }
            ParseError::Semantic { .. } => ErrorKind::Semantic,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Tokenize { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::Semantic { span, .. } => *span,
        }
    }
}
