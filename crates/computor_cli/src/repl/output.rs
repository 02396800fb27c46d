//! Structured messages returned by `ReplCore` instead of printing directly.

use computor_formatter::Line;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplMsg {
    /// Pipeline result line, styled by role
    Output(Line),
    /// Informational message (help, hints, goodbye)
    Info(String),
    /// Error message (the equation was rejected)
    Error(String),
}

impl ReplMsg {
    pub fn info(s: impl Into<String>) -> Self {
        ReplMsg::Info(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        ReplMsg::Error(s.into())
    }
}

pub type ReplReply = Vec<ReplMsg>;

/// Whether the loop keeps reading after this line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreResult {
    pub reply: ReplReply,
    pub flow: Flow,
}

impl CoreResult {
    pub fn reply_only(reply: ReplReply) -> Self {
        Self {
            reply,
            flow: Flow::Continue,
        }
    }

    pub fn quit(reply: ReplReply) -> Self {
        Self {
            reply,
            flow: Flow::Quit,
        }
    }
}
