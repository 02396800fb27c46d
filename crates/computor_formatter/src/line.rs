use crate::style::{Role, Styler};
use std::fmt;

/// A run of text with a single role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub role: Role,
}

/// One display line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    segments: Vec<Segment>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, text: impl Into<String>, role: Role) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            role,
        });
        self
    }

    pub fn neutral(self, text: impl Into<String>) -> Self {
        self.push(text, Role::Neutral)
    }

    pub fn positive(self, text: impl Into<String>) -> Self {
        self.push(text, Role::Positive)
    }

    pub fn negative(self, text: impl Into<String>) -> Self {
        self.push(text, Role::Negative)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Text of the first segment with the given role.
    pub fn text_with_role(&self, role: Role) -> Option<&str> {
        self.segments
            .iter()
            .find(|s| s.role == role)
            .map(|s| s.text.as_str())
    }

    pub fn paint(&self, styler: &dyn Styler) -> String {
        self.segments
            .iter()
            .map(|s| styler.colorize(&s.text, s.role))
            .collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyler;

    #[test]
    fn test_line_display_concatenates() {
        let line = Line::new().neutral("X = ").positive("2");
        assert_eq!(line.to_string(), "X = 2");
        assert_eq!(line.paint(&PlainStyler), "X = 2");
    }

    #[test]
    fn test_text_with_role() {
        let line = Line::new().neutral("a").negative("b");
        assert_eq!(line.text_with_role(Role::Negative), Some("b"));
        assert_eq!(line.text_with_role(Role::Positive), None);
    }
}
