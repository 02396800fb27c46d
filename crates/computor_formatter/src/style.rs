//! Output roles and their terminal styles.

use owo_colors::{OwoColorize, Style};

/// What a piece of output means, independent of how it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Prompt,
    Positive,
    Negative,
    Neutral,
}

/// Pure `text -> styled text` mapping.
pub trait Styler {
    fn colorize(&self, text: &str, role: Role) -> String;
}

/// Leaves text untouched (pipes, `--color never`, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn colorize(&self, text: &str, _role: Role) -> String {
        text.to_string()
    }
}

/// ANSI styles keyed by role.
#[derive(Debug, Clone)]
pub struct AnsiStyler {
    pub prompt: Style,
    pub positive: Style,
    pub negative: Style,
    pub neutral: Style,
}

impl Default for AnsiStyler {
    fn default() -> Self {
        Self {
            prompt: Style::new().blue().bold(),
            positive: Style::new().green().bold(),
            negative: Style::new().red().bold(),
            neutral: Style::new().yellow().bold(),
        }
    }
}

impl AnsiStyler {
    pub fn style(&self, role: Role) -> Style {
        match role {
            Role::Prompt => self.prompt,
            Role::Positive => self.positive,
            Role::Negative => self.negative,
            Role::Neutral => self.neutral,
        }
    }
}

impl Styler for AnsiStyler {
    fn colorize(&self, text: &str, role: Role) -> String {
        text.style(self.style(role)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styler_is_identity() {
        assert_eq!(PlainStyler.colorize("X = 1", Role::Positive), "X = 1");
    }

    #[test]
    fn test_ansi_styler_wraps_text() {
        let styled = AnsiStyler::default().colorize("2nd", Role::Positive);
        assert!(styled.contains("2nd"));
        assert!(styled.starts_with("\u{1b}["));
        assert_ne!(styled, "2nd");
    }

    #[test]
    fn test_ansi_styler_roles_differ() {
        let styler = AnsiStyler::default();
        let positive = styler.colorize("x", Role::Positive);
        let negative = styler.colorize("x", Role::Negative);
        assert_ne!(positive, negative);
    }
}
