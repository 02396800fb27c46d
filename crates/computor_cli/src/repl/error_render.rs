//! Error rendering with a caret under the offending input.

use computor_ast::Span;
use computor_engine::CoreError;

/// ```text
/// 5 + 4 & X = 0
///       ^ unrecognized character '&'
/// ```
pub fn render_error_with_caret(input: &str, span: Span, message: &str) -> String {
    let start = span.start.min(input.len());
    let end = span.end.min(input.len()).max(start);

    // caret column counts chars, not bytes
    let column = input.get(..start).map_or(start, |prefix| prefix.chars().count());
    let width = input.get(start..end).map_or(1, |s| s.chars().count().max(1));

    let mut result = String::new();
    result.push_str(input);
    result.push('\n');
    result.push_str(&" ".repeat(column));
    result.push('^');
    result.push_str(&"~".repeat(width - 1));
    result.push(' ');
    result.push_str(message);
    result
}

/// `Error: <message>`, followed by the caret view when the error has a span.
/// The message is only in the headline; the caret line points `here`.
pub fn render_core_error(input: &str, error: &CoreError) -> String {
    let headline = format!("Error: {error}");
    match error.span() {
        Some(span) => format!("{headline}\n{}", render_error_with_caret(input, span, "here")),
        None => headline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_at_middle() {
        let rendered = render_error_with_caret("5 + 4 & X = 0", Span::new(6, 7), "bad");
        assert_eq!(rendered, "5 + 4 & X = 0\n      ^ bad");
    }

    #[test]
    fn test_caret_multichar() {
        let rendered = render_error_with_caret("X^2.5 = 0", Span::new(2, 5), "not an integer");
        assert!(rendered.ends_with("\n  ^~~ not an integer"));
    }

    #[test]
    fn test_caret_at_end_of_input() {
        let rendered = render_error_with_caret("5 * X", Span::at(5), "expected '='");
        assert!(rendered.ends_with("\n     ^ expected '='"));
    }

    #[test]
    fn test_caret_out_of_bounds_clamped() {
        let rendered = render_error_with_caret("X = 1", Span::new(100, 200), "error");
        assert!(rendered.starts_with("X = 1\n"));
        assert!(rendered.ends_with("     ^ error"));
    }

    #[test]
    fn test_caret_after_multibyte_char() {
        let rendered = render_error_with_caret("é &", Span::new(3, 4), "bad");
        assert!(rendered.ends_with("\n  ^ bad"));
    }

    #[test]
    fn test_render_core_error_has_headline() {
        let err = computor_engine::solve_equation("X = 1 &").unwrap_err();
        let rendered = render_core_error("X = 1 &", &err);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("Error: unrecognized character '&'"));
        assert_eq!(lines.next(), Some("X = 1 &"));
        assert_eq!(lines.next(), Some("      ^ here"));
        assert_eq!(lines.next(), None);
        assert_eq!(rendered.matches("unrecognized character").count(), 1);
    }
}
