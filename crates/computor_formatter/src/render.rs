//! Reduced form, degree description and solution lines.

use computor_ast::{CanonicalPolynomial, Degree, Normalized, SolutionSet};

use crate::line::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Decimal places for values that have no short exact form.
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

/// Lines produced for one equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Reduced form followed by the degree description.
    pub reduced_form: Vec<Line>,
    pub solution: Vec<Line>,
}

pub fn render(
    normalized: &Normalized,
    solution: &SolutionSet,
    options: &RenderOptions,
) -> Rendered {
    Rendered {
        reduced_form: vec![
            reduced_form_line(&normalized.polynomial),
            degree_line(normalized.degree),
        ],
        solution: solution_lines(normalized.degree, solution, options),
    }
}

/// Shortest decimal form that reads back to the same value.
pub fn format_number(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else {
        x.to_string()
    }
}

/// Short form when it fits in `precision` decimals, fixed otherwise.
pub fn format_value(x: f64, precision: usize) -> String {
    let short = format_number(x);
    let decimals = short.split_once('.').map_or(0, |(_, frac)| frac.len());
    if decimals <= precision {
        return short;
    }

    let fixed = format!("{:.*}", precision, x);
    match fixed.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => fixed,
    }
}

/// `Reduced form: 4 + 3 * X + 2 * X^2 = 0`
pub fn reduced_form_line(polynomial: &CanonicalPolynomial) -> Line {
    Line::new()
        .neutral("Reduced form: ")
        .positive(format!("{} = 0", polynomial_text(polynomial)))
}

fn polynomial_text(polynomial: &CanonicalPolynomial) -> String {
    let mut text = String::new();
    for (exponent, &coefficient) in polynomial.coefficients().iter().enumerate() {
        if coefficient == 0.0 {
            continue;
        }

        let negative = coefficient < 0.0;
        if text.is_empty() {
            if negative {
                text.push('-');
            }
        } else {
            text.push_str(if negative { " - " } else { " + " });
        }
        text.push_str(&monomial_text(coefficient.abs(), exponent));
    }

    if text.is_empty() {
        "0".to_string()
    } else {
        text
    }
}

fn monomial_text(magnitude: f64, exponent: usize) -> String {
    let variable = match exponent {
        0 => return format_number(magnitude),
        1 => "X".to_string(),
        n => format!("X^{n}"),
    };
    if magnitude == 1.0 {
        variable
    } else {
        format!("{} * {}", format_number(magnitude), variable)
    }
}

/// English ordinal. Non-positive values are returned bare.
pub fn ordinal(n: i64) -> String {
    if n <= 0 {
        return n.to_string();
    }
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

// "an 8th", "an 11th", "an 18th", "a 2nd"
fn indefinite_article(n: i64) -> &'static str {
    let digits = n.to_string();
    let eleven_or_eighteen =
        digits.len() % 3 == 2 && (digits.starts_with("11") || digits.starts_with("18"));
    if digits.starts_with('8') || eleven_or_eighteen {
        "an"
    } else {
        "a"
    }
}

/// `This is a 2nd degree equation.`
pub fn degree_line(degree: Degree) -> Line {
    let value = degree.value();
    Line::new()
        .neutral(format!("This is {} ", indefinite_article(value)))
        .positive(ordinal(value))
        .neutral(" degree equation.")
}

/// The degree picks the wording for a single root: linear, or a quadratic
/// with a zero discriminant.
pub fn solution_lines(
    degree: Degree,
    solution: &SolutionSet,
    options: &RenderOptions,
) -> Vec<Line> {
    let value = |x: f64| format_value(x, options.precision);

    match *solution {
        SolutionSet::AllReals => {
            vec![Line::new().positive("All real numbers are solutions to this equation.")]
        }
        SolutionSet::NoSolution => vec![Line::new().negative("This equation has no solution.")],
        SolutionSet::Unsupported => vec![Line::new()
            .negative("The polynomial degree is strictly greater than 2, I can't solve.")],
        SolutionSet::One(x) => vec![
            Line::new().neutral(match degree {
                Degree::Exact(2) => "Discriminant is zero, the unique real solution is:",
                _ => "The solution is:",
            }),
            Line::new().positive(value(x)),
        ],
        SolutionSet::Two(x1, x2) => vec![
            Line::new().neutral("Discriminant is strictly positive, the two real solutions are:"),
            Line::new().positive(value(x1)),
            Line::new().positive(value(x2)),
        ],
        SolutionSet::TwoComplex { real, imag } => {
            let real = value(real);
            let imag = value(imag.abs());
            vec![
                Line::new().neutral(
                    "Discriminant is strictly negative, the two complex solutions are:",
                ),
                Line::new().positive(format!("{real} + i * {imag}")),
                Line::new().positive(format!("{real} - i * {imag}")),
            ]
        }
    }
}
