use computor_ast::{Normalized, SolutionSet};
use computor_formatter::{render, Line, RenderOptions, Rendered};
use computor_parser::parse;
use computor_solver::{normalize, solve};
use tracing::debug;

use crate::error::CoreError;

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub normalized: Normalized,
    pub solution: SolutionSet,
    /// Reduced form and degree description.
    pub reduced_form: Vec<Line>,
    pub solution_lines: Vec<Line>,
}

impl Report {
    /// All display lines in output order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.reduced_form.iter().chain(self.solution_lines.iter())
    }
}

/// Parse, normalize and solve without rendering.
pub fn analyze(text: &str) -> Result<(Normalized, SolutionSet), CoreError> {
    debug!(input = text, "solving equation");
    let sparse = parse(text)?;
    let normalized = normalize(sparse);
    let solution = solve(&normalized)?;
    Ok((normalized, solution))
}

/// Run the whole pipeline with default rendering options.
pub fn solve_equation(text: &str) -> Result<Report, CoreError> {
    solve_equation_with(text, &RenderOptions::default())
}

pub fn solve_equation_with(text: &str, options: &RenderOptions) -> Result<Report, CoreError> {
    let (normalized, solution) = analyze(text)?;
    let Rendered {
        reduced_form,
        solution: solution_lines,
    } = render(&normalized, &solution, options);

    Ok(Report {
        normalized,
        solution,
        reduced_form,
        solution_lines,
    })
}
