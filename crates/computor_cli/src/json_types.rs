//! JSON output types for `computor solve --format json`.
//!
//! Field names are a scripting contract; bump `SCHEMA_VERSION` when they change.

use computor_ast::{SolutionSet, Span};
use computor_engine::{CoreError, Report};
use computor_formatter::Role;
use serde::Serialize;

pub const SCHEMA_VERSION: u32 = 1;

/// Result of solving a single equation
#[derive(Serialize, Debug)]
pub struct SolveJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub input: String,

    /// Reduced polynomial without the `Reduced form:` label
    pub reduced_form: String,
    /// -1 for contradictions, 0 for identities
    pub degree: i64,
    /// Canonical coefficients, index = power of X
    pub coefficients: Vec<f64>,
    pub solution: SolutionJson,

    /// Text-mode output lines, uncolored
    pub lines: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct SolutionJson {
    /// all_reals, no_solution, one, two, two_complex, unsupported
    pub kind: &'static str,
    /// Real roots, lower root first
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex: Option<ComplexJson>,
}

#[derive(Serialize, Debug)]
pub struct ComplexJson {
    pub real: f64,
    pub imag: f64,
}

impl From<&SolutionSet> for SolutionJson {
    fn from(solution: &SolutionSet) -> Self {
        let complex = match *solution {
            SolutionSet::TwoComplex { real, imag } => Some(ComplexJson {
                real,
                imag: imag.abs(),
            }),
            _ => None,
        };
        Self {
            kind: solution.kind(),
            values: solution.real_roots(),
            complex,
        }
    }
}

impl SolveJsonOutput {
    pub fn from_report(input: &str, report: &Report) -> Self {
        let reduced_form = report
            .reduced_form
            .first()
            .and_then(|line| line.text_with_role(Role::Positive))
            .map(|text| text.trim_end_matches(" = 0").to_string())
            .unwrap_or_default();

        Self {
            schema_version: SCHEMA_VERSION,
            ok: true,
            input: input.to_string(),
            reduced_form,
            degree: report.normalized.degree.value(),
            coefficients: report.normalized.polynomial.coefficients().to_vec(),
            solution: SolutionJson::from(&report.solution),
            lines: report.lines().map(ToString::to_string).collect(),
        }
    }
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub input: String,
    pub error: ErrorJson,
}

#[derive(Serialize, Debug)]
pub struct ErrorJson {
    /// tokenization, syntax, semantic, internal
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<SpanJson>,
}

#[derive(Serialize, Debug)]
pub struct SpanJson {
    pub start: usize,
    pub end: usize,
}

impl From<Span> for SpanJson {
    fn from(span: Span) -> Self {
        Self {
            start: span.start,
            end: span.end,
        }
    }
}

impl ErrorJsonOutput {
    pub fn from_error(input: &str, error: &CoreError) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            input: input.to_string(),
            error: ErrorJson {
                kind: error.kind(),
                message: error.to_string(),
                span: error.span().map(SpanJson::from),
            },
        }
    }
}
