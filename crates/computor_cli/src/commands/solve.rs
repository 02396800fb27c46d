//! solve subcommand handler.
//!
//! Solves a single equation and prints text or JSON.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, ValueEnum};
use computor_engine::solve_equation_with;
use computor_formatter::Role;

use crate::config::ComputorConfig;
use crate::json_types::{ErrorJsonOutput, SolveJsonOutput};
use crate::repl::render_core_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for solve subcommand
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Equation to solve, e.g. "5 * X^0 + 4 * X^1 = 4 * X^0"
    pub equation: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run_solve(args: &SolveArgs, config: &ComputorConfig) -> Result<ExitCode> {
    let result = solve_equation_with(&args.equation, &config.render_options());

    match args.format {
        OutputFormat::Json => {
            let json = match &result {
                Ok(report) => serde_json::to_string_pretty(&SolveJsonOutput::from_report(
                    &args.equation,
                    report,
                ))?,
                Err(e) => serde_json::to_string_pretty(&ErrorJsonOutput::from_error(
                    &args.equation,
                    e,
                ))?,
            };
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        OutputFormat::Text => {
            let styler = config.styler();
            match result {
                Ok(report) => {
                    for line in report.lines() {
                        println!("{}", line.paint(styler.as_ref()));
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    let rendered = render_core_error(&args.equation, &e);
                    eprintln!("{}", styler.colorize(&rendered, Role::Negative));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
