mod commands;
mod completer;
mod config;
mod json_types;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::solve::{run_solve, SolveArgs};
use crate::config::{ColorMode, ComputorConfig};
use crate::repl::Repl;

#[derive(Parser, Debug)]
#[command(
    name = "computor",
    version,
    about = "Reduce and solve polynomial equations of degree 2 or lower"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: ./computor.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Color output: auto, always, never
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    /// Decimal places for irrational solutions
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Log pipeline stages to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive read-solve loop (default)
    Repl {
        /// Do not load or save ~/.computor_history
        #[arg(long)]
        no_history: bool,
    },
    /// Solve a single equation and exit
    Solve(SolveArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ComputorConfig::load_from(path),
        None => ComputorConfig::load(),
    };
    if let Some(color) = cli.color {
        config.color = color;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }

    match cli.command {
        None => {
            Repl::new(config).run()?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Repl { no_history }) => {
            if no_history {
                config.history = false;
            }
            Repl::new(config).run()?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Solve(args)) => run_solve(&args, &config),
    }
}
