//! Per-line REPL logic without I/O.

use computor_engine::solve_equation_with;
use tracing::debug;

use super::error_render::render_core_error;
use super::output::{CoreResult, ReplMsg, ReplReply};
use crate::config::ComputorConfig;

const HELP: &str = "\
Enter an equation in X, for example:
  5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0
  3X^2 - 2X = 7
Terms are joined with + and -, factors with * (optional before a number or X).
Powers are written X^n; zero or negative powers count as constants.
Degrees above 2 are reduced but not solved.";

/// Holds only configuration; each line is solved from scratch.
pub struct ReplCore {
    config: ComputorConfig,
}

impl ReplCore {
    pub fn new(config: ComputorConfig) -> Self {
        Self { config }
    }

    pub fn handle_line(&self, line: &str) -> CoreResult {
        let line = line.trim();
        if line.is_empty() {
            return CoreResult::reply_only(Vec::new());
        }
        if self.config.is_quit_word(line) {
            return CoreResult::quit(vec![ReplMsg::info("Goodbye!")]);
        }
        if line == "help" {
            return CoreResult::reply_only(vec![ReplMsg::info(HELP)]);
        }
        CoreResult::reply_only(self.handle_equation(line))
    }

    fn handle_equation(&self, line: &str) -> ReplReply {
        match solve_equation_with(line, &self.config.render_options()) {
            Ok(report) => report.lines().cloned().map(ReplMsg::Output).collect(),
            Err(e) => {
                debug!(error = %e, kind = e.kind(), "equation rejected");
                let quit = self.config.quit_words.first().map_or("Q", String::as_str);
                vec![
                    ReplMsg::error(render_core_error(line, &e)),
                    ReplMsg::info(format!("Write '{quit}' to exit the program")),
                ]
            }
        }
    }
}
