//! Interactive read-solve loop.
//!
//! `Repl` owns terminal I/O; the per-line logic lives in `ReplCore`.

mod core;
mod error_render;
mod output;

pub use self::core::ReplCore;
pub use self::error_render::render_core_error;
pub use self::output::{Flow, ReplMsg, ReplReply};

use computor_formatter::{Role, Styler};
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::completer::ComputorHelper;
use crate::config::ComputorConfig;

pub const PROMPT: &str = "Enter an equation: ";

pub struct Repl {
    core: ReplCore,
    styler: Box<dyn Styler>,
    use_color: bool,
    history: bool,
    quit_words: Vec<String>,
}

impl Repl {
    pub fn new(config: ComputorConfig) -> Self {
        Self {
            styler: config.styler(),
            use_color: config.use_color(),
            history: config.history,
            quit_words: config.quit_words.clone(),
            core: ReplCore::new(config),
        }
    }

    /// Print a reply. This is the single point where core output becomes
    /// visible.
    pub fn print_reply(&self, reply: &ReplReply) {
        for msg in reply {
            match msg {
                ReplMsg::Output(line) => println!("{}", line.paint(self.styler.as_ref())),
                ReplMsg::Info(s) => println!("{}", self.styler.colorize(s, Role::Neutral)),
                ReplMsg::Error(s) => eprintln!("{}", self.styler.colorize(s, Role::Negative)),
            }
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("computor: reduce and solve polynomial equations of degree 2 or lower.");
        println!("Type 'help' for the syntax, 'Q' to quit.");

        let helper = ComputorHelper::new(self.use_color, &self.quit_words);
        let config = rustyline::Config::builder()
            .max_history_size(100)?
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut rl =
            rustyline::Editor::<ComputorHelper, rustyline::history::DefaultHistory>::with_config(
                config,
            )?;
        rl.set_helper(Some(helper));

        let history_path = dirs::home_dir()
            .map(|p| p.join(".computor_history"))
            .unwrap_or_else(|| std::path::PathBuf::from(".computor_history"));
        if self.history {
            // a missing history file is not an error
            let _ = rl.load_history(&history_path);
        }

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    let result = self.core.handle_line(line);
                    self.print_reply(&result.reply);
                    if result.flow == Flow::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    debug!("end of input");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if self.history {
            if let Err(e) = rl.save_history(&history_path) {
                tracing::warn!(error = %e, "could not save history");
            }
        }
        Ok(())
    }
}
