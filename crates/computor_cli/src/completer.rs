use std::borrow::Cow;

use computor_formatter::{AnsiStyler, Role};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

pub struct ComputorHelper {
    commands: Vec<String>,
    /// Prompt styling; `None` when color is off
    styler: Option<AnsiStyler>,
}

impl ComputorHelper {
    /// Completes `help` and the configured quit words.
    pub fn new(use_color: bool, quit_words: &[String]) -> Self {
        let commands = std::iter::once("help".to_string())
            .chain(quit_words.iter().cloned())
            .collect();
        Self {
            commands,
            styler: use_color.then(AnsiStyler::default),
        }
    }
}

impl Completer for ComputorHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, word) = extract_word(line, pos);
        // commands only make sense as the whole line
        if start != 0 || word.is_empty() {
            return Ok((start, Vec::new()));
        }

        let matches = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(word))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for ComputorHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ComputorHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        match &self.styler {
            Some(styler) => Cow::Owned(prompt.style(styler.style(Role::Prompt)).to_string()),
            None => Cow::Borrowed(prompt),
        }
    }
}

impl Validator for ComputorHelper {}

impl Helper for ComputorHelper {}

fn extract_word(line: &str, pos: usize) -> (usize, &str) {
    let line = &line[..pos];
    if line.is_empty() {
        return (0, "");
    }

    let mut start = pos;
    for (i, c) in line.char_indices().rev() {
        if c.is_whitespace() || matches!(c, '+' | '-' | '*' | '^' | '=') {
            break;
        }
        start = i;
    }
    (start, &line[start..pos])
}
