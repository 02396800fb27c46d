use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use computor_formatter::{AnsiStyler, PlainStyler, RenderOptions, Styler};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "computor.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputorConfig {
    pub color: ColorMode,
    /// Decimal places for values without a short exact form
    pub precision: usize,
    /// Keep read-loop history in ~/.computor_history
    pub history: bool,
    /// Inputs that end the read-loop
    pub quit_words: Vec<String>,
}

impl Default for ComputorConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            precision: 6,
            history: true,
            quit_words: vec!["Q".to_string(), "quit".to_string(), "exit".to_string()],
        }
    }
}

impl ComputorConfig {
    /// Load `./computor.toml`, falling back to defaults.
    pub fn load() -> Self {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Self::default()
        }
    }

    /// Load a config file; unreadable or invalid files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read config file, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            precision: self.precision,
        }
    }

    pub fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }

    pub fn styler(&self) -> Box<dyn Styler> {
        if self.use_color() {
            Box::new(AnsiStyler::default())
        } else {
            Box::new(PlainStyler)
        }
    }

    pub fn is_quit_word(&self, line: &str) -> bool {
        self.quit_words.iter().any(|w| w == line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = ComputorConfig::parse("precision = 3\ncolor = \"never\"\n").unwrap();
        assert_eq!(config.precision, 3);
        assert_eq!(config.color, ColorMode::Never);
        assert!(config.history);
        assert!(config.is_quit_word("Q"));
    }

    #[test]
    fn test_parse_rejects_bad_color() {
        assert!(ComputorConfig::parse("color = \"sometimes\"").is_err());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = ComputorConfig::load_from(Path::new("/nonexistent/computor.toml"));
        assert_eq!(config, ComputorConfig::default());
    }

    #[test]
    fn test_custom_quit_words() {
        let config = ComputorConfig::parse("quit_words = [\"bye\"]").unwrap();
        assert!(config.is_quit_word("bye"));
        assert!(!config.is_quit_word("Q"));
    }

    #[test]
    fn test_never_color_is_plain() {
        let config = ComputorConfig {
            color: ColorMode::Never,
            ..ComputorConfig::default()
        };
        assert!(!config.use_color());
    }
}
