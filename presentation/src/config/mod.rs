//! Presentation-level configuration
//!
//! Settings for output formatting and REPL behavior, resolved from the
//! config file and command-line flags by the binary.

use cityguide_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Command-line format first, then the config file, then text.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while an answer is generated
    pub show_progress: bool,
    /// Line-editor history file; `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: default_history_file(),
        }
    }
}

impl ReplConfig {
    /// Resolve a configured path, expanding a leading `~/`.
    pub fn resolve_history_file(configured: Option<&str>) -> Option<PathBuf> {
        match configured {
            Some(path) => Some(expand_home(path)),
            None => default_history_file(),
        }
    }
}

fn default_history_file() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("city-guide").join("history.txt"))
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
