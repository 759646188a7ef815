//! CLI command definitions

use cityguide_domain::{OutputFormat, PromptTemplate};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for city-guide
#[derive(Parser, Debug)]
#[command(name = "city-guide")]
#[command(author, version, about = "Answers questions about Brazilian cities")]
#[command(long_about = r#"
city-guide answers questions about the population, landmarks and university
of Brazilian cities. The city and the topic are looked up in a fact table and
a language model phrases the answer, remembering earlier turns of the
conversation.

Recognized topics: "população", "pontos turísticos" / "atrações", "universidade".

Configuration files are loaded from (in priority order):
1. CITY_GUIDE_* environment variables (e.g. CITY_GUIDE_PROVIDER__MODEL)
2. --config <path>     Explicit config file
3. ./cityguide.toml    Project-level config
4. ~/.config/city-guide/config.toml   Global config

Example:
  city-guide "Qual a população de Salvador?"
  city-guide --chat
  city-guide -o json "Qual a universidade de Natal?"
"#)]
pub struct Cli {
    /// The question to answer (defaults to a demonstration question)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to use instead of the configured one
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format for single questions
    #[arg(short, long, value_name = "FORMAT", value_parser = parse_output_format)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List the cities in the fact table and exit
    #[arg(long)]
    pub list_cities: bool,
}

/// What the binary should do after startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    ShowConfig,
    ListCities,
    Chat,
    /// Answer one question and exit
    Single(String),
}

impl Cli {
    pub fn mode(&self) -> RunMode {
        if self.show_config {
            RunMode::ShowConfig
        } else if self.list_cities {
            RunMode::ListCities
        } else if self.chat {
            RunMode::Chat
        } else {
            let question = self
                .question
                .clone()
                .filter(|q| !q.trim().is_empty())
                .unwrap_or_else(|| PromptTemplate::demo_question().to_string());
            RunMode::Single(question)
        }
    }

    /// Default tracing filter for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn parse_output_format(value: &str) -> Result<OutputFormat, String> {
    match value.to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown format '{other}' (expected text or json)")),
    }
}
