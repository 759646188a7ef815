//! CLI entrypoint for city-guide
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use cityguide_application::{
    AnswerParams, AnswerQuestionUseCase, ConversationLogger, GenerationError, NoAnswerProgress,
    NoConversationLogger,
};
use cityguide_domain::{
    DialogueHistory, FactStore, InMemoryFactStore, KeywordExtractor, OutputFormat,
};
use cityguide_infrastructure::{
    ChatCompletionsGenerator, ConfigLoader, FileConfig, JsonlConversationLogger, TomlFactTable,
};
use cityguide_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig, RunMode,
};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a .env file next to the project
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }

    let _log_guard = init_logging(&cli, &config)?;
    info!("Starting city-guide");

    let mode = cli.mode();
    let issues = config.validate();
    if mode == RunMode::ShowConfig {
        ConfigLoader::print_config_sources();
        for issue in &issues {
            println!("  {}", issue);
        }
        return Ok(());
    }

    for issue in &issues {
        warn!("{}", issue);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue);
    }

    let output_config =
        OutputConfig::resolve(cli.output, config.output.format, config.output.color);
    if !output_config.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let store = Arc::new(load_fact_table(&config)?);
    if mode == RunMode::ListCities {
        print!("{}", ConsoleFormatter::format_cities(&store.city_names()));
        return Ok(());
    }
    let cities: Vec<String> = store.city_names().into_iter().map(String::from).collect();

    let generator = Arc::new(
        ChatCompletionsGenerator::from_file_config(&config.provider)
            .context("Cannot set up the response generator")?,
    );
    let extractor = Arc::new(KeywordExtractor::new(store));

    let params = AnswerParams::default().with_generation_timeout(Some(Duration::from_secs(
        config.provider.timeout_seconds,
    )));
    let use_case = AnswerQuestionUseCase::new(extractor, generator)
        .with_history(DialogueHistory::with_max_turns(config.conversation.max_turns))
        .with_params(params)
        .with_conversation_logger(transcript_logger(&config));

    match mode {
        RunMode::Chat => {
            let repl_config = ReplConfig {
                show_progress: config.repl.show_progress && !cli.quiet,
                history_file: ReplConfig::resolve_history_file(
                    config.repl.history_file.as_deref(),
                ),
            };
            ChatRepl::new(Arc::new(use_case), cities)
                .with_config(repl_config)
                .run()
                .await?;
        }
        RunMode::Single(question) => {
            let answer = if cli.quiet {
                use_case.answer_with_progress(&question, &NoAnswerProgress).await
            } else {
                use_case
                    .answer_with_progress(&question, &ProgressReporter::new())
                    .await
            };
            let answer =
                answer.map_err(|e| generation_failure(e, &config.provider.api_key_env))?;

            let output = match output_config.format {
                OutputFormat::Text => ConsoleFormatter::format_answer(&answer),
                OutputFormat::Json => ConsoleFormatter::format_json(&question, &answer),
            };
            println!("{}", output);
        }
        RunMode::ShowConfig | RunMode::ListCities => {}
    }

    Ok(())
}

fn generation_failure(error: GenerationError, api_key_env: &str) -> anyhow::Error {
    let message = if error.is_auth_error() {
        format!("Failed to answer the question (check {api_key_env})")
    } else {
        "Failed to answer the question".to_string()
    };
    anyhow::Error::new(error).context(message)
}

/// Stderr logging filtered by `-v` (or `RUST_LOG`), plus an optional log file.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter());

    let (file_layer, guard) = match config.logging.file.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_fact_table(config: &FileConfig) -> Result<InMemoryFactStore> {
    match config.facts.file.as_deref().filter(|f| !f.trim().is_empty()) {
        Some(path) => TomlFactTable::from_file(Path::new(path))
            .with_context(|| format!("Cannot load fact table {}", path)),
        None => TomlFactTable::builtin().context("Built-in fact table is invalid"),
    }
}

fn transcript_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config
        .conversation
        .transcript_file
        .as_deref()
        .and_then(JsonlConversationLogger::open)
    {
        Some(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failure_keeps_cause() {
        let error = generation_failure(GenerationError::EmptyCompletion, "GROQ_API_KEY");
        assert_eq!(error.to_string(), "Failed to answer the question");
        assert_eq!(
            error.downcast_ref::<GenerationError>(),
            Some(&GenerationError::EmptyCompletion)
        );
    }

    #[test]
    fn test_generation_failure_names_key_on_auth_error() {
        let rejected = GenerationError::Rejected {
            status: 401,
            message: "Invalid API Key".to_string(),
        };
        let error = generation_failure(rejected, "GROQ_API_KEY");
        assert!(error.to_string().contains("GROQ_API_KEY"));
        assert!(format!("{error:#}").contains("Invalid API Key"));
    }
}
