//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::{ConsoleFormatter, ProgressReporter};
use cityguide_application::{AnswerQuestionUseCase, NoAnswerProgress};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Cities,
    Reset,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a trimmed input line; `None` means the line is a question.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with('/') {
            return None;
        }
        let command = match line {
            "/help" | "/h" | "/?" => Self::Help,
            "/history" => Self::History,
            "/cities" => Self::Cities,
            "/reset" | "/clear" => Self::Reset,
            "/quit" | "/exit" | "/q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// Create the directory holding `path`; false (with a warning) when that fails.
fn ensure_parent_dir(path: &Path) -> bool {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            warn!("Cannot create REPL history directory {}: {}", parent.display(), e);
            false
        }
    }
}

/// Interactive chat REPL over one conversation session
pub struct ChatRepl {
    use_case: Arc<AnswerQuestionUseCase>,
    cities: Vec<String>,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(use_case: Arc<AnswerQuestionUseCase>, cities: Vec<String>) -> Self {
        Self {
            use_case,
            cities,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.config.history_file else {
            return editor;
        };

        if !ensure_parent_dir(path) {
            return editor;
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Cannot open REPL history {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("city-guide".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                _ => {
                    println!("Até logo!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           City Guide - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask about the população, atrações or universidade of a city.");
        println!("Type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /history          - Show the conversation so far");
        println!("  /cities           - List known cities");
        println!("  /reset, /clear    - Forget the conversation");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle a slash command. Returns true if the REPL should exit.
    pub async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Até logo!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::History => {
                let turns = self.use_case.history().await;
                println!("{}", ConsoleFormatter::format_history(&turns));
            }
            ReplCommand::Cities => {
                println!("{}", ConsoleFormatter::format_cities(&self.cities));
            }
            ReplCommand::Reset => {
                self.use_case.reset().await;
                println!("Conversation cleared.");
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_question(&self, question: &str) {
        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.answer_with_progress(question, &progress).await
        } else {
            self.use_case
                .answer_with_progress(question, &NoAnswerProgress)
                .await
        };

        match result {
            Ok(answer) => println!("{}", ConsoleFormatter::format_answer_with_source(&answer)),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e)),
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cityguide_application::{GenerationError, ResponseGenerator};
    use cityguide_domain::{City, InMemoryFactStore, KeywordExtractor, Turn};

    struct EchoGenerator;

    #[async_trait]
    impl ResponseGenerator for EchoGenerator {
        fn model(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            _system_prompt: &str,
            _history: &[Turn],
            message: &str,
        ) -> Result<String, GenerationError> {
            Ok(message.to_string())
        }
    }

    fn repl() -> ChatRepl {
        let store = InMemoryFactStore::new(vec![City::new(
            "Recife",
            "1,6 milhões",
            ["Marco Zero"],
            "UFPE",
        )])
        .unwrap();
        let extractor = Arc::new(KeywordExtractor::new(Arc::new(store)));
        let use_case = Arc::new(AnswerQuestionUseCase::new(extractor, Arc::new(EchoGenerator)));
        ChatRepl::new(use_case, vec!["Recife".to_string()]).with_config(ReplConfig {
            show_progress: false,
            history_file: None,
        })
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/quit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/clear"), Some(ReplCommand::Reset));
        assert_eq!(
            ReplCommand::parse("/models"),
            Some(ReplCommand::Unknown("/models".to_string()))
        );
        assert_eq!(ReplCommand::parse("Qual a população de Recife?"), None);
    }

    #[test]
    fn test_history_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");
        assert!(ensure_parent_dir(&path));
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_history_dir_under_a_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        assert!(!ensure_parent_dir(&blocker.join("history.txt")));
    }

    #[tokio::test]
    async fn test_reset_clears_history() {
        let repl = repl();
        repl.process_question("Qual a população de Recife?").await;
        assert_eq!(repl.use_case.history().await.len(), 1);

        assert!(!repl.handle_command(ReplCommand::Reset).await);
        assert!(repl.use_case.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_question_not_recorded() {
        let repl = repl();
        repl.process_question("Como está o tempo?").await;
        assert!(repl.use_case.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_quit_exits() {
        assert!(repl().handle_command(ReplCommand::Quit).await);
        assert!(!repl().handle_command(ReplCommand::Help).await);
    }
}
