//! Answer Question use case.
//!
//! Orchestrates a single conversational turn:
//!
//! ```text
//! question ─▶ ReferenceExtractor ─┬─ Unresolved ─▶ fallback text (no generator call, history untouched)
//!                                 └─ Resolved ───▶ FactFormatter ─▶ ResponseGenerator ─▶ DialogueHistory.append
//! ```
//!
//! A turn is recorded only after the generator succeeds, so the history only
//! ever holds fact-grounded exchanges.

use crate::config::AnswerParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{AnswerProgressNotifier, NoAnswerProgress};
use crate::ports::response_generator::{GenerationError, ResponseGenerator};
use cityguide_domain::{
    AttributeKind, DialogueHistory, ExtractionResult, FactFormatter, PromptTemplate,
    ReferenceExtractor, Turn,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// The fact an answer was grounded on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grounding {
    pub city: String,
    pub attribute: AttributeKind,
    /// Fact string sent to the generator as the new message
    pub fact: String,
    /// Sequence number of the recorded turn
    pub sequence: u64,
}

/// Output of [`AnswerQuestionUseCase::answer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub text: String,
    /// `None` when the fallback text was returned
    pub grounding: Option<Grounding>,
}

impl Answer {
    fn fallback() -> Self {
        Self {
            text: PromptTemplate::fallback().to_string(),
            grounding: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.grounding.is_none()
    }
}

/// Use case for answering questions within one conversation session.
///
/// Owns the session's [`DialogueHistory`]. Calls are serialized: the history
/// lock is held for the whole call, so concurrent callers are processed one
/// at a time and always see each other's completed turns.
pub struct AnswerQuestionUseCase {
    extractor: Arc<dyn ReferenceExtractor>,
    generator: Arc<dyn ResponseGenerator>,
    history: Mutex<DialogueHistory>,
    params: AnswerParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnswerQuestionUseCase {
    /// Start a session with an empty, unbounded history.
    pub fn new(
        extractor: Arc<dyn ReferenceExtractor>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Self {
        Self {
            extractor,
            generator,
            history: Mutex::new(DialogueHistory::new()),
            params: AnswerParams::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Start the session from the given history (e.g. one with a turn limit).
    pub fn with_history(mut self, history: DialogueHistory) -> Self {
        self.history = Mutex::new(history);
        self
    }

    pub fn with_params(mut self, params: AnswerParams) -> Self {
        self.params = params;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Answer a question with default (no-op) progress.
    pub async fn answer(&self, question: &str) -> Result<Answer, GenerationError> {
        self.answer_with_progress(question, &NoAnswerProgress).await
    }

    /// Answer a question with progress callbacks.
    ///
    /// Returns the fallback answer when the question cannot be resolved.
    /// Generation failures are returned as errors and leave the history
    /// exactly as it was.
    pub async fn answer_with_progress(
        &self,
        question: &str,
        progress: &dyn AnswerProgressNotifier,
    ) -> Result<Answer, GenerationError> {
        let mut history = self.history.lock().await;

        let (city, attribute) = match self.extractor.extract(question) {
            ExtractionResult::Resolved { city, attribute } => (city, attribute),
            ExtractionResult::Unresolved => {
                debug!("Question did not resolve to a city and attribute");
                self.conversation_logger.log(ConversationEvent::new(
                    "fallback",
                    serde_json::json!({ "question": question }),
                ));
                return Ok(Answer::fallback());
            }
        };

        let fact = FactFormatter::format(&city, attribute);
        info!(
            city = %city.name,
            attribute = %attribute,
            history = history.len(),
            "Generating grounded answer with {}",
            self.generator.model()
        );

        let context = history.snapshot();
        progress.on_generation_start(&city.name, attribute);
        let result = self.generate(&context, &fact).await;
        progress.on_generation_end(result.is_ok());

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!("Generation failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "generation_failed",
                    serde_json::json!({
                        "question": question,
                        "fact": fact,
                        "error": e.to_string(),
                    }),
                ));
                return Err(e);
            }
        };

        let sequence = history.append(question, text.clone());
        debug!(sequence, "Turn recorded");

        self.conversation_logger.log(ConversationEvent::new(
            "answer",
            serde_json::json!({
                "sequence": sequence,
                "model": self.generator.model(),
                "question": question,
                "fact": fact,
                "answer": text,
            }),
        ));

        Ok(Answer {
            text,
            grounding: Some(Grounding {
                city: city.name,
                attribute,
                fact,
                sequence,
            }),
        })
    }

    /// Snapshot of the session's turns in call order.
    pub async fn history(&self) -> Vec<Turn> {
        self.history.lock().await.snapshot()
    }

    /// Forget all turns of the session.
    pub async fn reset(&self) {
        self.history.lock().await.clear();
        info!("Conversation history cleared");
    }

    async fn generate(&self, context: &[Turn], fact: &str) -> Result<String, GenerationError> {
        let call = self
            .generator
            .generate(PromptTemplate::system(), context, fact);

        let text = match self.params.generation_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GenerationError::Timeout(limit))??,
            None => call.await?,
        };

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }
        Ok(text)
    }
}
