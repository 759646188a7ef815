//! Application layer for city-guide
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnswerParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{AnswerProgressNotifier, NoAnswerProgress},
    response_generator::{GenerationError, ResponseGenerator},
};
pub use use_cases::answer_question::{Answer, AnswerQuestionUseCase, Grounding};
